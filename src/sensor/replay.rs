use std::collections::VecDeque;
use std::path::Path;

use log::info;

use crate::types::AxisReading;

use super::{SampleSource, SensorError};

/// 从 CSV 文件回放读数（每行 `x,y,z`，可带表头），用于离线复现一次手势。
#[derive(Debug)]
pub struct ReplaySensor {
    readings: VecDeque<AxisReading>,
    consumed: usize,
}

impl ReplaySensor {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SensorError> {
        let content = std::fs::read_to_string(&path)?;
        let sensor = Self::from_csv(&content)?;
        info!(
            "Loaded {} replay readings from {}",
            sensor.readings.len(),
            path.as_ref().display()
        );
        Ok(sensor)
    }

    pub fn from_csv(content: &str) -> Result<Self, SensorError> {
        let mut readings = VecDeque::new();
        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            // 跳过表头行
            if index == 0 && line.chars().next().is_some_and(|c| c.is_alphabetic()) {
                continue;
            }
            readings.push_back(Self::parse_line(line, index + 1)?);
        }
        Ok(Self {
            readings,
            consumed: 0,
        })
    }

    pub fn from_readings<I: IntoIterator<Item = AxisReading>>(readings: I) -> Self {
        Self {
            readings: readings.into_iter().collect(),
            consumed: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.readings.len()
    }

    fn parse_line(line: &str, line_number: usize) -> Result<AxisReading, SensorError> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(SensorError::MalformedReading(format!(
                "line {}: expected 3 fields, got {}",
                line_number,
                fields.len()
            )));
        }
        let mut axes = [0i32; 3];
        for (slot, field) in axes.iter_mut().zip(&fields) {
            *slot = field.parse::<i32>().map_err(|e| {
                SensorError::MalformedReading(format!("line {}: {}", line_number, e))
            })?;
        }
        Ok(AxisReading::new(axes[0], axes[1], axes[2]))
    }
}

impl SampleSource for ReplaySensor {
    fn read(&mut self) -> Result<AxisReading, SensorError> {
        match self.readings.pop_front() {
            Some(reading) => {
                self.consumed += 1;
                Ok(reading)
            }
            None => Err(SensorError::Exhausted(self.consumed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_and_skips_header() {
        let csv = "x,y,z\n1,2,3\n-4, 5 ,6\n";
        let mut sensor = ReplaySensor::from_csv(csv).unwrap();
        assert_eq!(sensor.remaining(), 2);
        assert_eq!(sensor.read().unwrap(), AxisReading::new(1, 2, 3));
        assert_eq!(sensor.read().unwrap(), AxisReading::new(-4, 5, 6));
    }

    #[test]
    fn exhaustion_is_an_error_not_a_default() {
        let mut sensor = ReplaySensor::from_csv("1,2,3\n").unwrap();
        sensor.read().unwrap();
        assert!(matches!(sensor.read(), Err(SensorError::Exhausted(1))));
    }

    #[test]
    fn malformed_rows_are_rejected_with_line_numbers() {
        let err = ReplaySensor::from_csv("1,2\n").unwrap_err();
        assert!(matches!(err, SensorError::MalformedReading(_)));
        let err = ReplaySensor::from_csv("1,2,abc\n").unwrap_err();
        match err {
            SensorError::MalformedReading(msg) => assert!(msg.starts_with("line 1")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
