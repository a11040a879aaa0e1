use rand::rngs::ThreadRng;
use rand::Rng;

use crate::config::SensorConfig;
use crate::types::AxisReading;

use super::{SampleSource, SensorError};

/// 传感器量程（原始单位，±2g）
const RANGE: i32 = 2000;

/// 模拟加速度计：静止基线加噪声，偶尔叠加一个随机轴上的尖峰。
/// 没有硬件时用于端到端运行整条流水线。
pub struct SimulatedSensor {
    baseline: [i32; 3],
    noise: i32,
    spike_chance: f64,
    spike_magnitude: i32,
    rng: ThreadRng,
}

impl SimulatedSensor {
    pub fn new(config: &SensorConfig) -> Self {
        Self {
            baseline: config.baseline,
            noise: config.noise,
            spike_chance: config.spike_chance,
            spike_magnitude: config.spike_magnitude,
            rng: rand::rng(),
        }
    }

    fn sample_axis(&mut self, axis: usize) -> i32 {
        let mut value = self.baseline[axis];
        if self.noise > 0 {
            value += self.rng.random_range(-self.noise..=self.noise);
        }
        value.clamp(-RANGE, RANGE)
    }
}

impl SampleSource for SimulatedSensor {
    fn read(&mut self) -> Result<AxisReading, SensorError> {
        let mut axes = [0i32; 3];
        for (i, slot) in axes.iter_mut().enumerate() {
            *slot = self.sample_axis(i);
        }

        // 小概率在随机一个轴上叠加尖峰，模拟手势动作
        if self.spike_chance > 0.0 && self.rng.random_bool(self.spike_chance) {
            let axis = self.rng.random_range(0..3);
            let sign = if self.rng.random_bool(0.5) { 1 } else { -1 };
            axes[axis] = (axes[axis] + sign * self.spike_magnitude).clamp(-RANGE, RANGE);
        }

        Ok(AxisReading::new(axes[0], axes[1], axes[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_stay_within_sensor_range() {
        let config = SensorConfig::default();
        let mut sensor = SimulatedSensor::new(&config);
        for _ in 0..500 {
            let reading = sensor.read().unwrap();
            for value in reading.axes() {
                assert!((-RANGE..=RANGE).contains(&value));
            }
        }
    }

    #[test]
    fn quiet_sensor_reports_the_baseline() {
        let config = SensorConfig {
            noise: 0,
            spike_chance: 0.0,
            ..SensorConfig::default()
        };
        let mut sensor = SimulatedSensor::new(&config);
        for _ in 0..10 {
            assert_eq!(sensor.read().unwrap(), AxisReading::new(0, 0, -1000));
        }
    }
}
