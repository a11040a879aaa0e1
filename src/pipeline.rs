use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::classifier::{self, GestureModel, SelectionError};
use crate::config::SamplingConfig;
use crate::features::FeatureExtractor;
use crate::sensor::{SampleSource, SensorError};
use crate::types::BurstReport;
use crate::utils::format_timestamp;

/// 流水线错误类型
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("sensor failure: {0}")]
    Sensor(#[from] SensorError),
    #[error("classifier output rejected: {0}")]
    Selection(#[from] SelectionError),
}

/// One classification attempt end to end: a paced burst of reads folded into
/// a feature vector, scored by the model, reduced to the best label.
///
/// Fully synchronous and single-threaded. A burst runs to completion once
/// started; any failure aborts the attempt with no partial result.
pub struct GesturePipeline {
    config: SamplingConfig,
}

impl GesturePipeline {
    pub fn new(config: SamplingConfig) -> Self {
        Self { config }
    }

    pub fn run_once(
        &self,
        source: &mut dyn SampleSource,
        model: &GestureModel,
    ) -> Result<BurstReport, PipelineError> {
        let started = Instant::now();
        info!(
            "Burst started at {} ({} samples, {} ms apart)",
            format_timestamp(chrono::Utc::now().timestamp_millis()),
            self.config.sample_count,
            self.config.inter_sample_delay_ms
        );

        let mut extractor = FeatureExtractor::new(self.config.peak_threshold);
        let delay = Duration::from_millis(self.config.inter_sample_delay_ms);

        // 采样节奏由这里控制，而不是提取器
        for _ in 0..self.config.sample_count {
            let reading = source.read()?;
            extractor.push(&reading);
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }

        let features = extractor.finish();
        let scores = model.score(&features);
        let result = classifier::select(&scores, model.motions())?;

        debug!(
            "Burst classified as '{}' ({:.4}) in {} ms",
            result.label,
            result.confidence,
            started.elapsed().as_millis()
        );

        Ok(BurstReport { features, result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::ReplaySensor;
    use crate::types::AxisReading;

    struct FailingSource;

    impl SampleSource for FailingSource {
        fn read(&mut self) -> Result<AxisReading, SensorError> {
            Err(SensorError::MalformedReading("bad frame".to_string()))
        }
    }

    fn test_config(sample_count: usize) -> SamplingConfig {
        SamplingConfig {
            sample_count,
            inter_sample_delay_ms: 0,
            peak_threshold: 100_000,
        }
    }

    fn mean_z_model() -> GestureModel {
        // "face_up" fires on positive mean_z, "face_down" on negative.
        let mut up = [0.0f64; 15];
        up[11] = 1.0;
        let mut down = [0.0f64; 15];
        down[11] = -1.0;
        let json = format!(
            "{{\"motions\":[\"face_up\",\"face_down\"],\"weights\":[{:?},{:?}],\"bias\":[0.0,0.0]}}",
            up, down
        );
        GestureModel::from_json(&json).unwrap()
    }

    #[test]
    fn run_once_classifies_a_full_burst() {
        let mut source = ReplaySensor::from_readings(vec![AxisReading::new(0, 0, 1000); 8]);
        let pipeline = GesturePipeline::new(test_config(8));

        let report = pipeline.run_once(&mut source, &mean_z_model()).unwrap();

        assert_eq!(report.result.label, "face_up");
        assert_eq!(report.result.confidence, 1000.0);
        assert_eq!(report.features.get("mean_z"), Some(1000.0));
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn sensor_failure_aborts_the_burst() {
        let mut source = FailingSource;
        let pipeline = GesturePipeline::new(test_config(4));

        let err = pipeline.run_once(&mut source, &mean_z_model()).unwrap_err();
        assert!(matches!(err, PipelineError::Sensor(_)));
    }

    #[test]
    fn short_replay_surfaces_exhaustion() {
        // 3 readings cannot fill a 5-sample burst.
        let mut source = ReplaySensor::from_readings(vec![AxisReading::new(0, 0, 0); 3]);
        let pipeline = GesturePipeline::new(test_config(5));

        let err = pipeline.run_once(&mut source, &mean_z_model()).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Sensor(SensorError::Exhausted(3))
        ));
    }
}
