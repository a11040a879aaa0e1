pub mod replay;
pub mod simulated;

pub use replay::ReplaySensor;
pub use simulated::SimulatedSensor;

use crate::types::AxisReading;

/// 传感器错误类型
#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    #[error("sensor IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("malformed reading: {0}")]
    MalformedReading(String),
    #[error("replay source exhausted after {0} readings")]
    Exhausted(usize),
}

/// One 3-axis reading on demand. Pacing between reads is the caller's
/// responsibility; implementations are expected to return quickly.
pub trait SampleSource {
    fn read(&mut self) -> Result<AxisReading, SensorError>;
}
