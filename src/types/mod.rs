pub mod axis_reading;
pub mod feature_vector;
pub mod results;

pub use axis_reading::AxisReading;
pub use feature_vector::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use results::{BurstReport, ClassificationResult};
