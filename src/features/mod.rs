pub mod aggregate;
pub mod extractor;

pub use aggregate::AxisAggregate;
pub use extractor::FeatureExtractor;
