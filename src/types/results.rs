use crate::types::FeatureVector;

/// Result of one classification attempt: the best-scoring motion label
/// and its raw score.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub label: String,
    pub confidence: f64,
}

impl ClassificationResult {
    pub fn new(label: String, confidence: f64) -> Self {
        Self { label, confidence }
    }
}

/// Everything produced by one burst: the extracted features and the
/// classification derived from them. Kept together so export can write
/// both into a single CSV row.
#[derive(Debug, Clone)]
pub struct BurstReport {
    pub features: FeatureVector,
    pub result: ClassificationResult,
}
