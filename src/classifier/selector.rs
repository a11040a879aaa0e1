use crate::types::ClassificationResult;

/// 结果选择错误类型
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("empty score or label vector")]
    EmptyInput,
    #[error("score/label length mismatch: {scores} scores vs {labels} labels")]
    LengthMismatch { scores: usize, labels: usize },
}

/// Arg-max selection over classifier scores.
///
/// Scans left to right and only replaces on strict `>`, so ties resolve to
/// the lowest index. Malformed classifier output is surfaced, never
/// silently defaulted.
pub fn select(scores: &[f64], labels: &[String]) -> Result<ClassificationResult, SelectionError> {
    if scores.is_empty() || labels.is_empty() {
        return Err(SelectionError::EmptyInput);
    }
    if scores.len() != labels.len() {
        return Err(SelectionError::LengthMismatch {
            scores: scores.len(),
            labels: labels.len(),
        });
    }

    let mut best = 0;
    for (index, score) in scores.iter().enumerate().skip(1) {
        if *score > scores[best] {
            best = index;
        }
    }

    Ok(ClassificationResult::new(labels[best].clone(), scores[best]))
}
