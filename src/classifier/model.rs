use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::types::{FeatureVector, FEATURE_COUNT};

/// 模型错误类型
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Pre-trained gesture model: an ordered motion label list plus one linear
/// scoring row per label. Scores are `weights · features + bias`; only their
/// ordering matters to selection. The model file is data, not logic — labels
/// and weights come from offline training.
#[derive(Debug, Clone, Deserialize)]
pub struct GestureModel {
    motions: Vec<String>,
    weights: Vec<Vec<f64>>,
    bias: Vec<f64>,
}

impl GestureModel {
    /// 从 JSON 文件加载并校验模型
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(&path)?;
        let model = Self::from_json(&content)?;
        info!(
            "Loaded model with {} motions from {}",
            model.motions.len(),
            path.as_ref().display()
        );
        Ok(model)
    }

    pub fn from_json(content: &str) -> Result<Self, ModelError> {
        let model: GestureModel = serde_json::from_str(content)?;
        model.validate()?;
        Ok(model)
    }

    /// 校验模型形状：每个标签一行权重，每行 15 个系数，一个偏置
    fn validate(&self) -> Result<(), ModelError> {
        if self.motions.is_empty() {
            return Err(ModelError::ValidationError(
                "Model has no motion labels".to_string(),
            ));
        }
        if self.weights.len() != self.motions.len() {
            return Err(ModelError::ValidationError(format!(
                "Expected {} weight rows, got {}",
                self.motions.len(),
                self.weights.len()
            )));
        }
        if self.bias.len() != self.motions.len() {
            return Err(ModelError::ValidationError(format!(
                "Expected {} bias entries, got {}",
                self.motions.len(),
                self.bias.len()
            )));
        }
        for (row, motion) in self.weights.iter().zip(&self.motions) {
            if row.len() != FEATURE_COUNT {
                return Err(ModelError::ValidationError(format!(
                    "Weight row for '{}' has {} coefficients, expected {}",
                    motion,
                    row.len(),
                    FEATURE_COUNT
                )));
            }
        }
        Ok(())
    }

    /// Ordered motion labels, index-aligned with `score` output.
    pub fn motions(&self) -> &[String] {
        &self.motions
    }

    /// Score a feature vector: one score per motion label.
    /// Pure and deterministic for a given model.
    pub fn score(&self, features: &FeatureVector) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.bias)
            .map(|(row, bias)| {
                row.iter()
                    .zip(features.values())
                    .map(|(w, f)| w * f)
                    .sum::<f64>()
                    + bias
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_json(rows: usize, row_len: usize) -> String {
        let motions: Vec<String> = (0..rows).map(|i| format!("\"m{}\"", i)).collect();
        let row = vec!["0.0"; row_len].join(",");
        let weights: Vec<String> = (0..rows).map(|_| format!("[{}]", row)).collect();
        let bias = vec!["0.0"; rows].join(",");
        format!(
            "{{\"motions\":[{}],\"weights\":[{}],\"bias\":[{}]}}",
            motions.join(","),
            weights.join(","),
            bias
        )
    }

    #[test]
    fn well_formed_model_loads() {
        let model = GestureModel::from_json(&model_json(3, 15)).unwrap();
        assert_eq!(model.motions().len(), 3);
    }

    #[test]
    fn ragged_weight_rows_are_rejected() {
        assert!(matches!(
            GestureModel::from_json(&model_json(2, 14)),
            Err(ModelError::ValidationError(_))
        ));
    }

    #[test]
    fn empty_label_list_is_rejected() {
        assert!(GestureModel::from_json(&model_json(0, 15)).is_err());
    }

    #[test]
    fn mismatched_bias_is_rejected() {
        let json = r#"{"motions":["a"],"weights":[[0,0,0,0,0,0,0,0,0,0,0,0,0,0,0]],"bias":[1.0,2.0]}"#;
        assert!(matches!(
            GestureModel::from_json(json),
            Err(ModelError::ValidationError(_))
        ));
    }

    #[test]
    fn scoring_is_a_linear_combination() {
        // Two labels: one picks out mean_x (slot 9), the other std_z (slot 14).
        let mut w_mean_x = [0.0f64; 15];
        w_mean_x[9] = 2.0;
        let mut w_std_z = [0.0f64; 15];
        w_std_z[14] = 1.0;
        let json = format!(
            "{{\"motions\":[\"shake\",\"rest\"],\"weights\":[{:?},{:?}],\"bias\":[0.5,0.0]}}",
            w_mean_x, w_std_z
        );
        let model = GestureModel::from_json(&json).unwrap();

        let mut values = [0.0f64; 15];
        values[9] = 3.0;
        values[14] = 4.0;
        let scores = model.score(&FeatureVector::new(values));

        assert_eq!(scores, vec![6.5, 4.0]);
    }
}
