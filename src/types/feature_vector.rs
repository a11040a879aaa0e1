/// Number of features extracted per burst: 5 statistics × 3 axes.
pub const FEATURE_COUNT: usize = 15;

/// Canonical column order of the feature vector. Rows are the statistic
/// (min, max, peaks, mean, std), columns are the axis (x, y, z).
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "min_x", "min_y", "min_z", "max_x", "max_y", "max_z", "peaks_x", "peaks_y", "peaks_z",
    "mean_x", "mean_y", "mean_z", "std_x", "std_y", "std_z",
];

/// The fixed-length numeric summary of one burst, the sole classifier input.
/// Built once per classification request and discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    /// Named lookup, used for readable assertions and export.
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.values[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_cover_all_slots() {
        assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);
        let vector = FeatureVector::new(std::array::from_fn(|i| i as f64));
        assert_eq!(vector.get("min_x"), Some(0.0));
        assert_eq!(vector.get("peaks_z"), Some(8.0));
        assert_eq!(vector.get("std_z"), Some(14.0));
        assert_eq!(vector.get("kurtosis_x"), None);
    }
}
