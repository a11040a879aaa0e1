//! Burst feature extraction.
//!
//! Folds a fixed-count burst of 3-axis readings into the 15-element feature
//! vector, one `AxisAggregate` per axis. Single pass, constant memory: the
//! extractor never buffers readings, so burst length only affects the
//! statistics, never the footprint.

use crate::types::{AxisReading, FeatureVector, FEATURE_COUNT};

use super::aggregate::AxisAggregate;

pub struct FeatureExtractor {
    peak_threshold: i64,
    axes: [AxisAggregate; 3],
    count: usize,
}

impl FeatureExtractor {
    pub fn new(peak_threshold: i64) -> Self {
        Self {
            peak_threshold,
            axes: [
                AxisAggregate::new(),
                AxisAggregate::new(),
                AxisAggregate::new(),
            ],
            count: 0,
        }
    }

    /// Fold one reading into the per-axis aggregates.
    pub fn push(&mut self, reading: &AxisReading) {
        for (aggregate, value) in self.axes.iter_mut().zip(reading.axes()) {
            aggregate.update(value, self.peak_threshold);
        }
        self.count += 1;
    }

    /// Number of readings folded so far.
    pub fn sample_count(&self) -> usize {
        self.count
    }

    /// Finalize the burst into the canonical 15-element vector:
    /// min, max, peaks, mean, std rows, each with x, y, z columns.
    pub fn finish(self) -> FeatureVector {
        let n = self.count;
        let mut values = [0.0; FEATURE_COUNT];
        for (i, aggregate) in self.axes.iter().enumerate() {
            values[i] = f64::from(aggregate.min());
            values[i + 3] = f64::from(aggregate.max());
            values[i + 6] = f64::from(aggregate.peak_count());
            values[i + 9] = aggregate.mean(n);
            values[i + 12] = aggregate.std(n);
        }
        FeatureVector::new(values)
    }

    /// Convenience for callers that already hold the whole burst.
    pub fn extract<I>(mut self, readings: I) -> FeatureVector
    where
        I: IntoIterator<Item = AxisReading>,
    {
        for reading in readings {
            self.push(&reading);
        }
        self.finish()
    }
}
