//! Per-axis running aggregate.
//!
//! One `AxisAggregate` summarises everything the feature vector needs from a
//! single axis of a burst: extrema, a heuristic peak count, and the running
//! sums that yield mean and population standard deviation. Updates are O(1)
//! per sample and keep no sample history beyond the two most recent squared
//! readings used by peak detection.

use log::debug;

/// Initial `min`, above any value the sensor can report.
const MIN_SENTINEL: i32 = 2000;
/// Initial `max`, below any value the sensor can report.
const MAX_SENTINEL: i32 = -2000;

#[derive(Debug, Clone)]
pub struct AxisAggregate {
    min: i32,
    max: i32,
    peak_count: u32,
    sum: i64,
    sum_squares: i64,
    prev_square: i64,
    prev_prev_square: i64,
}

impl AxisAggregate {
    pub fn new() -> Self {
        Self {
            min: MIN_SENTINEL,
            max: MAX_SENTINEL,
            peak_count: 0,
            sum: 0,
            sum_squares: 0,
            prev_square: 0,
            prev_prev_square: 0,
        }
    }

    /// Fold one reading into the aggregate.
    ///
    /// The min/else-max branch and the lag-2 peak heuristic reproduce the
    /// trained model's feature definition; changing either would shift the
    /// feature distribution the classifier was fitted against.
    pub fn update(&mut self, value: i32, peak_threshold: i64) {
        let square = i64::from(value) * i64::from(value);

        if value < self.min {
            self.min = value;
        } else if value > self.max {
            self.max = value;
        }

        self.sum += i64::from(value);
        self.sum_squares += square;

        // A peak is a spike shape in the squared trace: the reading two
        // steps back rose sharply and also exceeds the current one.
        // Evaluated before the history shift.
        if self.prev_square - self.prev_prev_square > peak_threshold
            && self.prev_square - square > peak_threshold
        {
            self.peak_count += 1;
        }

        self.prev_prev_square = self.prev_square;
        self.prev_square = square;
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn peak_count(&self) -> u32 {
        self.peak_count
    }

    /// Mean over `n` samples. `n` must match the number of `update` calls.
    pub fn mean(&self, n: usize) -> f64 {
        if n == 0 {
            return 0.0;
        }
        self.sum as f64 / n as f64
    }

    /// Population standard deviation over `n` samples.
    ///
    /// Float rounding can leave `sum_squares/n - mean²` marginally below
    /// zero; the variance is clamped to zero instead of surfacing a domain
    /// error.
    pub fn std(&self, n: usize) -> f64 {
        if n == 0 {
            return 0.0;
        }
        let mean = self.mean(n);
        let variance = self.sum_squares as f64 / n as f64 - mean * mean;
        if variance < 0.0 {
            debug!("negative variance residue {:e} clamped to zero", variance);
            return 0.0;
        }
        variance.sqrt()
    }
}

impl Default for AxisAggregate {
    fn default() -> Self {
        Self::new()
    }
}
