//! Score-to-flag classification.

use mend_core::constants::OUTLIER_Z_THRESHOLD;

/// Flags scores whose magnitude exceeds a fixed threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classifier {
    threshold: f64,
}

impl Classifier {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// An undefined score is never an outlier. The comparison is strict:
    /// a score sitting exactly on the threshold is kept.
    pub fn is_outlier(&self, score: Option<f64>) -> bool {
        score.is_some_and(|s| s.abs() > self.threshold)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(OUTLIER_Z_THRESHOLD)
    }
}
