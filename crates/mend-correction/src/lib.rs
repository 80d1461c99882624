//! # mend-correction
//!
//! Z-score outlier detection with forward-fill correction.
//! Stages: measure the sample, score each reading, flag readings whose
//! |z| exceeds the threshold, carry the last good value over flagged
//! readings and gaps.

pub mod classifier;
pub mod engine;
pub mod events;
pub mod fill;
pub mod scorer;
pub mod stats;

pub use classifier::Classifier;
pub use engine::CorrectionEngine;
pub use fill::{forward_fill, FillState};
pub use scorer::Scores;

use mend_core::{CorrectedSeries, Series};

/// Correct `series` with the default threshold (3.0) and population
/// standard deviation.
pub fn correct(series: &Series) -> CorrectedSeries {
    CorrectionEngine::new().correct(series)
}
