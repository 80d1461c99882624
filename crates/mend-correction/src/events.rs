//! Structured log events for correction runs.
//!
//! Each function emits a `tracing` event with structured fields.

use mend_core::{CorrectionSummary, DegenerateReason};

/// Log the start of a correction run.
pub fn correction_started(records: usize, missing: usize, threshold: f64) {
    tracing::info!(
        event = "correction_started",
        records = records,
        missing = missing,
        threshold = threshold,
        "correction started"
    );
}

/// Log the sample statistics a run scored against.
pub fn sample_measured(mean: f64, std_dev: f64, present: usize, convention: &str) {
    tracing::debug!(
        event = "sample_measured",
        mean = mean,
        std_dev = std_dev,
        present = present,
        convention = %convention,
        "sample measured"
    );
}

/// Log a sample that could not be scored.
pub fn sample_degenerate(reason: &DegenerateReason) {
    tracing::warn!(
        event = "sample_degenerate",
        reason = %reason,
        "sample is degenerate, no outliers will be flagged"
    );
}

/// Log a single flagged reading.
pub fn outlier_flagged(index: usize, value: f64, score: f64) {
    tracing::debug!(
        event = "outlier_flagged",
        index = index,
        value = value,
        score = score,
        "outlier flagged"
    );
}

/// Log the end of a correction run.
pub fn correction_completed(summary: &CorrectionSummary) {
    tracing::info!(
        event = "correction_completed",
        total = summary.total,
        outliers = summary.outliers,
        missing_original = summary.missing_original,
        missing_after_correction = summary.missing_after_correction,
        filled = summary.filled,
        "correction completed"
    );
}
