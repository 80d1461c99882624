use serde::{Deserialize, Serialize};

use super::AnnotatedRecord;

/// Counts derived from an annotated series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionSummary {
    pub total: usize,
    /// Records flagged as outliers.
    pub outliers: usize,
    /// Records whose raw reading was missing.
    pub missing_original: usize,
    /// Records still without a value after correction (leading-gap residue).
    pub missing_after_correction: usize,
    /// Records whose corrected value was carried forward.
    pub filled: usize,
}

impl CorrectionSummary {
    pub fn from_records(records: &[AnnotatedRecord]) -> Self {
        records.iter().fold(
            Self {
                total: records.len(),
                ..Self::default()
            },
            |mut acc, r| {
                if r.is_outlier {
                    acc.outliers += 1;
                }
                if r.raw_value.is_none() {
                    acc.missing_original += 1;
                }
                if r.corrected_value.is_none() {
                    acc.missing_after_correction += 1;
                }
                if r.was_filled() {
                    acc.filled += 1;
                }
                acc
            },
        )
    }
}
