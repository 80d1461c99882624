use serde::{Deserialize, Serialize};

use super::{CorrectionSummary, ScoreBasis, Timestamp};

/// A record after scoring, classification and correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedRecord {
    pub timestamp: Timestamp,
    pub raw_value: Option<f64>,
    /// Standardized deviation from the sample mean. `None` for missing
    /// readings and for every record of a degenerate sample.
    pub score: Option<f64>,
    pub is_outlier: bool,
    /// `None` only inside a leading gap with nothing to carry forward.
    pub corrected_value: Option<f64>,
}

impl AnnotatedRecord {
    /// True when the corrected value was carried forward from an earlier
    /// record rather than taken from this record's own reading.
    pub fn was_filled(&self) -> bool {
        self.corrected_value.is_some() && (self.raw_value.is_none() || self.is_outlier)
    }
}

/// Output of one correction run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectedSeries {
    records: Vec<AnnotatedRecord>,
    basis: ScoreBasis,
    threshold: f64,
}

impl CorrectedSeries {
    pub fn new(records: Vec<AnnotatedRecord>, basis: ScoreBasis, threshold: f64) -> Self {
        Self {
            records,
            basis,
            threshold,
        }
    }

    pub fn records(&self) -> &[AnnotatedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn basis(&self) -> &ScoreBasis {
        &self.basis
    }

    /// Absolute z-score threshold the run classified against.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnnotatedRecord> {
        self.records.iter()
    }

    /// Positions of flagged records, ascending.
    pub fn outlier_indices(&self) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_outlier)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn corrected_values(&self) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.corrected_value).collect()
    }

    pub fn summary(&self) -> CorrectionSummary {
        CorrectionSummary::from_records(&self.records)
    }
}

impl<'a> IntoIterator for &'a CorrectedSeries {
    type Item = &'a AnnotatedRecord;
    type IntoIter = std::slice::Iter<'a, AnnotatedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
