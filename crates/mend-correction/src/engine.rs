use mend_core::config::CorrectionConfig;
use mend_core::{
    AnnotatedRecord, CorrectedSeries, ScoreBasis, Series, StdDevConvention,
};

use crate::classifier::Classifier;
use crate::events;
use crate::fill::FillState;
use crate::scorer;

/// Correction engine: score, flag, and forward-fill a series.
///
/// Holds configuration only. Every call to `correct` works on the series
/// it is given and returns a fresh result, so one engine can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionEngine {
    classifier: Classifier,
    convention: StdDevConvention,
}

impl CorrectionEngine {
    /// Threshold 3.0, population standard deviation.
    pub fn new() -> Self {
        Self {
            classifier: Classifier::default(),
            convention: StdDevConvention::default(),
        }
    }

    /// Create with a custom threshold.
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            classifier: Classifier::new(threshold),
            ..Self::new()
        }
    }

    pub fn from_config(config: &CorrectionConfig) -> Self {
        Self {
            classifier: Classifier::new(config.effective_threshold()),
            convention: config.effective_std_dev(),
        }
    }

    pub fn with_convention(mut self, convention: StdDevConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.classifier.threshold()
    }

    pub fn convention(&self) -> StdDevConvention {
        self.convention
    }

    /// Produce one annotated record per input record, in input order.
    pub fn correct(&self, series: &Series) -> CorrectedSeries {
        let raw: Vec<Option<f64>> = series.iter().map(|r| r.raw_value).collect();
        events::correction_started(raw.len(), series.missing_count(), self.threshold());

        let scores = scorer::score(&raw, self.convention);
        match scores.basis {
            ScoreBasis::Measured {
                mean,
                std_dev,
                present,
                convention,
            } => events::sample_measured(mean, std_dev, present, convention.name()),
            ScoreBasis::Degenerate { ref reason } => events::sample_degenerate(reason),
        }

        let mut state = FillState::default();
        let records: Vec<AnnotatedRecord> = series
            .iter()
            .zip(&scores.values)
            .enumerate()
            .map(|(index, (record, &score))| {
                let is_outlier = self.classifier.is_outlier(score);
                if is_outlier {
                    if let (Some(value), Some(score)) = (record.raw_value, score) {
                        events::outlier_flagged(index, value, score);
                    }
                }
                AnnotatedRecord {
                    timestamp: record.timestamp,
                    raw_value: record.raw_value,
                    score,
                    is_outlier,
                    corrected_value: state.step(record.raw_value, is_outlier),
                }
            })
            .collect();

        let corrected = CorrectedSeries::new(records, scores.basis, self.threshold());
        events::correction_completed(&corrected.summary());
        corrected
    }
}

impl Default for CorrectionEngine {
    fn default() -> Self {
        Self::new()
    }
}
