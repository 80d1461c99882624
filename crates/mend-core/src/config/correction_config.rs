//! Correction configuration.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::StdDevConvention;

/// Tuning for the scorer and classifier.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CorrectionConfig {
    /// Absolute z-score above which a reading is an outlier. Default: 3.0.
    pub threshold: Option<f64>,
    /// Standard deviation divisor convention. Default: population.
    pub std_dev: Option<StdDevConvention>,
}

impl CorrectionConfig {
    /// Returns the effective threshold, defaulting to 3.0.
    pub fn effective_threshold(&self) -> f64 {
        self.threshold.unwrap_or(defaults::DEFAULT_THRESHOLD)
    }

    /// Returns the effective convention, defaulting to population.
    pub fn effective_std_dev(&self) -> StdDevConvention {
        self.std_dev.unwrap_or(defaults::DEFAULT_STD_DEV)
    }
}
