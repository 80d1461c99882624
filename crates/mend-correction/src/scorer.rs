//! Standardized deviation of each reading from the whole-sample mean.

use mend_core::{ScoreBasis, StdDevConvention};

use crate::stats;

/// Per-position scores and the statistics behind them.
#[derive(Debug, Clone, PartialEq)]
pub struct Scores {
    pub basis: ScoreBasis,
    /// Aligned with the input; `None` for missing readings and for every
    /// position of a degenerate sample.
    pub values: Vec<Option<f64>>,
}

/// Score every reading against the mean and standard deviation of all
/// present readings. Missing readings keep their position but take no
/// part in the statistics.
pub fn score(raw: &[Option<f64>], convention: StdDevConvention) -> Scores {
    let present: Vec<f64> = raw.iter().flatten().copied().collect();
    let basis = stats::measure(&present, convention);

    let values = match basis {
        ScoreBasis::Measured { mean, std_dev, .. } => raw
            .iter()
            .map(|v| v.map(|v| (v - mean) / std_dev))
            .collect(),
        ScoreBasis::Degenerate { .. } => vec![None; raw.len()],
    };

    Scores { basis, values }
}
