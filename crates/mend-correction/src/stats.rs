//! Mean and standard deviation over the present readings of a sample.

use mend_core::constants::MIN_SCORABLE_VALUES;
use mend_core::{DegenerateReason, ScoreBasis, StdDevConvention};

/// Measure the centre and spread of `values`.
///
/// Returns `ScoreBasis::Degenerate` instead of dividing when the sample
/// is too small, has no spread, or overflows.
pub fn measure(values: &[f64], convention: StdDevConvention) -> ScoreBasis {
    let present = values.len();
    if present < MIN_SCORABLE_VALUES {
        return ScoreBasis::Degenerate {
            reason: DegenerateReason::TooFewValues { present },
        };
    }

    // Checked directly: the two-pass mean of identical values can land an
    // ulp away from them and report a spurious, tiny spread.
    let first = values[0];
    if values.iter().all(|&v| v == first) {
        return ScoreBasis::Degenerate {
            reason: DegenerateReason::ZeroVariance { present },
        };
    }

    let n = present as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    let divisor = (present - convention.ddof()) as f64;
    let std_dev = (sum_sq / divisor).sqrt();

    if !mean.is_finite() || !std_dev.is_finite() {
        return ScoreBasis::Degenerate {
            reason: DegenerateReason::NonFiniteDispersion { present },
        };
    }
    if std_dev <= 0.0 {
        return ScoreBasis::Degenerate {
            reason: DegenerateReason::ZeroVariance { present },
        };
    }

    ScoreBasis::Measured {
        mean,
        std_dev,
        present,
        convention,
    }
}
