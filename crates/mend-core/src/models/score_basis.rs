use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Divisor convention for the standard deviation.
///
/// The choice moves borderline points across the threshold on small
/// samples, so it is recorded alongside every scored series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StdDevConvention {
    /// Divide by n (ddof = 0).
    #[default]
    Population,
    /// Divide by n - 1 (ddof = 1).
    Sample,
}

impl StdDevConvention {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Population => "population",
            Self::Sample => "sample",
        }
    }

    /// Delta degrees of freedom subtracted from n in the divisor.
    pub fn ddof(&self) -> usize {
        match self {
            Self::Population => 0,
            Self::Sample => 1,
        }
    }
}

impl fmt::Display for StdDevConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StdDevConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "population" | "pop" | "ddof0" => Ok(Self::Population),
            "sample" | "ddof1" => Ok(Self::Sample),
            other => Err(format!(
                "unknown standard deviation convention '{other}' (expected 'population' or 'sample')"
            )),
        }
    }
}

/// Why a series could not be scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateReason {
    /// Fewer present values than a dispersion estimate needs.
    TooFewValues { present: usize },
    /// Every present value is identical.
    ZeroVariance { present: usize },
    /// Mean or spread overflowed `f64`; values this large cannot be scored.
    NonFiniteDispersion { present: usize },
}

impl fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewValues { present } => {
                write!(f, "too few present values ({present})")
            }
            Self::ZeroVariance { present } => {
                write!(f, "zero variance across {present} present values")
            }
            Self::NonFiniteDispersion { present } => {
                write!(f, "non-finite dispersion across {present} present values")
            }
        }
    }
}

/// Statistics the scores were measured against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreBasis {
    Measured {
        mean: f64,
        std_dev: f64,
        present: usize,
        convention: StdDevConvention,
    },
    /// No record is scored and none is flagged.
    Degenerate { reason: DegenerateReason },
}

impl ScoreBasis {
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate { .. })
    }
}
