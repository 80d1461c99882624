//! Ingestion-time errors. Raised before scoring begins; the corrector
//! never sees a series that produced one of these.

use super::error_code::{self, MendErrorCode};

/// Errors that reject an input series.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("input contains no records")]
    Empty,

    #[error("record {index} is out of order: {current} precedes {previous}")]
    OutOfOrder {
        index: usize,
        previous: String,
        current: String,
    },

    #[error("record {index} has a non-finite value")]
    NonFiniteValue { index: usize },

    #[error("required column '{column}' not found in header")]
    MissingColumn { column: String },

    #[error("row {row}: unparseable timestamp '{value}'")]
    InvalidTimestamp { row: usize, value: String },

    #[error("row {row}: non-numeric sensor value '{value}'")]
    InvalidValue { row: usize, value: String },

    #[error("malformed CSV: {message}")]
    Csv { message: String },

    #[error("cannot read {path}: {message}")]
    Io { path: String, message: String },
}

impl MendErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => error_code::INPUT_EMPTY,
            Self::OutOfOrder { .. } => error_code::INPUT_OUT_OF_ORDER,
            Self::InvalidTimestamp { .. } | Self::InvalidValue { .. } | Self::Csv { .. } => {
                error_code::INPUT_PARSE_ERROR
            }
            Self::NonFiniteValue { .. } | Self::MissingColumn { .. } | Self::Io { .. } => {
                error_code::INPUT_ERROR
            }
        }
    }
}
