//! Top-level error aggregating every subsystem via `From` conversions.

use super::error_code::MendErrorCode;
use super::{ConfigError, ExportError, InputError};

/// Any failure a mend front end can report.
#[derive(Debug, thiserror::Error)]
pub enum MendError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MendErrorCode for MendError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Export(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type MendResult<T> = Result<T, MendError>;
