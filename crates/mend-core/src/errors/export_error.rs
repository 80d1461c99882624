//! Export errors.

use super::error_code::{self, MendErrorCode};

/// Errors raised while serializing a corrected series.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("write failed: {message}")]
    Io { message: String },

    #[error("CSV encoding failed: {message}")]
    Csv { message: String },

    #[error("JSON encoding failed: {message}")]
    Json { message: String },
}

impl MendErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        error_code::EXPORT_ERROR
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        Self::Io {
            message: e.to_string(),
        }
    }
}
