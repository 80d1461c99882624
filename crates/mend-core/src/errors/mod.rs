//! Error handling for mend.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod export_error;
pub mod input_error;
pub mod mend_error;

pub use config_error::ConfigError;
pub use error_code::MendErrorCode;
pub use export_error::ExportError;
pub use input_error::InputError;
pub use mend_error::{MendError, MendResult};
