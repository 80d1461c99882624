//! Exit codes and error reporting.
//!
//! Exit codes:
//! - 0: success
//! - 1: input, configuration or export failure (message on stderr)
//!
//! Argument errors exit with clap's own code 2.

use std::process::ExitCode;

use mend_core::errors::MendErrorCode;
use mend_core::MendError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    Success = 0,
    Failure = 1,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

pub fn exit_code_for_error(err: &MendError) -> CliExitCode {
    match err {
        MendError::Input(_) | MendError::Export(_) | MendError::Config(_) => CliExitCode::Failure,
    }
}

/// Print `err` to stderr as `error[CODE]: message`.
pub fn report(err: &MendError) {
    tracing::debug!(event = "command_failed", code = err.error_code(), error = %err);
    eprintln!("error[{}]: {err}", err.error_code());
}
