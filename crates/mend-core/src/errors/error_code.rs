//! Stable error codes surfaced to callers (CLI output, JSON reports).

pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const INPUT_EMPTY: &str = "INPUT_EMPTY";
pub const INPUT_OUT_OF_ORDER: &str = "INPUT_OUT_OF_ORDER";
pub const INPUT_PARSE_ERROR: &str = "INPUT_PARSE_ERROR";
pub const EXPORT_ERROR: &str = "EXPORT_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Every subsystem error maps to one of the codes above.
pub trait MendErrorCode {
    fn error_code(&self) -> &'static str;
}
