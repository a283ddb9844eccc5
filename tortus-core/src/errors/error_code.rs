//! Stable error codes for hosts that show errors to annotators.

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MISSING_COLUMN: &str = "MISSING_COLUMN";
pub const MALFORMED_TABLE: &str = "MALFORMED_TABLE";
pub const SCHEMA_MISMATCH: &str = "SCHEMA_MISMATCH";
pub const INSUFFICIENT_RECORDS: &str = "INSUFFICIENT_RECORDS";
pub const INVALID_STATE: &str = "INVALID_STATE";
pub const UNKNOWN_LABEL: &str = "UNKNOWN_LABEL";

/// Maps an error to one of the codes above.
pub trait TortusErrorCode {
    fn error_code(&self) -> &'static str;
}
