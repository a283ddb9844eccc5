//! Construction-time errors.

use super::error_code::{self, TortusErrorCode};

/// Errors raised while loading configuration or building a session.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("column '{column}' not found (available: {available})")]
    MissingColumn { column: String, available: String },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("prior annotations use text column '{actual}', expected '{expected}'")]
    SchemaMismatch { expected: String, actual: String },

    #[error("requested {requested} records but only {available} are unannotated")]
    InsufficientRecords { requested: usize, available: usize },
}

impl TortusErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } | Self::ParseError { .. } | Self::ValidationFailed { .. } => {
                error_code::CONFIG_ERROR
            }
            Self::MissingColumn { .. } => error_code::MISSING_COLUMN,
            Self::RaggedRow { .. } => error_code::MALFORMED_TABLE,
            Self::SchemaMismatch { .. } => error_code::SCHEMA_MISMATCH,
            Self::InsufficientRecords { .. } => error_code::INSUFFICIENT_RECORDS,
        }
    }
}
