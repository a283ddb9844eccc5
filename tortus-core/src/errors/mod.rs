//! Error handling for tortus.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod session_error;

pub use config_error::ConfigError;
pub use error_code::TortusErrorCode;
pub use session_error::SessionError;

/// Errors surfaced by the public tortus API.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum TortusError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("session error: {0}")]
    Session(#[from] SessionError),
}

impl TortusErrorCode for TortusError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Session(e) => e.error_code(),
        }
    }
}

pub type TortusResult<T> = Result<T, TortusError>;
