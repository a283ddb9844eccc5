/// Errors raised at the call site of a session action.
/// A failed action leaves the session and its ledger untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("cannot {action} while {state}")]
    InvalidState {
        action: &'static str,
        state: String,
    },

    #[error("unknown label '{label}' (expected one of: {expected})")]
    UnknownLabel { label: String, expected: String },
}

impl super::TortusErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidState { .. } => super::error_code::INVALID_STATE,
            Self::UnknownLabel { .. } => super::error_code::UNKNOWN_LABEL,
        }
    }
}
