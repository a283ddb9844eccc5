//! Span definitions for annotation sessions.

/// Create a span covering one annotation session.
#[macro_export]
macro_rules! session_span {
    ($session_id:expr, $queue_len:expr) => {
        tracing::info_span!("tortus.session", session_id = %$session_id, queue_len = $queue_len)
    };
}

/// Create a span covering the work-queue selection.
#[macro_export]
macro_rules! selection_span {
    ($text_column:expr, $randomize:expr) => {
        tracing::debug_span!("tortus.selection", text_column = %$text_column, randomize = $randomize)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SESSION: &str = "tortus.session";
    pub const SELECTION: &str = "tortus.selection";
}
