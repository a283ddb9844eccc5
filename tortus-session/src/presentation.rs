//! Strings and UI state a host needs to draw the annotation widget.
//! Nothing here renders; the host decides how to show it.

use serde::{Deserialize, Serialize};

use crate::machine::ReviewState;

pub const WELCOME_HTML: &str =
    "<h2 style='text-align:center'>easy text annotation in a Jupyter Notebook</h2>";

pub const INSTRUCTIONS: &str = "Click on the label corresponding with the text below. \
Each selection requires confirmation before proceeding to the next item.";

pub const COMPLETE_HTML: &str = "<h3>Annotations are complete.</h3>";

pub const STOPPED_HTML: &str = "<h3>Annotations stopped.</h3>";

pub const SKIP_CAPTION: &str = "Skip";
pub const CONFIRM_CAPTION: &str = "Confirm selection";
pub const REDO_CAPTION: &str = "Try again";

/// Wrap a record's text for display.
///
/// The text is inserted as-is: HTML-special characters are not escaped.
pub fn make_html(text: &str) -> String {
    format!("<h4>{text}</h4>")
}

/// Progress bar contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub value: usize,
    pub max: usize,
    pub description: String,
}

impl Progress {
    /// Progress for `state` over a queue of `total` records. `cursor` is the
    /// session cursor, used once the state no longer carries one.
    pub fn for_state(state: ReviewState, cursor: usize, total: usize) -> Self {
        match state {
            ReviewState::Presenting(i) | ReviewState::AwaitingConfirm(i) => Self {
                value: i,
                max: total,
                description: format!("{}/{}", i + 1, total),
            },
            ReviewState::Complete => Self {
                value: total,
                max: total,
                description: "Complete".to_string(),
            },
            ReviewState::Stopped => Self {
                value: cursor,
                max: total,
                description: "Stopped".to_string(),
            },
        }
    }

    /// Share of the bar filled, in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        if self.max == 0 {
            return 1.0;
        }
        self.value as f64 / self.max as f64
    }
}

/// Button state for the record under review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    /// Label captions in configured casing.
    pub labels: Vec<String>,
    /// Label and skip buttons accept clicks.
    pub choices_enabled: bool,
    /// Confirm and redo buttons are shown.
    pub confirm_visible: bool,
    /// The provisional choice: `Some(Some(label))` for a label,
    /// `Some(None)` for a skip, `None` when nothing is chosen yet.
    pub chosen: Option<Option<String>>,
}

/// What the host should show right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionView {
    Record {
        html: String,
        progress: Progress,
        controls: Controls,
    },
    Finished {
        html: String,
        progress: Progress,
    },
}

impl SessionView {
    pub fn progress(&self) -> &Progress {
        match self {
            Self::Record { progress, .. } | Self::Finished { progress, .. } => progress,
        }
    }
}
