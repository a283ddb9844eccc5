//! Review state machine.
//!
//! Transitions are pure: given the current state, an action and the queue
//! length they return the next state and the ledger effect the caller must
//! apply. The ledger row is written when a choice is made, before it is
//! confirmed, and removed again on redo.

use std::fmt;

use serde::{Deserialize, Serialize};
use tortus_core::errors::SessionError;

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewState {
    /// Record `i` is shown, awaiting a label or skip.
    Presenting(usize),
    /// A choice for record `i` sits provisionally at the end of the ledger.
    AwaitingConfirm(usize),
    /// Every queued record was confirmed.
    Complete,
    /// The annotator quit early.
    Stopped,
}

impl ReviewState {
    /// Starting state for a queue of `queue_len` records.
    pub fn initial(queue_len: usize) -> Self {
        if queue_len == 0 {
            Self::Complete
        } else {
            Self::Presenting(0)
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Stopped)
    }

    /// Index of the record under review, if any.
    pub fn cursor(&self) -> Option<usize> {
        match self {
            Self::Presenting(i) | Self::AwaitingConfirm(i) => Some(*i),
            Self::Complete | Self::Stopped => None,
        }
    }

    pub fn has_pending(&self) -> bool {
        matches!(self, Self::AwaitingConfirm(_))
    }
}

impl fmt::Display for ReviewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Presenting(i) => write!(f, "presenting record {i}"),
            Self::AwaitingConfirm(i) => write!(f, "awaiting confirmation of record {i}"),
            Self::Complete => f.write_str("complete"),
            Self::Stopped => f.write_str("stopped"),
        }
    }
}

/// Something the annotator did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Label(String),
    Skip,
    Confirm,
    Redo,
    Quit,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Label(_) => "label",
            Self::Skip => "skip",
            Self::Confirm => "confirm",
            Self::Redo => "redo",
            Self::Quit => "quit",
        }
    }
}

/// Ledger change a transition asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEffect {
    None,
    /// Append a row for queue record `cursor`; `None` label means skipped.
    Append {
        cursor: usize,
        label: Option<String>,
    },
    /// Remove the provisional row at the end of the ledger.
    RetractLast { cursor: usize },
}

/// Result of a successful transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: ReviewState,
    pub effect: LedgerEffect,
}

/// Labels are stored lowercased.
pub fn normalize_label(label: &str) -> String {
    label.to_lowercase()
}

/// Compute the next state for `action`.
pub fn transition(
    state: ReviewState,
    action: &Action,
    queue_len: usize,
) -> Result<Transition, SessionError> {
    let (next, effect) = match (state, action) {
        (ReviewState::Presenting(i), Action::Label(label)) => (
            ReviewState::AwaitingConfirm(i),
            LedgerEffect::Append {
                cursor: i,
                label: Some(normalize_label(label)),
            },
        ),
        (ReviewState::Presenting(i), Action::Skip) => (
            ReviewState::AwaitingConfirm(i),
            LedgerEffect::Append {
                cursor: i,
                label: None,
            },
        ),
        (ReviewState::AwaitingConfirm(i), Action::Confirm) => {
            let next = if i + 1 < queue_len {
                ReviewState::Presenting(i + 1)
            } else {
                ReviewState::Complete
            };
            (next, LedgerEffect::None)
        }
        (ReviewState::AwaitingConfirm(i), Action::Redo) => (
            ReviewState::Presenting(i),
            LedgerEffect::RetractLast { cursor: i },
        ),
        (ReviewState::Presenting(_) | ReviewState::AwaitingConfirm(_), Action::Quit) => {
            (ReviewState::Stopped, LedgerEffect::None)
        }
        (state, action) => {
            return Err(SessionError::InvalidState {
                action: action.name(),
                state: state.to_string(),
            })
        }
    };
    Ok(Transition { next, effect })
}
