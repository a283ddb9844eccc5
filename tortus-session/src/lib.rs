//! # tortus-session
//!
//! Interactive text annotation, minus the rendering: pick the unannotated
//! records to review, then walk them one at a time through a small review
//! state machine that appends labels to a [`Ledger`](tortus_core::Ledger).

pub mod machine;
pub mod presentation;
pub mod selector;
pub mod session;

pub use machine::{normalize_label, transition, Action, LedgerEffect, ReviewState, Transition};
pub use presentation::{make_html, Controls, Progress, SessionView};
pub use selector::{select_work_queue, WorkQueue};
pub use session::{AnnotationSession, SessionBuilder};
