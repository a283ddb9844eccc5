//! # tortus-core
//!
//! Foundation crate for the tortus annotation tool.
//! Defines the table and ledger models, errors, config, the clock trait,
//! session events, and tracing setup. `tortus-session` builds on this.

pub mod config;
pub mod errors;
pub mod events;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{SessionConfig, TortusConfig};
pub use errors::{ConfigError, SessionError, TortusError, TortusResult};
pub use models::{Annotation, Ledger, RecordId, SourceTable, WorkItem};
pub use traits::{Clock, SystemClock};
