use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a source record.
///
/// Either the value of the configured id column, or the row's position in
/// the source table when no id column is configured. Serialized untagged so
/// a ledger reads back with the same shape it was written with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Position(usize),
    Key(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(p) => write!(f, "{p}"),
            Self::Key(k) => f.write_str(k),
        }
    }
}

/// One queued record: identifier plus text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: RecordId,
    pub text: String,
}
