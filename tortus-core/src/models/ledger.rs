//! Ledger — the append-only table of collected labels.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::config::defaults;

/// One ledger row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: RecordId,
    pub text: String,
    /// Lowercased label, or `None` for a skipped record.
    pub label: Option<String>,
    /// Whole-second timestamp of the choice.
    pub annotated_at: DateTime<Utc>,
}

impl Annotation {
    pub fn is_skip(&self) -> bool {
        self.label.is_none()
    }
}

/// Table of annotations with columns `(id, text, label, annotated_at)`.
///
/// The id and text headers follow the source table the session was built
/// from. A ledger from one session can be handed to the next as its prior
/// annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    id_column: String,
    text_column: String,
    rows: Vec<Annotation>,
}

impl Ledger {
    pub fn new(id_column: impl Into<String>, text_column: impl Into<String>) -> Self {
        Self {
            id_column: id_column.into(),
            text_column: text_column.into(),
            rows: Vec::new(),
        }
    }

    /// Ledger pre-filled with existing rows.
    pub fn with_rows(
        id_column: impl Into<String>,
        text_column: impl Into<String>,
        rows: Vec<Annotation>,
    ) -> Self {
        Self {
            id_column: id_column.into(),
            text_column: text_column.into(),
            rows,
        }
    }

    pub fn id_column(&self) -> &str {
        &self.id_column
    }

    pub fn text_column(&self) -> &str {
        &self.text_column
    }

    /// Column headers in output order.
    pub fn columns(&self) -> [&str; 4] {
        [
            self.id_column.as_str(),
            self.text_column.as_str(),
            defaults::LABEL_HEADER,
            defaults::ANNOTATED_AT_HEADER,
        ]
    }

    pub fn rows(&self) -> &[Annotation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&Annotation> {
        self.rows.last()
    }

    /// Every text value present in the ledger, labeled or skipped.
    pub fn texts(&self) -> HashSet<&str> {
        self.rows.iter().map(|a| a.text.as_str()).collect()
    }

    pub fn push(&mut self, annotation: Annotation) {
        self.rows.push(annotation);
    }

    /// Remove and return the most recently appended row.
    pub fn pop(&mut self) -> Option<Annotation> {
        self.rows.pop()
    }
}
