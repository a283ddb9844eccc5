use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Settings for one annotation session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name of the source column holding the text to annotate. Required.
    pub text_column: String,
    /// Name of the source column holding record ids. When absent the row's
    /// position in the source table is used.
    pub id_column: Option<String>,
    /// Number of records to queue for review.
    pub record_count: usize,
    /// Sample records at random instead of taking them in table order.
    pub randomize: bool,
    /// Label choices, in display order.
    pub labels: Vec<String>,
    /// Seed for random sampling. Unseeded when absent.
    pub seed: Option<u64>,
    /// Fail instead of capping when random sampling asks for more records
    /// than are available.
    pub strict_sizing: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            text_column: String::new(),
            id_column: None,
            record_count: defaults::DEFAULT_RECORD_COUNT,
            randomize: defaults::DEFAULT_RANDOMIZE,
            labels: defaults::DEFAULT_LABELS.iter().map(|l| l.to_string()).collect(),
            seed: None,
            strict_sizing: defaults::DEFAULT_STRICT_SIZING,
        }
    }
}

impl SessionConfig {
    /// Config with defaults for everything but the text column.
    pub fn new(text_column: impl Into<String>) -> Self {
        Self {
            text_column: text_column.into(),
            ..Self::default()
        }
    }

    pub fn with_id_column(mut self, id_column: impl Into<String>) -> Self {
        self.id_column = Some(id_column.into());
        self
    }

    pub fn with_record_count(mut self, record_count: usize) -> Self {
        self.record_count = record_count;
        self
    }

    pub fn with_randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_strict_sizing(mut self, strict: bool) -> Self {
        self.strict_sizing = strict;
        self
    }

    /// Header of the ledger's identifier column.
    pub fn id_header(&self) -> &str {
        self.id_column
            .as_deref()
            .unwrap_or(defaults::DEFAULT_ID_HEADER)
    }

    /// Check the values that can be checked without a source table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.text_column.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "session.text_column".to_string(),
                message: "a text column is required".to_string(),
            });
        }
        if let Some(id_column) = &self.id_column {
            if id_column.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "session.id_column".to_string(),
                    message: "must not be blank when set".to_string(),
                });
            }
        }
        if self.record_count == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "session.record_count".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.labels.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "session.labels".to_string(),
                message: "at least one label is required".to_string(),
            });
        }
        let mut seen = HashSet::new();
        for label in &self.labels {
            if label.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "session.labels".to_string(),
                    message: "labels must not be blank".to_string(),
                });
            }
            // Labels are stored lowercased, so "Yes" and "yes" would collide.
            if !seen.insert(label.to_lowercase()) {
                return Err(ConfigError::ValidationFailed {
                    field: "session.labels".to_string(),
                    message: format!("duplicate label '{label}'"),
                });
            }
        }
        Ok(())
    }
}
