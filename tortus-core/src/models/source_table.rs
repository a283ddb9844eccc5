use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Read-only table of string cells with named columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct SourceTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

#[derive(Deserialize)]
struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TryFrom<RawTable> for SourceTable {
    type Error = ConfigError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        Self::new(raw.columns, raw.rows)
    }
}

impl SourceTable {
    /// Build a table, rejecting rows whose width differs from the header.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, ConfigError> {
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != columns.len())
        {
            return Err(ConfigError::RaggedRow {
                row,
                expected: columns.len(),
                actual: cells.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    /// Single-column table, handy when texts carry no identifiers.
    pub fn from_texts<I, S>(column: impl Into<String>, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: vec![column.into()],
            rows: texts.into_iter().map(|t| vec![t.into()]).collect(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, position: usize) -> Option<&[String]> {
        self.rows.get(position).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Position of `name` in the header.
    pub fn column_index(&self, name: &str) -> Result<usize, ConfigError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| ConfigError::MissingColumn {
                column: name.to_string(),
                available: self.columns.join(", "),
            })
    }

    /// Cells of one column, in row order.
    pub fn column(&self, name: &str) -> Result<impl Iterator<Item = &str>, ConfigError> {
        let index = self.column_index(name)?;
        Ok(self.rows.iter().map(move |row| row[index].as_str()))
    }
}
