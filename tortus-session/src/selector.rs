//! Work-queue selection: which unannotated records a session will review.

use std::collections::HashSet;

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tortus_core::errors::ConfigError;
use tortus_core::{Ledger, RecordId, SessionConfig, SourceTable, WorkItem};

/// Fixed, ordered list of records for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkQueue {
    items: Vec<WorkItem>,
    /// Source rows left out because their text was already annotated.
    excluded: usize,
}

impl WorkQueue {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, cursor: usize) -> Option<&WorkItem> {
        self.items.get(cursor)
    }

    pub fn items(&self) -> &[WorkItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorkItem> {
        self.items.iter()
    }

    pub fn excluded(&self) -> usize {
        self.excluded
    }
}

/// Pick the records to review.
///
/// Rows whose text exactly matches a text already in `prior` are skipped.
/// Of the rest, either a uniform sample without replacement (random mode)
/// or the leading rows in table order are taken, capped at what remains
/// unless `strict_sizing` is set for random mode.
pub fn select_work_queue<R: Rng + ?Sized>(
    table: &SourceTable,
    config: &SessionConfig,
    prior: &Ledger,
    rng: &mut R,
) -> Result<WorkQueue, ConfigError> {
    let _span = tortus_core::selection_span!(config.text_column, config.randomize).entered();

    let text_index = table.column_index(&config.text_column)?;
    let id_index = config
        .id_column
        .as_deref()
        .map(|name| table.column_index(name))
        .transpose()?;

    let annotated: HashSet<&str> = prior.texts();
    let candidates: Vec<usize> = table
        .rows()
        .enumerate()
        .filter(|(_, row)| !annotated.contains(row[text_index].as_str()))
        .map(|(position, _)| position)
        .collect();
    let excluded = table.len() - candidates.len();

    let count = config.record_count.min(candidates.len());
    let positions: Vec<usize> = if config.randomize {
        if config.strict_sizing && config.record_count > candidates.len() {
            return Err(ConfigError::InsufficientRecords {
                requested: config.record_count,
                available: candidates.len(),
            });
        }
        index::sample(rng, candidates.len(), count)
            .into_iter()
            .map(|i| candidates[i])
            .collect()
    } else {
        candidates.into_iter().take(count).collect()
    };

    let items = positions
        .into_iter()
        .filter_map(|position| {
            let row = table.row(position)?;
            let id = match id_index {
                Some(column) => RecordId::Key(row[column].clone()),
                None => RecordId::Position(position),
            };
            Some(WorkItem {
                id,
                text: row[text_index].clone(),
            })
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        queued = items.len(),
        excluded,
        requested = config.record_count,
        "work queue selected"
    );

    Ok(WorkQueue { items, excluded })
}
