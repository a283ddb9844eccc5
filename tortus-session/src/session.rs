//! AnnotationSession — one annotator walking one work queue.

use std::fmt;
use std::sync::Arc;

use chrono::SubsecRound;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tortus_core::errors::{ConfigError, SessionError};
use tortus_core::events::{
    AnnotationRecordedEvent, AnnotationRetractedEvent, EventDispatcher, RecordPresentedEvent,
    SessionCompleteEvent, SessionEventHandler, SessionStartedEvent, SessionStoppedEvent,
};
use tortus_core::{
    Annotation, Clock, Ledger, SessionConfig, SourceTable, SystemClock, TortusResult, WorkItem,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::machine::{normalize_label, transition, Action, LedgerEffect, ReviewState, Transition};
use crate::presentation::{self, Controls, Progress, SessionView};
use crate::selector::{select_work_queue, WorkQueue};

/// Assembles an [`AnnotationSession`].
pub struct SessionBuilder {
    config: SessionConfig,
    prior: Option<Ledger>,
    clock: Arc<dyn Clock>,
    events: EventDispatcher,
}

impl SessionBuilder {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            prior: None,
            clock: Arc::new(SystemClock),
            events: EventDispatcher::new(),
        }
    }

    /// Annotations from an earlier session. Their texts are left out of the
    /// work queue and new rows are appended after them.
    pub fn prior_annotations(mut self, ledger: Ledger) -> Self {
        self.prior = Some(ledger);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn event_handler(mut self, handler: Arc<dyn SessionEventHandler>) -> Self {
        self.events.register(handler);
        self
    }

    /// Validate the config against `table`, select the work queue and start
    /// the session.
    pub fn build(self, table: &SourceTable) -> TortusResult<AnnotationSession> {
        let Self {
            config,
            prior,
            clock,
            events,
        } = self;

        config.validate()?;

        let ledger = match prior {
            Some(prior) => {
                if prior.text_column() != config.text_column {
                    return Err(ConfigError::SchemaMismatch {
                        expected: config.text_column.clone(),
                        actual: prior.text_column().to_string(),
                    }
                    .into());
                }
                prior
            }
            None => Ledger::new(config.id_header(), config.text_column.as_str()),
        };

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let queue = select_work_queue(table, &config, &ledger, &mut rng)?;

        let session = AnnotationSession {
            session_id: Uuid::new_v4().to_string(),
            state: ReviewState::initial(queue.len()),
            cursor: 0,
            config,
            queue,
            ledger,
            clock,
            events,
        };
        session.announce_start();
        Ok(session)
    }
}

/// A single annotation session.
///
/// Owns its work queue, cursor and ledger. The ledger can be read at any
/// time through [`ledger`](Self::ledger); only the actions below change it.
pub struct AnnotationSession {
    session_id: String,
    config: SessionConfig,
    queue: WorkQueue,
    ledger: Ledger,
    state: ReviewState,
    cursor: usize,
    clock: Arc<dyn Clock>,
    events: EventDispatcher,
}

impl AnnotationSession {
    pub fn builder(config: SessionConfig) -> SessionBuilder {
        SessionBuilder::new(config)
    }

    fn announce_start(&self) {
        let _span = tortus_core::session_span!(self.session_id, self.queue.len()).entered();
        info!(
            text_column = %self.config.text_column,
            excluded = self.queue.excluded(),
            prior_rows = self.ledger.len(),
            "annotation session started"
        );
        self.events.emit_session_started(&SessionStartedEvent {
            session_id: self.session_id.clone(),
            queue_len: self.queue.len(),
            excluded: self.queue.excluded(),
        });
        match self.state {
            ReviewState::Presenting(_) => self.announce_record(),
            ReviewState::Complete => self.announce_complete(),
            ReviewState::AwaitingConfirm(_) | ReviewState::Stopped => {}
        }
    }

    /// Record the configured `label` for the current record. Matching is
    /// case-insensitive; the ledger stores the label lowercased.
    pub fn label(&mut self, label: &str) -> Result<ReviewState, SessionError> {
        self.apply(Action::Label(label.to_string()))
    }

    /// Record a null label for the current record.
    pub fn skip(&mut self) -> Result<ReviewState, SessionError> {
        self.apply(Action::Skip)
    }

    /// Accept the pending choice and move on.
    pub fn confirm(&mut self) -> Result<ReviewState, SessionError> {
        self.apply(Action::Confirm)
    }

    /// Drop the pending choice and show the same record again.
    pub fn redo(&mut self) -> Result<ReviewState, SessionError> {
        self.apply(Action::Redo)
    }

    /// Stop early. The ledger is left exactly as it is.
    pub fn quit(&mut self) -> Result<ReviewState, SessionError> {
        self.apply(Action::Quit)
    }

    /// Apply one annotator action. On error nothing changes.
    pub fn apply(&mut self, action: Action) -> Result<ReviewState, SessionError> {
        let _span = tortus_core::session_span!(self.session_id, self.queue.len()).entered();

        let action = match action {
            Action::Label(label) => Action::Label(self.resolve_label(&label)?.to_string()),
            other => other,
        };
        let Transition { next, effect } = transition(self.state, &action, self.queue.len())?;
        debug!(action = action.name(), from = %self.state, to = %next, "transition");

        match effect {
            LedgerEffect::Append { cursor, label } => {
                let item = self.item_at(cursor, &action)?;
                let annotation = Annotation {
                    id: item.id.clone(),
                    text: item.text.clone(),
                    label,
                    annotated_at: self.clock.now().trunc_subsecs(0),
                };
                debug!(cursor, id = %annotation.id, label = ?annotation.label, "annotation recorded");
                self.ledger.push(annotation.clone());
                self.events
                    .emit_annotation_recorded(&AnnotationRecordedEvent { cursor, annotation });
            }
            LedgerEffect::RetractLast { cursor } => {
                if let Some(annotation) = self.ledger.pop() {
                    debug!(cursor, id = %annotation.id, "annotation retracted");
                    self.events
                        .emit_annotation_retracted(&AnnotationRetractedEvent { cursor, annotation });
                }
            }
            LedgerEffect::None => {}
        }

        self.state = next;
        match next {
            ReviewState::Presenting(i) => {
                self.cursor = i;
                self.announce_record();
            }
            ReviewState::AwaitingConfirm(i) => self.cursor = i,
            ReviewState::Complete => {
                self.cursor = self.queue.len();
                self.announce_complete();
            }
            ReviewState::Stopped => {
                info!(cursor = self.cursor, reviewed = self.reviewed(), "annotation session stopped");
                self.events.emit_session_stopped(&SessionStoppedEvent {
                    session_id: self.session_id.clone(),
                    cursor: self.cursor,
                    reviewed: self.reviewed(),
                });
            }
        }
        Ok(next)
    }

    /// Configured label matching `label` case-insensitively.
    fn resolve_label(&self, label: &str) -> Result<&str, SessionError> {
        let wanted = normalize_label(label);
        self.config
            .labels
            .iter()
            .find(|configured| normalize_label(configured) == wanted)
            .map(String::as_str)
            .ok_or_else(|| SessionError::UnknownLabel {
                label: label.to_string(),
                expected: self.config.labels.join(", "),
            })
    }

    fn item_at(&self, cursor: usize, action: &Action) -> Result<&WorkItem, SessionError> {
        self.queue
            .get(cursor)
            .ok_or_else(|| SessionError::InvalidState {
                action: action.name(),
                state: format!("record {cursor} is outside the work queue"),
            })
    }

    fn announce_record(&self) {
        if let Some(item) = self.current_record() {
            self.events.emit_record_presented(&RecordPresentedEvent {
                cursor: self.cursor,
                total: self.queue.len(),
                id: item.id.clone(),
                text: item.text.clone(),
            });
        }
    }

    fn announce_complete(&self) {
        info!(reviewed = self.reviewed(), "annotation session complete");
        self.events.emit_session_complete(&SessionCompleteEvent {
            session_id: self.session_id.clone(),
            reviewed: self.reviewed(),
        });
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> ReviewState {
        self.state
    }

    /// Index of the record under review; equals the queue length once
    /// complete.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// Number of records whose choice was confirmed.
    pub fn reviewed(&self) -> usize {
        match self.state {
            ReviewState::Complete => self.queue.len(),
            _ => self.cursor,
        }
    }

    pub fn queue(&self) -> &WorkQueue {
        &self.queue
    }

    pub fn labels(&self) -> &[String] {
        &self.config.labels
    }

    pub fn current_record(&self) -> Option<&WorkItem> {
        self.state.cursor().and_then(|i| self.queue.get(i))
    }

    /// The provisional row awaiting confirmation, if any.
    pub fn pending(&self) -> Option<&Annotation> {
        if self.state.has_pending() {
            self.ledger.last()
        } else {
            None
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Hand the ledger back to the caller.
    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    pub fn progress(&self) -> Progress {
        Progress::for_state(self.state, self.cursor, self.queue.len())
    }

    pub fn view(&self) -> SessionView {
        let progress = self.progress();
        match self.current_record() {
            Some(item) => {
                let pending = self.pending();
                SessionView::Record {
                    html: presentation::make_html(&item.text),
                    progress,
                    controls: Controls {
                        labels: self.config.labels.clone(),
                        choices_enabled: pending.is_none(),
                        confirm_visible: pending.is_some(),
                        chosen: pending.map(|a| a.label.clone()),
                    },
                }
            }
            None => {
                let html = if self.state == ReviewState::Stopped {
                    presentation::STOPPED_HTML
                } else {
                    presentation::COMPLETE_HTML
                };
                SessionView::Finished {
                    html: html.to_string(),
                    progress,
                }
            }
        }
    }
}

impl fmt::Debug for AnnotationSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotationSession")
            .field("session_id", &self.session_id)
            .field("state", &self.state)
            .field("cursor", &self.cursor)
            .field("queue_len", &self.queue.len())
            .field("ledger_len", &self.ledger.len())
            .finish()
    }
}
