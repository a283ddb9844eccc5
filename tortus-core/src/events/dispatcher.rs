//! EventDispatcher — synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::SessionEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn SessionEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn SessionEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler does not stop later handlers from receiving it.
    fn emit<F: Fn(&dyn SessionEventHandler)>(&self, event: &'static str, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!(event, "session event handler panicked");
            }
        }
    }

    pub fn emit_session_started(&self, event: &SessionStartedEvent) {
        self.emit("session_started", |h| h.on_session_started(event));
    }

    pub fn emit_record_presented(&self, event: &RecordPresentedEvent) {
        self.emit("record_presented", |h| h.on_record_presented(event));
    }

    pub fn emit_annotation_recorded(&self, event: &AnnotationRecordedEvent) {
        self.emit("annotation_recorded", |h| h.on_annotation_recorded(event));
    }

    pub fn emit_annotation_retracted(&self, event: &AnnotationRetractedEvent) {
        self.emit("annotation_retracted", |h| h.on_annotation_retracted(event));
    }

    pub fn emit_session_complete(&self, event: &SessionCompleteEvent) {
        self.emit("session_complete", |h| h.on_session_complete(event));
    }

    pub fn emit_session_stopped(&self, event: &SessionStoppedEvent) {
        self.emit("session_stopped", |h| h.on_session_stopped(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
