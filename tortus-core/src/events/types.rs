//! Event payload types.

use crate::models::{Annotation, RecordId};

/// Payload for `on_session_started`.
#[derive(Debug, Clone)]
pub struct SessionStartedEvent {
    pub session_id: String,
    pub queue_len: usize,
    /// Source rows left out because their text was already annotated.
    pub excluded: usize,
}

/// Payload for `on_record_presented`.
#[derive(Debug, Clone)]
pub struct RecordPresentedEvent {
    pub cursor: usize,
    pub total: usize,
    pub id: RecordId,
    pub text: String,
}

/// Payload for `on_annotation_recorded`.
#[derive(Debug, Clone)]
pub struct AnnotationRecordedEvent {
    pub cursor: usize,
    pub annotation: Annotation,
}

/// Payload for `on_annotation_retracted`.
#[derive(Debug, Clone)]
pub struct AnnotationRetractedEvent {
    pub cursor: usize,
    pub annotation: Annotation,
}

/// Payload for `on_session_complete`.
#[derive(Debug, Clone)]
pub struct SessionCompleteEvent {
    pub session_id: String,
    pub reviewed: usize,
}

/// Payload for `on_session_stopped`.
#[derive(Debug, Clone)]
pub struct SessionStoppedEvent {
    pub session_id: String,
    pub cursor: usize,
    pub reviewed: usize,
}
