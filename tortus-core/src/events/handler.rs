use super::types::*;

/// Receives session events. Every method defaults to a no-op, so handlers
/// implement only what they render.
pub trait SessionEventHandler: Send + Sync {
    fn on_session_started(&self, _event: &SessionStartedEvent) {}

    fn on_record_presented(&self, _event: &RecordPresentedEvent) {}

    fn on_annotation_recorded(&self, _event: &AnnotationRecordedEvent) {}

    fn on_annotation_retracted(&self, _event: &AnnotationRetractedEvent) {}

    fn on_session_complete(&self, _event: &SessionCompleteEvent) {}

    fn on_session_stopped(&self, _event: &SessionStoppedEvent) {}
}
