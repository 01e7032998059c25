//! Port for the conversation transcript.
//!
//! Every prompt sent, every reply received and every stage outcome can be
//! recorded through [`ConversationLogger`]. This is separate from `tracing`:
//! tracing carries human-readable diagnostics, the transcript keeps the full
//! text in a machine-readable form (JSONL in the infrastructure adapter).

use router_domain::{StageError, TaskDomain};
use serde_json::{Value, json};

/// A structured transcript event
pub struct ConversationEvent {
    /// Event type, e.g. `"llm_request"`, `"stage_failed"`
    pub event_type: &'static str,
    /// Event-specific fields
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn llm_request(step: &str, system: Option<&str>, prompt: &str) -> Self {
        Self::new(
            "llm_request",
            json!({ "step": step, "system": system, "prompt": prompt }),
        )
    }

    pub fn llm_response(step: &str, text: &str) -> Self {
        Self::new("llm_response", json!({ "step": step, "text": text }))
    }

    pub fn stage_failed(error: &StageError) -> Self {
        Self::new(
            "stage_failed",
            json!({
                "step": error.stage(),
                "kind": error.kind().as_str(),
                "message": error.message(),
            }),
        )
    }

    pub fn question_classified(index: usize, domain: TaskDomain, source: &str) -> Self {
        Self::new(
            "question_classified",
            json!({ "index": index, "domain": domain.as_str(), "source": source }),
        )
    }

    pub fn answer_written(index: usize, domain: Option<TaskDomain>, output: &str) -> Self {
        Self::new(
            "answer_written",
            json!({
                "index": index,
                "domain": domain.map(|d| d.as_str()),
                "output": output,
            }),
        )
    }
}

/// Port for recording transcript events.
///
/// `log` is synchronous and infallible; adapters swallow write failures so
/// the run is never interrupted by the transcript.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Discards every event. The default when no transcript path is configured.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
