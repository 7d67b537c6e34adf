//! Port for structured conversation logging.
//!
//! Separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures rounds and
//! transcript messages in a machine-readable form (JSONL).

use council_domain::{Message, PersonaId, RoundKind};
use serde_json::{Value, json};

/// A structured conversation event for logging.
///
/// Build events with the named constructors; `new` is for sinks and tests
/// that need an arbitrary record.
pub struct ConversationEvent {
    /// Event type identifier (e.g. "round_started", "message_appended").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// A message was added to the transcript
    pub fn message_appended(message: &Message) -> Self {
        Self::new(
            "message_appended",
            json!({
                "id": message.id(),
                "author": message.author(),
                "content": message.content(),
                "created_at": message.timestamp(),
            }),
        )
    }

    /// A round request is about to be sent
    pub fn round_started(kind: RoundKind, prompt: &str, transcript_len: usize) -> Self {
        Self::new(
            "round_started",
            json!({
                "kind": kind,
                "prompt": prompt,
                "transcript_len": transcript_len,
            }),
        )
    }

    /// The whole round request failed
    pub fn round_failed(kind: RoundKind, error: &str) -> Self {
        Self::new("round_failed", json!({ "kind": kind, "error": error }))
    }

    /// The user gave up on a round before it resolved
    pub fn round_abandoned(kind: RoundKind) -> Self {
        Self::new("round_abandoned", json!({ "kind": kind }))
    }

    /// One persona's call failed inside an otherwise successful round
    pub fn persona_failed(persona: &PersonaId, error: &str) -> Self {
        Self::new(
            "persona_failed",
            json!({ "persona": persona, "error": error }),
        )
    }
}

/// Port for logging conversation events to a structured log.
///
/// `log` is synchronous and infallible; a failing sink must never disturb
/// a round.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_appended_carries_author() {
        let event = ConversationEvent::message_appended(&Message::user("hello"));
        assert_eq!(event.event_type, "message_appended");
        assert_eq!(event.payload["content"], "hello");
        assert!(event.payload["id"].is_string());
    }

    #[test]
    fn test_round_events() {
        let started = ConversationEvent::round_started(RoundKind::User, "Mars?", 4);
        assert_eq!(started.payload["prompt"], "Mars?");
        assert_eq!(started.payload["transcript_len"], 4);

        let failed = ConversationEvent::round_failed(RoundKind::Opening, "connection refused");
        assert_eq!(failed.event_type, "round_failed");
        assert_eq!(failed.payload["error"], "connection refused");

        let persona = PersonaId::new("sam").unwrap();
        let event = ConversationEvent::persona_failed(&persona, "quota exceeded");
        assert_eq!(event.payload["persona"], "sam");
    }
}
