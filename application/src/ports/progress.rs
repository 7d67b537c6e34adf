//! Progress notification ports
//!
//! Implementations live in the presentation layer and can display progress
//! in various ways (spinner, plain text, nothing).

use council_domain::{Message, Persona, RoundKind};

/// Callbacks during a single aggregator fan-out
pub trait ProgressNotifier: Send + Sync {
    /// Called when the fan-out starts
    fn on_fanout_start(&self, total_personas: usize);

    /// Called as each persona call settles (in completion order)
    fn on_persona_complete(&self, persona: &Persona, success: bool);

    /// Called once every persona call has settled
    fn on_fanout_complete(&self);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_fanout_start(&self, _total_personas: usize) {}
    fn on_persona_complete(&self, _persona: &Persona, _success: bool) {}
    fn on_fanout_complete(&self) {}
}

/// Callbacks from the discussion orchestrator
pub trait DiscussionProgress: Send + Sync {
    /// A round is about to be requested
    fn on_round_start(&self, kind: RoundKind);

    /// A message was appended to the transcript
    fn on_message(&self, message: &Message);

    /// A round was merged
    fn on_round_complete(&self, _kind: RoundKind, _merged: usize, _failed: usize) {}

    /// A whole round failed
    fn on_round_failed(&self, _kind: RoundKind, _reason: &str) {}
}

/// No-op discussion progress
pub struct NoDiscussionProgress;

impl DiscussionProgress for NoDiscussionProgress {
    fn on_round_start(&self, _kind: RoundKind) {}
    fn on_message(&self, _message: &Message) {}
}
