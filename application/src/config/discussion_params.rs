//! Discussion parameters - orchestrator loop control.
//!
//! [`DiscussionParams`] groups the static parameters that control the
//! round loop in [`DiscussionOrchestrator`](crate::use_cases::run_discussion::DiscussionOrchestrator).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Discussion loop control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscussionParams {
    /// Follow-up rounds run automatically after each opening or user round.
    pub autonomous_rounds: usize,
    /// Pause before each follow-up round.
    pub round_delay: Duration,
    /// Number of recent messages summarized into a follow-up prompt.
    pub context_window: usize,
    /// Pause before the opening round of an unprompted discussion.
    pub start_delay: Duration,
}

impl Default for DiscussionParams {
    fn default() -> Self {
        Self {
            autonomous_rounds: 2,
            round_delay: Duration::from_millis(1000),
            context_window: 6,
            start_delay: Duration::from_millis(500),
        }
    }
}

impl DiscussionParams {
    // ==================== Builder Methods ====================

    pub fn with_autonomous_rounds(mut self, rounds: usize) -> Self {
        self.autonomous_rounds = rounds;
        self
    }

    pub fn with_round_delay(mut self, delay: Duration) -> Self {
        self.round_delay = delay;
        self
    }

    /// A window of zero is bumped to one so follow-ups always have context
    pub fn with_context_window(mut self, size: usize) -> Self {
        self.context_window = size.max(1);
        self
    }

    pub fn with_start_delay(mut self, delay: Duration) -> Self {
        self.start_delay = delay;
        self
    }

    /// No pauses at all (tests, scripted runs)
    pub fn without_delays(self) -> Self {
        self.with_round_delay(Duration::ZERO)
            .with_start_delay(Duration::ZERO)
    }
}
