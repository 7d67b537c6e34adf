//! Discussion pacing (`[discussion]` section)

use council_application::DiscussionParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDiscussionConfig {
    /// Follow-up rounds after each user or opening round
    pub autonomous_rounds: usize,
    /// Pause before each follow-up round
    pub round_delay_ms: u64,
    /// Recent messages summarized into a follow-up prompt
    pub context_window: usize,
    /// Pause before the opening round of an interactive chat
    pub start_delay_ms: u64,
}

impl Default for FileDiscussionConfig {
    fn default() -> Self {
        let params = DiscussionParams::default();
        Self {
            autonomous_rounds: params.autonomous_rounds,
            round_delay_ms: params.round_delay.as_millis() as u64,
            context_window: params.context_window,
            start_delay_ms: params.start_delay.as_millis() as u64,
        }
    }
}

impl FileDiscussionConfig {
    pub fn to_params(&self) -> DiscussionParams {
        DiscussionParams::default()
            .with_autonomous_rounds(self.autonomous_rounds)
            .with_round_delay(Duration::from_millis(self.round_delay_ms))
            .with_context_window(self.context_window)
            .with_start_delay(Duration::from_millis(self.start_delay_ms))
    }
}
