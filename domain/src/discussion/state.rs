//! Discussion state machine

use serde::{Deserialize, Serialize};

/// Where the orchestrator is in its round cycle
///
/// ```text
/// Idle ──start──▶ AwaitingInitialRound ──merged──▶ Active(0) ──round──▶ Active(n+1)
///   ▲                                                 │
///   └──────── stop / autonomous rounds exhausted ─────┘
///
/// (any state except Awaiting*) ──submit──▶ AwaitingUserRound ──merged──▶ Active(0)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DiscussionState {
    #[default]
    Idle,
    AwaitingInitialRound,
    AwaitingUserRound,
    Active { turns_since_user: usize },
}

impl DiscussionState {
    /// True while a non-autonomous round is in flight; input is refused then
    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            DiscussionState::AwaitingInitialRound | DiscussionState::AwaitingUserRound
        )
    }

    pub fn is_active(&self) -> bool {
        matches!(self, DiscussionState::Active { .. })
    }

    pub fn turns_since_user(&self) -> Option<usize> {
        match self {
            DiscussionState::Active { turns_since_user } => Some(*turns_since_user),
            _ => None,
        }
    }

    /// State after an opening or user round has been merged
    pub fn after_direct_round(self) -> Self {
        DiscussionState::Active {
            turns_since_user: 0,
        }
    }

    /// State after one autonomous round has been merged
    pub fn after_autonomous_round(self) -> Self {
        match self {
            DiscussionState::Active { turns_since_user } => DiscussionState::Active {
                turns_since_user: turns_since_user + 1,
            },
            other => other,
        }
    }
}

impl std::fmt::Display for DiscussionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscussionState::Idle => write!(f, "idle"),
            DiscussionState::AwaitingInitialRound => write!(f, "awaiting opening round"),
            DiscussionState::AwaitingUserRound => write!(f, "awaiting replies"),
            DiscussionState::Active { turns_since_user } => {
                write!(f, "active ({} follow-up rounds)", turns_since_user)
            }
        }
    }
}
