//! Discussion domain
//!
//! - [`round`] - the result of one fan-out-and-join cycle
//! - [`topics`] - the fixed pool of opening topics
//! - [`state::DiscussionState`] - the orchestrator state machine

pub mod round;
pub mod state;
pub mod topics;

pub use round::{PersonaReply, ReplyOutcome, RoundKind, RoundResult};
pub use state::DiscussionState;
pub use topics::{TOPICS, random_topic};
