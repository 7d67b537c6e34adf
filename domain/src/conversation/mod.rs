//! Conversation domain
//!
//! - [`message`] - transcript entries and the history entries sent to the aggregator
//! - [`transcript::Transcript`] - the ordered, append-only record of one conversation
//! - [`context`] - per-persona context windows for the generation service

pub mod context;
pub mod message;
pub mod transcript;

pub use context::{ChatTurn, TurnRole, persona_context};
pub use message::{Author, HistoryEntry, Message, MessageId};
pub use transcript::Transcript;
