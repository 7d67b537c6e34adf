//! Domain layer for advisor-council
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Persona**: a configured identity with a fixed instruction block
//! - **Transcript**: the ordered, append-only record of one conversation
//! - **Round**: one fan-out-and-join cycle producing at most one message per persona
//!
//! Each persona only ever sees user turns and its own earlier turns
//! (see [`persona_context`]).

pub mod conversation;
pub mod core;
pub mod discussion;
pub mod persona;
pub mod prompt;

// Re-export commonly used types
pub use conversation::{
    Author, ChatTurn, HistoryEntry, Message, MessageId, Transcript, TurnRole, persona_context,
};
pub use core::{error::DomainError, model::Model};
pub use discussion::{
    DiscussionState, PersonaReply, ReplyOutcome, RoundKind, RoundResult, TOPICS, random_topic,
};
pub use persona::{Persona, PersonaId, PersonaRoster};
pub use prompt::PromptTemplate;
