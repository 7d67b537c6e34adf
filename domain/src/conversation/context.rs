//! Per-persona context windows
//!
//! Each persona sees every user turn plus its own earlier turns, never its
//! peers' turns. The generation service also requires a conversation to open
//! with a user turn, so a filtered history that starts otherwise is dropped.

use super::message::{Author, HistoryEntry};
use crate::persona::PersonaId;
use serde::{Deserialize, Serialize};

/// Speaker of a turn as understood by the generation service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Model,
}

impl TurnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Model => "model",
        }
    }
}

/// One turn of a persona session history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Model,
            content: content.into(),
        }
    }
}

/// Build the session history for `persona` from the shared history.
///
/// Keeps user entries and entries authored by `persona`, in order. If the
/// result does not start with a user turn the whole history is discarded.
pub fn persona_context(history: &[HistoryEntry], persona: &PersonaId) -> Vec<ChatTurn> {
    let turns: Vec<ChatTurn> = history
        .iter()
        .filter_map(|entry| match &entry.author {
            Author::User => Some(ChatTurn::user(entry.content.clone())),
            Author::Persona { id, .. } if id == persona => {
                Some(ChatTurn::model(entry.content.clone()))
            }
            _ => None,
        })
        .collect();

    match turns.first() {
        Some(first) if first.role != TurnRole::User => Vec::new(),
        _ => turns,
    }
}
