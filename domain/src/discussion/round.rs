//! Round results - one reply slot per configured persona.

use crate::persona::{Persona, PersonaId, PersonaRoster};
use serde::{Deserialize, Serialize};

/// What triggered a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundKind {
    /// Seeded topic on an empty transcript
    Opening,
    /// Direct reply to user input
    User,
    /// Autonomous follow-up; 1-based index within the current cycle
    Autonomous(usize),
}

impl RoundKind {
    pub fn is_autonomous(&self) -> bool {
        matches!(self, RoundKind::Autonomous(_))
    }
}

impl std::fmt::Display for RoundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundKind::Opening => write!(f, "opening round"),
            RoundKind::User => write!(f, "user round"),
            RoundKind::Autonomous(n) => write!(f, "follow-up round {}", n),
        }
    }
}

/// Outcome of a single persona call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyOutcome {
    Content(String),
    Failed(String),
}

/// One persona's entry in a round (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaReply {
    pub persona_id: PersonaId,
    pub persona_name: String,
    pub outcome: ReplyOutcome,
}

impl PersonaReply {
    pub fn success(persona: &Persona, content: impl Into<String>) -> Self {
        Self {
            persona_id: persona.id().clone(),
            persona_name: persona.name().to_string(),
            outcome: ReplyOutcome::Content(content.into()),
        }
    }

    pub fn failure(persona: &Persona, reason: impl Into<String>) -> Self {
        Self {
            persona_id: persona.id().clone(),
            persona_name: persona.name().to_string(),
            outcome: ReplyOutcome::Failed(reason.into()),
        }
    }

    /// Generated text, if the call succeeded with non-blank content
    pub fn content(&self) -> Option<&str> {
        match &self.outcome {
            ReplyOutcome::Content(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            ReplyOutcome::Failed(reason) => Some(reason),
            ReplyOutcome::Content(_) => None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.content().is_some()
    }
}

/// Output of one aggregator call (Value Object)
///
/// Holds exactly one reply per configured persona, in roster order, failed
/// personas included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    replies: Vec<PersonaReply>,
}

impl RoundResult {
    pub fn new(replies: Vec<PersonaReply>) -> Self {
        Self { replies }
    }

    pub fn replies(&self) -> &[PersonaReply] {
        &self.replies
    }

    pub fn into_replies(self) -> Vec<PersonaReply> {
        self.replies
    }

    pub fn len(&self) -> usize {
        self.replies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }

    pub fn successes(&self) -> impl Iterator<Item = &PersonaReply> {
        self.replies.iter().filter(|r| r.is_success())
    }

    pub fn failures(&self) -> impl Iterator<Item = &PersonaReply> {
        self.replies.iter().filter(|r| !r.is_success())
    }

    /// Whether the replies cover exactly the roster, in roster order
    pub fn matches_roster(&self, roster: &PersonaRoster) -> bool {
        self.replies.len() == roster.len()
            && self
                .replies
                .iter()
                .zip(roster.ids())
                .all(|(reply, id)| &reply.persona_id == id)
    }
}
