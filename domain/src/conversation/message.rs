//! Transcript messages

use crate::persona::{Persona, PersonaId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a message within a conversation (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who wrote a message
///
/// `Notice` is a locally generated status line (e.g. a failed round). It is
/// shown to the user but never replayed to personas as history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Author {
    User,
    Persona { id: PersonaId, name: String },
    Notice,
}

impl Author {
    pub fn persona(persona: &Persona) -> Self {
        Author::Persona {
            id: persona.id().clone(),
            name: persona.name().to_string(),
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Author::User)
    }

    pub fn persona_id(&self) -> Option<&PersonaId> {
        match self {
            Author::Persona { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Label used when rendering the author inline ("User" for the user)
    pub fn label(&self) -> &str {
        match self {
            Author::User => "User",
            Author::Persona { name, .. } => name,
            Author::Notice => "Notice",
        }
    }
}

/// One prior turn as seen by the aggregator (Value Object)
///
/// Carries only what the aggregator needs: who spoke and what they said.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub author: Author,
    pub content: String,
}

impl HistoryEntry {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            author: Author::User,
            content: content.into(),
        }
    }

    pub fn persona(id: PersonaId, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author: Author::Persona {
                id,
                name: name.into(),
            },
            content: content.into(),
        }
    }
}

/// A transcript entry (Entity)
///
/// Immutable once created; identity is the [`MessageId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    author: Author,
    content: String,
    timestamp: DateTime<Utc>,
}

impl Message {
    fn new(author: Author, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            author,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Author::User, content)
    }

    pub fn persona(persona: &Persona, content: impl Into<String>) -> Self {
        Self::new(Author::persona(persona), content)
    }

    pub fn notice(content: impl Into<String>) -> Self {
        Self::new(Author::Notice, content)
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn is_notice(&self) -> bool {
        matches!(self.author, Author::Notice)
    }

    /// History form of this message; notices have none
    pub fn to_history_entry(&self) -> Option<HistoryEntry> {
        match &self.author {
            Author::Notice => None,
            author => Some(HistoryEntry {
                author: author.clone(),
                content: self.content.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::PersonaRoster;

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::user("hi");
        let b = Message::user("hi");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_persona_message_author() {
        let roster = PersonaRoster::advisory_board();
        let sam = roster.find("sam").unwrap();
        let msg = Message::persona(sam, "Look, timing matters.");
        assert_eq!(msg.author().persona_id().map(PersonaId::as_str), Some("sam"));
        assert_eq!(msg.author().label(), "Sam Altman");
        assert!(!msg.author().is_user());
    }

    #[test]
    fn test_notice_has_no_history_entry() {
        assert!(Message::notice("oops").to_history_entry().is_none());
        let entry = Message::user("question").to_history_entry().unwrap();
        assert_eq!(entry, HistoryEntry::user("question"));
    }

    #[test]
    fn test_author_serialization_is_tagged() {
        let author = Author::Persona {
            id: PersonaId::new("elon").unwrap(),
            name: "Elon Musk".to_string(),
        };
        let json = serde_json::to_value(&author).unwrap();
        assert_eq!(json["role"], "persona");
        assert_eq!(json["id"], "elon");
        assert_eq!(serde_json::to_value(Author::User).unwrap()["role"], "user");
    }
}
