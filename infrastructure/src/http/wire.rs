//! JSON wire format of the chat endpoint.
//!
//! Request: `{"message": "...", "conversationHistory": [{"role", "content", "advisorId"?}]}`.
//! Response: `{"responses": [{"advisorId", "advisorName", "content", "error"}]}`
//! with exactly one of `content`/`error` non-null. Errors are
//! `{"error": "..."}`.

use council_domain::{Author, HistoryEntry, PersonaId, PersonaReply, ReplyOutcome, RoundResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub const ROLE_USER: &str = "user";
pub const ROLE_ADVISOR: &str = "advisor";

/// Rejection of a request body
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("Message is required")]
    MissingMessage,
}

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<WireHistoryEntry>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, history: &[HistoryEntry]) -> Self {
        Self {
            message: message.into(),
            conversation_history: history.iter().map(WireHistoryEntry::from).collect(),
        }
    }

    /// Parse a raw body the way the endpoint does.
    ///
    /// Anything other than a JSON object with a non-empty string `message`
    /// is rejected. `conversationHistory` is optional; entries that cannot
    /// be understood are skipped.
    pub fn parse(body: &[u8]) -> Result<(String, Vec<HistoryEntry>), WireError> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            debug!("Rejecting unparsable chat body: {}", e);
            WireError::MissingMessage
        })?;

        let message = value
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .ok_or(WireError::MissingMessage)?
            .to_string();

        let history = value
            .get("conversationHistory")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| {
                        serde_json::from_value::<WireHistoryEntry>(item.clone())
                            .ok()
                            .and_then(|entry| entry.into_entry())
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok((message, history))
    }
}

/// One history item as the browser client sends it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireHistoryEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisor_name: Option<String>,
}

impl WireHistoryEntry {
    /// Interpret the item; `None` when it names no usable author.
    ///
    /// `persona` and `assistant` are accepted for `advisor`. Without a role
    /// the item is a user turn unless it carries an `advisorId`.
    pub fn into_entry(self) -> Option<HistoryEntry> {
        let advisor_id = self
            .advisor_id
            .and_then(|id| PersonaId::new(id).ok());
        let is_user = match self.role.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some(ROLE_USER) => true,
            Some(ROLE_ADVISOR | "persona" | "assistant") => false,
            Some(_) => return None,
            None => advisor_id.is_none(),
        };

        if is_user {
            return Some(HistoryEntry::user(self.content));
        }
        let id = advisor_id?;
        let name = self.advisor_name.unwrap_or_else(|| id.to_string());
        Some(HistoryEntry::persona(id, name, self.content))
    }
}

impl From<&HistoryEntry> for WireHistoryEntry {
    fn from(entry: &HistoryEntry) -> Self {
        match &entry.author {
            Author::Persona { id, name } => Self {
                role: Some(ROLE_ADVISOR.to_string()),
                content: entry.content.clone(),
                advisor_id: Some(id.to_string()),
                advisor_name: Some(name.clone()),
            },
            Author::User | Author::Notice => Self {
                role: Some(ROLE_USER.to_string()),
                content: entry.content.clone(),
                advisor_id: None,
                advisor_name: None,
            },
        }
    }
}

/// Successful body of `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub responses: Vec<WireReply>,
}

impl From<&RoundResult> for ChatResponse {
    fn from(round: &RoundResult) -> Self {
        Self {
            responses: round.replies().iter().map(WireReply::from).collect(),
        }
    }
}

impl ChatResponse {
    /// Convert back into a round; replies with an unusable id are dropped
    pub fn into_round(self) -> RoundResult {
        RoundResult::new(
            self.responses
                .into_iter()
                .filter_map(WireReply::into_reply)
                .collect(),
        )
    }
}

/// One persona's slot in a response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireReply {
    pub advisor_id: String,
    pub advisor_name: String,
    pub content: Option<String>,
    pub error: Option<String>,
}

impl From<&PersonaReply> for WireReply {
    fn from(reply: &PersonaReply) -> Self {
        let (content, error) = match &reply.outcome {
            ReplyOutcome::Content(text) => (Some(text.clone()), None),
            ReplyOutcome::Failed(reason) => (None, Some(reason.clone())),
        };
        Self {
            advisor_id: reply.persona_id.to_string(),
            advisor_name: reply.persona_name.clone(),
            content,
            error,
        }
    }
}

impl WireReply {
    fn into_reply(self) -> Option<PersonaReply> {
        let persona_id = PersonaId::new(self.advisor_id).ok()?;
        let outcome = match (self.content, self.error) {
            (Some(text), _) => ReplyOutcome::Content(text),
            (None, Some(reason)) => ReplyOutcome::Failed(reason),
            (None, None) => ReplyOutcome::Failed(format!(
                "Failed to get response from {}",
                self.advisor_name
            )),
        };
        Some(PersonaReply {
            persona_id,
            persona_name: self.advisor_name,
            outcome,
        })
    }
}

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
