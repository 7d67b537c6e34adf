//! Transcript - the ordered record of one conversation.

use super::message::{HistoryEntry, Message};
use crate::discussion::RoundResult;
use crate::persona::PersonaRoster;
use serde::{Deserialize, Serialize};

/// Append-only, ordered sequence of messages (Entity)
///
/// Insertion order is conversational order and is replayed verbatim as
/// history. Owned exclusively by one discussion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    /// Append the successful replies of a round in roster order.
    ///
    /// The order of `round` is not trusted. Failed or blank replies are
    /// dropped, as are replies from personas outside `roster`. Returns the
    /// newly appended messages.
    pub fn merge_round(&mut self, round: &RoundResult, roster: &PersonaRoster) -> &[Message] {
        let start = self.messages.len();
        for persona in roster.iter() {
            let content = round
                .successes()
                .find(|reply| &reply.persona_id == persona.id())
                .and_then(|reply| reply.content());
            if let Some(content) = content {
                self.messages.push(Message::persona(persona, content));
            }
        }
        &self.messages[start..]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Full history as sent to the aggregator (notices excluded)
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.messages
            .iter()
            .filter_map(Message::to_history_entry)
            .collect()
    }

    /// The most recent `size` conversational messages, oldest first.
    ///
    /// Notices are not part of the conversation and never fill a slot of
    /// the window, so a failed round does not push real replies out of the
    /// continuation summary.
    pub fn recent_window(&self, size: usize) -> Vec<&Message> {
        let conversational: Vec<&Message> =
            self.messages.iter().filter(|m| !m.is_notice()).collect();
        let skip = conversational.len().saturating_sub(size);
        conversational.into_iter().skip(skip).collect()
    }
}
