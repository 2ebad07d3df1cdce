//! The ordered message sequence for one session.

use chrono::{DateTime, Utc};

use super::message::{ChatMessage, ContextMessage};

/// Ordered, append-only sequence of messages for one user session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_messages(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }

    /// Conversation for a user with no prior history: a single welcome turn.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            messages: vec![ChatMessage::welcome(now)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Return a new conversation with `message` added at the end.
    ///
    /// Prior entries are carried over unchanged; `self` is not mutated.
    #[must_use]
    pub fn append(&self, message: ChatMessage) -> Conversation {
        let mut messages = self.messages.clone();
        messages.push(message);
        Self { messages }
    }

    /// History to forward to the completion service: the welcome turn is
    /// removed, the rest is capped to the most recent `limit` entries with
    /// order preserved.
    pub fn outbound_context(&self, limit: usize) -> Vec<ContextMessage> {
        let filtered: Vec<&ChatMessage> = self
            .messages
            .iter()
            .filter(|m| !m.is_welcome())
            .collect();
        let start = filtered.len().saturating_sub(limit);
        filtered[start..].iter().map(|m| ContextMessage::from(*m)).collect()
    }
}
