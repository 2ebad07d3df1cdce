//! Chat message types shared by the store and the completion client.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Reserved id of the synthesized welcome message.
///
/// The welcome turn is a local affordance seeded into an empty conversation
/// and never sent to the completion service. Generated message ids are
/// UUIDs, so the sentinel cannot collide.
pub const WELCOME_MESSAGE_ID: &str = "welcome";

/// Text of the welcome message.
pub const WELCOME_TEXT: &str =
    "Hello! I'm your care companion. How are you feeling today?";

/// Who authored a message.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Author {
    User,
    Assistant,
}

/// One turn of conversation.
///
/// Insertion order in the [`Conversation`](super::Conversation) is
/// authoritative; the timestamp is for display only.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub author: Author,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            author: Author::User,
            timestamp: Utc::now(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            author: Author::Assistant,
            timestamp: Utc::now(),
        }
    }

    /// The welcome turn seeded into an empty conversation.
    pub fn welcome(timestamp: DateTime<Utc>) -> Self {
        Self {
            id: WELCOME_MESSAGE_ID.to_string(),
            text: WELCOME_TEXT.to_string(),
            author: Author::Assistant,
            timestamp,
        }
    }

    pub fn is_welcome(&self) -> bool {
        self.id == WELCOME_MESSAGE_ID
    }
}

/// Storage form of [`ChatMessage`].
///
/// The key-value store only accepts text, so the timestamp travels as an
/// RFC 3339 string with millisecond precision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersistedMessage {
    pub id: String,
    pub text: String,
    pub author: Author,
    pub timestamp: String,
}

impl From<&ChatMessage> for PersistedMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            id: msg.id.clone(),
            text: msg.text.clone(),
            author: msg.author,
            timestamp: msg.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl TryFrom<PersistedMessage> for ChatMessage {
    type Error = chrono::ParseError;

    fn try_from(msg: PersistedMessage) -> Result<Self, Self::Error> {
        let timestamp = DateTime::parse_from_rfc3339(&msg.timestamp)?.with_timezone(&Utc);
        Ok(Self {
            id: msg.id,
            text: msg.text,
            author: msg.author,
            timestamp,
        })
    }
}

/// Role vocabulary of the completion service.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A `{role, content}` pair as the completion service expects it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContextMessage {
    pub role: Role,
    pub content: String,
}

impl ContextMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

impl From<&ChatMessage> for ContextMessage {
    fn from(msg: &ChatMessage) -> Self {
        let role = match msg.author {
            Author::User => Role::User,
            Author::Assistant => Role::Assistant,
        };
        Self {
            role,
            content: msg.text.clone(),
        }
    }
}
