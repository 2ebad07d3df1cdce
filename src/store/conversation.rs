//! Load and persist the conversation against durable storage.

use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use crate::types::{ChatMessage, Conversation, PersistedMessage};

use super::{KeyValueStore, StoreError};

/// Fixed storage key holding the serialized conversation.
pub const HISTORY_KEY: &str = "ai_chat_history";

/// Persists the active session's conversation under a fixed key.
///
/// Reads recover: missing or unparsable history yields a freshly seeded
/// conversation instead of an error. Writes overwrite the full sequence.
pub struct ConversationStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl ConversationStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            key: HISTORY_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Read the persisted conversation, seeding a welcome turn when there
    /// is nothing usable to load.
    pub fn load(&self) -> Conversation {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Conversation::seeded(Utc::now()),
            Err(err) => {
                warn!(error = %err, "failed to read chat history, starting fresh");
                return Conversation::seeded(Utc::now());
            }
        };

        match deserialize_history(&raw) {
            Ok(conversation) => conversation,
            Err(err) => {
                warn!(error = %err, "persisted chat history is unreadable, starting fresh");
                Conversation::seeded(Utc::now())
            }
        }
    }

    /// Overwrite the persisted value with the full message sequence.
    pub fn save(&self, conversation: &Conversation) -> Result<(), StoreError> {
        let raw = serialize_history(conversation)?;
        self.store.set(&self.key, &raw)
    }

    /// Drop the persisted conversation.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(&self.key)
    }
}

// (De)serialization is kept in standalone helpers; a versioned envelope
// would be introduced here without touching load/save.

fn serialize_history(conversation: &Conversation) -> Result<String, StoreError> {
    let persisted: Vec<PersistedMessage> = conversation
        .messages()
        .iter()
        .map(PersistedMessage::from)
        .collect();
    Ok(serde_json::to_string(&persisted)?)
}

fn deserialize_history(raw: &str) -> Result<Conversation, StoreError> {
    let persisted: Vec<PersistedMessage> = serde_json::from_str(raw)?;
    let mut messages = Vec::with_capacity(persisted.len());
    for entry in persisted {
        messages.push(ChatMessage::try_from(entry)?);
    }
    Ok(Conversation::from_messages(messages))
}
