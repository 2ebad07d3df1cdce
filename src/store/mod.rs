//! Durable storage for the conversation.

mod conversation;
mod kv;

pub use conversation::{ConversationStore, HISTORY_KEY};
pub use kv::{FileKeyValueStore, KeyValueStore};

use thiserror::Error;

/// Errors raised by the storage layer.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Timestamp error: {0}")]
    Timestamp(#[from] chrono::ParseError),
}
