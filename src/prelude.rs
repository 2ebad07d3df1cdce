//! Convenience re-exports for common use.

pub use crate::completion::{CompletionClient, CompletionSettings, HttpCompletionClient};
pub use crate::config::CompanionConfig;
pub use crate::error::{CompanionError, Result};
pub use crate::session::{ChatSession, SessionState};
pub use crate::store::{ConversationStore, FileKeyValueStore, KeyValueStore};
pub use crate::types::{Author, ChatMessage, ContextMessage, Conversation, Role};
