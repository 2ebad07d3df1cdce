//! Completion client: one prompt plus context in, one assistant reply out.

mod client;
mod http;

pub use client::{CompletionSettings, HttpCompletionClient, FALLBACK_REPLY, SYSTEM_PROMPT};

use async_trait::async_trait;

use crate::error::CompanionError;
use crate::types::ContextMessage;

/// Produces one assistant reply for a prompt and its prior context.
///
/// `prompt` must be non-empty after trimming — callers check before
/// invoking. `history` is forwarded in order, unmodified, and must already
/// exclude the welcome turn. Any failure is terminal for the turn: there
/// are no retries and no timeout handling beyond the transport default.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        history: &[ContextMessage],
    ) -> Result<String, CompanionError>;
}
