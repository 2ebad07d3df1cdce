//! Chat session orchestration: one user turn at a time.

use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use crate::completion::CompletionClient;
use crate::error::CompanionError;
use crate::store::ConversationStore;
use crate::types::{ChatMessage, Conversation};

/// Longest accepted user input, in characters.
pub const MAX_PROMPT_CHARS: usize = 500;

/// Most recent prior turns forwarded as completion context.
pub const CONTEXT_WINDOW: usize = 20;

/// Lifecycle of a chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Loading,
    Ready,
}

/// Exclusive owner of the conversation for one active session.
///
/// Callers issue one turn at a time; `&mut self` on every mutation keeps a
/// second turn from starting while one is outstanding, and no save is
/// issued before the initial load has completed.
pub struct ChatSession {
    store: ConversationStore,
    client: Arc<dyn CompletionClient>,
    conversation: Conversation,
    state: SessionState,
}

impl ChatSession {
    pub fn new(store: ConversationStore, client: Arc<dyn CompletionClient>) -> Self {
        Self {
            store,
            client,
            conversation: Conversation::new(),
            state: SessionState::Uninitialized,
        }
    }

    /// Load persisted history (or seed a welcome turn) and become ready.
    ///
    /// The `Loading -> Ready` transition happens exactly once per session.
    pub fn start(&mut self) -> Result<(), CompanionError> {
        if self.state != SessionState::Uninitialized {
            return Err(CompanionError::InvalidState(
                "session already started".into(),
            ));
        }
        self.state = SessionState::Loading;
        self.conversation = self.store.load();
        self.state = SessionState::Ready;
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Run one user turn.
    ///
    /// Appends the user message, asks the completion service with the
    /// trimmed history (welcome turn excluded), and appends exactly one
    /// assistant message — the reply on success, the failure text on error.
    /// The conversation is persisted after each append. On failure the
    /// error is also returned so the caller can raise an alert; the
    /// conversation stays usable for the next turn either way.
    pub async fn send(&mut self, input: &str) -> Result<String, CompanionError> {
        if self.state != SessionState::Ready {
            return Err(CompanionError::InvalidState("session is not ready".into()));
        }

        let prompt = input.trim();
        if prompt.is_empty() {
            return Err(CompanionError::InvalidArgument("message is empty".into()));
        }
        if prompt.chars().count() > MAX_PROMPT_CHARS {
            return Err(CompanionError::InvalidArgument(format!(
                "message exceeds {MAX_PROMPT_CHARS} characters"
            )));
        }

        let history = self.conversation.outbound_context(CONTEXT_WINDOW);

        self.push(ChatMessage::user(prompt));

        let outcome = self.client.complete(prompt, &history).await;
        match outcome {
            Ok(reply) => {
                self.push(ChatMessage::assistant(reply.clone()));
                Ok(reply)
            }
            Err(err) => {
                self.push(ChatMessage::assistant(failure_text(&err)));
                Err(err)
            }
        }
    }

    /// Clear persisted history and reseed the welcome turn.
    pub fn reset(&mut self) -> Result<(), CompanionError> {
        if self.state != SessionState::Ready {
            return Err(CompanionError::InvalidState("session is not ready".into()));
        }
        self.store.clear()?;
        self.conversation = Conversation::seeded(Utc::now());
        self.persist();
        Ok(())
    }

    fn push(&mut self, message: ChatMessage) {
        self.conversation = self.conversation.append(message);
        self.persist();
    }

    // Persistence is best-effort: the in-memory conversation stays
    // authoritative even when a write fails.
    fn persist(&self) {
        if let Err(err) = self.store.save(&self.conversation) {
            warn!(error = %err, "failed to persist chat history");
        }
    }
}

fn failure_text(err: &CompanionError) -> String {
    format!("I'm sorry, something went wrong: {err}")
}
