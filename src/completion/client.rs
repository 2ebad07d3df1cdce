//! HTTP chat-completion client.

use async_trait::async_trait;
use bon::Builder;
use serde::Deserialize;
use tracing::debug;

use crate::config::CompanionConfig;
use crate::error::CompanionError;
use crate::types::ContextMessage;

use super::http::{bearer_headers, shared_client};
use super::CompletionClient;

/// Persona instruction sent as the first message of every request.
pub const SYSTEM_PROMPT: &str = "You are a warm, patient care companion for older adults. \
Answer in short, clear sentences, avoid medical jargon, and encourage the user to \
contact a caregiver or doctor for anything urgent.";

/// Reply used when the service answers without any usable text.
pub const FALLBACK_REPLY: &str =
    "I'm sorry, I couldn't think of a reply just now. Could you ask me again?";

/// Request knobs for the completion endpoint.
#[derive(Debug, Clone, Builder)]
pub struct CompletionSettings {
    #[builder(default = 300)]
    pub max_tokens: u32,
    #[builder(default = 0.7)]
    pub temperature: f64,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Client for an OpenAI-compatible chat-completions endpoint.
///
/// Stateless beyond its configuration; issues exactly one request per
/// `complete` call and never touches persisted storage.
pub struct HttpCompletionClient {
    config: CompanionConfig,
    settings: CompletionSettings,
}

impl HttpCompletionClient {
    pub fn new(config: CompanionConfig) -> Self {
        Self {
            config,
            settings: CompletionSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: CompletionSettings) -> Self {
        self.settings = settings;
        self
    }

    fn build_request_body(&self, prompt: &str, history: &[ContextMessage]) -> serde_json::Value {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ContextMessage::system(SYSTEM_PROMPT));
        messages.extend(history.iter().cloned());
        messages.push(ContextMessage::user(prompt));

        serde_json::json!({
            "model": self.config.model(),
            "messages": messages,
            "max_tokens": self.settings.max_tokens,
            "temperature": self.settings.temperature,
        })
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(
        &self,
        prompt: &str,
        history: &[ContextMessage],
    ) -> Result<String, CompanionError> {
        // Credential check happens before any network attempt.
        let api_key = self.config.api_key().ok_or_else(|| {
            CompanionError::Configuration("no completion API key configured".into())
        })?;

        let body = self.build_request_body(prompt, history);
        let url = format!("{}/chat/completions", self.config.base_url());

        debug!(model = self.config.model(), turns = history.len(), "requesting completion");

        let resp = shared_client()
            .post(&url)
            .headers(bearer_headers(api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(error_from_response(status.as_u16(), &body_text));
        }

        let data: ChatCompletionResponse = resp.json().await?;
        let reply = data
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_REPLY.to_string());

        Ok(reply)
    }
}

/// Map a non-success response to a service error, preferring the service's
/// own error message when the body carries one.
fn error_from_response(status: u16, body: &str) -> CompanionError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|e| e.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("completion service returned status {status}"));
    CompanionError::Service { status, message }
}

// Completion API response types (internal)

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}
