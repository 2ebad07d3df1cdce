//! Configuration resolved from the hosting environment.

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Runtime configuration for the companion core.
///
/// Resolution order: explicit setters > environment variables > defaults.
#[derive(Debug, Clone)]
pub struct CompanionConfig {
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CompanionConfig {
    /// Create a config with defaults and no credential.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Load from environment variables.
    ///
    /// `COMPANION_API_KEY` (falling back to `OPENAI_API_KEY`) supplies the
    /// credential; `COMPANION_BASE_URL` and `COMPANION_MODEL` override the
    /// endpoint and model.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = Self::new();

        if let Ok(key) =
            std::env::var("COMPANION_API_KEY").or_else(|_| std::env::var("OPENAI_API_KEY"))
        {
            config.api_key = Some(key);
        }
        if let Ok(url) = std::env::var("COMPANION_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(model) = std::env::var("COMPANION_MODEL") {
            config.model = model;
        }

        config
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Check if a completion credential is configured.
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }
}
