//! Mistral API client configuration.

use std::fmt;
use std::time::Duration;

use crate::CompletionError;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.mistral.ai/v1";
pub(crate) const DEFAULT_MODEL: &str = "open-mistral-7b";

/// Mistral API client configuration.
#[derive(Clone)]
pub struct MistralConfig {
    pub api_key: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl fmt::Debug for MistralConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MistralConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("base_url", &self.base_url)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl MistralConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 1024,
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }

    /// Create config from the `MISTRAL_API_KEY` environment variable.
    ///
    /// The key is treated as an opaque secret; only presence is checked.
    pub fn from_env() -> Result<Self, CompletionError> {
        match std::env::var("MISTRAL_API_KEY") {
            Ok(key) if !key.is_empty() => Ok(Self::new(key)),
            _ => Err(CompletionError::Api(
                "Mistral API not configured. Set MISTRAL_API_KEY.".into(),
            )),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
