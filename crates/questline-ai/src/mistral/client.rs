//! Mistral client struct, request building, and response parsing.

use crate::{ChatResponse, CompletionError, Message, TokenUsage};

use super::config::MistralConfig;

/// Mistral API client.
pub struct MistralClient {
    pub(crate) config: MistralConfig,
    pub(crate) http: reqwest::Client,
}

impl MistralClient {
    pub fn new(config: MistralConfig) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .expect("failed to build HTTP client");
        Self { config, http }
    }

    /// The chat-completions endpoint URL.
    pub(crate) fn api_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Build the JSON request body for the chat-completions API.
    ///
    /// Roles map straight through; the system turn travels inside the
    /// message list, as the API expects.
    pub(crate) fn build_request_body(&self, messages: &[Message], stream: bool) -> serde_json::Value {
        let msgs: Vec<_> = messages
            .iter()
            .map(|msg| {
                serde_json::json!({
                    "role": msg.role.as_str(),
                    "content": msg.content,
                })
            })
            .collect();

        let mut body = serde_json::json!({
            "model": self.config.model,
            "messages": msgs,
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        });

        if stream {
            body["stream"] = serde_json::json!(true);
        }

        body
    }

    /// Parse a non-streaming response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<ChatResponse, CompletionError> {
        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| CompletionError::Parse("response has no completion choice".into()))?;

        Ok(ChatResponse {
            content,
            usage: parse_usage(&json),
        })
    }
}

/// Extract token usage from a response or final streaming chunk.
pub(crate) fn parse_usage(json: &serde_json::Value) -> TokenUsage {
    TokenUsage {
        input_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
        output_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
    }
}
