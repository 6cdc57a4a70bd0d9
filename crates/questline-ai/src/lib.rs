//! Chat engine for Questline.
//!
//! Provides a Mistral chat-completions client with:
//! - Streaming (SSE) support
//! - Conversation session management (transcript, reset, display turns)
//! - Token usage tracking
//! - Training-dataset (JSONL) validation for the fine-tuning workflow

pub mod dataset;
pub mod mistral;
pub mod session;
pub mod streaming;
pub mod token_tracker;

use async_trait::async_trait;

pub use dataset::{validate_file, DatasetSummary, TrainingExample};
pub use mistral::{MistralClient, MistralConfig};
pub use session::Session;
pub use token_tracker::TokenTracker;

/// A single request/response exchange with the hosted completion service.
///
/// Implementations are stateless between calls: the full transcript is
/// resent on every call, and nothing is retained server-side.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, transcript: &[Message]) -> Result<ChatResponse, CompletionError>;

    async fn complete_streaming(
        &self,
        transcript: &[Message],
        on_chunk: Box<dyn Fn(String) + Send + Sync>,
    ) -> Result<ChatResponse, CompletionError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// Wire name, as sent to and received from the completions API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("API error: {0}")]
    Api(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Request timed out")]
    Timeout,
    #[error("Session is busy with another request")]
    Busy,
}

impl From<CompletionError> for questline_common::QuestlineError {
    fn from(err: CompletionError) -> Self {
        questline_common::QuestlineError::Chat(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn role_round_trips() {
        for role in [Role::System, Role::User, Role::Assistant] {
            let json = serde_json::to_string(&role).unwrap();
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(role, back);
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }

    #[test]
    fn message_constructors_set_role() {
        assert_eq!(Message::system("be helpful").role, Role::System);
        assert_eq!(Message::user("hi").role, Role::User);
        assert_eq!(Message::assistant("hello").role, Role::Assistant);
    }

    #[test]
    fn token_usage_total_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 1,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn completion_error_converts_to_chat_error() {
        let err: questline_common::QuestlineError = CompletionError::RateLimited.into();
        assert_eq!(err.to_string(), "chat error: Rate limited");
    }
}
