//! Mistral chat-completions API client.
//!
//! Implements the `CompletionClient` trait against Mistral's
//! OpenAI-compatible endpoint (https://api.mistral.ai/v1/chat/completions).
//! The configured model ID is passed through opaquely, so base models and
//! fine-tuned `ft:...` IDs work identically.

mod api;
mod client;
mod config;

pub use client::MistralClient;
pub use config::MistralConfig;
