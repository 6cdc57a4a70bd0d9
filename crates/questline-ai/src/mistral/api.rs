//! CompletionClient trait implementation for MistralClient.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::streaming::{parse_sse_stream, SseEvent};
use crate::{ChatResponse, CompletionClient, CompletionError, Message, TokenUsage};

use super::client::{parse_usage, MistralClient};

impl MistralClient {
    async fn post(&self, body: &serde_json::Value) -> Result<reqwest::Response, CompletionError> {
        let response = self
            .http
            .post(self.api_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout
                } else {
                    CompletionError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CompletionError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(CompletionError::Api(format!("HTTP {status}: {text}")));
        }

        Ok(response)
    }
}

#[async_trait]
impl CompletionClient for MistralClient {
    async fn complete(&self, transcript: &[Message]) -> Result<ChatResponse, CompletionError> {
        let body = self.build_request_body(transcript, false);

        debug!(model = %self.config.model, turns = transcript.len(), "Mistral API request");

        let response = self.post(&body).await?;
        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CompletionError::Parse(e.to_string()))?;

        self.parse_response(json)
    }

    async fn complete_streaming(
        &self,
        transcript: &[Message],
        on_chunk: Box<dyn Fn(String) + Send + Sync>,
    ) -> Result<ChatResponse, CompletionError> {
        let body = self.build_request_body(transcript, true);

        debug!(model = %self.config.model, turns = transcript.len(), "Mistral API streaming request");

        let response = self.post(&body).await?;

        let mut full_content = String::new();
        let mut usage = TokenUsage::default();

        parse_sse_stream(response, |event: SseEvent| {
            // The stream ends with a bare sentinel rather than an event type.
            if event.data == "[DONE]" {
                return;
            }

            let Ok(data) = serde_json::from_str::<serde_json::Value>(&event.data) else {
                return;
            };

            if let Some(chunk) = data["choices"][0]["delta"]["content"].as_str() {
                if !chunk.is_empty() {
                    full_content.push_str(chunk);
                    on_chunk(chunk.to_string());
                }
            }

            // Usage arrives on the final chunk only.
            if data.get("usage").is_some_and(|u| !u.is_null()) {
                usage = parse_usage(&data);
            }
        })
        .await?;

        if usage.input_tokens == 0 && usage.output_tokens == 0 {
            warn!("No usage data received in streaming response");
        }

        Ok(ChatResponse {
            content: full_content,
            usage,
        })
    }
}
