//! Async round-trip methods for Session (submit + streaming).

use crate::{CompletionClient, CompletionError, Message};

use super::manager::Session;
use super::types::BusyGuard;

impl Session {
    /// Add a user turn and get the assistant's reply.
    ///
    /// The full transcript (system turn included) is sent to the client;
    /// on success the reply is appended as an assistant turn and returned.
    /// On failure the error propagates and the transcript keeps the
    /// appended user turn, so a retry resubmits the same history. A second
    /// call while one is in flight is rejected with
    /// [`CompletionError::Busy`].
    pub async fn submit(
        &mut self,
        client: &dyn CompletionClient,
        text: impl Into<String>,
    ) -> Result<String, CompletionError> {
        let _guard = BusyGuard::acquire(&self.busy)?;

        self.transcript.push(Message::user(text));

        tracing::debug!(session = %self.id, turns = self.transcript.len(), "Submitting transcript");
        let response = client.complete(&self.transcript).await?;

        self.tracker.record(&response.usage);
        self.transcript.push(Message::assistant(&response.content));
        Ok(response.content)
    }

    /// Same contract as [`Session::submit`], with the reply additionally
    /// delivered incrementally through `on_chunk` as it streams in.
    pub async fn submit_streaming(
        &mut self,
        client: &dyn CompletionClient,
        text: impl Into<String>,
        on_chunk: Box<dyn Fn(String) + Send + Sync>,
    ) -> Result<String, CompletionError> {
        let _guard = BusyGuard::acquire(&self.busy)?;

        self.transcript.push(Message::user(text));

        tracing::debug!(session = %self.id, turns = self.transcript.len(), "Submitting transcript (streaming)");
        let response = client.complete_streaming(&self.transcript, on_chunk).await?;

        self.tracker.record(&response.usage);
        self.transcript.push(Message::assistant(&response.content));
        Ok(response.content)
    }
}
