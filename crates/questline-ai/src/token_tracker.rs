//! Token usage tracking for a session.

use crate::TokenUsage;

/// Tracks cumulative token usage across a session's API calls.
pub struct TokenTracker {
    total: TokenUsage,
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self {
            total: TokenUsage::default(),
            call_count: 0,
        }
    }

    /// Record token usage from an API call.
    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.input_tokens += usage.input_tokens;
        self.total.output_tokens += usage.output_tokens;
        self.call_count += 1;
    }

    /// Get total token usage.
    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    /// Get total tokens (input + output).
    pub fn total_tokens(&self) -> u64 {
        self.total
            .input_tokens
            .saturating_add(self.total.output_tokens)
    }

    /// Get number of API calls.
    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    /// Reset all counters.
    pub fn reset(&mut self) {
        self.total = TokenUsage::default();
        self.call_count = 0;
    }
}

impl Default for TokenTracker {
    fn default() -> Self {
        Self::new()
    }
}
