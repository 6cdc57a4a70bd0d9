//! Configuration schema with serde defaults.

use serde::{Deserialize, Serialize};

/// Default behavioral directive for the adventure guide.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an educational choose-your-own-adventure guide. \
    You MUST always stop after presenting choices to wait for user input. \
    Never continue the story without user selection.";

/// Top-level Questline configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestlineConfig {
    pub model: ModelConfig,
    pub chat: ChatConfig,
    pub dataset: DatasetConfig,
}

/// Which hosted model to talk to, and its sampling parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model ID passed through to the completions API. Paste the
    /// `ft:...` ID of your fine-tuned model here once the job finishes.
    pub id: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Maximum tokens generated per reply.
    pub max_tokens: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            id: "open-mistral-7b".into(),
            temperature: 0.7,
            max_tokens: 1024,
        }
    }
}

/// Session behavior and HTTP timeouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Behavioral directive placed at the start of every transcript.
    pub system_prompt: String,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds; a slow completion surfaces as a
    /// timeout error rather than blocking forever.
    pub request_timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}

/// Training-dataset validation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Minimum examples the fine-tuning service accepts in an upload.
    pub min_examples: usize,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self { min_examples: 8 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = QuestlineConfig::default();
        assert_eq!(config.model.id, "open-mistral-7b");
        assert_eq!(config.model.temperature, 0.7);
        assert_eq!(config.chat.request_timeout_secs, 120);
        assert_eq!(config.dataset.min_examples, 8);
        assert!(config.chat.system_prompt.contains("choose-your-own-adventure"));
    }

    #[test]
    fn partial_toml_fills_missing_fields_with_defaults() {
        let config: QuestlineConfig = toml::from_str(
            r#"
[model]
id = "ft:open-mistral-7b:f00b4002:20241120:78b6c5a8"
"#,
        )
        .unwrap();

        assert_eq!(config.model.id, "ft:open-mistral-7b:f00b4002:20241120:78b6c5a8");
        assert_eq!(config.model.max_tokens, 1024);
        assert_eq!(config.chat.connect_timeout_secs, 10);
    }
}
