//! Full configuration validation.
//!
//! Validates numeric ranges and required strings, collecting all errors
//! into a single `ConfigError` so the user sees every problem at once.

use crate::schema::QuestlineConfig;
use questline_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &QuestlineConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if config.model.id.trim().is_empty() {
        errors.push("model.id must not be empty".into());
    }
    validate_range_f64(
        &mut errors,
        "model.temperature",
        config.model.temperature,
        0.0,
        1.5,
    );
    validate_range(
        &mut errors,
        "model.max_tokens",
        config.model.max_tokens as u64,
        1,
        32768,
    );

    if config.chat.system_prompt.trim().is_empty() {
        errors.push("chat.system_prompt must not be empty".into());
    }
    validate_range(
        &mut errors,
        "chat.connect_timeout_secs",
        config.chat.connect_timeout_secs,
        1,
        60,
    );
    validate_range(
        &mut errors,
        "chat.request_timeout_secs",
        config.chat.request_timeout_secs,
        5,
        600,
    );

    validate_range(
        &mut errors,
        "dataset.min_examples",
        config.dataset.min_examples as u64,
        1,
        1000,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Push an error if `value` is outside `[min, max]` (integer).
fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float).
fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&QuestlineConfig::default()).is_ok());
    }

    #[test]
    fn empty_model_id_is_rejected() {
        let mut config = QuestlineConfig::default();
        config.model.id = "   ".into();

        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("model.id"));
    }

    #[test]
    fn out_of_range_temperature_is_rejected() {
        let mut config = QuestlineConfig::default();
        config.model.temperature = 2.0;

        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("model.temperature"));
    }

    #[test]
    fn out_of_range_timeouts_are_rejected() {
        let mut config = QuestlineConfig::default();
        config.chat.connect_timeout_secs = 0;
        config.chat.request_timeout_secs = 10_000;

        let err = validate(&config).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("chat.connect_timeout_secs"));
        assert!(message.contains("chat.request_timeout_secs"));
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = QuestlineConfig::default();
        config.model.id = String::new();
        config.model.max_tokens = 0;
        config.chat.system_prompt = String::new();

        let err = validate(&config).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("model.id"));
        assert!(message.contains("model.max_tokens"));
        assert!(message.contains("chat.system_prompt"));
    }

    #[test]
    fn fine_tuned_model_id_is_accepted() {
        let mut config = QuestlineConfig::default();
        config.model.id = "ft:open-mistral-7b:f00b4002:20241120:78b6c5a8".into();
        assert!(validate(&config).is_ok());
    }
}
