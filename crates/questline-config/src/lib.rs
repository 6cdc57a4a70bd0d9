//! Questline configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box,
//! and a commented template is written on first run.
//!
//! The API key is deliberately absent from the schema: it comes from the
//! `MISTRAL_API_KEY` environment variable only.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ChatConfig, DatasetConfig, ModelConfig, QuestlineConfig};

use std::path::Path;

use questline_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<QuestlineConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<QuestlineConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
