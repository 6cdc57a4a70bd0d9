//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_questline_config.toml"));
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, questline_common::ConfigError::ParseError(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[model]
id = "ft:open-mistral-7b:f00b4002:20241120:78b6c5a8"
temperature = 0.3

[chat]
request_timeout_secs = 60
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.id, "ft:open-mistral-7b:f00b4002:20241120:78b6c5a8");
    assert_eq!(config.model.temperature, 0.3);
    assert_eq!(config.chat.request_timeout_secs, 60);
    // Defaults preserved
    assert_eq!(config.model.max_tokens, 1024);
    assert_eq!(config.dataset.min_examples, 8);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, questline_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[model]
temperature = 9.0
"#,
    )
    .unwrap();

    // A validation warning is logged, but the parsed config is returned.
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.temperature, 9.0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questline").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.id, "open-mistral-7b");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::QuestlineConfig;

    let content = default_config_toml();
    let config: QuestlineConfig = toml::from_str(&content).unwrap();
    assert_eq!(config.model.id, "open-mistral-7b");
    assert_eq!(config.dataset.min_examples, 8);
}

#[test]
fn default_config_path_is_reasonable() {
    // This may not work in all CI environments, but should work locally
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("questline"));
        assert!(path_str.ends_with("config.toml"));
    }
}
