use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: invalid JSON: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: {reason}")]
    Invalid { line: usize, reason: String },

    #[error("dataset has {count} examples, the fine-tuning service requires at least {min}")]
    TooFew { count: usize, min: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum QuestlineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("chat error: {0}")]
    Chat(String),

    #[error("{0}")]
    Other(String),
}
