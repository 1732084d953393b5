use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhrasegenError {
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Selection error: {0}")]
    Selection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config source error: {0}")]
    Config(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, PhrasegenError>;
