//! Error types for biluo.

use thiserror::Error;

/// Result type for biluo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for biluo operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parse error (malformed JSONL record).
    #[error("Parse error: {0}")]
    Parse(String),

    /// A tag sequence that cannot be relabeled.
    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Text could not be tokenized.
    #[error("Tokenizer error: {0}")]
    Tokenize(String),

    /// Configuration file could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create a parse error.
    #[must_use]
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Create an invalid tag error.
    #[must_use]
    pub fn invalid_tag(msg: impl Into<String>) -> Self {
        Error::InvalidTag(msg.into())
    }

    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create a tokenizer error.
    #[must_use]
    pub fn tokenize(msg: impl Into<String>) -> Self {
        Error::Tokenize(msg.into())
    }

    /// Create a config error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}
