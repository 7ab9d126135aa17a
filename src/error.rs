//! Error types for tldw.

use thiserror::Error;

/// Library-level error type for tldw operations.
#[derive(Error, Debug)]
pub enum TldwError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Transcript retrieval failed: {0}")]
    Transcript(String),

    #[error("No caption tracks available for video: {0}")]
    NoCaptions(String),

    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Groq API error: {0}")]
    Groq(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for tldw operations.
pub type Result<T> = std::result::Result<T, TldwError>;
