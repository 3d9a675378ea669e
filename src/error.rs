//! Error types for the hand landmark service

use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, HandsError>;

/// Errors raised outside the store's read/write path
#[derive(Error, Debug)]
pub enum HandsError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed replay record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Frame source failed: {0}")]
    Source(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
