//! Error types for rapid_summarizer
//!
//! Summarization and keyword extraction never fail on well-formed
//! configuration; errors only arise when a configuration or language tag
//! is rejected.

use thiserror::Error;

/// Errors produced while configuring a summarizer
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// A configuration value or language tag was rejected
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A JSON configuration document could not be parsed
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl SummarizerError {
    /// Create an invalid-configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        SummarizerError::InvalidConfig(message.into())
    }

    /// Returns `true` for the invalid-configuration kind
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, SummarizerError::InvalidConfig(_))
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SummarizerError>;
