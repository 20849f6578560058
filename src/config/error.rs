//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::foundation;
use crate::domain::risk::KeywordTableError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Cannot read keyword file {}: {source}", .path.display())]
    KeywordFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid keyword table: {0}")]
    KeywordTable(#[from] KeywordTableError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Server request timeout ({server_secs}s) must be longer than the AI timeout ({ai_secs}s)")]
    TimeoutOrder { server_secs: u64, ai_secs: u64 },

    #[error("AI base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Invalid risk thresholds: {0}")]
    InvalidThresholds(foundation::ValidationError),
}
