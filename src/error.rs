//! Error types for hnsearch

use thiserror::Error;

/// Main error type for hnsearch operations
#[derive(Error, Debug)]
pub enum HnSearchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid output format '{0}' (expected 'text' or 'json')")]
    InvalidOutputFormat(String),

    #[error("Terminal setup failed: {0}")]
    Terminal(String),
}

/// Result type alias for hnsearch operations
pub type Result<T> = std::result::Result<T, HnSearchError>;
