//! Error types for the search engine adapter

use quantlens_application::FetchError;
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur when talking to the search engine
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Search engine URL not configured (set engine.url or ${0})")]
    MissingUrl(String),

    #[error("API key contains characters not allowed in a header")]
    InvalidApiKey,

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Index not found: {0}")]
    IndexNotFound(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
}

impl From<EngineError> for FetchError {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::IndexNotFound(index) => FetchError::IndexNotFound(index),
            EngineError::Status { status, message } => FetchError::RequestFailed { status, message },
            EngineError::Serialization(e) => FetchError::MalformedResponse(e.to_string()),
            EngineError::Http(e) if e.is_timeout() => FetchError::Timeout,
            EngineError::Http(e) if e.is_decode() => FetchError::MalformedResponse(e.to_string()),
            other => FetchError::Unreachable(other.to_string()),
        }
    }
}
