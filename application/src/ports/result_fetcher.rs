//! Result Fetcher port
//!
//! Defines the interface for running a query against the search engine.

use async_trait::async_trait;
use quantlens_domain::{ResultList, SearchQuery};
use thiserror::Error;

/// Errors that can occur while fetching results
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Search service unreachable: {0}")]
    Unreachable(String),

    #[error("Index not found: {0}")]
    IndexNotFound(String),

    #[error("Search request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Malformed search response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,
}

impl FetchError {
    /// Whether the engine could not be reached at all
    pub fn is_unreachable(&self) -> bool {
        matches!(self, FetchError::Unreachable(_) | FetchError::Timeout)
    }

    /// Whether the requested index variant does not exist
    pub fn is_index_not_found(&self) -> bool {
        matches!(self, FetchError::IndexNotFound(_))
    }
}

/// Gateway to the search engine
///
/// This port defines how the application layer runs queries. Implementations
/// (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ResultFetcher: Send + Sync {
    /// Run `query` against `query.index` and return hits in rank order.
    ///
    /// Hits without a title carry the `"No title"` label.
    async fn fetch(&self, query: &SearchQuery) -> Result<ResultList, FetchError>;

    /// Check that the engine answers at all
    async fn ping(&self) -> Result<(), FetchError>;

    /// Check whether an index exists
    async fn index_exists(&self, index: &str) -> Result<bool, FetchError>;
}
