//! Comparison parameters: use case input that comes from configuration.
//!
//! [`ComparisonParams`] groups everything
//! [`RunComparisonUseCase`](crate::use_cases::run_comparison::RunComparisonUseCase)
//! needs besides the quantization selector: the query text, the base index
//! name, the kNN parameters, and the per-fetch timeout.

use quantlens_domain::{DEFAULT_QUERY_TEXT, QueryParams};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base index name when none is configured.
pub const DEFAULT_BASE_INDEX: &str = "properties";

/// Static parameters of a comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonParams {
    /// Query text sent to every variant
    pub query_text: String,
    /// Baseline index; variants append `_int8`, `_int4`, `_bbq`
    pub base_index: String,
    /// kNN parameters shared by both queries
    pub query: QueryParams,
    /// Upper bound for each fetch (None = no limit)
    pub fetch_timeout: Option<Duration>,
}

impl Default for ComparisonParams {
    fn default() -> Self {
        Self {
            query_text: DEFAULT_QUERY_TEXT.to_string(),
            base_index: DEFAULT_BASE_INDEX.to_string(),
            query: QueryParams::default(),
            fetch_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl ComparisonParams {
    // ==================== Builder Methods ====================

    pub fn with_query_text(mut self, text: impl Into<String>) -> Self {
        self.query_text = text.into();
        self
    }

    pub fn with_base_index(mut self, index: impl Into<String>) -> Self {
        self.base_index = index.into();
        self
    }

    pub fn with_query_params(mut self, params: QueryParams) -> Self {
        self.query = params;
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.fetch_timeout = timeout;
        self
    }
}
