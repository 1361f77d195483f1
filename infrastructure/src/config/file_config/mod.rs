//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod engine;
mod output;
mod query;

pub use engine::FileEngineConfig;
pub use output::FileOutputConfig;
pub use query::{FileIndexConfig, FileQueryConfig};

use quantlens_application::ComparisonParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    #[error("engine.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("index.base cannot be empty")]
    EmptyIndexName,

    #[error("query.text cannot be empty")]
    EmptyQueryText,

    #[error("query.k must be at least 1")]
    InvalidK,

    #[error("query.num_candidates ({num_candidates}) must be >= query.k ({k})")]
    CandidatesBelowK { k: usize, num_candidates: usize },

    #[error("query.oversample must be positive, got {0}")]
    InvalidOversample(f64),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Search engine connection
    pub engine: FileEngineConfig,
    /// Index naming
    pub index: FileIndexConfig,
    /// Query parameters
    pub query: FileQueryConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.engine.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.index.base.trim().is_empty() {
            return Err(ConfigValidationError::EmptyIndexName);
        }

        if self.query.text.trim().is_empty() {
            return Err(ConfigValidationError::EmptyQueryText);
        }

        if self.query.k == 0 {
            return Err(ConfigValidationError::InvalidK);
        }

        if self.query.num_candidates < self.query.k {
            return Err(ConfigValidationError::CandidatesBelowK {
                k: self.query.k,
                num_candidates: self.query.num_candidates,
            });
        }

        if self.query.oversample <= 0.0 || !self.query.oversample.is_finite() {
            return Err(ConfigValidationError::InvalidOversample(
                self.query.oversample,
            ));
        }

        Ok(())
    }

    /// Parameters for the comparison use case
    pub fn to_comparison_params(&self) -> ComparisonParams {
        ComparisonParams::default()
            .with_query_text(self.query.text.trim())
            .with_base_index(self.index.base.trim())
            .with_query_params(self.query.to_query_params())
            .with_fetch_timeout(Some(Duration::from_secs(self.engine.timeout_seconds)))
    }
}
