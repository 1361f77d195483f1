//! Application layer for quantlens
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ComparisonParams, DEFAULT_BASE_INDEX};
pub use ports::{
    progress::{ComparisonProgress, NoProgress},
    result_fetcher::{FetchError, ResultFetcher},
};
pub use use_cases::check_health::{CheckHealthUseCase, HealthReport, IndexHealth};
pub use use_cases::run_comparison::{
    FetchSide, RunComparisonError, RunComparisonInput, RunComparisonOutput, RunComparisonUseCase,
};
