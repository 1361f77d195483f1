//! Application-level configuration.
//!
//! - [`ComparisonParams`]: query text, index naming, kNN parameters, fetch timeout

pub mod comparison_params;

pub use comparison_params::{ComparisonParams, DEFAULT_BASE_INDEX};
