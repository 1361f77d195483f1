//! Domain layer for quantlens
//!
//! This crate contains the core comparison logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quantization variants
//!
//! The same documents are indexed several times with different vector
//! precision ([`QuantizationMode`]). One fixed semantic query is run against
//! the full-fidelity baseline and against one quantized variant.
//!
//! ## Comparison
//!
//! [`compare`] classifies the two ranked lists:
//!
//! - **Green**: same hit at the same rank
//! - **Yellow**: same hit, rank drifted
//! - **Red missing**: baseline hit the variant dropped
//! - **Red extra**: variant hit the baseline never returned

pub mod comparison;
pub mod config;
pub mod core;
pub mod search;

// Re-export commonly used types
pub use comparison::{
    ComparisonReport, ComparisonSummary, ExtraRecord, ItemStatus, MatchRecord, MissingRecord,
    StatusIndex, compare,
};
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use search::{
    quantization::QuantizationMode,
    query::{DEFAULT_QUERY_TEXT, GeoFilter, QueryParams, SearchQuery},
    result::{NO_TITLE, ResultItem, ResultList},
};
