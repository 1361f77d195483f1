//! Search domain: ranked hits, quantization variants, and query construction.
//!
//! - [`result::ResultItem`]: one ranked hit
//! - [`quantization::QuantizationMode`]: which index variant to query
//! - [`query::SearchQuery`]: the kNN request sent to a variant

pub mod quantization;
pub mod query;
pub mod result;
