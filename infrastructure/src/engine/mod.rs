//! Search engine adapter.
//!
//! - [`client::SearchEngineClient`]: REST client implementing `ResultFetcher`
//! - [`protocol`]: response parsing
//! - [`error::EngineError`]: adapter errors, convertible to `FetchError`

pub mod client;
pub mod error;
pub mod protocol;
