//! Infrastructure layer for quantlens
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod engine;
pub mod export;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileEngineConfig, FileIndexConfig,
    FileOutputConfig, FileQueryConfig,
};
pub use engine::{
    client::SearchEngineClient,
    error::{EngineError, Result},
};
pub use export::JsonReportExporter;
