//! Configuration file loading for quantlens
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUANTLENS_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./quantlens.toml` or `./.quantlens.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quantlens/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileEngineConfig, FileIndexConfig, FileOutputConfig,
    FileQueryConfig,
};
pub use loader::ConfigLoader;
