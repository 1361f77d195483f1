//! Search engine connection settings from TOML (`[engine]` section)

use serde::{Deserialize, Serialize};

/// Raw engine configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEngineConfig {
    /// Engine base URL, e.g. `https://localhost:9200`
    pub url: Option<String>,
    /// Environment variable consulted when `url` is unset (default: "ES_URL")
    pub url_env: String,
    /// Direct API key (prefer the env var)
    pub api_key: Option<String>,
    /// Environment variable name for the API key (default: "ES_API_KEY")
    pub api_key_env: String,
    /// Verify TLS certificates
    pub verify_certs: bool,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for FileEngineConfig {
    fn default() -> Self {
        Self {
            url: None,
            url_env: "ES_URL".to_string(),
            api_key: None,
            api_key_env: "ES_API_KEY".to_string(),
            verify_certs: false,
            timeout_seconds: 30,
        }
    }
}

impl FileEngineConfig {
    /// Engine URL from the config file, else from `url_env`
    pub fn resolve_url(&self) -> Option<String> {
        non_empty(self.url.clone()).or_else(|| non_empty(std::env::var(&self.url_env).ok()))
    }

    /// API key from the config file, else from `api_key_env`
    pub fn resolve_api_key(&self) -> Option<String> {
        non_empty(self.api_key.clone())
            .or_else(|| non_empty(std::env::var(&self.api_key_env).ok()))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
