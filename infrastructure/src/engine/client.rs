//! HTTP client for the search engine.
//!
//! [`SearchEngineClient`] implements the
//! [`ResultFetcher`](quantlens_application::ResultFetcher) port over the
//! engine's REST API:
//!
//! | Operation      | Request                     |
//! |----------------|-----------------------------|
//! | `fetch`        | `POST /<index>/_search`     |
//! | `ping`         | `GET /`                     |
//! | `index_exists` | `HEAD /<index>`             |
//!
//! The client is built once at startup from [`FileEngineConfig`] and shared
//! through an `Arc`; dropping the last handle closes its connection pool.

use super::error::{EngineError, Result};
use super::protocol::{SearchResponse, error_message};
use crate::config::FileEngineConfig;
use async_trait::async_trait;
use quantlens_application::{FetchError, ResultFetcher};
use quantlens_domain::{ResultList, SearchQuery};
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Title field assumed when a query requests no stored fields
const DEFAULT_TITLE_FIELD: &str = "title";

/// Slack added on top of `engine.timeout_seconds` for the HTTP transport.
///
/// The use case enforces `timeout_seconds` per fetch; the transport must
/// outlast it so a slow fetch always surfaces as the use-case timeout.
const TRANSPORT_TIMEOUT_MARGIN: Duration = Duration::from_secs(2);

/// REST client for the search engine
#[derive(Debug, Clone)]
pub struct SearchEngineClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchEngineClient {
    /// Build a client from the `[engine]` configuration.
    ///
    /// Fails when no URL is configured or the API key is not a valid header value.
    pub fn new(config: &FileEngineConfig) -> Result<Self> {
        let base_url = config
            .resolve_url()
            .ok_or_else(|| EngineError::MissingUrl(config.url_env.clone()))?;

        let mut headers = HeaderMap::new();
        if let Some(api_key) = config.resolve_api_key() {
            let mut value = HeaderValue::from_str(&format!("ApiKey {}", api_key))
                .map_err(|_| EngineError::InvalidApiKey)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        } else {
            warn!(
                "No API key configured (engine.api_key or ${}); sending unauthenticated requests",
                config.api_key_env
            );
        }

        if !config.verify_certs {
            debug!("TLS certificate verification disabled");
        }

        let http = reqwest::Client::builder()
            .timeout(Self::transport_timeout(config))
            .danger_accept_invalid_certs(!config.verify_certs)
            .default_headers(headers)
            .user_agent(concat!("quantlens/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(EngineError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Request timeout of the underlying HTTP client
    pub fn transport_timeout(config: &FileEngineConfig) -> Duration {
        Duration::from_secs(config.timeout_seconds) + TRANSPORT_TIMEOUT_MARGIN
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn index_url(&self, index: &str) -> String {
        format!("{}/{}", self.base_url, index)
    }

    fn search_url(&self, index: &str) -> String {
        format!("{}/_search", self.index_url(index))
    }

    /// Run a search and parse the hits
    pub async fn search(&self, query: &SearchQuery) -> Result<ResultList> {
        let start = Instant::now();
        let response = self
            .http
            .post(self.search_url(&query.index))
            .json(&query.body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(EngineError::IndexNotFound(query.index.clone()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;

        let title_field = query
            .body
            .fields
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_TITLE_FIELD);
        let results = parsed.into_results(title_field);

        debug!(
            "POST {} -> {} hits ({} bytes) in {}ms",
            self.search_url(&query.index),
            results.len(),
            body.len(),
            start.elapsed().as_millis()
        );

        Ok(results)
    }

    /// `GET /` on the cluster root
    pub async fn cluster_info(&self) -> Result<serde_json::Value> {
        let response = self.http.get(&self.base_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }
        Ok(response.json().await?)
    }

    /// `HEAD /<index>`
    pub async fn head_index(&self, index: &str) -> Result<bool> {
        let response = self.http.head(self.index_url(index)).send().await?;
        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(EngineError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            }),
        }
    }
}

#[async_trait]
impl ResultFetcher for SearchEngineClient {
    async fn fetch(&self, query: &SearchQuery) -> std::result::Result<ResultList, FetchError> {
        self.search(query).await.map_err(FetchError::from)
    }

    async fn ping(&self) -> std::result::Result<(), FetchError> {
        let info = self.cluster_info().await.map_err(FetchError::from)?;
        if let Some(version) = info["version"]["number"].as_str() {
            debug!("Connected to search engine version {}", version);
        }
        Ok(())
    }

    async fn index_exists(&self, index: &str) -> std::result::Result<bool, FetchError> {
        self.head_index(index).await.map_err(FetchError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> FileEngineConfig {
        FileEngineConfig {
            url: Some(url.to_string()),
            api_key: Some("abc123".to_string()),
            url_env: "QUANTLENS_TEST_UNSET_URL".to_string(),
            api_key_env: "QUANTLENS_TEST_UNSET_KEY".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_urls_strip_trailing_slash() {
        let client = SearchEngineClient::new(&config("https://search.local:9200/")).unwrap();
        assert_eq!(client.base_url(), "https://search.local:9200");
        assert_eq!(
            client.search_url("properties_int8"),
            "https://search.local:9200/properties_int8/_search"
        );
        assert_eq!(
            client.index_url("properties"),
            "https://search.local:9200/properties"
        );
    }

    #[test]
    fn test_transport_outlasts_fetch_timeout() {
        let mut config = config("http://localhost:9200");
        config.timeout_seconds = 5;

        let fetch_timeout = crate::config::FileConfig {
            engine: config.clone(),
            ..Default::default()
        }
        .to_comparison_params()
        .fetch_timeout
        .unwrap();

        assert!(SearchEngineClient::transport_timeout(&config) > fetch_timeout);
        assert_eq!(
            SearchEngineClient::transport_timeout(&config),
            Duration::from_secs(7)
        );
    }

    #[test]
    fn test_missing_url_is_an_error() {
        let mut config = config("");
        config.url = None;
        let err = SearchEngineClient::new(&config).unwrap_err();
        assert!(matches!(err, EngineError::MissingUrl(ref var) if var == "QUANTLENS_TEST_UNSET_URL"));
    }

    #[test]
    fn test_api_key_with_newline_is_rejected() {
        let mut config = config("http://localhost:9200");
        config.api_key = Some("bad\nkey".to_string());
        let err = SearchEngineClient::new(&config).unwrap_err();
        assert!(matches!(err, EngineError::InvalidApiKey));
    }

    #[tokio::test]
    async fn test_unreachable_engine_is_reported() {
        // Port 9 (discard) is closed on test machines; connection is refused.
        let mut config = config("http://127.0.0.1:9");
        config.timeout_seconds = 2;
        let client = SearchEngineClient::new(&config).unwrap();

        let err = client.ping().await.unwrap_err();
        assert!(err.is_unreachable());
    }
}
