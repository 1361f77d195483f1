//! Check Health use case.
//!
//! Side-channel liveness check: pings the search engine and verifies that
//! the baseline index and every quantized variant exist. Runs no query.

use crate::config::ComparisonParams;
use crate::ports::result_fetcher::ResultFetcher;
use quantlens_domain::QuantizationMode;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Presence of one index variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexHealth {
    pub mode: QuantizationMode,
    pub index: String,
    /// `None` when the check itself failed
    pub exists: Option<bool>,
}

/// Result of a health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    /// Whether the engine answered the ping
    pub reachable: bool,
    /// Ping failure, if any
    pub error: Option<String>,
    pub indices: Vec<IndexHealth>,
}

impl HealthReport {
    /// Engine reachable and every index variant present
    pub fn is_healthy(&self) -> bool {
        self.reachable && self.indices.iter().all(|i| i.exists == Some(true))
    }

    pub fn status(&self) -> &'static str {
        if self.is_healthy() {
            "healthy"
        } else {
            "unhealthy"
        }
    }

    /// Variants that are absent or could not be checked
    pub fn missing_indices(&self) -> impl Iterator<Item = &IndexHealth> {
        self.indices.iter().filter(|i| i.exists != Some(true))
    }
}

/// Use case for checking engine liveness and index availability.
pub struct CheckHealthUseCase {
    fetcher: Arc<dyn ResultFetcher>,
    base_index: String,
}

impl CheckHealthUseCase {
    pub fn new(fetcher: Arc<dyn ResultFetcher>, params: &ComparisonParams) -> Self {
        Self {
            fetcher,
            base_index: params.base_index.clone(),
        }
    }

    pub async fn execute(&self) -> HealthReport {
        if let Err(e) = self.fetcher.ping().await {
            warn!("Search engine ping failed: {}", e);
            return HealthReport {
                reachable: false,
                error: Some(e.to_string()),
                indices: Vec::new(),
            };
        }

        let checks = QuantizationMode::ALL.iter().map(|mode| {
            let index = mode.index_name(&self.base_index);
            async move {
                let exists = match self.fetcher.index_exists(&index).await {
                    Ok(exists) => Some(exists),
                    Err(e) => {
                        warn!("Could not check index '{}': {}", index, e);
                        None
                    }
                };
                IndexHealth {
                    mode: *mode,
                    index,
                    exists,
                }
            }
        });
        let indices = futures::future::join_all(checks).await;

        let report = HealthReport {
            reachable: true,
            error: None,
            indices,
        };
        info!("Health check: {}", report.status());
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::result_fetcher::FetchError;
    use async_trait::async_trait;
    use quantlens_domain::{ResultList, SearchQuery};

    struct StubFetcher {
        ping: Result<(), FetchError>,
        present: Vec<&'static str>,
    }

    #[async_trait]
    impl ResultFetcher for StubFetcher {
        async fn fetch(&self, _query: &SearchQuery) -> Result<ResultList, FetchError> {
            Ok(Vec::new())
        }

        async fn ping(&self) -> Result<(), FetchError> {
            self.ping.clone()
        }

        async fn index_exists(&self, index: &str) -> Result<bool, FetchError> {
            if index.ends_with("_bbq") && self.present.is_empty() {
                return Err(FetchError::Timeout);
            }
            Ok(self.present.iter().any(|p| *p == index))
        }
    }

    fn check(fetcher: StubFetcher) -> CheckHealthUseCase {
        CheckHealthUseCase::new(Arc::new(fetcher), &ComparisonParams::default())
    }

    #[tokio::test]
    async fn test_all_indices_present_is_healthy() {
        let report = check(StubFetcher {
            ping: Ok(()),
            present: vec![
                "properties",
                "properties_int8",
                "properties_int4",
                "properties_bbq",
            ],
        })
        .execute()
        .await;

        assert!(report.is_healthy());
        assert_eq!(report.status(), "healthy");
        assert_eq!(report.indices.len(), 4);
        assert_eq!(report.indices[0].mode, QuantizationMode::None);
        assert_eq!(report.missing_indices().count(), 0);
    }

    #[tokio::test]
    async fn test_missing_variant_is_unhealthy() {
        let report = check(StubFetcher {
            ping: Ok(()),
            present: vec!["properties", "properties_int8", "properties_int4"],
        })
        .execute()
        .await;

        assert!(report.reachable);
        assert!(!report.is_healthy());
        let missing: Vec<_> = report.missing_indices().map(|i| i.index.as_str()).collect();
        assert_eq!(missing, vec!["properties_bbq"]);
    }

    #[tokio::test]
    async fn test_failed_index_check_is_unknown() {
        let report = check(StubFetcher {
            ping: Ok(()),
            present: vec![],
        })
        .execute()
        .await;

        let bbq = report
            .indices
            .iter()
            .find(|i| i.mode == QuantizationMode::Bbq)
            .unwrap();
        assert_eq!(bbq.exists, None);
        assert_eq!(report.missing_indices().count(), 4);
    }

    #[tokio::test]
    async fn test_unreachable_engine_skips_index_checks() {
        let report = check(StubFetcher {
            ping: Err(FetchError::Unreachable("connection refused".to_string())),
            present: vec![],
        })
        .execute()
        .await;

        assert!(!report.reachable);
        assert!(report.indices.is_empty());
        assert_eq!(report.status(), "unhealthy");
        assert_eq!(
            report.error.as_deref(),
            Some("Search service unreachable: connection refused")
        );
    }
}
