//! Run Comparison use case.
//!
//! Runs the configured query against the full-fidelity baseline and one
//! quantized variant, then classifies the two ranked lists.
//!
//! Flow:
//! 1. Build both queries (`none` for the baseline, the selected mode for the variant)
//! 2. Fetch both result lists concurrently, each under the fetch timeout
//! 3. [`compare`] the lists
//! 4. Return everything, including both queries for inspection
//!
//! Either fetch failing fails the whole run; no partial report is produced.

use crate::config::ComparisonParams;
use crate::ports::progress::{ComparisonProgress, NoProgress};
use crate::ports::result_fetcher::{FetchError, ResultFetcher};
use quantlens_domain::{
    ComparisonReport, ComparisonSummary, DomainError, QuantizationMode, ResultList, SearchQuery,
    compare,
};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Which of the two fetches an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchSide {
    Baseline,
    Variant,
}

impl fmt::Display for FetchSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchSide::Baseline => write!(f, "baseline"),
            FetchSide::Variant => write!(f, "variant"),
        }
    }
}

/// Errors that can occur during a comparison run.
#[derive(Error, Debug)]
pub enum RunComparisonError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{side} fetch from '{index}' failed")]
    Fetch {
        side: FetchSide,
        index: String,
        source: FetchError,
    },

    #[error("{side} fetch from '{index}' timed out after {}s", .after.as_secs_f64())]
    Timeout {
        side: FetchSide,
        index: String,
        after: Duration,
    },
}

impl RunComparisonError {
    /// The side whose fetch failed, if the failure was a fetch
    pub fn side(&self) -> Option<FetchSide> {
        match self {
            RunComparisonError::Domain(_) => None,
            RunComparisonError::Fetch { side, .. } | RunComparisonError::Timeout { side, .. } => {
                Some(*side)
            }
        }
    }
}

/// Input for the [`RunComparisonUseCase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunComparisonInput {
    /// Variant compared against the baseline
    pub mode: QuantizationMode,
}

impl RunComparisonInput {
    pub fn new(mode: QuantizationMode) -> Self {
        Self { mode }
    }

    /// Parse an optional selector, defaulting to `int8`.
    ///
    /// Unknown selectors are rejected here, before anything is fetched.
    pub fn from_selector(selector: Option<&str>) -> Result<Self, DomainError> {
        match selector {
            Some(s) => Ok(Self::new(s.parse()?)),
            None => Ok(Self::default()),
        }
    }
}

/// Everything a comparison run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunComparisonOutput {
    pub query_text: String,
    pub quantization: QuantizationMode,
    pub baseline: ResultList,
    pub variant: ResultList,
    pub comparison: ComparisonReport,
    pub summary: ComparisonSummary,
    pub baseline_query: SearchQuery,
    pub variant_query: SearchQuery,
}

/// Use case for comparing a quantized variant against the baseline.
#[derive(Clone)]
pub struct RunComparisonUseCase {
    fetcher: Arc<dyn ResultFetcher>,
    params: ComparisonParams,
}

impl RunComparisonUseCase {
    pub fn new(fetcher: Arc<dyn ResultFetcher>, params: ComparisonParams) -> Self {
        Self { fetcher, params }
    }

    pub fn params(&self) -> &ComparisonParams {
        &self.params
    }

    /// Build the query descriptor for one mode
    pub fn build_query(&self, mode: QuantizationMode) -> Result<SearchQuery, DomainError> {
        SearchQuery::build(
            &self.params.query_text,
            mode,
            &self.params.base_index,
            &self.params.query,
        )
    }

    /// Execute without progress reporting
    pub async fn execute(
        &self,
        input: RunComparisonInput,
    ) -> Result<RunComparisonOutput, RunComparisonError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunComparisonInput,
        progress: &dyn ComparisonProgress,
    ) -> Result<RunComparisonOutput, RunComparisonError> {
        let baseline_query = self.build_query(QuantizationMode::None)?;
        let variant_query = self.build_query(input.mode)?;

        info!(
            "Comparing '{}' against '{}' ({})",
            variant_query.index, baseline_query.index, input.mode
        );

        let (baseline, variant) = futures::future::try_join(
            self.fetch(FetchSide::Baseline, &baseline_query, progress),
            self.fetch(FetchSide::Variant, &variant_query, progress),
        )
        .await?;

        let comparison = compare(&baseline, &variant);
        let summary = comparison.summary();

        info!(
            "Comparison complete: {} green, {} yellow, {} missing, {} extra (recall {})",
            summary.green,
            summary.yellow,
            summary.red_missing,
            summary.red_extra,
            summary.recall_fraction()
        );

        Ok(RunComparisonOutput {
            query_text: self.params.query_text.clone(),
            quantization: input.mode,
            baseline,
            variant,
            comparison,
            summary,
            baseline_query,
            variant_query,
        })
    }

    async fn fetch(
        &self,
        side: FetchSide,
        query: &SearchQuery,
        progress: &dyn ComparisonProgress,
    ) -> Result<ResultList, RunComparisonError> {
        progress.on_fetch_start(query.mode, &query.index);
        let start = Instant::now();

        let result = match self.params.fetch_timeout {
            Some(limit) => match tokio::time::timeout(limit, self.fetcher.fetch(query)).await {
                Ok(result) => result.map_err(|source| RunComparisonError::Fetch {
                    side,
                    index: query.index.clone(),
                    source,
                }),
                Err(_) => Err(RunComparisonError::Timeout {
                    side,
                    index: query.index.clone(),
                    after: limit,
                }),
            },
            None => self
                .fetcher
                .fetch(query)
                .await
                .map_err(|source| RunComparisonError::Fetch {
                    side,
                    index: query.index.clone(),
                    source,
                }),
        };

        match &result {
            Ok(hits) => {
                debug!(
                    "{} fetch from '{}': {} hits in {}ms",
                    side,
                    query.index,
                    hits.len(),
                    start.elapsed().as_millis()
                );
                progress.on_fetch_complete(query.mode, Some(hits.len()));
            }
            Err(e) => {
                match std::error::Error::source(e) {
                    Some(cause) => warn!("{}: {}", e, cause),
                    None => warn!("{}", e),
                }
                progress.on_fetch_complete(query.mode, None);
            }
        }

        result
    }
}
