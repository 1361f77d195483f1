//! Query configuration from TOML (`[index]` and `[query]` sections)

use quantlens_application::DEFAULT_BASE_INDEX;
use quantlens_domain::{DEFAULT_QUERY_TEXT, GeoFilter, QueryParams};
use serde::{Deserialize, Serialize};

/// Raw index naming configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileIndexConfig {
    /// Baseline index; quantized variants are `<base>_int8`, `<base>_int4`, `<base>_bbq`
    pub base: String,
}

impl Default for FileIndexConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_INDEX.to_string(),
        }
    }
}

/// Raw query configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQueryConfig {
    /// Query text sent to every variant
    pub text: String,
    pub title_field: String,
    pub vector_field: String,
    pub k: usize,
    pub num_candidates: usize,
    /// Geo radius, e.g. "25mi"
    pub distance: String,
    pub lat: f64,
    pub lon: f64,
    pub embedding_model: String,
    /// Oversample factor for int4 rescoring
    pub oversample: f64,
}

impl Default for FileQueryConfig {
    fn default() -> Self {
        let params = QueryParams::default();
        Self {
            text: DEFAULT_QUERY_TEXT.to_string(),
            title_field: params.title_field,
            vector_field: params.vector_field,
            k: params.k,
            num_candidates: params.num_candidates,
            distance: params.geo_filter.distance,
            lat: params.geo_filter.lat,
            lon: params.geo_filter.lon,
            embedding_model: params.embedding_model,
            oversample: params.oversample,
        }
    }
}

impl FileQueryConfig {
    pub fn to_query_params(&self) -> QueryParams {
        QueryParams {
            title_field: self.title_field.clone(),
            vector_field: self.vector_field.clone(),
            k: self.k,
            num_candidates: self.num_candidates,
            geo_filter: GeoFilter {
                distance: self.distance.clone(),
                lat: self.lat,
                lon: self.lon,
            },
            embedding_model: self.embedding_model.clone(),
            oversample: self.oversample,
        }
    }
}
