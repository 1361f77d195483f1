//! Semantic search query construction.
//!
//! [`SearchQuery::build`] turns a query text and a [`QuantizationMode`] into
//! the kNN request sent to one index variant. The body mirrors the engine's
//! search DSL:
//!
//! ```json
//! {
//!   "_source": false,
//!   "fields": ["title"],
//!   "query": {
//!     "knn": {
//!       "field": "body_content_e5",
//!       "k": 10,
//!       "num_candidates": 100,
//!       "filter": { "geo_distance": { "distance": "25mi", "location": { "lat": 28.5383, "lon": -81.3792 } } },
//!       "query_vector_builder": { "text_embedding": { "model_id": "...", "model_text": "..." } },
//!       "rescore_vector": { "oversample": 2.0 }
//!     }
//!   }
//! }
//! ```
//!
//! `rescore_vector` is only present for modes that rescore (`int4`).

use super::quantization::QuantizationMode;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Query text used when none is configured.
pub const DEFAULT_QUERY_TEXT: &str =
    "Luxury waterfront property with pool and garage near downtown Orlando";

/// Geographic radius restricting candidate documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFilter {
    /// Radius with unit, e.g. `"25mi"`
    pub distance: String,
    pub lat: f64,
    pub lon: f64,
}

impl Default for GeoFilter {
    fn default() -> Self {
        // Downtown Orlando
        Self {
            distance: "25mi".to_string(),
            lat: 28.5383,
            lon: -81.3792,
        }
    }
}

/// Fixed parameters shared by every query variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryParams {
    /// Stored field returned as the hit label
    pub title_field: String,
    /// Dense vector field searched
    pub vector_field: String,
    /// Number of hits returned
    pub k: usize,
    /// Candidates considered per shard
    pub num_candidates: usize,
    pub geo_filter: GeoFilter,
    /// Embedding model deployed in the engine
    pub embedding_model: String,
    /// Oversample factor for rescoring modes
    pub oversample: f64,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            title_field: "title".to_string(),
            vector_field: "body_content_e5".to_string(),
            k: 10,
            num_candidates: 100,
            geo_filter: GeoFilter::default(),
            embedding_model: ".multilingual-e5-small-elasticsearch".to_string(),
            oversample: 2.0,
        }
    }
}

/// Search request body in the engine's DSL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchBody {
    #[serde(rename = "_source")]
    pub source: bool,
    pub fields: Vec<String>,
    pub query: QueryClause,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryClause {
    pub knn: KnnClause,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnnClause {
    pub field: String,
    pub k: usize,
    pub num_candidates: usize,
    pub filter: FilterClause,
    pub query_vector_builder: QueryVectorBuilder,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rescore_vector: Option<RescoreVector>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterClause {
    pub geo_distance: GeoDistance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoDistance {
    pub distance: String,
    pub location: GeoPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryVectorBuilder {
    pub text_embedding: TextEmbedding,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextEmbedding {
    pub model_id: String,
    pub model_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RescoreVector {
    pub oversample: f64,
}

/// A query bound to the index variant it targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub mode: QuantizationMode,
    /// Index variant name
    pub index: String,
    pub body: SearchBody,
}

impl SearchQuery {
    /// Build the query for `mode` against the variant of `base_index`.
    ///
    /// Deterministic in its inputs. Fails only on blank query text.
    pub fn build(
        text: &str,
        mode: QuantizationMode,
        base_index: &str,
        params: &QueryParams,
    ) -> Result<Self, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::InvalidQuery(
                "query text cannot be empty".to_string(),
            ));
        }

        let rescore_vector = mode.uses_rescoring().then_some(RescoreVector {
            oversample: params.oversample,
        });

        let knn = KnnClause {
            field: params.vector_field.clone(),
            k: params.k,
            num_candidates: params.num_candidates,
            filter: FilterClause {
                geo_distance: GeoDistance {
                    distance: params.geo_filter.distance.clone(),
                    location: GeoPoint {
                        lat: params.geo_filter.lat,
                        lon: params.geo_filter.lon,
                    },
                },
            },
            query_vector_builder: QueryVectorBuilder {
                text_embedding: TextEmbedding {
                    model_id: params.embedding_model.clone(),
                    model_text: text.to_string(),
                },
            },
            rescore_vector,
        };

        Ok(Self {
            mode,
            index: mode.index_name(base_index),
            body: SearchBody {
                source: false,
                fields: vec![params.title_field.clone()],
                query: QueryClause { knn },
            },
        })
    }

    /// Oversample factor attached to this query, if it rescores
    pub fn oversample(&self) -> Option<f64> {
        self.body
            .query
            .knn
            .rescore_vector
            .map(|rescore| rescore.oversample)
    }
}
