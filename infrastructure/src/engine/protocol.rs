//! Search engine response types.
//!
//! Queries are sent with `"_source": false`, so titles come back in the
//! per-hit `fields` object as single-element arrays:
//!
//! ```json
//! { "hits": { "hits": [ { "_id": "17", "_score": 0.92, "fields": { "title": ["Lakefront Villa"] } } ] } }
//! ```

use quantlens_domain::{ResultItem, ResultList};
use serde::Deserialize;
use std::collections::HashMap;

/// Body of a `_search` response (only the parts we read)
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub hits: HitsEnvelope,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HitsEnvelope {
    #[serde(default)]
    pub hits: Vec<Hit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score", default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub fields: HashMap<String, Vec<serde_json::Value>>,
}

impl Hit {
    /// First value of `field`, if it is a string
    pub fn field_str(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .and_then(|values| values.first())
            .and_then(|value| value.as_str())
    }

    pub fn into_result_item(self, title_field: &str) -> ResultItem {
        let label = self.field_str(title_field).map(str::to_string);
        ResultItem::from_optional_label(label, self.score.unwrap_or(0.0), self.id)
    }
}

impl SearchResponse {
    /// Hits in rank order, labelled from `title_field`
    pub fn into_results(self, title_field: &str) -> ResultList {
        self.hits
            .hits
            .into_iter()
            .map(|hit| hit.into_result_item(title_field))
            .collect()
    }
}

/// Best-effort human-readable message from an error response body.
///
/// Engine errors look like `{"error": {"type": "...", "reason": "..."}, "status": 400}`;
/// anything else is returned as-is.
pub fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.trim().to_string();
    };

    match &value["error"] {
        serde_json::Value::Object(error) => {
            let kind = error.get("type").and_then(|v| v.as_str());
            let reason = error.get("reason").and_then(|v| v.as_str());
            match (kind, reason) {
                (Some(kind), Some(reason)) => format!("{}: {}", kind, reason),
                (Some(kind), None) => kind.to_string(),
                (None, Some(reason)) => reason.to_string(),
                (None, None) => value.to_string(),
            }
        }
        serde_json::Value::String(message) => message.clone(),
        _ => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantlens_domain::NO_TITLE;

    #[test]
    fn test_parse_hits_in_rank_order() {
        let body = r#"{
            "took": 12,
            "hits": {
                "total": { "value": 2, "relation": "eq" },
                "max_score": 0.95,
                "hits": [
                    { "_index": "properties", "_id": "1", "_score": 0.95, "fields": { "title": ["Lakefront Villa"] } },
                    { "_index": "properties", "_id": "2", "_score": 0.90, "fields": { "title": ["Downtown Condo"] } }
                ]
            }
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let results = response.into_results("title");

        assert_eq!(
            results,
            vec![
                ResultItem::new("Lakefront Villa", 0.95, "1"),
                ResultItem::new("Downtown Condo", 0.90, "2"),
            ]
        );
    }

    #[test]
    fn test_hit_without_title_gets_sentinel() {
        let body = r#"{ "hits": { "hits": [
            { "_id": "a", "_score": 0.5, "fields": { "summary": ["x"] } },
            { "_id": "b", "_score": 0.4 }
        ] } }"#;

        let results = serde_json::from_str::<SearchResponse>(body)
            .unwrap()
            .into_results("title");

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.label == NO_TITLE));
        assert_eq!(results[1].identifier, "b");
    }

    #[test]
    fn test_null_score_defaults_to_zero() {
        let body = r#"{ "hits": { "hits": [ { "_id": "a", "_score": null, "fields": { "title": ["T"] } } ] } }"#;
        let results = serde_json::from_str::<SearchResponse>(body)
            .unwrap()
            .into_results("title");
        assert_eq!(results[0].score, 0.0);
    }

    #[test]
    fn test_custom_title_field() {
        let body = r#"{ "hits": { "hits": [ { "_id": "a", "_score": 1.0, "fields": { "name": ["Cabin"] } } ] } }"#;
        let results = serde_json::from_str::<SearchResponse>(body)
            .unwrap()
            .into_results("name");
        assert_eq!(results[0].label, "Cabin");
    }

    #[test]
    fn test_empty_hits() {
        let results = serde_json::from_str::<SearchResponse>(r#"{ "hits": {} }"#)
            .unwrap()
            .into_results("title");
        assert!(results.is_empty());
    }

    #[test]
    fn test_error_message_from_engine_error() {
        let body = r#"{"error":{"root_cause":[],"type":"index_not_found_exception","reason":"no such index [properties_bbq]"},"status":404}"#;
        assert_eq!(
            error_message(body),
            "index_not_found_exception: no such index [properties_bbq]"
        );
    }

    #[test]
    fn test_error_message_passthrough() {
        assert_eq!(error_message(" Bad Gateway \n"), "Bad Gateway");
        assert_eq!(error_message(r#"{"error":"Unauthorized"}"#), "Unauthorized");
    }
}
