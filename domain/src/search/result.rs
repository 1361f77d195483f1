//! Ranked search hits

use serde::{Deserialize, Serialize};

/// Label reported for hits that carry no title field.
pub const NO_TITLE: &str = "No title";

/// One ranked hit returned by the search engine.
///
/// `label` is the key used when comparing two result lists. `identifier`
/// is carried through for display and export only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Display title of the hit (comparison key)
    pub label: String,
    /// Engine-reported relevance score
    pub score: f64,
    /// Stable document id
    pub identifier: String,
}

impl ResultItem {
    pub fn new(label: impl Into<String>, score: f64, identifier: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            score,
            identifier: identifier.into(),
        }
    }

    /// Build an item from an optional title, falling back to [`NO_TITLE`].
    pub fn from_optional_label(
        label: Option<String>,
        score: f64,
        identifier: impl Into<String>,
    ) -> Self {
        Self::new(
            label.unwrap_or_else(|| NO_TITLE.to_string()),
            score,
            identifier,
        )
    }

    /// Whether this hit had no title in the engine response
    pub fn is_untitled(&self) -> bool {
        self.label == NO_TITLE
    }
}

/// Rank-ordered hits; the index of an item is its 0-based rank.
pub type ResultList = Vec<ResultItem>;
