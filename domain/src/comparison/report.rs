//! Comparison report types

use serde::{Deserialize, Serialize};

/// A label found in both lists.
///
/// Green when both positions are equal, yellow otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub label: String,
    pub variant_position: usize,
    pub baseline_position: usize,
    pub variant_score: f64,
    pub baseline_score: f64,
}

impl MatchRecord {
    /// Signed rank change: positive when the variant ranks the hit lower
    pub fn rank_shift(&self) -> isize {
        self.variant_position as isize - self.baseline_position as isize
    }
}

/// A label returned only by the quantized variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraRecord {
    pub label: String,
    pub variant_position: usize,
    pub variant_score: f64,
}

/// A label returned only by the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingRecord {
    pub label: String,
    pub baseline_position: usize,
    pub baseline_score: f64,
}

/// Four-way classification of a baseline/variant pair.
///
/// Records keep the order they were produced in: variant order for
/// `green_matches`, `yellow_matches` and `red_extra`, baseline order for
/// `red_missing`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Same label at the same rank
    pub green_matches: Vec<MatchRecord>,
    /// Same label, different rank
    pub yellow_matches: Vec<MatchRecord>,
    /// Baseline labels the variant dropped
    pub red_missing: Vec<MissingRecord>,
    /// Variant labels the baseline never returned
    pub red_extra: Vec<ExtraRecord>,
}

impl ComparisonReport {
    /// Whether the variant reproduced the baseline exactly
    pub fn is_identical(&self) -> bool {
        self.yellow_matches.is_empty() && self.red_missing.is_empty() && self.red_extra.is_empty()
    }

    pub fn summary(&self) -> ComparisonSummary {
        ComparisonSummary::from_report(self)
    }
}

/// Category counts and recall against the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub green: usize,
    pub yellow: usize,
    pub red_missing: usize,
    pub red_extra: usize,
}

impl ComparisonSummary {
    pub fn from_report(report: &ComparisonReport) -> Self {
        Self {
            green: report.green_matches.len(),
            yellow: report.yellow_matches.len(),
            red_missing: report.red_missing.len(),
            red_extra: report.red_extra.len(),
        }
    }

    /// Baseline hits also returned by the variant
    pub fn found(&self) -> usize {
        self.green + self.yellow
    }

    /// Baseline hits accounted for by the report
    pub fn baseline_total(&self) -> usize {
        self.green + self.yellow + self.red_missing
    }

    /// Recall as `found / baseline_total`, `None` for an empty baseline
    pub fn recall(&self) -> Option<f64> {
        match self.baseline_total() {
            0 => None,
            total => Some(self.found() as f64 / total as f64),
        }
    }

    /// Recall as a fraction string, e.g. `"8/10"`
    pub fn recall_fraction(&self) -> String {
        format!("{}/{}", self.found(), self.baseline_total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(label: &str, variant: usize, baseline: usize) -> MatchRecord {
        MatchRecord {
            label: label.to_string(),
            variant_position: variant,
            baseline_position: baseline,
            variant_score: 0.5,
            baseline_score: 0.5,
        }
    }

    #[test]
    fn test_rank_shift() {
        assert_eq!(matched("a", 3, 1).rank_shift(), 2);
        assert_eq!(matched("a", 0, 4).rank_shift(), -4);
        assert_eq!(matched("a", 2, 2).rank_shift(), 0);
    }

    #[test]
    fn test_empty_report_is_identical() {
        let report = ComparisonReport::default();
        assert!(report.is_identical());
        assert_eq!(report.summary().recall(), None);
        assert_eq!(report.summary().recall_fraction(), "0/0");
    }

    #[test]
    fn test_summary_counts_and_recall() {
        let report = ComparisonReport {
            green_matches: vec![matched("a", 0, 0), matched("b", 1, 1)],
            yellow_matches: vec![matched("c", 2, 3)],
            red_missing: vec![MissingRecord {
                label: "d".to_string(),
                baseline_position: 2,
                baseline_score: 0.4,
            }],
            red_extra: vec![ExtraRecord {
                label: "e".to_string(),
                variant_position: 3,
                variant_score: 0.3,
            }],
        };

        let summary = report.summary();
        assert_eq!(summary.green, 2);
        assert_eq!(summary.yellow, 1);
        assert_eq!(summary.red_missing, 1);
        assert_eq!(summary.red_extra, 1);
        assert_eq!(summary.found(), 3);
        assert_eq!(summary.baseline_total(), 4);
        assert_eq!(summary.recall(), Some(0.75));
        assert_eq!(summary.recall_fraction(), "3/4");
        assert!(!report.is_identical());
    }

    #[test]
    fn test_report_serializes_category_names() {
        let json = serde_json::to_value(ComparisonReport::default()).unwrap();
        for key in ["green_matches", "yellow_matches", "red_missing", "red_extra"] {
            assert!(json[key].as_array().unwrap().is_empty(), "{key}");
        }
    }
}
