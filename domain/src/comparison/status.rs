//! Per-item status lookup for rendering both result lists side by side.

use super::report::ComparisonReport;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a single hit fared in the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemStatus {
    /// Same rank in the other list
    Green,
    /// Present in the other list at `other_position`
    Yellow { other_position: usize },
    /// Baseline hit absent from the variant
    RedMissing,
    /// Variant hit absent from the baseline
    RedExtra,
    /// Label not covered by the report
    Unclassified,
}

impl ItemStatus {
    pub fn tooltip(&self, other_side: &str) -> String {
        match self {
            ItemStatus::Green => format!("Perfect match with {} results", other_side),
            ItemStatus::Yellow { other_position } => format!(
                "Position mismatch: found at position {} in {} results",
                other_position + 1,
                other_side
            ),
            ItemStatus::RedMissing => format!("Missing from {} results", other_side),
            ItemStatus::RedExtra => format!("Extra result not found in {}", other_side),
            ItemStatus::Unclassified => String::new(),
        }
    }
}

/// Label-keyed status of every hit, per side.
#[derive(Debug, Clone, Default)]
pub struct StatusIndex<'a> {
    baseline: HashMap<&'a str, ItemStatus>,
    variant: HashMap<&'a str, ItemStatus>,
}

impl<'a> StatusIndex<'a> {
    pub fn new(report: &'a ComparisonReport) -> Self {
        let mut index = Self::default();

        for record in &report.green_matches {
            index.baseline.insert(&record.label, ItemStatus::Green);
            index.variant.insert(&record.label, ItemStatus::Green);
        }
        for record in &report.yellow_matches {
            index
                .baseline
                .entry(&record.label)
                .or_insert(ItemStatus::Yellow {
                    other_position: record.variant_position,
                });
            index
                .variant
                .entry(&record.label)
                .or_insert(ItemStatus::Yellow {
                    other_position: record.baseline_position,
                });
        }
        for record in &report.red_missing {
            index.baseline.insert(&record.label, ItemStatus::RedMissing);
        }
        for record in &report.red_extra {
            index.variant.insert(&record.label, ItemStatus::RedExtra);
        }

        index
    }

    /// Status of a hit in the baseline list
    pub fn baseline_status(&self, label: &str) -> ItemStatus {
        self.baseline
            .get(label)
            .copied()
            .unwrap_or(ItemStatus::Unclassified)
    }

    /// Status of a hit in the variant list
    pub fn variant_status(&self, label: &str) -> ItemStatus {
        self.variant
            .get(label)
            .copied()
            .unwrap_or(ItemStatus::Unclassified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::compare;
    use crate::search::result::ResultItem;

    fn item(label: &str) -> ResultItem {
        ResultItem::new(label, 1.0, label)
    }

    #[test]
    fn test_statuses_for_both_sides() {
        let baseline = vec![item("villa"), item("condo"), item("house")];
        let variant = vec![item("villa"), item("house"), item("new")];
        let report = compare(&baseline, &variant);
        let index = StatusIndex::new(&report);

        assert_eq!(index.baseline_status("villa"), ItemStatus::Green);
        assert_eq!(index.baseline_status("condo"), ItemStatus::RedMissing);
        assert_eq!(
            index.baseline_status("house"),
            ItemStatus::Yellow { other_position: 1 }
        );

        assert_eq!(index.variant_status("villa"), ItemStatus::Green);
        assert_eq!(
            index.variant_status("house"),
            ItemStatus::Yellow { other_position: 2 }
        );
        assert_eq!(index.variant_status("new"), ItemStatus::RedExtra);
        assert_eq!(index.variant_status("unknown"), ItemStatus::Unclassified);
    }

    #[test]
    fn test_tooltip_uses_one_based_positions() {
        let status = ItemStatus::Yellow { other_position: 2 };
        assert_eq!(
            status.tooltip("quantized"),
            "Position mismatch: found at position 3 in quantized results"
        );
        assert_eq!(
            ItemStatus::RedExtra.tooltip("baseline"),
            "Extra result not found in baseline"
        );
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(ItemStatus::Yellow { other_position: 4 }).unwrap();
        assert_eq!(json["status"], "yellow");
        assert_eq!(json["other_position"], 4);
    }
}
