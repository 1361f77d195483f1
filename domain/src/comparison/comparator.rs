//! Ranked result comparison.
//!
//! [`compare`] reconciles a full-fidelity baseline with a quantized variant
//! of the same query. Items are matched by label:
//!
//! - **green**: label at the same rank in both lists
//! - **yellow**: label in both lists at different ranks
//! - **red_extra**: label only in the variant
//! - **red_missing**: label only in the baseline
//!
//! When a label repeats inside the baseline, its first occurrence is the one
//! matched against.
//!
//! # Example
//!
//! ```
//! use quantlens_domain::comparison::compare;
//! use quantlens_domain::ResultItem;
//!
//! let baseline = vec![
//!     ResultItem::new("Lakefront Villa", 0.95, "1"),
//!     ResultItem::new("Downtown Condo", 0.90, "2"),
//! ];
//! let variant = vec![
//!     ResultItem::new("Lakefront Villa", 0.93, "1"),
//!     ResultItem::new("New Listing", 0.75, "9"),
//! ];
//!
//! let report = compare(&baseline, &variant);
//! assert_eq!(report.green_matches.len(), 1);
//! assert_eq!(report.red_extra[0].label, "New Listing");
//! assert_eq!(report.red_missing[0].label, "Downtown Condo");
//! ```

use super::report::{ComparisonReport, ExtraRecord, MatchRecord, MissingRecord};
use crate::search::result::ResultItem;
use std::collections::{HashMap, HashSet};

/// Classify every item of `baseline` and `variant`.
///
/// Runs in O(n + m) and never fails; empty categories are valid outcomes.
pub fn compare(baseline: &[ResultItem], variant: &[ResultItem]) -> ComparisonReport {
    let mut baseline_positions: HashMap<&str, usize> = HashMap::with_capacity(baseline.len());
    for (position, item) in baseline.iter().enumerate() {
        baseline_positions
            .entry(item.label.as_str())
            .or_insert(position);
    }

    let mut report = ComparisonReport::default();

    for (position, item) in variant.iter().enumerate() {
        match baseline_positions.get(item.label.as_str()) {
            Some(&baseline_position) => {
                let record = MatchRecord {
                    label: item.label.clone(),
                    variant_position: position,
                    baseline_position,
                    variant_score: item.score,
                    baseline_score: baseline[baseline_position].score,
                };
                if baseline_position == position {
                    report.green_matches.push(record);
                } else {
                    report.yellow_matches.push(record);
                }
            }
            None => report.red_extra.push(ExtraRecord {
                label: item.label.clone(),
                variant_position: position,
                variant_score: item.score,
            }),
        }
    }

    let variant_labels: HashSet<&str> = variant.iter().map(|item| item.label.as_str()).collect();

    report.red_missing = baseline
        .iter()
        .enumerate()
        .filter(|(_, item)| !variant_labels.contains(item.label.as_str()))
        .map(|(position, item)| MissingRecord {
            label: item.label.clone(),
            baseline_position: position,
            baseline_score: item.score,
        })
        .collect();

    report
}
