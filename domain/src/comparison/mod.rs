//! Baseline versus quantized result comparison.
//!
//! - [`comparator::compare`]: classify two ranked lists
//! - [`report::ComparisonReport`]: green / yellow / red_missing / red_extra records
//! - [`status::StatusIndex`]: per-hit status for rendering

pub mod comparator;
pub mod report;
pub mod status;

pub use comparator::compare;
pub use report::{ComparisonReport, ComparisonSummary, ExtraRecord, MatchRecord, MissingRecord};
pub use status::{ItemStatus, StatusIndex};
