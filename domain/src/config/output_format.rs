//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for comparison results
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Both result lists annotated, plus summary (default)
    #[default]
    Full,
    /// Category counts and recall only
    Summary,
    /// JSON output
    Json,
}
