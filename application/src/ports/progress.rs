//! Progress notification port

use quantlens_domain::QuantizationMode;

/// Callback for progress updates while result lists are fetched
pub trait ComparisonProgress: Send + Sync {
    /// Called when a fetch against `index` starts
    fn on_fetch_start(&self, mode: QuantizationMode, index: &str);

    /// Called when a fetch finishes
    fn on_fetch_complete(&self, mode: QuantizationMode, hits: Option<usize>);
}

/// No-op progress notifier
pub struct NoProgress;

impl ComparisonProgress for NoProgress {
    fn on_fetch_start(&self, _mode: QuantizationMode, _index: &str) {}
    fn on_fetch_complete(&self, _mode: QuantizationMode, _hits: Option<usize>) {}
}
