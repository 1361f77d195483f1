//! Progress reporting for comparison runs

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use quantlens_application::ComparisonProgress;
use quantlens_domain::QuantizationMode;
use std::sync::Mutex;
use std::time::Duration;

/// Reports fetch progress with one spinner per index variant
pub struct ProgressReporter {
    multi: MultiProgress,
    bars: Mutex<Vec<(QuantizationMode, ProgressBar)>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(Vec::new()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn side_name(mode: QuantizationMode) -> &'static str {
        if mode.is_baseline() {
            "baseline"
        } else {
            "variant"
        }
    }

    fn completion_message(hits: Option<usize>) -> String {
        match hits {
            Some(n) => format!("{} {} hits", "v".green(), n),
            None => format!("{} failed", "x".red()),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonProgress for ProgressReporter {
    fn on_fetch_start(&self, mode: QuantizationMode, index: &str) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(format!("{:<8}", Self::side_name(mode)));
        pb.set_message(format!("searching {}...", index));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut bars) = self.bars.lock() {
            bars.push((mode, pb));
        }
    }

    fn on_fetch_complete(&self, mode: QuantizationMode, hits: Option<usize>) {
        let Ok(bars) = self.bars.lock() else {
            return;
        };
        // Baseline and variant share a mode when comparing `none` against itself
        if let Some((_, pb)) = bars
            .iter()
            .find(|(m, pb)| *m == mode && !pb.is_finished())
        {
            pb.finish_with_message(Self::completion_message(hits));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ComparisonProgress for SimpleProgress {
    fn on_fetch_start(&self, mode: QuantizationMode, index: &str) {
        eprintln!(
            "{} {} ({})",
            "->".cyan(),
            ProgressReporter::side_name(mode).bold(),
            index
        );
    }

    fn on_fetch_complete(&self, mode: QuantizationMode, hits: Option<usize>) {
        eprintln!(
            "  {} {}",
            ProgressReporter::side_name(mode),
            ProgressReporter::completion_message(hits)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_names() {
        assert_eq!(ProgressReporter::side_name(QuantizationMode::None), "baseline");
        assert_eq!(ProgressReporter::side_name(QuantizationMode::Bbq), "variant");
    }

    #[test]
    fn test_spinners_finish_in_order_for_shared_mode() {
        let reporter = ProgressReporter::new();
        reporter.on_fetch_start(QuantizationMode::None, "properties");
        reporter.on_fetch_start(QuantizationMode::None, "properties");

        reporter.on_fetch_complete(QuantizationMode::None, Some(10));
        {
            let bars = reporter.bars.lock().unwrap();
            assert!(bars[0].1.is_finished());
            assert!(!bars[1].1.is_finished());
        }

        reporter.on_fetch_complete(QuantizationMode::None, None);
        let bars = reporter.bars.lock().unwrap();
        assert!(bars.iter().all(|(_, pb)| pb.is_finished()));
    }

    #[test]
    fn test_completion_without_start_is_ignored() {
        let reporter = ProgressReporter::new();
        reporter.on_fetch_complete(QuantizationMode::Int8, Some(3));
        assert!(reporter.bars.lock().unwrap().is_empty());
    }
}
