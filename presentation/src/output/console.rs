//! Console output formatter for comparison results

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use quantlens_application::{HealthReport, RunComparisonOutput};
use quantlens_domain::{ComparisonSummary, ItemStatus, ResultItem, StatusIndex};

/// Formats comparison results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format both result lists with per-hit status, then the summary
    pub fn format(output: &RunComparisonOutput) -> String {
        let mut out = String::new();
        let status = StatusIndex::new(&output.comparison);

        out.push_str(&Self::header("Quantization Comparison"));
        out.push('\n');

        out.push_str(&format!(
            "{} {}\n",
            "Query:".cyan().bold(),
            output.query_text
        ));
        out.push_str(&format!(
            "{} {} vs {}",
            "Indices:".cyan().bold(),
            output.baseline_query.index,
            output.variant_query.index
        ));
        if let Some(oversample) = output.variant_query.oversample() {
            out.push_str(&format!(" (rescore oversample {:.1})", oversample));
        }
        out.push_str("\n\n");

        out.push_str(&Self::section_header(&format!(
            "Baseline: full fidelity ({} hits)",
            output.baseline.len()
        )));
        for (position, item) in output.baseline.iter().enumerate() {
            let item_status = status.baseline_status(&item.label);
            out.push_str(&Self::result_line(position, item, item_status, "quantized"));
        }

        out.push_str(&Self::section_header(&format!(
            "Variant: {} ({} hits)",
            output.quantization,
            output.variant.len()
        )));
        for (position, item) in output.variant.iter().enumerate() {
            let item_status = status.variant_status(&item.label);
            out.push_str(&Self::result_line(position, item, item_status, "baseline"));
        }

        out.push_str(&Self::format_summary(output));
        out.push_str(&Self::footer());

        out
    }

    /// Format as JSON
    pub fn format_json(output: &RunComparisonOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format category counts and recall only
    pub fn format_summary(output: &RunComparisonOutput) -> String {
        let summary: &ComparisonSummary = &output.summary;
        let mut out = Self::section_header(&format!(
            "Summary: {} vs baseline",
            output.quantization
        ));

        out.push_str(&format!(
            "  {} {:<18}{}\n",
            Self::marker(ItemStatus::Green),
            "Perfect matches",
            summary.green
        ));
        out.push_str(&format!(
            "  {} {:<18}{}\n",
            Self::marker(ItemStatus::Yellow { other_position: 0 }),
            "Rank drift",
            summary.yellow
        ));
        out.push_str(&format!(
            "  {} {:<18}{}\n",
            Self::marker(ItemStatus::RedMissing),
            "Missing",
            summary.red_missing
        ));
        out.push_str(&format!(
            "  {} {:<18}{}\n",
            Self::marker(ItemStatus::RedExtra),
            "Extra",
            summary.red_extra
        ));

        let recall = match summary.recall() {
            Some(recall) => format!("{} ({:.0}%)", summary.recall_fraction(), recall * 100.0),
            None => summary.recall_fraction(),
        };
        out.push_str(&format!("  {}  {:<18}{}\n", " ", "Recall", recall.bold()));

        out
    }

    /// Format both search requests for inspection
    pub fn format_queries(output: &RunComparisonOutput) -> String {
        let mut out = String::new();
        for (title, query) in [
            ("Baseline query", &output.baseline_query),
            ("Variant query", &output.variant_query),
        ] {
            out.push_str(&Self::section_header(&format!(
                "{} -> POST /{}/_search",
                title, query.index
            )));
            out.push_str(
                &serde_json::to_string_pretty(&query.body).unwrap_or_else(|_| "{}".to_string()),
            );
            out.push('\n');
        }
        out
    }

    /// Format a health check report
    pub fn format_health(report: &HealthReport) -> String {
        let mut out = String::new();

        let status = if report.is_healthy() {
            report.status().green().bold()
        } else {
            report.status().red().bold()
        };
        out.push_str(&format!("{} {}\n", "Status:".cyan().bold(), status));

        if !report.reachable {
            out.push_str(&format!(
                "  {} search engine: {}\n",
                "x".red(),
                report.error.as_deref().unwrap_or("unreachable")
            ));
            return out;
        }

        out.push_str(&format!("  {} search engine: connected\n", "v".green()));
        for index in &report.indices {
            let (mark, state) = match index.exists {
                Some(true) => ("v".green(), "present"),
                Some(false) => ("x".red(), "missing"),
                None => ("?".yellow(), "unknown"),
            };
            out.push_str(&format!(
                "  {} {:<6} {} ({})\n",
                mark, index.mode, index.index, state
            ));
        }

        out
    }

    fn result_line(
        position: usize,
        item: &ResultItem,
        status: ItemStatus,
        other_side: &str,
    ) -> String {
        let label = match status {
            ItemStatus::Green => item.label.green(),
            ItemStatus::Yellow { .. } => item.label.yellow(),
            ItemStatus::RedMissing | ItemStatus::RedExtra => item.label.red(),
            ItemStatus::Unclassified => item.label.normal(),
        };
        let tooltip = status.tooltip(other_side);

        let mut line = format!(
            "  {} {:>2}. {} {}",
            Self::marker(status),
            position + 1,
            label,
            format!("({:.4})", item.score).dimmed()
        );
        if !tooltip.is_empty() {
            line.push_str(&format!("  {}", tooltip.dimmed()));
        }
        line.push('\n');
        line
    }

    fn marker(status: ItemStatus) -> ColoredString {
        match status {
            ItemStatus::Green => "=".green().bold(),
            ItemStatus::Yellow { .. } => "~".yellow().bold(),
            ItemStatus::RedMissing => "-".red().bold(),
            ItemStatus::RedExtra => "+".red().bold(),
            ItemStatus::Unclassified => " ".normal(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, output: &RunComparisonOutput) -> String {
        Self::format(output)
    }

    fn format_json(&self, output: &RunComparisonOutput) -> String {
        Self::format_json(output)
    }

    fn format_summary(&self, output: &RunComparisonOutput) -> String {
        Self::format_summary(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantlens_application::IndexHealth;
    use quantlens_domain::{QuantizationMode, QueryParams, SearchQuery, compare};

    fn sample_output(mode: QuantizationMode) -> RunComparisonOutput {
        let baseline = vec![
            ResultItem::new("Lakefront Villa", 0.95, "1"),
            ResultItem::new("Downtown Condo", 0.90, "2"),
            ResultItem::new("Suburban House", 0.85, "3"),
        ];
        let variant = vec![
            ResultItem::new("Lakefront Villa", 0.93, "1"),
            ResultItem::new("Suburban House", 0.80, "3"),
            ResultItem::new("New Listing", 0.75, "7"),
        ];
        let comparison = compare(&baseline, &variant);
        let params = QueryParams::default();

        RunComparisonOutput {
            query_text: "waterfront".to_string(),
            quantization: mode,
            summary: comparison.summary(),
            baseline_query: SearchQuery::build(
                "waterfront",
                QuantizationMode::None,
                "properties",
                &params,
            )
            .unwrap(),
            variant_query: SearchQuery::build("waterfront", mode, "properties", &params).unwrap(),
            baseline,
            variant,
            comparison,
        }
    }

    #[test]
    fn test_full_output_lists_both_sides() {
        let text = ConsoleFormatter::format(&sample_output(QuantizationMode::Int4));

        assert!(text.contains("Quantization Comparison"));
        assert!(text.contains("properties_int4"));
        assert!(text.contains("rescore oversample 2.0"));
        assert!(text.contains("Downtown Condo"));
        assert!(text.contains("Missing from quantized results"));
        assert!(text.contains("Extra result not found in baseline"));
        assert!(text.contains("Position mismatch: found at position 2 in quantized results"));
        assert!(text.contains("Position mismatch: found at position 3 in baseline results"));
    }

    #[test]
    fn test_summary_reports_recall() {
        let text = ConsoleFormatter::format_summary(&sample_output(QuantizationMode::Int8));

        assert!(text.contains("Summary: int8 vs baseline"));
        assert!(text.contains("Perfect matches"));
        assert!(text.contains("2/3 (67%)"));
    }

    #[test]
    fn test_json_output_is_valid() {
        let text = ConsoleFormatter::format_json(&sample_output(QuantizationMode::Bbq));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["quantization"], "bbq");
        assert_eq!(value["comparison"]["green_matches"][0]["label"], "Lakefront Villa");
    }

    #[test]
    fn test_queries_show_both_bodies() {
        let text = ConsoleFormatter::format_queries(&sample_output(QuantizationMode::Int4));
        assert!(text.contains("POST /properties/_search"));
        assert!(text.contains("POST /properties_int4/_search"));
        assert_eq!(text.matches("\"rescore_vector\"").count(), 1);
    }

    #[test]
    fn test_health_output() {
        let report = HealthReport {
            reachable: true,
            error: None,
            indices: vec![
                IndexHealth {
                    mode: QuantizationMode::None,
                    index: "properties".to_string(),
                    exists: Some(true),
                },
                IndexHealth {
                    mode: QuantizationMode::Bbq,
                    index: "properties_bbq".to_string(),
                    exists: Some(false),
                },
            ],
        };
        let text = ConsoleFormatter::format_health(&report);
        assert!(text.contains("unhealthy"));
        assert!(text.contains("properties_bbq (missing)"));

        let down = HealthReport {
            reachable: false,
            error: Some("connection refused".to_string()),
            indices: vec![],
        };
        assert!(ConsoleFormatter::format_health(&down).contains("connection refused"));
    }
}
