//! Output formatter trait

use quantlens_application::RunComparisonOutput;

/// Trait for formatting comparison results
pub trait OutputFormatter {
    /// Format both result lists and the summary
    fn format(&self, output: &RunComparisonOutput) -> String;

    /// Format as JSON
    fn format_json(&self, output: &RunComparisonOutput) -> String;

    /// Format the summary only (concise output)
    fn format_summary(&self, output: &RunComparisonOutput) -> String;

    /// Render according to the selected output format
    fn render(&self, output: &RunComparisonOutput, format: quantlens_domain::OutputFormat) -> String {
        match format {
            quantlens_domain::OutputFormat::Full => self.format(output),
            quantlens_domain::OutputFormat::Summary => self.format_summary(output),
            quantlens_domain::OutputFormat::Json => self.format_json(output),
        }
    }
}
