//! `[output]` section: how comparison results are rendered

use quantlens_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Rendering settings from TOML.
///
/// Both fields are defaults only: `--output` overrides `format`, and
/// `--no-color` turns color off even when `color = true`. Nothing on the
/// command line can turn color back on once the file disables it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `full`, `summary` or `json`; `full` when unset
    pub format: Option<OutputFormat>,
    /// Color the green / yellow / red markers and labels
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Effective format: the command-line choice, else this section, else `full`
    pub fn resolve_format(&self, cli_format: Option<OutputFormat>) -> OutputFormat {
        cli_format.or(self.format).unwrap_or_default()
    }

    /// Whether colored output stays enabled given the `--no-color` flag
    pub fn use_color(&self, no_color_flag: bool) -> bool {
        self.color && !no_color_flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_section_deserialize() {
        let toml_str = r#"
[output]
format = "summary"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Summary));
        assert!(config.output.color);
    }

    #[test]
    fn test_cli_format_overrides_file() {
        let output = FileOutputConfig {
            format: Some(OutputFormat::Summary),
            color: true,
        };
        assert_eq!(
            output.resolve_format(Some(OutputFormat::Json)),
            OutputFormat::Json
        );
        assert_eq!(output.resolve_format(None), OutputFormat::Summary);
        assert_eq!(
            FileOutputConfig::default().resolve_format(None),
            OutputFormat::Full
        );
    }

    #[test]
    fn test_no_color_flag_and_file_setting() {
        let colored = FileOutputConfig::default();
        assert!(colored.use_color(false));
        assert!(!colored.use_color(true));

        let plain = FileOutputConfig {
            color: false,
            ..Default::default()
        };
        assert!(!plain.use_color(false));
    }
}
