//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for comparison results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Both result lists with per-hit status, plus summary
    Full,
    /// Category counts and recall only
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for quantlens_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => quantlens_domain::OutputFormat::Full,
            OutputFormat::Summary => quantlens_domain::OutputFormat::Summary,
            OutputFormat::Json => quantlens_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for quantlens
#[derive(Parser, Debug)]
#[command(name = "quantlens")]
#[command(author, version, about = "Compare vector search rankings across quantized index variants")]
#[command(long_about = r#"
quantlens runs one fixed semantic query against the full-fidelity index and
against a quantized copy of it, then classifies every hit:

  =  green        same hit at the same rank
  ~  yellow       same hit, different rank
  -  red missing  baseline hit the quantized variant dropped
  +  red extra    quantized hit the baseline never returned

Quantization modes map to index variants:
  none -> <base>   int8 -> <base>_int8   int4 -> <base>_int4 (oversample 2.0)   bbq -> <base>_bbq

Configuration files are loaded from (in priority order):
1. QUANTLENS_<SECTION>__<KEY> environment variables
2. --config <path>     Explicit config file
3. ./quantlens.toml    Project-level config
4. ~/.config/quantlens/config.toml   Global config

The engine URL and API key fall back to $ES_URL and $ES_API_KEY.

Example:
  quantlens int4
  quantlens bbq --output json --export ./runs
  quantlens --health
"#)]
pub struct Cli {
    /// Quantization variant to compare against the baseline: none, int8, int4, bbq [default: int8]
    #[arg(value_name = "MODE")]
    pub quantization: Option<String>,

    /// Output format [default: from config, else full]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print both search requests
    #[arg(long)]
    pub show_query: bool,

    /// Write the full comparison as JSON to a file or directory
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Check engine connectivity and index variants, then exit
    #[arg(long)]
    pub health: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
