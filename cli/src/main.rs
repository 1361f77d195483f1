//! CLI entrypoint for quantlens
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use colored::Colorize;
use quantlens_application::{
    CheckHealthUseCase, ResultFetcher, RunComparisonInput, RunComparisonUseCase,
};
use quantlens_domain::OutputFormat;
use quantlens_infrastructure::{ConfigLoader, JsonReportExporter, SearchEngineClient};
use quantlens_presentation::{
    Cli, ConsoleFormatter, OutputFormatter, ProgressReporter, SimpleProgress,
};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Open the `--log-file` target, creating its directory if needed.
///
/// Never rotates: the file name is used as given.
fn log_file_appender(path: &Path) -> Result<RollingFileAppender> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("invalid log file path: {}", path.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("cannot open log file {}", path.display()))
}

/// Set up stderr logging, plus a file sink when `--log-file` is given.
///
/// The returned guard flushes the file sink on drop.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match &cli.log_file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(log_file_appender(path)?);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };
    config.validate().context("invalid configuration")?;

    if !config.output.use_color(cli.no_color) {
        colored::control::set_override(false);
    }

    let format = config.output.resolve_format(cli.output.map(Into::into));

    // Reject unknown modes before touching the network
    let input = RunComparisonInput::from_selector(cli.quantization.as_deref())?;
    let params = config.to_comparison_params();

    info!("Starting quantlens");

    // === Dependency Injection ===
    let client = Arc::new(
        SearchEngineClient::new(&config.engine).context("failed to create search engine client")?,
    );
    debug!("Search engine client ready for {}", client.base_url());
    let fetcher: Arc<dyn ResultFetcher> = client.clone();

    if cli.health {
        let report = CheckHealthUseCase::new(fetcher, &params).execute().await;
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            _ => print!("{}", ConsoleFormatter::format_health(&report)),
        }
        drop(client);

        if !report.is_healthy() {
            bail!("search engine is {}", report.status());
        }
        return Ok(());
    }

    let use_case = RunComparisonUseCase::new(fetcher, params);

    let output = if cli.quiet || format == OutputFormat::Json {
        use_case.execute(input).await?
    } else if std::io::stderr().is_terminal() {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    } else {
        use_case.execute_with_progress(input, &SimpleProgress).await?
    };

    println!("{}", ConsoleFormatter.render(&output, format));

    if cli.show_query {
        // JSON output already carries both queries; keep stdout parseable
        if format == OutputFormat::Json {
            eprint!("{}", ConsoleFormatter::format_queries(&output));
        } else {
            print!("{}", ConsoleFormatter::format_queries(&output));
        }
    }

    if let Some(target) = &cli.export {
        let path = JsonReportExporter::write(target, &output)
            .with_context(|| format!("failed to export comparison to {}", target.display()))?;
        info!("Exported comparison to {}", path.display());
        if !cli.quiet {
            eprintln!("{} {}", "Exported:".green().bold(), path.display());
        }
    }

    // Release the connection pool before the runtime shuts down
    drop(use_case);
    drop(client);

    Ok(())
}
