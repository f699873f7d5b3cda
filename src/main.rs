use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use find_globals::config::{Config, DEFAULT_TOOL};
use find_globals::output::{self, Format};
use find_globals::{GoOutlineTool, ScanReport, Scanner};

#[derive(Parser)]
#[command(name = "find-globals")]
#[command(
    author,
    version,
    about = "Flags package-level mutable variables reported by an outline tool"
)]
struct Cli {
    /// Files to scan, in order
    #[arg(required = true, value_name = "FILE")]
    files: Vec<String>,

    /// Outline tool executable (must support `-f <file>` with JSON output)
    #[arg(long, env = "FIND_GLOBALS_TOOL")]
    tool: Option<String>,

    /// Skip this file path entirely (repeatable)
    #[arg(long, value_name = "PATH")]
    exclude: Vec<String>,

    /// Config file path (ignored if the file does not exist)
    #[arg(long, default_value = "find-globals.toml")]
    config: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: Format,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging. Stdout is reserved for violation output, so logs go
    // to stderr.
    let filter = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli) {
        Ok(report) if report.has_violations() => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ScanReport> {
    let config = if cli.config.exists() {
        Config::from_file(&cli.config)?
    } else {
        Config::default()
    };

    let tool = cli
        .tool
        .or(config.tool)
        .unwrap_or_else(|| DEFAULT_TOOL.to_string());

    let exclude: HashSet<String> = config.exclude.into_iter().chain(cli.exclude).collect();

    let source = GoOutlineTool::new(tool);
    let scanner = Scanner::new(&source, exclude);

    let report = match cli.format {
        Format::Text => scanner.scan(&cli.files, |violation| println!("{violation}"))?,
        Format::Json => {
            let report = scanner.scan(&cli.files, |_| {})?;
            output::write_json(&mut std::io::stdout().lock(), &report)?;
            report
        }
    };

    info!(
        "scanned {} file(s), skipped {}, found {} global variable(s)",
        report.files_scanned,
        report.files_skipped,
        report.violations.len()
    );

    Ok(report)
}
