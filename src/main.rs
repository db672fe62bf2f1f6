//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `netintel` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - JSON output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use netintel::security::sanitize_value;
use netintel::{init_logger_with, Analyzer, Config, LogFormat, LogLevel};

/// Multi-source IP intelligence reports.
#[derive(Parser, Debug)]
#[command(name = "netintel", version, about)]
struct Cli {
    /// IP addresses or hostnames to analyze
    #[arg(required = true)]
    targets: Vec<String>,

    /// Per-source request timeout in seconds
    #[arg(long, default_value_t = netintel::config::PROVIDER_TIMEOUT_SECS)]
    timeout: u64,

    /// OpenWeather API key (falls back to OPENWEATHER_API_KEY)
    #[arg(long)]
    weather_api_key: Option<String>,

    /// Minimum log level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Log output format
    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// HTML-escape string values in the output
    #[arg(long)]
    sanitize: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists). This allows
    // setting OPENWEATHER_API_KEY in .env without exporting it manually.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = Config {
        provider_timeout_secs: cli.timeout,
        weather_api_key: cli
            .weather_api_key
            .clone()
            .or_else(|| std::env::var("OPENWEATHER_API_KEY").ok()),
        ..Default::default()
    };

    let analyzer = Analyzer::new(&config).context("Failed to initialize analysis pipeline")?;

    let output = if cli.targets.len() == 1 {
        match analyzer.analyze(&cli.targets[0]).await {
            Ok(report) => serde_json::to_value(&report)?,
            Err(e) => {
                eprintln!("netintel error: {e:#}");
                process::exit(1);
            }
        }
    } else {
        let entries = analyzer.analyze_bulk(&cli.targets).await;
        serde_json::to_value(&entries)?
    };

    let output = if cli.sanitize {
        sanitize_value(&output)
    } else {
        output
    };

    if cli.pretty {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", serde_json::to_string(&output)?);
    }
    Ok(())
}
