//! Command-line front end for colloquial Hebrew clock times.
//!
//! ```text
//! $ mahashaa 19:45 --plain --logical
//! רבע לשמונה בערב
//! ```
//!
//! With no time argument the current local time is phrased. Output is
//! reversed for terminals without bidirectional text support unless
//! `--logical` is given or `visual_order: false` is configured.

mod cli;
mod config;
mod error;
mod render;

use clap::Parser;
use mahashaa_core::ClockTime;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::render::{Settings, render};

/// Application entry point.
///
/// Parses arguments, loads configuration, initializes logging on stderr,
/// then prints one phrase to stdout.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or the phrase cannot
/// be rendered.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref()).map_err(CliError::from)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level(&config.log_level))),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    info!(
        nikud = config.nikud,
        visual_order = config.visual_order,
        "configuration loaded"
    );

    let output = run(&cli, &config)?;
    println!("{output}");
    Ok(())
}

/// Resolve settings and render the requested time.
fn run(cli: &Cli, config: &CliConfig) -> Result<String, CliError> {
    let settings = Settings::resolve(cli, config);
    let time = match cli.time {
        Some(time) => time,
        None => ClockTime::now()?,
    };
    debug!(%time, ?settings, "rendering");
    render(time, settings)
}
