//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use mahashaa_core::ClockTime;

/// Print a time of day as a colloquial Hebrew phrase.
#[derive(Debug, Parser)]
#[command(name = "mahashaa")]
#[command(version)]
#[command(about = "Print a time of day as a colloquial Hebrew phrase")]
pub struct Cli {
    /// Time to phrase, as HH:MM. Defaults to the current local time.
    pub time: Option<ClockTime>,

    /// Omit nikud.
    #[arg(long)]
    pub plain: bool,

    /// Print in logical order instead of reversing for the terminal.
    #[arg(long)]
    pub logical: bool,

    /// Print a JSON object (always in logical order).
    #[arg(long)]
    pub json: bool,

    /// YAML config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Fallback log filter for this verbosity, given the configured one.
    pub const fn log_level<'a>(&self, configured: &'a str) -> &'a str {
        match self.verbose {
            0 => configured,
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let cli = Cli::try_parse_from(["mahashaa"]).unwrap();
        assert!(cli.time.is_none());
        assert!(!cli.plain && !cli.logical && !cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn time_and_flags() {
        let cli =
            Cli::try_parse_from(["mahashaa", "19:45", "--plain", "--logical", "-vv"]).unwrap();
        assert_eq!(cli.time, Some(ClockTime::new(19, 45).unwrap()));
        assert!(cli.plain);
        assert!(cli.logical);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn config_path() {
        let cli = Cli::try_parse_from(["mahashaa", "--config", "alt.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("alt.yaml")));
    }

    #[test]
    fn malformed_time_is_rejected() {
        assert!(Cli::try_parse_from(["mahashaa", "quarter"]).is_err());
        assert!(Cli::try_parse_from(["mahashaa", "25:00"]).is_err());
    }

    #[test]
    fn verbosity_raises_log_level() {
        let quiet = Cli::try_parse_from(["mahashaa"]).unwrap();
        assert_eq!(quiet.log_level("warn"), "warn");
        let verbose = Cli::try_parse_from(["mahashaa", "-v"]).unwrap();
        assert_eq!(verbose.log_level("warn"), "info");
        let very = Cli::try_parse_from(["mahashaa", "-vvv"]).unwrap();
        assert_eq!(very.log_level("warn"), "debug");
    }
}
