//! Error types for the `mahashaa` binary.
//!
//! [`CliError`] is the top-level error that wraps every failure mode
//! between reading the configuration and printing the phrase.

use mahashaa_core::TimeError;

use crate::config::ConfigError;

/// Top-level error for the `mahashaa` binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The time to phrase could not be determined.
    #[error("time error: {source}")]
    Time {
        /// The underlying time error.
        #[from]
        source: TimeError,
    },

    /// JSON output could not be rendered.
    #[error("json error: {source}")]
    Json {
        /// The underlying serializer error.
        #[from]
        source: serde_json::Error,
    },
}
