//! Output formatting.
//!
//! Resolves the layered settings into a [`Settings`] and turns a
//! [`ClockTime`] into the line the binary prints.

use mahashaa_core::{ClockTime, Phrasing, Vocalization, compose, reverse_for_display};
use serde::Serialize;

use crate::cli::Cli;
use crate::config::CliConfig;
use crate::error::CliError;

/// Effective output settings after config, environment, and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Whether to emit nikud.
    pub vocalization: Vocalization,
    /// Whether to reverse for terminals without bidi support.
    pub visual_order: bool,
    /// Whether to print JSON.
    pub json: bool,
}

impl Settings {
    /// Flags can only turn features off; `--plain` and `--logical` win over
    /// whatever the config says.
    pub fn resolve(cli: &Cli, config: &CliConfig) -> Self {
        Self {
            vocalization: Vocalization::from(config.nikud && !cli.plain),
            visual_order: config.visual_order && !cli.logical,
            json: cli.json,
        }
    }
}

/// JSON shape of `--json` output. Text is always in logical order.
#[derive(Debug, Serialize)]
pub struct Rendering {
    /// The input time, `HH:MM`.
    pub time: String,
    /// The phrase, vocalized unless disabled.
    pub phrase: String,
    /// The phrase without nikud.
    pub plain: String,
    /// How the phrase was built.
    pub strategy: Phrasing,
}

impl Rendering {
    /// Build the rendering of `time` at the given vocalization.
    pub fn new(time: ClockTime, vocalization: Vocalization) -> Self {
        Self {
            time: time.to_string(),
            phrase: compose(time, vocalization),
            plain: compose(time, Vocalization::Plain),
            strategy: Phrasing::select(time),
        }
    }
}

/// Produce the line to print for `time`.
///
/// # Errors
///
/// Returns [`CliError::Json`] if JSON serialization fails.
pub fn render(time: ClockTime, settings: Settings) -> Result<String, CliError> {
    if settings.json {
        let rendering = Rendering::new(time, settings.vocalization);
        return Ok(serde_json::to_string(&rendering)?);
    }
    let phrase = compose(time, settings.vocalization);
    if settings.visual_order {
        Ok(reverse_for_display(&phrase))
    } else {
        Ok(phrase)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;

    use super::*;

    fn at(hour: u8, minute: u8) -> ClockTime {
        ClockTime::new(hour, minute).unwrap()
    }

    const fn settings(vocalization: Vocalization, visual_order: bool, json: bool) -> Settings {
        Settings {
            vocalization,
            visual_order,
            json,
        }
    }

    #[test]
    fn flags_override_config() {
        let config = CliConfig::default();
        let cli = Cli::try_parse_from(["mahashaa", "--plain", "--logical"]).unwrap();
        assert_eq!(
            Settings::resolve(&cli, &config),
            settings(Vocalization::Plain, false, false)
        );
    }

    #[test]
    fn config_applies_without_flags() {
        let config = CliConfig {
            nikud: false,
            visual_order: true,
            log_level: "warn".to_owned(),
        };
        let cli = Cli::try_parse_from(["mahashaa", "--json"]).unwrap();
        assert_eq!(
            Settings::resolve(&cli, &config),
            settings(Vocalization::Plain, true, true)
        );
    }

    #[test]
    fn logical_plain() {
        let out = render(at(19, 45), settings(Vocalization::Plain, false, false)).unwrap();
        assert_eq!(out, "רבע לשמונה בערב");
    }

    #[test]
    fn visual_plain() {
        let out = render(at(19, 45), settings(Vocalization::Plain, true, false)).unwrap();
        assert_eq!(out, "ברעב הנומשל עבר");
    }

    #[test]
    fn visual_vocalized_reverses_back() {
        let time = at(10, 10);
        let out = render(time, settings(Vocalization::Full, true, false)).unwrap();
        assert_eq!(
            reverse_for_display(&out),
            compose(time, Vocalization::Full)
        );
    }

    #[test]
    fn json_is_logical_and_tagged() {
        let out = render(at(23, 50), settings(Vocalization::Plain, true, true)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["time"], "23:50");
        assert_eq!(value["phrase"], "עשרה לחצות");
        assert_eq!(value["plain"], "עשרה לחצות");
        assert_eq!(value["strategy"]["strategy"], "relative");
        assert_eq!(value["strategy"]["remaining"], 10);
    }

    #[test]
    fn json_carries_both_forms() {
        let time = at(7, 0);
        let out = render(time, settings(Vocalization::Full, false, true)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["phrase"], compose(time, Vocalization::Full));
        assert_eq!(value["plain"], "שבע בבוקר");
    }
}
