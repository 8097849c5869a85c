//! Configuration loading for the `mahashaa` binary.
//!
//! Settings come from an optional YAML file (`mahashaa.yaml` in the working
//! directory, or the path given with `--config`), then environment
//! variables, then command-line flags, each layer overriding the last.
//!
//! ```yaml
//! nikud: true          # MAHASHAA_NIKUD
//! visual_order: true   # MAHASHAA_VISUAL_ORDER
//! log_level: warn      # RUST_LOG takes precedence
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Config file looked for in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "mahashaa.yaml";

/// Environment override for [`CliConfig::nikud`].
const ENV_NIKUD: &str = "MAHASHAA_NIKUD";

/// Environment override for [`CliConfig::visual_order`].
const ENV_VISUAL_ORDER: &str = "MAHASHAA_VISUAL_ORDER";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override is not a boolean.
    #[error("invalid {name}: {value:?} is not true or false")]
    Env {
        /// The variable name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Settings for one run of the binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CliConfig {
    /// Emit nikud.
    #[serde(default = "default_true")]
    pub nikud: bool,

    /// Reverse the phrase so it reads correctly on terminals without
    /// bidirectional text support.
    #[serde(default = "default_true")]
    pub visual_order: bool,

    /// Fallback tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            nikud: true,
            visual_order: true,
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Load configuration for this run.
    ///
    /// Reads `explicit` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else starts from defaults. Environment overrides are applied last.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if a named file cannot be read,
    /// [`ConfigError::Yaml`] if it is not valid YAML, or
    /// [`ConfigError::Env`] if an override is malformed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None if fallback.is_file() => Self::from_file(fallback)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Read and parse a YAML file, without environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] or [`ConfigError::Yaml`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string. An empty document yields
    /// the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Override settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Env`] if a set variable is not a boolean.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(&|name| std::env::var(name).ok())
    }

    /// Override settings from `lookup`, which maps a variable name to its
    /// value when set.
    fn apply_overrides(
        &mut self,
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(nikud) = bool_override(lookup, ENV_NIKUD)? {
            self.nikud = nikud;
        }
        if let Some(visual_order) = bool_override(lookup, ENV_VISUAL_ORDER)? {
            self.visual_order = visual_order;
        }
        Ok(())
    }
}

/// Read a boolean override. Accepts `true`/`false` and `1`/`0`.
fn bool_override(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<bool>, ConfigError> {
    let Some(value) = lookup(name) else {
        return Ok(None);
    };
    match value.trim().to_lowercase().as_str() {
        "true" | "1" => Ok(Some(true)),
        "false" | "0" => Ok(Some(false)),
        _ => Err(ConfigError::Env { name, value }),
    }
}

const fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_owned()
}
