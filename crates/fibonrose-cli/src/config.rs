// crates/fibonrose-cli/src/config.rs
//
// CLI configuration.
// Loaded from a TOML file or populated with sensible defaults.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use fibonrose_core::FibonroseError;

use crate::output::OutputFormat;

/// Default location of the config file.
pub const DEFAULT_CONFIG_PATH: &str = "~/.fibonrose/config.toml";

/// Runtime configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CliConfig {
    /// Output format: "table" or "json".
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Log level: "trace", "debug", "info", "warn", "error".
    /// Overridden by `RUST_LOG` when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns `Ok(None)` if the file does not exist, and an error if it
    /// exists but cannot be read or parsed.
    pub fn load(path: &str) -> Result<Option<Self>, FibonroseError> {
        let path = expand_tilde(path);
        if !Path::new(&path).exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        Self::from_toml(&contents).map(Some)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, FibonroseError> {
        toml::from_str(contents).map_err(|e| FibonroseError::Config(e.to_string()))
    }
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest).display().to_string();
        }
    }
    path.to_string()
}
