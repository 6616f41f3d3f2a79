//! Configuration loading and validation.
//!
//! Every section is optional; a missing file section falls back to defaults.

use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::{Palette, DEFAULT_COLORS};
use crate::error::{ConfigError, Result};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "info".into()
}

fn default_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

/// Colors assigned to discrete outcomes, in order.
#[derive(Debug, Clone, Deserialize)]
pub struct PaletteConfig {
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
}

fn default_colors() -> Vec<String> {
    DEFAULT_COLORS.iter().map(|c| (*c).to_string()).collect()
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: default_colors(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!(
                    "expected \"pretty\" or \"json\", got \"{}\"",
                    self.logging.format
                ),
            }
            .into());
        }
        if self.palette.colors.is_empty() {
            return Err(ConfigError::MissingField {
                field: "palette.colors",
            }
            .into());
        }
        if let Some(bad) = self.palette.colors.iter().find(|c| !is_hex_color(c)) {
            return Err(ConfigError::InvalidValue {
                field: "palette.colors",
                reason: format!("\"{bad}\" is not a #rgb or #rrggbb color"),
            }
            .into());
        }
        Ok(())
    }

    /// The outcome palette described by this config.
    pub fn palette(&self) -> Result<Palette> {
        Ok(Palette::try_new(self.palette.colors.clone())?)
    }

    /// Install the global `tracing` subscriber. Logs go to stderr so that
    /// command output on stdout stays machine-readable.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

fn is_hex_color(color: &str) -> bool {
    color
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
