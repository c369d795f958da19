//! Configuration management for groupcolor.
//!
//! Centralizes the few runtime options (output format and log level) and
//! resolves them from CLI overrides, environment variables and defaults, in
//! that order of precedence.

use std::fmt;
use std::str::FromStr;

use tracing::Level;

use crate::errors::ConfigError;

/// Environment variable holding the default output format
pub const FORMAT_ENV: &str = "GROUPCOLOR_FORMAT";
/// Environment variable holding the default log level
pub const LOG_ENV: &str = "GROUPCOLOR_LOG";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Output configuration
    pub output: OutputConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Output configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// How colors are printed
    pub format: OutputFormat,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Maximum level for the stderr subscriber
    pub level: Level,
}

/// How a color is rendered on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// `255 0 0`
    #[default]
    Plain,
    /// `#ff0000`
    Hex,
    /// `[255,0,0]`
    Json,
}

/// CLI configuration overrides
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Log level override
    pub log_level: Option<Level>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: if cfg!(debug_assertions) {
                Level::DEBUG
            } else {
                Level::INFO
            },
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "hex" => Ok(OutputFormat::Hex),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Hex => "hex",
            OutputFormat::Json => "json",
        })
    }
}

/// Parses a tracing level name (`trace`, `debug`, `info`, `warn`, `error`).
pub fn parse_log_level(s: &str) -> Result<Level, ConfigError> {
    s.trim()
        .parse::<Level>()
        .map_err(|_| ConfigError::InvalidLogLevel(s.to_string()))
}

impl Config {
    /// Load configuration with CLI overrides
    pub fn load(cli_overrides: Option<CliOverrides>) -> Self {
        let mut config = Self::default();
        let overrides = cli_overrides.unwrap_or_default();

        // CLI overrides take precedence; invalid environment values are ignored
        match overrides.format {
            Some(format) => config.output.format = format,
            None => {
                if let Some(format) = env_value(FORMAT_ENV, |v| v.parse::<OutputFormat>()) {
                    config.output.format = format;
                }
            }
        }

        match overrides.log_level {
            Some(level) => config.logging.level = level,
            None => {
                if let Some(level) = env_value(LOG_ENV, parse_log_level) {
                    config.logging.level = level;
                }
            }
        }

        config
    }

    /// Get the output format
    pub fn output_format(&self) -> OutputFormat {
        self.output.format
    }

    /// Get the log level
    pub fn log_level(&self) -> Level {
        self.logging.level
    }
}

fn env_value<T>(name: &str, parse: impl Fn(&str) -> Result<T, ConfigError>) -> Option<T> {
    std::env::var(name).ok().and_then(|value| parse(&value).ok())
}

impl CliOverrides {
    /// Create CLI overrides from CLI arguments
    pub fn from_cli_args(format: Option<OutputFormat>, log_level: Option<Level>) -> Self {
        Self { format, log_level }
    }
}
