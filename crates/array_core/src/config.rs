//! Generator configuration management.
//!
//! Handles loading configuration from TOML files and environment variables.
//! Command-line merging lives in the service layer.

use crate::types::Layout;
use crate::workload::{Workload, DEFAULT_DELAY};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable selecting the array layout.
pub const ENV_LAYOUT: &str = "RANDARRAY_LAYOUT";
/// Environment variable holding the delay in milliseconds.
pub const ENV_DELAY_MS: &str = "RANDARRAY_DELAY_MS";
/// Environment variable holding the RNG seed.
pub const ENV_SEED: &str = "RANDARRAY_SEED";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown layout name.
    #[error("Invalid layout: {0}. Must be one of: square, two-column")]
    InvalidLayout(String),

    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// A numeric setting could not be parsed.
    #[error("Invalid value for {key}: {value}")]
    InvalidNumber {
        /// Setting name
        key: String,
        /// Raw value
        value: String,
    },

    /// Config file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Generator configuration.
///
/// Unspecified TOML fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Column layout of generated arrays
    #[serde(deserialize_with = "deserialize_layout")]
    pub layout: Layout,
    /// Blocking delay after allocation, in milliseconds
    pub delay_ms: u64,
    /// RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

fn deserialize_layout<'de, D>(deserializer: D) -> Result<Layout, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Layout::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            layout: Layout::Square,
            delay_ms: DEFAULT_DELAY.as_millis() as u64,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Create a new GeneratorConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with the given layout.
    pub fn with_layout(layout: Layout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Workload derived from `delay_ms`.
    pub fn workload(&self) -> Workload {
        Workload::from_millis(self.delay_ms)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply `RANDARRAY_*` environment overrides on top of `self`.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Keys are the `ENV_*` constants of this module.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(layout) = lookup(ENV_LAYOUT) {
            self.layout = Layout::from_str(&layout)?;
        }

        if let Some(delay) = lookup(ENV_DELAY_MS) {
            self.delay_ms = parse_number(ENV_DELAY_MS, &delay)?;
        }

        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(parse_number(ENV_SEED, &seed)?);
        }

        Ok(())
    }
}

fn parse_number(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Log levels supported by the service layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything
    Trace,
    /// Debugging detail
    Debug,
    /// Status messages
    #[default]
    Info,
    /// Warnings only
    Warn,
    /// Errors only
    Error,
}

impl std::str::FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}
