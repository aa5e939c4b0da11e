//! CLI configuration management
//!
//! Resolves the generator configuration and log level from a TOML file,
//! environment variables and command-line flags.

use array_core::config::{ConfigError, GeneratorConfig, LogLevel};
use array_core::Layout;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "RANDARRAY_LOG_LEVEL";

/// Resolved CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Generator settings
    pub generator: GeneratorConfig,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply overrides from an arbitrary key lookup (environment by default).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        self.generator.apply_overrides(lookup)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(layout) = &cli.layout {
            self.generator.layout = Layout::from_str(layout)?;
        }
        if let Some(delay_ms) = cli.delay_ms {
            self.generator.delay_ms = delay_ms;
        }
        if let Some(seed) = cli.seed {
            self.generator.seed = Some(seed);
        }
        Ok(())
    }
}

/// Configuration-relevant CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Layout override
    pub layout: Option<String>,
    /// Delay override in milliseconds
    pub delay_ms: Option<u64>,
    /// Seed override
    pub seed: Option<u64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<AppConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with<F>(cli: &CliArgs, env: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    config.apply_overrides(env)?;
    config.merge_with_cli(cli)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use array_core::config::{ENV_DELAY_MS, ENV_LAYOUT, ENV_SEED};
    use std::io::Write;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config = build_config_with(&CliArgs::default(), no_env).unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.generator, GeneratorConfig::default());
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"

            [generator]
            layout = "two-column"
            delay_ms = 100
            seed = 3
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.generator.layout, Layout::TwoColumn);
        assert_eq!(config.generator.delay_ms, 100);
        assert_eq!(config.generator.seed, Some(3));
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: AppConfig = toml::from_str("[generator]\nseed = 8").unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.generator.delay_ms, 5000);
        assert_eq!(config.generator.seed, Some(8));
    }

    #[test]
    fn test_precedence() {
        let path = std::env::temp_dir().join(format!("randarray-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[generator]\nlayout = \"square\"\ndelay_ms = 900\nseed = 1").unwrap();

        let env = |key: &str| match key {
            k if k == ENV_DELAY_MS => Some("400".to_string()),
            k if k == ENV_SEED => Some("2".to_string()),
            k if k == ENV_LAYOUT => Some("two-column".to_string()),
            _ => None,
        };
        let cli = CliArgs {
            config_file: Some(path.clone()),
            seed: Some(3),
            ..Default::default()
        };

        let config = build_config_with(&cli, env).unwrap();
        std::fs::remove_file(&path).unwrap();

        // file < env
        assert_eq!(config.generator.delay_ms, 400);
        assert_eq!(config.generator.layout, Layout::TwoColumn);
        // env < cli
        assert_eq!(config.generator.seed, Some(3));
    }

    #[test]
    fn test_cli_merge() {
        let mut config = AppConfig::default();
        let cli = CliArgs {
            log_level: Some("warn".to_string()),
            layout: Some("2col".to_string()),
            delay_ms: Some(0),
            ..Default::default()
        };

        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.generator.layout, Layout::TwoColumn);
        assert_eq!(config.generator.delay_ms, 0);
    }

    #[test]
    fn test_invalid_cli_layout() {
        let cli = CliArgs {
            layout: Some("round".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with(&cli, no_env),
            Err(ConfigError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_invalid_env_log_level() {
        let env = |key: &str| (key == ENV_LOG_LEVEL).then(|| "loud".to_string());
        assert!(matches!(
            build_config_with(&CliArgs::default(), env),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/randarray.toml")),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with(&cli, no_env),
            Err(ConfigError::FileError(_))
        ));
    }
}
