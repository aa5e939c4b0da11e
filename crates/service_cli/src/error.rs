//! CLI error type.

use array_core::config::ConfigError;
use array_core::GeneratorError;
use array_worker::WorkerError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Array generation failed.
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    /// Background worker failed.
    #[error(transparent)]
    Worker(#[from] WorkerError),

    /// Unknown `--format` value.
    #[error("Invalid output format: {0}. Must be one of: table, json, summary")]
    InvalidFormat(String),

    /// JSON encoding failed.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result type for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
