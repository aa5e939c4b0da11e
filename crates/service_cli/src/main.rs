//! randarray CLI - Command Line Front End for Random Array Generation
//!
//! # Commands
//!
//! - `randarray generate --size <n>` - Generate one array on this thread
//! - `randarray worker --size <n> --tasks <k>` - Generate arrays on a background worker
//! - `randarray check` - Show the resolved configuration
//!
//! # Configuration
//!
//! Settings come from `--config <file>`, then `RANDARRAY_*` environment
//! variables, then flags; later sources win.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{build_config, CliArgs};

/// Random array generator CLI
#[derive(Parser)]
#[command(name = "randarray")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Array layout (square, two-column)
    #[arg(short, long, global = true)]
    layout: Option<String>,

    /// Delay after allocation, in milliseconds
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// RNG seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one array on the calling thread
    Generate {
        /// Number of rows
        #[arg(short, long)]
        size: usize,

        /// Output format (table, json, summary)
        #[arg(short, long, default_value = "summary")]
        format: String,
    },

    /// Generate arrays on a background worker thread
    Worker {
        /// Number of rows per array
        #[arg(short, long)]
        size: usize,

        /// Number of tasks to submit
        #[arg(short, long, default_value = "1")]
        tasks: usize,
    },

    /// Show the resolved configuration
    Check,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            layout: self.layout.clone(),
            delay_ms: self.delay_ms,
            seed: self.seed,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        layout = %config.generator.layout,
        delay_ms = config.generator.delay_ms,
        seed = ?config.generator.seed,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Generate { size, format } => {
            commands::generate::run(&config.generator, size, &format)?
        }
        Commands::Worker { size, tasks } => commands::worker::run(&config.generator, size, tasks)?,
        Commands::Check => commands::check::run(&config),
    }

    Ok(())
}
