use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use odometer_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "odometer")]
#[command(author, version, about = "A rolling-digit odometer counter for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a config file (defaults to ~/.config/odometer/config.toml)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive counter
    Run {
        /// Number shown at startup
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        from: i64,
        /// Step the counter automatically every MS milliseconds
        #[arg(short, long, value_name = "MS")]
        auto: Option<u64>,
        /// Amount added per step (overrides the config)
        #[arg(short, long, allow_hyphen_values = true)]
        step: Option<i64>,
    },
    /// Roll once from one number to another, then exit
    Roll {
        #[arg(allow_hyphen_values = true)]
        from: i64,
        #[arg(allow_hyphen_values = true)]
        to: i64,
    },
    /// Print the frames and timings of a roll without animating it
    Plan {
        #[arg(allow_hyphen_values = true)]
        from: i64,
        #[arg(allow_hyphen_values = true)]
        to: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration
    Config {
        /// Write it to the config file
        #[arg(long)]
        write: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .context("Failed to load configuration")?;
    let config = Arc::new(config);

    // The terminal UI owns stdout, so animated commands log to a file
    let to_file = matches!(
        cli.command,
        Some(Commands::Run { .. }) | Some(Commands::Roll { .. }) | None
    );
    init_logging(&config, to_file)?;

    match cli.command {
        Some(Commands::Run { from, auto, step }) => {
            commands::run::run(config, from, auto, step).await
        }
        None => commands::run::run(config, 0, None, None).await,
        Some(Commands::Roll { from, to }) => commands::roll::run(config, from, to).await,
        Some(Commands::Plan { from, to, json }) => commands::plan::run(&config, from, to, json),
        Some(Commands::Config { write }) => {
            let path = cli.config.unwrap_or_else(AppConfig::config_path);
            commands::config::run(&config, &path, write)
        }
    }
}

/// Install the global subscriber; `RUST_LOG` overrides `general.log_level`
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if to_file {
        let path = AppConfig::log_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
