//! Photomap CLI - Command-line interface for Photomap
//!
//! Provides commands for:
//! - Capturing, listing, and deleting gallery photos
//! - Driving the location marker board (markers, clicks, refresh, clear)
//! - Viewing configuration
//!
//! The `--platform` flag plays the role of the capability probe: it decides
//! whether the gallery persists in hybrid or web mode.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use photomap_core::config::Config;
use photomap_core::ports::platform::Platform;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{config::ConfigCommand, gallery::GalleryCommand, map::MapCommand};
use output::OutputFormat;

/// Shared context handed to every command
pub struct CliContext {
    pub config: Config,
    pub platform: Platform,
    pub format: OutputFormat,
}

#[derive(Debug, Parser)]
#[command(name = "photomap", version, about = "Photo gallery and map markers")]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Host platform to emulate (hybrid or web)
    #[arg(long, global = true, default_value = "hybrid")]
    platform: Platform,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage the photo gallery
    #[command(subcommand)]
    Gallery(GalleryCommand),
    /// Drive the location marker board
    #[command(subcommand)]
    Map(MapCommand),
    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load_or_default(&config_path);

    // Setup tracing: -v overrides the configured level
    let filter = match cli.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
    tracing::debug!(config = %config_path.display(), platform = %cli.platform, "starting");

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    let ctx = CliContext {
        config,
        platform: cli.platform,
        format,
    };

    match cli.command {
        Commands::Gallery(cmd) => cmd.execute(&ctx).await,
        Commands::Map(cmd) => cmd.execute(&ctx).await,
        Commands::Config(cmd) => cmd.execute(&ctx, &config_path).await,
    }
}
