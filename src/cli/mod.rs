//! Command-line interface for city-demographics
//!
//! Provides `merge` and `verify` subcommands. Both work on fixed file names
//! in the current directory.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod merge;
mod verify;

/// Merge CSV demographic columns into the properties of city features in a GeoJSON file
#[derive(Parser)]
#[command(name = "city-demographics")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge demographics.csv into cities_final.json, overwriting it
    Merge,

    /// Summarize demographic coverage of the merged cities_final.json
    Verify,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Merge => merge::run(),
        Commands::Verify => verify::run(),
    }
}
