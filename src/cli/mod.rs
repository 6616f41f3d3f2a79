//! Command-line interface definitions.

pub mod check;
pub mod outcomes;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tradepreview - inspect market snapshots and preview settings.
#[derive(Parser, Debug)]
#[command(name = "tradepreview")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run validation checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// List the selectable outcomes of a market snapshot
    Outcomes(OutcomesArgs),
}

/// Subcommands for `tradepreview check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
    /// Validate a market snapshot file
    Market(MarketPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Shared argument for commands that only need a snapshot path.
#[derive(Parser, Debug)]
pub struct MarketPathArg {
    /// Path to a JSON market snapshot
    pub market: PathBuf,
}

/// Arguments for the `outcomes` subcommand.
#[derive(Parser, Debug)]
pub struct OutcomesArgs {
    /// Path to a JSON market snapshot
    pub market: PathBuf,

    /// Path to configuration file (palette and logging)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}
