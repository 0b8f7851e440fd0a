//! Command-line interface for strictly_gomoku.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Gomoku - four in a row against the computer
#[derive(Parser, Debug)]
#[command(name = "strictly_gomoku")]
#[command(about = "Four-in-a-row on an N×N board against a random opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play(PlayArgs),

    /// Print the resolved configuration as TOML
    Config {
        /// Path to the config file
        #[arg(short, long, default_value = strictly_gomoku::DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
}

/// Options for a play session
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Board size (4-10). Skips the size-selection screen.
    #[arg(short, long)]
    pub size: Option<u8>,

    /// Pause before the computer moves, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to the config file
    #[arg(short, long, default_value = strictly_gomoku::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Log file (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
