//! Strictly Gomoku - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use strictly_gomoku::{BoardSize, GameConfig};
use tracing::{info, instrument};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Play(args)) => run_play(args).await,
        None => {
            let args = PlayArgs {
                config: strictly_gomoku::DEFAULT_CONFIG_PATH.into(),
                ..PlayArgs::default()
            };
            run_play(args).await
        }
        Some(Command::Config { config }) => print_config(&config),
    }
}

/// Run the terminal game
async fn run_play(args: PlayArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let size = args.size.map(BoardSize::new).transpose()?;
    info!(?size, "Launching TUI");
    strictly_gomoku::run_tui(config, size).await
}

/// Loads the config file and applies command-line overrides
#[instrument(skip(args), fields(config_path = %args.config.display()))]
fn resolve_config(args: &PlayArgs) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(&args.config)?;

    if let Some(size) = args.size {
        config = config.with_board_size(size)?;
    }
    if let Some(delay_ms) = args.delay_ms {
        config = config.with_computer_delay_ms(delay_ms);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(log_file) = &args.log_file {
        config = config.with_log_file(log_file.clone());
    }

    Ok(config)
}

/// Print the resolved configuration
fn print_config(path: &std::path::Path) -> Result<()> {
    let config = GameConfig::load_or_default(path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
