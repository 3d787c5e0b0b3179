//! uttt - Unified CLI
//!
//! Play ultimate tic-tac-toe in the terminal or watch automated games.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use uttt::{GameConfig, Opponent, run_series};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())
        .context("Failed to load game configuration")?;

    match cli.command {
        Command::Play {
            automated,
            delay_ms,
        } => {
            let mut config = config;
            if let Some(player) = automated {
                config = config.with_automated_player(player);
            }
            if let Some(ms) = delay_ms {
                config = config.with_ai_delay_ms(ms);
            }
            run_play(&config)
        }
        Command::Auto { games, opponent } => run_auto(&config, games, opponent),
    }
}

fn env_filter(config: &GameConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the terminal UI, logging to a file
fn run_play(config: &GameConfig) -> Result<()> {
    initialize_file_tracing(config.log_file(), config)?;
    info!(
        automated = %config.automated_player(),
        delay_ms = config.ai_delay_ms(),
        "Starting game"
    );
    uttt::tui::run_tui(config)
}

/// Run headless games and print each final board
#[instrument(skip(config))]
fn run_auto(config: &GameConfig, games: u32, opponent: Opponent) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting headless games");
    let (results, summary) = run_series(opponent, games);
    for (index, game) in results.iter().enumerate() {
        println!("Game {} ({} moves): {}", index + 1, game.moves, game.outcome);
        println!("{}", game.board.display());
        println!();
    }
    println!("{}", summary);
    Ok(())
}

fn initialize_file_tracing(path: &Path, config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
