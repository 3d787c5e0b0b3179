//! Command-line interface for uttt.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uttt::Opponent;
use uttt_core::Player;

/// Ultimate tic-tac-toe against a constraint-based opponent
#[derive(Parser, Debug)]
#[command(name = "uttt")]
#[command(about = "Ultimate tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the game config file (defaults to uttt.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the automated opponent in the terminal UI
    Play {
        /// Mark played by the automated opponent (x or o)
        #[arg(long)]
        automated: Option<Player>,

        /// Milliseconds the automated opponent waits before moving
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Run automated games without a UI and print the results
    Auto {
        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,

        /// Strategy playing X against the constraint selector
        #[arg(long, value_enum, default_value_t = Opponent::Constraint)]
        opponent: Opponent,
    },
}
