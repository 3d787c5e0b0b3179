//! Terminal front-end for ultimate tic-tac-toe.
//!
//! The rules, the constraint-based opponent and the turn controller live in
//! [`uttt_core`]; this crate adds configuration, a polling orchestrator and
//! the terminal UI.
//!
//! # Architecture
//!
//! - **GameConfig**: TOML settings with defaults
//! - **Orchestrator**: drives the controller, delays automated moves and emits [`GameEvent`]s
//! - **tui**: ratatui board rendering with keyboard and mouse input
//!
//! # Example
//!
//! ```
//! use uttt::{run_headless, Opponent};
//!
//! let game = run_headless(Opponent::FirstLegal);
//! assert!(game.moves > 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;

pub mod tui;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};
pub use orchestrator::{
    GameEvent, HeadlessGame, Opponent, Orchestrator, Summary, run_headless, run_series,
};
