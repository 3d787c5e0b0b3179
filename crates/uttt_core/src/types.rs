//! Core domain types for ultimate tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
///
/// Parses case-insensitively from `"x"` / `"o"` so command-line flags and
/// config files can name a seat directly.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    #[default]
    #[serde(alias = "x")]
    X,
    /// Player O (goes second).
    #[serde(alias = "o")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A single cell mark, on a sub-board or on the meta-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(p) => Some(p),
        }
    }

    /// Returns true if no player has marked this square.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }

    /// Single-character symbol used by text renderings.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

impl From<Option<Player>> for Square {
    fn from(winner: Option<Player>) -> Self {
        winner.map_or(Square::Empty, Square::Occupied)
    }
}
