//! Complete game state and its derived status.

use crate::action::{Move, MoveRejected};
use crate::invariants::assert_invariants;
use crate::meta_board::MetaBoard;
use crate::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// The player to move.
        to_move: Player,
        /// The sub-board that player is constrained to, if any.
        active_target: Option<Position>,
    },
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has an outcome.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(player) => GameStatus::Won(player),
            Outcome::Draw => GameStatus::Draw,
        }
    }
}

/// Complete game state.
///
/// Created empty with X to move and changed only through
/// [`GameState::apply_move`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: MetaBoard,
    /// Current player to move.
    to_move: Player,
}

impl GameState {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        info!("new game");
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &MetaBoard {
        &self.board
    }

    /// Returns the current player.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Legal moves for the player to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board.legal_moves_for(self.to_move)
    }

    /// Returns the outcome once the game is over.
    ///
    /// A meta-board winner ends the game; so does running out of legal
    /// moves, which is a draw.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(winner) = self.board.winner() {
            return Some(Outcome::Winner(winner));
        }
        if self.legal_moves().is_empty() {
            return Some(Outcome::Draw);
        }
        None
    }

    /// Returns true once the game is over.
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match self.outcome() {
            Some(outcome) => outcome.into(),
            None => GameStatus::InProgress {
                to_move: self.to_move,
                active_target: self.board.active_target(),
            },
        }
    }

    /// Applies a move for `player`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejected::NotYourTurn`] if `player` is not to move, or
    /// the board's reason if the move is illegal. A rejected move leaves
    /// the state untouched.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn apply_move(&mut self, mov: Move, player: Player) -> Result<(), MoveRejected> {
        if self.is_terminal() {
            return Err(MoveRejected::GameOver);
        }
        if player != self.to_move {
            debug!("move out of turn");
            return Err(MoveRejected::NotYourTurn(player));
        }

        self.board.apply(mov, player)?;
        self.to_move = player.opponent();

        assert_invariants(self);
        Ok(())
    }

    /// Builds a state from a prepared board.
    #[cfg(test)]
    pub(crate) fn from_parts(board: MetaBoard, to_move: Player) -> Self {
        Self { board, to_move }
    }
}
