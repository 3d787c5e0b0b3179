//! Ultimate tic-tac-toe game logic.
//!
//! Nine tic-tac-toe sub-boards arranged in a 3x3 meta-board. The cell a
//! player marks names the sub-board the opponent must play in next; when
//! that sub-board is already won or full the opponent may play anywhere.
//!
//! # Architecture
//!
//! - **SubBoard**: one local board with a cached winner
//! - **MetaBoard**: legality, the send-to rule and meta-level win detection
//! - **MoveSelector**: the constraint-based automated opponent
//! - **GameController**: turn alternation between a human source and a selector
//!
//! # Example
//!
//! ```
//! use uttt_core::{apply_move, game_status, new_game, select_automated_move, GameStatus, Move, Player};
//!
//! let state = new_game();
//! let opening = Move::from_coords(1, 1, 1, 1).unwrap();
//! let state = apply_move(&state, opening, Player::X).unwrap();
//!
//! let reply = select_automated_move(&state).unwrap();
//! assert_eq!(reply.coords().0, 1);
//! assert!(matches!(game_status(&state), GameStatus::InProgress { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod controller;
mod meta_board;
mod position;
mod selector;
mod state;
mod sub_board;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveRejected};
pub use contracts::{BoardOpen, CellEmpty, GameNotOver, LegalMove, OnActiveTarget};
pub use controller::{ControllerState, GameController, Seat, StepOutcome};
pub use meta_board::MetaBoard;
pub use position::Position;
pub use selector::{ConstraintSelector, FREE_CHOICE_SCORE, FirstLegalSelector, MoveSelector};
pub use state::{GameState, GameStatus, Outcome};
pub use sub_board::SubBoard;
pub use types::{Player, Square};

/// Starts a new game with X to move.
pub fn new_game() -> GameState {
    GameState::new()
}

/// Legal moves for the player to move, in canonical order.
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    state.legal_moves()
}

/// Applies a move and returns the resulting state.
///
/// # Errors
///
/// Returns [`MoveRejected`] if the move is not legal for `player`.
pub fn apply_move(state: &GameState, mov: Move, player: Player) -> Result<GameState, MoveRejected> {
    let mut next = state.clone();
    next.apply_move(mov, player)?;
    Ok(next)
}

/// The constraint selector's choice for the player to move.
pub fn select_automated_move(state: &GameState) -> Option<Move> {
    ConstraintSelector::new().select(state.board(), &state.legal_moves(), state.to_move())
}

/// Current status of the game.
pub fn game_status(state: &GameState) -> GameStatus {
    state.status()
}
