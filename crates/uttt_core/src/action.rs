//! First-class action types for ultimate tic-tac-toe.
//!
//! A move names a sub-board and a cell inside it. The cell also names the
//! sub-board the opponent is sent to next.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move: a cell within a sub-board.
///
/// The derived ordering is board first, then cell, both row-major, which
/// is the canonical candidate iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The sub-board being played in.
    pub board: Position,
    /// The cell within that sub-board.
    pub cell: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(board: Position, cell: Position) -> Self {
        Self { board, cell }
    }

    /// Builds a move from `(board column, board row, cell column, cell row)`.
    ///
    /// Returns `None` if any component is outside `0..3`.
    pub fn from_coords(board_col: u8, board_row: u8, cell_col: u8, cell_row: u8) -> Option<Self> {
        Some(Self {
            board: Position::from_col_row(board_col, board_row)?,
            cell: Position::from_col_row(cell_col, cell_row)?,
        })
    }

    /// Returns `(board column, board row, cell column, cell row)`.
    pub fn coords(&self) -> (u8, u8, u8, u8) {
        (
            self.board.col(),
            self.board.row(),
            self.cell.col(),
            self.cell.row(),
        )
    }

    /// The sub-board this move sends the opponent to.
    pub fn destination(&self) -> Position {
        self.cell
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "board {} cell {}", self.board, self.cell)
    }
}

/// Why a move was refused.
///
/// Rejection is an expected outcome: the move source picks another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveRejected {
    /// The game already has an outcome.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(#[error(not(source))] Player),

    /// The move ignores the active target.
    #[display("Must play in board {}, not {}", required, attempted)]
    WrongBoard {
        /// The board the mover is constrained to.
        required: Position,
        /// The board the move tried to use.
        attempted: Position,
    },

    /// The sub-board is won or full.
    #[display("Board {} is closed", _0)]
    BoardClosed(#[error(not(source))] Position),

    /// The cell is already marked.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Move),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coords_maps_columns_and_rows() {
        let mv = Move::from_coords(2, 0, 0, 1).unwrap();
        assert_eq!(mv.board, Position::TopRight);
        assert_eq!(mv.cell, Position::MiddleLeft);
        assert_eq!(mv.coords(), (2, 0, 0, 1));
        assert_eq!(mv.destination(), Position::MiddleLeft);
    }

    #[test]
    fn test_from_coords_rejects_out_of_range() {
        assert!(Move::from_coords(3, 0, 0, 0).is_none());
        assert!(Move::from_coords(0, 0, 0, 7).is_none());
    }

    #[test]
    fn test_rejection_messages() {
        let err = MoveRejected::WrongBoard {
            required: Position::Center,
            attempted: Position::TopLeft,
        };
        assert_eq!(err.to_string(), "Must play in board (1, 1), not (0, 0)");
        assert_eq!(
            MoveRejected::NotYourTurn(Player::O).to_string(),
            "It's not O's turn"
        );
    }
}
