//! Move preconditions.
//!
//! Each precondition checks one legality rule and reports the matching
//! [`MoveRejected`] reason. [`LegalMove`] composes them in the order the
//! rules are listed: game still open, active target respected, sub-board
//! open, cell empty.

use super::action::{Move, MoveRejected};
use super::meta_board::MetaBoard;
use tracing::instrument;

/// Precondition: the meta-board has no winner.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects every move once the meta-board is won.
    pub fn check(_mov: &Move, board: &MetaBoard) -> Result<(), MoveRejected> {
        if board.winner().is_some() {
            Err(MoveRejected::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the move is inside the active target, when one is set.
pub struct OnActiveTarget;

impl OnActiveTarget {
    /// Rejects moves outside the constrained sub-board.
    pub fn check(mov: &Move, board: &MetaBoard) -> Result<(), MoveRejected> {
        match board.active_target() {
            Some(required) if required != mov.board => Err(MoveRejected::WrongBoard {
                required,
                attempted: mov.board,
            }),
            _ => Ok(()),
        }
    }
}

/// Precondition: the targeted sub-board is neither won nor full.
pub struct BoardOpen;

impl BoardOpen {
    /// Rejects moves into a closed sub-board.
    pub fn check(mov: &Move, board: &MetaBoard) -> Result<(), MoveRejected> {
        if board.sub_board(mov.board).is_closed() {
            Err(MoveRejected::BoardClosed(mov.board))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the targeted cell is empty.
pub struct CellEmpty;

impl CellEmpty {
    /// Rejects moves onto a marked cell.
    pub fn check(mov: &Move, board: &MetaBoard) -> Result<(), MoveRejected> {
        if board.sub_board(mov.board).is_empty(mov.cell) {
            Ok(())
        } else {
            Err(MoveRejected::CellOccupied(*mov))
        }
    }
}

/// Composite precondition: a move is legal if every rule above passes.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &MetaBoard) -> Result<(), MoveRejected> {
        GameNotOver::check(mov, board)?;
        OnActiveTarget::check(mov, board)?;
        BoardOpen::check(mov, board)?;
        CellEmpty::check(mov, board)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn mv(board: Position, cell: Position) -> Move {
        Move::new(board, cell)
    }

    #[test]
    fn test_fresh_board_accepts_anything() {
        let board = MetaBoard::new();
        for b in Position::ALL {
            for c in Position::ALL {
                assert!(LegalMove::check(&mv(b, c), &board).is_ok());
            }
        }
    }

    #[test]
    fn test_wrong_board_reported() {
        let mut board = MetaBoard::new();
        board
            .apply(mv(Position::TopLeft, Position::Center), Player::X)
            .unwrap();
        let result = LegalMove::check(&mv(Position::TopLeft, Position::TopLeft), &board);
        assert_eq!(
            result,
            Err(MoveRejected::WrongBoard {
                required: Position::Center,
                attempted: Position::TopLeft,
            })
        );
    }

    #[test]
    fn test_occupied_cell_reported() {
        let mut board = MetaBoard::new();
        board
            .apply(mv(Position::Center, Position::Center), Player::X)
            .unwrap();
        let attempt = mv(Position::Center, Position::Center);
        assert_eq!(
            CellEmpty::check(&attempt, &board),
            Err(MoveRejected::CellOccupied(attempt))
        );
    }

    #[test]
    fn test_target_checked_before_cell() {
        let mut board = MetaBoard::new();
        board
            .apply(mv(Position::TopLeft, Position::Center), Player::X)
            .unwrap();
        // Occupied and off-target: the target rule reports first.
        let result = LegalMove::check(&mv(Position::TopLeft, Position::Center), &board);
        assert!(matches!(result, Err(MoveRejected::WrongBoard { .. })));
    }
}
