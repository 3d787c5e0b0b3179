//! The 3x3 arrangement of sub-boards and the send-to rule.

use crate::action::{Move, MoveRejected};
use crate::contracts::LegalMove;
use crate::rules;
use crate::sub_board::SubBoard;
use crate::{Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The full game board.
///
/// `active_target` is recomputed on every successful [`MetaBoard::apply`]:
/// it names the sub-board the next mover must play in, or is `None` when
/// that sub-board is already won or full and the mover may choose freely.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetaBoard {
    /// Sub-boards in row-major order (0-8).
    boards: [SubBoard; 9],
    winner: Option<Player>,
    active_target: Option<Position>,
}

impl MetaBoard {
    /// Creates an empty board with free choice for the first mover.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sub-board at the given position.
    pub fn sub_board(&self, pos: Position) -> &SubBoard {
        &self.boards[pos.to_index()]
    }

    /// Returns all sub-boards in row-major order.
    pub fn sub_boards(&self) -> &[SubBoard; 9] {
        &self.boards
    }

    /// Returns the meta-board winner.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the sub-board the next mover is constrained to.
    pub fn active_target(&self) -> Option<Position> {
        self.active_target
    }

    /// Sub-board winners flattened into a mark grid.
    pub fn winner_grid(&self) -> [Square; 9] {
        std::array::from_fn(|i| Square::from(self.boards[i].winner()))
    }

    /// Returns every legal move, sub-board row-major then cell row-major.
    ///
    /// Marks are symmetric, so `player` does not change the result.
    #[instrument(skip(self), fields(target = ?self.active_target))]
    pub fn legal_moves_for(&self, player: Player) -> Vec<Move> {
        if self.winner.is_some() {
            return Vec::new();
        }

        if let Some(target) = self.active_target
            && !self.sub_board(target).is_closed()
        {
            return self.open_cells(target).collect();
        }

        Position::ALL
            .into_iter()
            .filter(|pos| !self.sub_board(*pos).is_closed())
            .flat_map(|pos| self.open_cells(pos))
            .collect()
    }

    fn open_cells(&self, board: Position) -> impl Iterator<Item = Move> + '_ {
        self.sub_board(board)
            .empty_cells()
            .map(move |cell| Move::new(board, cell))
    }

    /// Checks a move against every legality rule without applying it.
    pub fn check(&self, mov: &Move) -> Result<(), MoveRejected> {
        LegalMove::check(mov, self)
    }

    /// Applies a move for `player`.
    ///
    /// On success the cell is marked, the next target is derived from the
    /// cell (or cleared if that sub-board is closed) and the meta-winner is
    /// recomputed. On failure nothing changes.
    #[instrument(skip(self), fields(target = ?self.active_target))]
    pub fn apply(&mut self, mov: Move, player: Player) -> Result<(), MoveRejected> {
        if let Err(reason) = self.check(&mov) {
            debug!(%reason, "move rejected");
            return Err(reason);
        }

        if !self.boards[mov.board.to_index()].mark(mov.cell, player) {
            return Err(MoveRejected::CellOccupied(mov));
        }

        let destination = mov.destination();
        self.active_target = if self.sub_board(destination).is_closed() {
            None
        } else {
            Some(destination)
        };
        self.recompute_winner();

        debug!(
            sub_winner = ?self.sub_board(mov.board).winner(),
            next_target = ?self.active_target,
            winner = ?self.winner,
            "move applied"
        );
        Ok(())
    }

    fn recompute_winner(&mut self) {
        self.winner = rules::line_winner(&self.winner_grid());
    }

    /// Formats the board as a 9x9 text grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for board_row in 0..3u8 {
            if board_row > 0 {
                result.push_str("------+-------+------\n");
            }
            for cell_row in 0..3u8 {
                let mut line = Vec::with_capacity(3);
                for board_col in 0..3u8 {
                    let cells: Vec<String> = (0..3u8)
                        .filter_map(|cell_col| {
                            let mov =
                                Move::from_coords(board_col, board_row, cell_col, cell_row)?;
                            Some(self.sub_board(mov.board).get(mov.cell).symbol().to_string())
                        })
                        .collect();
                    line.push(cells.join(" "));
                }
                result.push_str(&line.join(" | "));
                result.push('\n');
            }
        }
        result
    }

    /// Builds a board from prepared sub-boards.
    #[cfg(test)]
    pub(crate) fn from_parts(boards: [SubBoard; 9], active_target: Option<Position>) -> Self {
        let mut board = Self {
            boards,
            winner: None,
            active_target,
        };
        board.recompute_winner();
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A sub-board won by `player` along its top row.
    fn won_by(player: Player) -> SubBoard {
        let mut squares = [Square::Empty; 9];
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            squares[pos.to_index()] = Square::Occupied(player);
        }
        SubBoard::from_squares(squares)
    }

    /// A full sub-board with no winner.
    fn drawn() -> SubBoard {
        use Player::{O, X};
        let marks = [X, O, X, X, O, O, O, X, X];
        SubBoard::from_squares(marks.map(Square::Occupied))
    }

    #[test]
    fn test_first_move_is_free() {
        let board = MetaBoard::new();
        assert_eq!(board.active_target(), None);
        assert_eq!(board.legal_moves_for(Player::X).len(), 81);
    }

    #[test]
    fn test_center_move_targets_center() {
        let mut board = MetaBoard::new();
        board
            .apply(Move::new(Position::Center, Position::Center), Player::X)
            .unwrap();
        assert_eq!(board.active_target(), Some(Position::Center));

        let moves = board.legal_moves_for(Player::O);
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|m| m.board == Position::Center));
    }

    #[test]
    fn test_sent_to_won_board_gives_free_choice() {
        let mut boards: [SubBoard; 9] = Default::default();
        boards[Position::TopLeft.to_index()] = won_by(Player::O);
        let mut board = MetaBoard::from_parts(boards, None);

        board
            .apply(Move::new(Position::Center, Position::TopLeft), Player::X)
            .unwrap();
        assert_eq!(board.active_target(), None);

        let moves = board.legal_moves_for(Player::O);
        assert!(moves.iter().all(|m| m.board != Position::TopLeft));
        // 8 open boards: 7 empty plus the center with one mark.
        assert_eq!(moves.len(), 7 * 9 + 8);
    }

    #[test]
    fn test_sent_to_full_board_gives_free_choice() {
        let mut boards: [SubBoard; 9] = Default::default();
        boards[Position::BottomRight.to_index()] = drawn();
        let mut board = MetaBoard::from_parts(boards, None);

        board
            .apply(Move::new(Position::TopLeft, Position::BottomRight), Player::X)
            .unwrap();
        assert_eq!(board.active_target(), None);
        assert!(
            board
                .legal_moves_for(Player::O)
                .iter()
                .all(|m| m.board != Position::BottomRight)
        );
    }

    #[test]
    fn test_winning_own_target_board_frees_opponent() {
        // X takes the center board with its center cell, which would send O
        // right back to the now-won center board.
        let mut squares = [Square::Empty; 9];
        squares[Position::TopCenter.to_index()] = Square::Occupied(Player::X);
        squares[Position::BottomCenter.to_index()] = Square::Occupied(Player::X);
        let mut boards: [SubBoard; 9] = Default::default();
        boards[Position::Center.to_index()] = SubBoard::from_squares(squares);
        let mut board = MetaBoard::from_parts(boards, Some(Position::Center));

        board
            .apply(Move::new(Position::Center, Position::Center), Player::X)
            .unwrap();
        assert_eq!(board.sub_board(Position::Center).winner(), Some(Player::X));
        assert_eq!(board.active_target(), None);
    }

    #[test]
    fn test_three_boards_in_a_row_win_the_game() {
        let mut boards: [SubBoard; 9] = Default::default();
        boards[Position::MiddleLeft.to_index()] = won_by(Player::O);
        boards[Position::Center.to_index()] = won_by(Player::O);
        let mut board = MetaBoard::from_parts(boards, Some(Position::MiddleRight));
        assert_eq!(board.winner(), None);

        let mut squares = [Square::Empty; 9];
        squares[Position::MiddleLeft.to_index()] = Square::Occupied(Player::O);
        squares[Position::Center.to_index()] = Square::Occupied(Player::O);
        board.boards[Position::MiddleRight.to_index()] = SubBoard::from_squares(squares);

        board
            .apply(
                Move::new(Position::MiddleRight, Position::MiddleRight),
                Player::O,
            )
            .unwrap();
        assert_eq!(board.winner(), Some(Player::O));
        assert!(board.legal_moves_for(Player::X).is_empty());
        assert_eq!(
            board.apply(Move::new(Position::TopLeft, Position::TopLeft), Player::X),
            Err(MoveRejected::GameOver)
        );
    }

    #[test]
    fn test_mixed_winners_do_not_make_a_line() {
        let mut boards: [SubBoard; 9] = Default::default();
        boards[0] = won_by(Player::X);
        boards[1] = won_by(Player::O);
        boards[2] = won_by(Player::X);
        let board = MetaBoard::from_parts(boards, None);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_rejected_move_leaves_board_unchanged() {
        let mut board = MetaBoard::new();
        board
            .apply(Move::new(Position::TopLeft, Position::BottomRight), Player::X)
            .unwrap();
        let before = board.clone();

        let result = board.apply(Move::new(Position::Center, Position::Center), Player::O);
        assert!(matches!(result, Err(MoveRejected::WrongBoard { .. })));
        assert_eq!(board, before);
    }

    #[test]
    fn test_display_grid_shape() {
        let mut board = MetaBoard::new();
        board
            .apply(Move::new(Position::TopLeft, Position::TopLeft), Player::X)
            .unwrap();
        board
            .apply(Move::new(Position::TopLeft, Position::BottomRight), Player::O)
            .unwrap();
        let text = board.display();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "X . . | . . . | . . .");
        assert_eq!(lines[2], ". . O | . . . | . . .");
        assert_eq!(lines[3], "------+-------+------");
    }
}
