//! Cached winner invariant: stored winners agree with the marks.

use super::Invariant;
use crate::GameState;
use crate::rules::line_winner;

/// Invariant: every cached winner matches a fresh line scan.
///
/// Covers each sub-board's winner and the meta-board winner.
pub struct CachedWinnersInvariant;

impl Invariant<GameState> for CachedWinnersInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        board
            .sub_boards()
            .iter()
            .all(|sub| sub.winner() == line_winner(sub.squares()))
            && board.winner() == line_winner(&board.winner_grid())
    }

    fn description() -> &'static str {
        "Cached winners match the marks on the board"
    }
}
