//! Active target invariant: the constrained sub-board is always playable.

use super::Invariant;
use crate::GameState;

/// Invariant: `active_target` is `None` or names an open sub-board.
pub struct ActiveTargetOpenInvariant;

impl Invariant<GameState> for ActiveTargetOpenInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        board
            .active_target()
            .is_none_or(|target| !board.sub_board(target).is_closed())
    }

    fn description() -> &'static str {
        "Active target is unset or an open sub-board"
    }
}
