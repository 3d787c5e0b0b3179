//! Automated move selection.
//!
//! [`ConstraintSelector`] is a two-stage policy. The consistency filter
//! drops candidates that no longer fit the board, then the ranking stage
//! takes an immediate sub-board win if one exists and otherwise minimizes
//! the opponent's flexibility in the sub-board they get sent to.

use crate::action::Move;
use crate::meta_board::MetaBoard;
use crate::Player;
use tracing::{debug, instrument};

/// Flexibility score of a move that hands the opponent a free choice.
pub const FREE_CHOICE_SCORE: i32 = 9;

/// A strategy that picks one move from a candidate list.
pub trait MoveSelector: std::fmt::Debug {
    /// Picks a move for `player`, or `None` when no candidate is usable.
    fn select(&self, board: &MetaBoard, candidates: &[Move], player: Player) -> Option<Move>;

    /// Short name for logs and summaries.
    fn name(&self) -> &str;
}

/// Filter-then-rank opponent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintSelector;

impl ConstraintSelector {
    /// Creates a new selector.
    pub fn new() -> Self {
        Self
    }

    /// Consistency filter: drops candidates whose sub-board is won or whose
    /// cell is marked.
    ///
    /// The survivors come back sorted into canonical order (sub-board
    /// row-major, then cell row-major) with duplicates removed, so ranking
    /// does not depend on how the caller ordered the list.
    pub fn consistent(board: &MetaBoard, candidates: &[Move]) -> Vec<Move> {
        let mut kept: Vec<Move> = candidates
            .iter()
            .copied()
            .filter(|mov| {
                let sub = board.sub_board(mov.board);
                sub.winner().is_none() && sub.is_empty(mov.cell)
            })
            .collect();
        kept.sort();
        kept.dedup();
        kept
    }

    /// Opponent flexibility after `mov`; lower is better for the mover.
    ///
    /// Sending the opponent to a won or full sub-board gives them a free
    /// choice and scores [`FREE_CHOICE_SCORE`]. Otherwise the score is the
    /// negated number of empty cells in the destination. Both are read from
    /// the board as it is before `mov` is played.
    pub fn flexibility_score(board: &MetaBoard, mov: &Move) -> i32 {
        let destination = board.sub_board(mov.destination());
        if destination.is_closed() {
            FREE_CHOICE_SCORE
        } else {
            -(destination.empty_count() as i32)
        }
    }

    /// Ranking stage over already-consistent candidates.
    pub fn rank(&self, board: &MetaBoard, candidates: &[Move], player: Player) -> Option<Move> {
        if let Some(win) = candidates
            .iter()
            .find(|mov| board.sub_board(mov.board).would_win(mov.cell, player))
        {
            debug!(%win, "taking sub-board win");
            return Some(*win);
        }

        // min_by_key keeps the first of equal minima.
        let choice = candidates
            .iter()
            .min_by_key(|mov| Self::flexibility_score(board, mov))
            .copied();
        debug!(choice = ?choice, "ranked by flexibility");
        choice
    }
}

impl MoveSelector for ConstraintSelector {
    #[instrument(skip(self, board, candidates), fields(candidates = candidates.len()))]
    fn select(&self, board: &MetaBoard, candidates: &[Move], player: Player) -> Option<Move> {
        let consistent = Self::consistent(board, candidates);
        if consistent.is_empty() {
            debug!("no consistent candidates");
            return None;
        }
        self.rank(board, &consistent, player)
    }

    fn name(&self) -> &str {
        "constraint"
    }
}

/// Baseline that plays the first consistent candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLegalSelector;

impl MoveSelector for FirstLegalSelector {
    fn select(&self, board: &MetaBoard, candidates: &[Move], _player: Player) -> Option<Move> {
        ConstraintSelector::consistent(board, candidates)
            .first()
            .copied()
    }

    fn name(&self) -> &str {
        "first-legal"
    }
}
