//! A single 3x3 local board.

use crate::rules;
use crate::{Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// One of the nine local boards.
///
/// The winner is cached after every successful mark and never changes once
/// set; a won board rejects further marks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubBoard {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
    winner: Option<Player>,
}

impl SubBoard {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Position) -> Square {
        self.squares[cell.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Position) -> bool {
        self.get(cell).is_empty()
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the cached winner of this board.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.squares)
    }

    /// A closed board is won or full; no one may play in it again.
    pub fn is_closed(&self) -> bool {
        self.winner.is_some() || self.is_full()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_empty()).count()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|cell| self.is_empty(*cell))
    }

    /// Marks a cell for `player`.
    ///
    /// Returns false without touching the board if the cell is occupied or
    /// the board already has a winner.
    #[instrument(skip(self), fields(winner = ?self.winner))]
    pub fn mark(&mut self, cell: Position, player: Player) -> bool {
        if self.winner.is_some() || !self.is_empty(cell) {
            trace!("mark refused");
            return false;
        }
        self.squares[cell.to_index()] = Square::Occupied(player);
        self.recompute_winner();
        true
    }

    /// Reports whether marking `cell` would win this board for `player`.
    ///
    /// Works on a copy; the board itself is never mutated.
    pub fn would_win(&self, cell: Position, player: Player) -> bool {
        let mut probe = self.clone();
        probe.mark(cell, player) && probe.winner == Some(player)
    }

    fn recompute_winner(&mut self) {
        if self.winner.is_none() {
            self.winner = rules::line_winner(&self.squares);
        }
    }

    /// Forces squares directly, bypassing the mark rules.
    #[cfg(test)]
    pub(crate) fn from_squares(squares: [Square; 9]) -> Self {
        Self {
            squares,
            winner: rules::line_winner(&squares),
        }
    }
}
