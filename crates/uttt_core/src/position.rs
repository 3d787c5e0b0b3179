//! Position enum naming one of nine slots in a 3x3 grid.
//!
//! The same type addresses a sub-board within the meta-board and a cell
//! within a sub-board. Declaration order is row-major, so the derived
//! `Ord` and [`Position::ALL`] both follow the canonical iteration order.

use serde::{Deserialize, Serialize};

/// A slot in a 3x3 grid (index 0-8, row-major).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (column 0, row 0)
    TopLeft,
    /// Top-center (column 1, row 0)
    TopCenter,
    /// Top-right (column 2, row 0)
    TopRight,
    /// Middle-left (column 0, row 1)
    MiddleLeft,
    /// Center (column 1, row 1)
    Center,
    /// Middle-right (column 2, row 1)
    MiddleRight,
    /// Bottom-left (column 0, row 2)
    BottomLeft,
    /// Bottom-center (column 1, row 2)
    BottomCenter,
    /// Bottom-right (column 2, row 2)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to grid index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from grid index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a column and row, each in `0..3`.
    pub fn from_col_row(col: u8, row: u8) -> Option<Self> {
        if col >= 3 || row >= 3 {
            return None;
        }
        Self::from_index(usize::from(row) * 3 + usize::from(col))
    }

    /// Column of this position (0-2).
    pub fn col(self) -> u8 {
        (self.to_index() % 3) as u8
    }

    /// Row of this position (0-2).
    pub fn row(self) -> u8 {
        (self.to_index() / 3) as u8
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col(), self.row())
    }
}
