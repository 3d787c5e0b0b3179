//! Fullness check for a 3x3 mark grid.

use crate::Square;

/// Checks if every square is occupied.
pub fn is_full(squares: &[Square; 9]) -> bool {
    squares.iter().all(|s| !s.is_empty())
}
