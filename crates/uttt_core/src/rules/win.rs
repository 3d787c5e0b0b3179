//! Three-in-a-row detection over a 3x3 mark grid.

use crate::{Player, Position, Square};

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the owner of the first complete line, if any.
///
/// Empty squares never form a line.
pub fn line_winner(squares: &[Square; 9]) -> Option<Player> {
    LINES.iter().find_map(|[a, b, c]| {
        let sq = squares[a.to_index()];
        if sq == squares[b.to_index()] && sq == squares[c.to_index()] {
            sq.player()
        } else {
            None
        }
    })
}
