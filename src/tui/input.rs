//! Cursor movement and mouse mapping over the 9x9 grid.

use crossterm::event::KeyCode;
use uttt_core::{Move, Position};

/// Width of the rendered board, borders included.
pub const BOARD_WIDTH: u16 = 25;
/// Height of the rendered board, borders included.
pub const BOARD_HEIGHT: u16 = 13;

/// Column of the first cell in each sub-board row segment.
const FIRST_CELL_X: u16 = 2;
/// Horizontal span of one sub-board including its separator.
const BOARD_SPAN_X: u16 = 8;
/// Vertical span of one sub-board including its separator.
const BOARD_SPAN_Y: u16 = 4;

/// Global column and row (0..9) of a move.
pub fn global_coords(mov: Move) -> (u8, u8) {
    (
        mov.board.col() * 3 + mov.cell.col(),
        mov.board.row() * 3 + mov.cell.row(),
    )
}

/// Move at global column and row (0..9).
pub fn from_global(x: u8, y: u8) -> Option<Move> {
    Move::from_coords(x / 3, y / 3, x % 3, y % 3)
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Move, key: KeyCode) -> Move {
    let (x, y) = global_coords(cursor);
    let (x, y) = match key {
        KeyCode::Left => (x.saturating_sub(1), y),
        KeyCode::Right => ((x + 1).min(8), y),
        KeyCode::Up => (x, y.saturating_sub(1)),
        KeyCode::Down => (x, (y + 1).min(8)),
        _ => (x, y),
    };
    from_global(x, y).unwrap_or(cursor)
}

/// Screen offset of a cell's symbol relative to the board's top-left corner.
#[cfg(test)]
pub fn cell_offset(mov: Move) -> (u16, u16) {
    let x = FIRST_CELL_X + u16::from(mov.board.col()) * BOARD_SPAN_X + u16::from(mov.cell.col()) * 2;
    let y = 1 + u16::from(mov.board.row()) * BOARD_SPAN_Y + u16::from(mov.cell.row());
    (x, y)
}

/// Cell under a click at `(dx, dy)` relative to the board's top-left corner.
///
/// Clicks on borders and separators map to nothing. The space after a
/// symbol belongs to that cell.
pub fn cell_at(dx: u16, dy: u16) -> Option<Move> {
    let rx = dx.checked_sub(FIRST_CELL_X)?;
    let ry = dy.checked_sub(1)?;

    let (bx, within_x) = (rx / BOARD_SPAN_X, rx % BOARD_SPAN_X);
    let (by, within_y) = (ry / BOARD_SPAN_Y, ry % BOARD_SPAN_Y);
    if bx > 2 || by > 2 || within_x >= 6 || within_y >= 3 {
        return None;
    }

    let board = Position::from_col_row(bx as u8, by as u8)?;
    let cell = Position::from_col_row((within_x / 2) as u8, within_y as u8)?;
    Some(Move::new(board, cell))
}
