//! Game rules shared by sub-boards and the meta-board.
//!
//! Both levels of the game are judged by the same 3x3 rules, so the checks
//! here operate on a flat 9-element mark array rather than on a board type.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, line_winner};
