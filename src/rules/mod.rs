//! Board evaluation rules.
//!
//! Pure classification of a single snapshot: who, if anyone, has won,
//! and whether the board is drawn. No state, no side effects.

mod draw;
mod win;

pub use draw::{is_draw, is_full, is_game_over};
pub use win::{evaluate_winner, winning_line, Line, LINES};
