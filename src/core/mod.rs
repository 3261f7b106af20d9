//! Core game data types.
//!
//! This module contains the immutable values the game is built from:
//! - Players and cells
//! - Board snapshots
//! - Snapshot history with branching
//! - Guard predicates for move legality
//!
//! Everything in this module is pure. Nothing here mutates shared state.

mod cell;
mod guard;
mod history;
mod snapshot;

pub use cell::{Cell, Player};
pub use guard::Guard;
pub use history::History;
pub use snapshot::{Snapshot, CELL_COUNT};
