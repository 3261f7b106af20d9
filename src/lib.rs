//! Tictactoe Timeline: a pure tic-tac-toe game core with time travel
//!
//! The crate holds the rules and the move history of a two-seat
//! tic-tac-toe game. Rendering and input handling belong to the caller,
//! which forwards cell selections and re-reads a derived view afterwards.
//!
//! # Core Concepts
//!
//! - **Snapshot**: One immutable 9-cell board state
//! - **History**: Every snapshot played so far, starting from the empty board
//! - **Pointer**: Which snapshot is displayed; jumping moves only the pointer
//! - **Branch-discard**: Playing from an earlier snapshot overwrites the future
//!
//! # Example
//!
//! ```rust
//! use tictactoe_timeline::{Game, GameError, Player, Status};
//!
//! let mut game = Game::new();
//! for cell in [0, 1, 3, 4, 6] {
//!     game.play(cell)?;
//! }
//! assert_eq!(game.current_view().status, Status::Winner(Player::X));
//! assert!(matches!(game.play(2), Err(GameError::IllegalMove { .. })));
//!
//! let labels: Vec<String> = game.move_list().map(|entry| entry.label).collect();
//! assert_eq!(labels[0], "Go to game start");
//! assert_eq!(labels[5], "Go to move 5");
//! # Ok::<(), GameError>(())
//! ```

pub mod core;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Cell, Guard, History, Player, Snapshot};
pub use error::{GameError, HistoryError, IllegalReason};
pub use game::{Game, GameBuilder, MoveEntry, MoveList, Status, View};
pub use rules::{evaluate_winner, is_draw};
