//! Game history controller.
//!
//! This module is the stateful shell around the pure core:
//! - `Game` owns history and the pointer, and applies validated moves
//! - `View` and `MoveList` are pure queries a presentation layer re-reads
//!   after every mutation
//! - `GameBuilder` configures guards and replays opening moves

mod builder;
mod controller;
mod view;

pub use builder::GameBuilder;
pub use controller::Game;
pub use view::{MoveEntry, MoveList, Status, View};
