//! Builder for constructing games.

use super::controller::Game;
use crate::core::Guard;
use crate::error::Result;

/// Builder for constructing games with a fluent API.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::{GameBuilder, Guard, Player, Status};
///
/// let game = GameBuilder::new()
///     .guard(Guard::new("no-corners", |_, cell| !matches!(cell, 0 | 2 | 6 | 8)))
///     .moves([4, 1])
///     .build()?;
///
/// assert_eq!(game.pointer(), 2);
/// assert_eq!(game.current_view().status, Status::NextPlayer(Player::X));
/// # Ok::<(), tictactoe_timeline::GameError>(())
/// ```
#[derive(Debug, Default)]
pub struct GameBuilder {
    guards: Vec<Guard>,
    moves: Vec<usize>,
}

impl GameBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a guard checked after the built-in ones.
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guards.push(guard);
        self
    }

    /// Add multiple guards at once.
    pub fn guards(mut self, guards: impl IntoIterator<Item = Guard>) -> Self {
        self.guards.extend(guards);
        self
    }

    /// Cells to play, in order, once the game is created.
    pub fn moves(mut self, cells: impl IntoIterator<Item = usize>) -> Self {
        self.moves.extend(cells);
        self
    }

    /// Build the game and replay the queued moves.
    ///
    /// Returns the error of the first move that could not be played.
    pub fn build(self) -> Result<Game> {
        let mut game = Game::with_guards(self.guards);
        for cell in self.moves {
            game.play(cell)?;
        }
        Ok(game)
    }
}
