//! Players and board cells.
//!
//! Cells are an explicit tagged enum so "empty" is never confused with
//! any other falsy value. Occupancy is asked through predicates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two seats at the board.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::Player;
///
/// assert_eq!(Player::X.opponent(), Player::O);
/// assert_eq!(Player::O.symbol(), "O");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Player {
    /// Moves first.
    X,
    /// Moves second.
    O,
}

impl Player {
    /// The other seat.
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Symbol drawn on the board for this player.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single square of a board snapshot.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::{Cell, Player};
///
/// let cell = Cell::Occupied(Player::X);
/// assert!(cell.is_occupied());
/// assert_eq!(cell.player(), Some(Player::X));
/// assert!(Cell::Empty.is_empty());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Marked by a player.
    Occupied(Player),
}

impl Cell {
    /// True when no player has marked this cell.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// True when a player has marked this cell.
    pub fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    /// The occupying player, if any.
    pub fn player(&self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Occupied(player) => Some(*player),
        }
    }

    /// Symbol used when rendering the cell; a blank for empty cells.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Empty => " ",
            Self::Occupied(player) => player.symbol(),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Self::Occupied(player)
    }
}
