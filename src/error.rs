//! Error types for game operations.

use thiserror::Error;

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IllegalReason {
    /// The target cell already holds a mark.
    Occupied,
    /// The displayed position already has a winner or is drawn.
    GameOver,
    /// The cell index is not in `0..=8`.
    OffBoard,
    /// A caller-supplied guard refused the move.
    Refused(&'static str),
}

impl std::fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Occupied => f.write_str("cell is already occupied"),
            Self::GameOver => f.write_str("game is already decided"),
            Self::OffBoard => f.write_str("cell is off the board"),
            Self::Refused(name) => write!(f, "refused by guard '{name}'"),
        }
    }
}

/// Errors returned by the game controller.
///
/// Both variants are expected, recoverable conditions. A presentation
/// layer may surface them or silently ignore them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Illegal move at cell {cell}: {reason}")]
    IllegalMove { cell: usize, reason: IllegalReason },

    #[error("Move {requested} is out of range (history holds {len} snapshots)")]
    OutOfRange { requested: usize, len: usize },
}

impl GameError {
    /// The refusal reason for an illegal move.
    pub fn illegal_reason(&self) -> Option<IllegalReason> {
        match self {
            Self::IllegalMove { reason, .. } => Some(*reason),
            Self::OutOfRange { .. } => None,
        }
    }
}

/// Errors found when validating an externally supplied history.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("History must contain at least the starting snapshot")]
    Empty,

    #[error("History must start from an empty board")]
    NonEmptyStart,

    #[error("Snapshot {index} does not follow from its predecessor by a single legal move")]
    Discontinuous { index: usize },
}

/// Result alias for game operations.
pub type Result<T> = std::result::Result<T, GameError>;
