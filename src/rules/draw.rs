//! Draw detection.

use super::win::evaluate_winner;
use crate::core::Snapshot;
use tracing::instrument;

/// Checks if every cell holds a mark.
pub fn is_full(snapshot: &Snapshot) -> bool {
    snapshot.cells().iter().all(|cell| cell.is_occupied())
}

/// A full board with no completed line.
#[instrument(level = "trace")]
pub fn is_draw(snapshot: &Snapshot) -> bool {
    evaluate_winner(snapshot).is_none() && is_full(snapshot)
}

/// True once the snapshot has a winner or is drawn.
pub fn is_game_over(snapshot: &Snapshot) -> bool {
    evaluate_winner(snapshot).is_some() || is_full(snapshot)
}
