//! Snapshot history tracking.
//!
//! History is an ordered, never-empty sequence of board snapshots starting
//! from the empty board. Operations are pure: [`History::branch`] returns a
//! new history and leaves the original untouched.

use super::cell::Player;
use super::snapshot::Snapshot;
use crate::error::HistoryError;
use crate::rules;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Ordered history of board snapshots.
///
/// Index 0 is always the empty board. Each later snapshot adds exactly
/// one mark to its predecessor, X on odd indices and O on even ones.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::{History, Player, Snapshot};
///
/// let history = History::new();
/// let first = history[0].with_mark(4, Player::X).unwrap();
/// let history = history.branch(0, first);
///
/// let second = history[1].with_mark(0, Player::O).unwrap();
/// let history = history.branch(1, second);
/// assert_eq!(history.len(), 3);
///
/// // Branching from the start discards everything after it
/// let other = Snapshot::empty().with_mark(8, Player::X).unwrap();
/// let rewritten = history.branch(0, other);
/// assert_eq!(rewritten.len(), 2);
/// assert_eq!(history.len(), 3); // Original unchanged
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(into = "Vec<Snapshot>", try_from = "Vec<Snapshot>")]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a history holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::empty()],
        }
    }

    /// Validate and adopt a sequence of snapshots.
    ///
    /// The sequence must start from the empty board, and each snapshot must
    /// follow its predecessor by one legal move for the player whose turn it
    /// was.
    pub fn from_snapshots(snapshots: Vec<Snapshot>) -> Result<Self, HistoryError> {
        let first = snapshots.first().ok_or(HistoryError::Empty)?;
        if *first != Snapshot::empty() {
            return Err(HistoryError::NonEmptyStart);
        }

        for (index, pair) in snapshots.windows(2).enumerate() {
            let mover = if index % 2 == 0 { Player::X } else { Player::O };
            if !follows_by_one_move(&pair[0], &pair[1], mover) {
                return Err(HistoryError::Discontinuous { index: index + 1 });
            }
        }

        Ok(Self { snapshots })
    }

    /// Keep snapshots `0..=at` and append `snapshot`, returning a new history.
    ///
    /// Anything previously recorded after `at` is discarded.
    pub fn branch(&self, at: usize, snapshot: Snapshot) -> Self {
        let keep = (at + 1).min(self.snapshots.len());
        let mut snapshots = Vec::with_capacity(keep + 1);
        snapshots.extend_from_slice(&self.snapshots[..keep]);
        snapshots.push(snapshot);
        Self { snapshots }
    }

    /// The snapshot at `index`, if recorded.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Number of recorded snapshots; never zero.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; history holds at least the starting board.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the most recent snapshot.
    pub fn last_index(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }

    /// The most recent snapshot.
    pub fn latest(&self) -> &Snapshot {
        &self.snapshots[self.last_index()]
    }

    /// All snapshots in order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }
}

impl Index<usize> for History {
    type Output = Snapshot;

    fn index(&self, index: usize) -> &Snapshot {
        &self.snapshots[index]
    }
}

impl From<History> for Vec<Snapshot> {
    fn from(history: History) -> Self {
        history.snapshots
    }
}

impl TryFrom<Vec<Snapshot>> for History {
    type Error = HistoryError;

    fn try_from(snapshots: Vec<Snapshot>) -> Result<Self, Self::Error> {
        Self::from_snapshots(snapshots)
    }
}

fn follows_by_one_move(before: &Snapshot, after: &Snapshot, mover: Player) -> bool {
    if rules::is_game_over(before) {
        return false;
    }

    let mut changed = before
        .cells()
        .iter()
        .zip(after.cells())
        .filter(|(old, new)| old != new);

    match (changed.next(), changed.next()) {
        (Some((old, new)), None) => old.is_empty() && new.player() == Some(mover),
        _ => false,
    }
}
