//! Guard predicates for controlling which moves may be played.
//!
//! Guards are pure boolean functions over the displayed snapshot and the
//! target cell. The controller evaluates them in order before any move is
//! applied, so a refused move never touches history.

use super::snapshot::{Snapshot, CELL_COUNT};
use crate::error::IllegalReason;
use crate::rules;

/// Pure predicate that decides whether a move may be played.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::{Guard, Snapshot};
///
/// // Refuse the centre cell on the opening move
/// let no_centre_opening = Guard::new("no-centre-opening", |snapshot: &Snapshot, cell| {
///     snapshot.occupied_count() > 0 || cell != 4
/// });
///
/// assert!(no_centre_opening.check(&Snapshot::empty(), 0).is_ok());
/// assert!(no_centre_opening.check(&Snapshot::empty(), 4).is_err());
/// ```
pub struct Guard {
    name: &'static str,
    reason: IllegalReason,
    predicate: Box<dyn Fn(&Snapshot, usize) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a pure predicate.
    ///
    /// When the predicate returns `false` the move is refused with
    /// [`IllegalReason::Refused`] carrying `name`.
    pub fn new<F>(name: &'static str, predicate: F) -> Self
    where
        F: Fn(&Snapshot, usize) -> bool + Send + Sync + 'static,
    {
        Self::with_reason(name, IllegalReason::Refused(name), predicate)
    }

    fn with_reason<F>(name: &'static str, reason: IllegalReason, predicate: F) -> Self
    where
        F: Fn(&Snapshot, usize) -> bool + Send + Sync + 'static,
    {
        Guard {
            name,
            reason,
            predicate: Box::new(predicate),
        }
    }

    /// Refuses indices outside `0..=8`.
    pub fn cell_on_board() -> Self {
        Self::with_reason("cell-on-board", IllegalReason::OffBoard, |_, cell| {
            cell < CELL_COUNT
        })
    }

    /// Refuses cells that already hold a mark.
    pub fn cell_is_empty() -> Self {
        Self::with_reason("cell-is-empty", IllegalReason::Occupied, |snapshot, cell| {
            !snapshot.is_occupied(cell)
        })
    }

    /// Refuses every move once the snapshot has a winner or is drawn.
    pub fn game_is_open() -> Self {
        Self::with_reason("game-is-open", IllegalReason::GameOver, |snapshot, _| {
            !rules::is_game_over(snapshot)
        })
    }

    /// The built-in guards, in evaluation order.
    pub fn defaults() -> Vec<Self> {
        vec![Self::cell_on_board(), Self::cell_is_empty(), Self::game_is_open()]
    }

    /// Name used in logs and refusal reasons.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether the move may be played on this snapshot.
    pub fn check(&self, snapshot: &Snapshot, cell: usize) -> Result<(), IllegalReason> {
        if (self.predicate)(snapshot, cell) {
            Ok(())
        } else {
            Err(self.reason)
        }
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard")
            .field("name", &self.name)
            .field("reason", &self.reason)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    fn snapshot_with(marks: &[(usize, Player)]) -> Snapshot {
        marks.iter().fold(Snapshot::empty(), |snapshot, &(cell, player)| {
            snapshot.with_mark(cell, player).unwrap()
        })
    }

    #[test]
    fn on_board_guard_rejects_large_index() {
        let guard = Guard::cell_on_board();
        assert!(guard.check(&Snapshot::empty(), 8).is_ok());
        assert_eq!(
            guard.check(&Snapshot::empty(), 9),
            Err(IllegalReason::OffBoard)
        );
    }

    #[test]
    fn empty_guard_rejects_marked_cell() {
        let guard = Guard::cell_is_empty();
        let snapshot = snapshot_with(&[(3, Player::X)]);

        assert!(guard.check(&snapshot, 2).is_ok());
        assert_eq!(guard.check(&snapshot, 3), Err(IllegalReason::Occupied));
    }

    #[test]
    fn open_guard_rejects_decided_board() {
        let guard = Guard::game_is_open();
        let won = snapshot_with(&[(0, Player::O), (1, Player::O), (2, Player::O)]);

        assert!(guard.check(&Snapshot::empty(), 0).is_ok());
        assert_eq!(guard.check(&won, 5), Err(IllegalReason::GameOver));
    }

    #[test]
    fn custom_guard_reports_its_name() {
        let guard = Guard::new("corners-only", |_, cell| matches!(cell, 0 | 2 | 6 | 8));

        assert_eq!(guard.name(), "corners-only");
        assert!(guard.check(&Snapshot::empty(), 6).is_ok());
        assert_eq!(
            guard.check(&Snapshot::empty(), 1),
            Err(IllegalReason::Refused("corners-only"))
        );
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::cell_is_empty();
        let snapshot = snapshot_with(&[(4, Player::X)]);

        let result1 = guard.check(&snapshot, 4);
        let result2 = guard.check(&snapshot, 4);

        assert_eq!(result1, result2);
    }

    #[test]
    fn defaults_run_board_check_first() {
        let names: Vec<&str> = Guard::defaults().iter().map(Guard::name).collect();
        assert_eq!(names, vec!["cell-on-board", "cell-is-empty", "game-is-open"]);
    }
}
