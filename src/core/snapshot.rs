//! Immutable board snapshots.

use super::cell::{Cell, Player};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// One immutable 3x3 board state.
///
/// Cells are indexed 0-8 in row-major order: `0 1 2` is the top row,
/// `3 4 5` the middle, `6 7 8` the bottom. A snapshot is never edited in
/// place - [`Snapshot::with_mark`] returns a new snapshot with one more mark.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::{Cell, Player, Snapshot};
///
/// let empty = Snapshot::empty();
/// let next = empty.with_mark(4, Player::X).unwrap();
///
/// assert_eq!(next.get(4), Some(Cell::Occupied(Player::X)));
/// assert_eq!(empty.get(4), Some(Cell::Empty)); // Original unchanged
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    cells: [Cell; CELL_COUNT],
}

impl Snapshot {
    /// The all-empty board every game starts from.
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a snapshot from explicit cells.
    ///
    /// Any arrangement is accepted, including ones legal play can never
    /// reach. Useful for evaluating positions handed in from outside.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// The cell at `index`, or `None` when the index is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// True when `index` is on the board and marked.
    pub fn is_occupied(&self, index: usize) -> bool {
        self.get(index).is_some_and(|cell| cell.is_occupied())
    }

    /// Return a copy of this snapshot with `player` marked at `index`.
    ///
    /// Returns `None` when the index is off the board. No occupancy check
    /// is made here; legality belongs to the game controller.
    pub fn with_mark(&self, index: usize, player: Player) -> Option<Self> {
        let mut cells = self.cells;
        *cells.get_mut(index)? = Cell::Occupied(player);
        Some(Self { cells })
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of marked cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    /// Indices of the cells still open for play.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                f.write_str("\n-+-+-\n")?;
            }
            let symbols: Vec<&str> = chunk.iter().map(Cell::symbol).collect();
            f.write_str(&symbols.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_has_no_marks() {
        let snapshot = Snapshot::empty();
        assert_eq!(snapshot.occupied_count(), 0);
        assert_eq!(snapshot.empty_cells().count(), CELL_COUNT);
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn with_mark_is_immutable() {
        let snapshot = Snapshot::empty();
        let marked = snapshot.with_mark(0, Player::O).unwrap();

        assert!(!snapshot.is_occupied(0));
        assert!(marked.is_occupied(0));
        assert_eq!(marked.get(0), Some(Cell::Occupied(Player::O)));
        assert_eq!(marked.occupied_count(), 1);
    }

    #[test]
    fn with_mark_rejects_off_board_index() {
        assert!(Snapshot::empty().with_mark(9, Player::X).is_none());
    }

    #[test]
    fn get_is_none_off_board() {
        let snapshot = Snapshot::empty();
        assert_eq!(snapshot.get(8), Some(Cell::Empty));
        assert_eq!(snapshot.get(9), None);
        assert!(!snapshot.is_occupied(42));
    }

    #[test]
    fn empty_cells_skips_marked() {
        let snapshot = Snapshot::empty()
            .with_mark(1, Player::X)
            .and_then(|s| s.with_mark(7, Player::O))
            .unwrap();

        let open: Vec<usize> = snapshot.empty_cells().collect();
        assert_eq!(open, vec![0, 2, 3, 4, 5, 6, 8]);
    }

    #[test]
    fn display_renders_grid() {
        let snapshot = Snapshot::empty()
            .with_mark(0, Player::X)
            .and_then(|s| s.with_mark(4, Player::O))
            .unwrap();

        assert_eq!(snapshot.to_string(), "X| | \n-+-+-\n |O| \n-+-+-\n | | ");
    }
}
