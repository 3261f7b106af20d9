//! Win detection.

use crate::core::{Player, Snapshot};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines in evaluation order: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line and the player holding it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Line {
    /// Cell indices of the line.
    pub cells: [usize; 3],
    /// Player occupying all three cells.
    pub player: Player,
}

/// Returns the first completed line, checking [`LINES`] in order.
///
/// When several lines are complete at once (only possible on boards legal
/// play cannot reach) the earliest in [`LINES`] is reported.
#[instrument(level = "trace")]
pub fn winning_line(snapshot: &Snapshot) -> Option<Line> {
    LINES.iter().find_map(|&cells| {
        let [a, b, c] = cells;
        let first = snapshot.get(a)?;
        let player = first.player()?;
        (snapshot.get(b)? == first && snapshot.get(c)? == first).then_some(Line { cells, player })
    })
}

/// Returns the player holding the first completed line, if any.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::{Player, Snapshot};
/// use tictactoe_timeline::rules::evaluate_winner;
///
/// let board = [0, 3, 6].iter().fold(Snapshot::empty(), |board, &cell| {
///     board.with_mark(cell, Player::X).unwrap()
/// });
///
/// assert_eq!(evaluate_winner(&board), Some(Player::X));
/// assert_eq!(evaluate_winner(&Snapshot::empty()), None);
/// ```
pub fn evaluate_winner(snapshot: &Snapshot) -> Option<Player> {
    winning_line(snapshot).map(|line| line.player)
}
