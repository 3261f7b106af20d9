//! Derived, read-only views of a game for presentation layers.

use crate::core::{Player, Snapshot};
use crate::rules;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Outcome of the displayed position.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Status {
    /// A player completed a line.
    Winner(Player),
    /// Board is full with no completed line.
    Draw,
    /// Game is open and this player moves next.
    NextPlayer(Player),
}

impl Status {
    /// Classify `snapshot` given whose turn it would be.
    pub fn of(snapshot: &Snapshot, to_move: Player) -> Self {
        if let Some(winner) = rules::evaluate_winner(snapshot) {
            Self::Winner(winner)
        } else if rules::is_full(snapshot) {
            Self::Draw
        } else {
            Self::NextPlayer(to_move)
        }
    }

    /// True for `Winner` and `Draw`.
    pub fn is_final(&self) -> bool {
        !matches!(self, Self::NextPlayer(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner(player) => write!(f, "Winner : {player}"),
            Self::Draw => f.write_str("Draw !"),
            Self::NextPlayer(player) => write!(f, "Next player : {player}"),
        }
    }
}

/// Everything a presentation layer needs to draw the current position.
///
/// A view is a pure function of history and pointer. Asking twice with
/// no mutation in between yields equal views.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct View {
    /// The displayed snapshot.
    pub snapshot: Snapshot,
    /// True when X moves next from this snapshot.
    pub x_is_next: bool,
    /// Winner, draw, or who moves next.
    pub status: Status,
}

impl View {
    /// Derive the view for the snapshot at history index `pointer`.
    pub fn derive(snapshot: Snapshot, pointer: usize) -> Self {
        let x_is_next = pointer % 2 == 0;
        let to_move = if x_is_next { Player::X } else { Player::O };
        Self {
            snapshot,
            x_is_next,
            status: Status::of(&snapshot, to_move),
        }
    }
}

/// A history entry a user can jump to.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index to pass to `jump_to`.
    pub move_index: usize,
    /// Human readable label.
    pub label: String,
}

impl MoveEntry {
    fn new(move_index: usize) -> Self {
        let label = if move_index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move {move_index}")
        };
        Self { move_index, label }
    }
}

/// Lazy sequence of [`MoveEntry`] values, one per history index.
///
/// Labels are built on demand. The list is finite and can be restarted by
/// cloning it before iterating.
#[derive(Clone, Debug)]
pub struct MoveList {
    indices: Range<usize>,
}

impl MoveList {
    pub(crate) fn new(len: usize) -> Self {
        Self { indices: 0..len }
    }
}

impl Iterator for MoveList {
    type Item = MoveEntry;

    fn next(&mut self) -> Option<MoveEntry> {
        self.indices.next().map(MoveEntry::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl DoubleEndedIterator for MoveList {
    fn next_back(&mut self) -> Option<MoveEntry> {
        self.indices.next_back().map(MoveEntry::new)
    }
}

impl ExactSizeIterator for MoveList {}
