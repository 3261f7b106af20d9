//! Game history controller.

use super::view::{MoveList, Status, View};
use crate::core::{Guard, History, Player, Snapshot};
use crate::error::{GameError, IllegalReason, Result};
use tracing::{debug, info, instrument};

/// A tic-tac-toe game with branching move history.
///
/// The controller owns the snapshot history and a pointer to the displayed
/// snapshot. Every operation runs to completion and is atomic: a refused
/// move or jump leaves history and pointer untouched.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::{Game, Player, Status};
///
/// let mut game = Game::new();
/// game.play(4)?;
/// game.play(0)?;
/// assert_eq!(game.current_view().status, Status::NextPlayer(Player::X));
///
/// // Travel back and play a different second move
/// game.jump_to(1)?;
/// game.play(8)?;
/// assert_eq!(game.history().len(), 3);
/// # Ok::<(), tictactoe_timeline::GameError>(())
/// ```
#[derive(Debug)]
pub struct Game {
    history: History,
    pointer: usize,
    guards: Vec<Guard>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a new game at the empty board with the built-in guards.
    pub fn new() -> Self {
        Self::with_guards(Vec::new())
    }

    /// Create a new game that also checks `extra` after the built-in guards.
    pub(crate) fn with_guards(extra: Vec<Guard>) -> Self {
        let mut guards = Guard::defaults();
        guards.extend(extra);
        Self {
            history: History::new(),
            pointer: 0,
            guards,
        }
    }

    /// Derive the view of the displayed snapshot (pure).
    pub fn current_view(&self) -> View {
        View::derive(*self.current_snapshot(), self.pointer)
    }

    /// Entries for every recorded snapshot, recomputed on each call.
    pub fn move_list(&self) -> MoveList {
        MoveList::new(self.history.len())
    }

    /// Play the player to move at `cell` on the displayed snapshot.
    ///
    /// Any snapshots recorded after the pointer are discarded before the
    /// new one is appended. The pointer then moves to the new snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalMove`] when the cell is off the board or
    /// occupied, when the displayed position is already decided, or when a
    /// custom guard refuses the move.
    #[instrument(skip(self), fields(pointer = self.pointer))]
    pub fn play(&mut self, cell: usize) -> Result<()> {
        let current = *self.current_snapshot();

        if let Some(reason) = self
            .guards
            .iter()
            .find_map(|guard| guard.check(&current, cell).err())
        {
            debug!(cell, %reason, "Move rejected");
            return Err(GameError::IllegalMove { cell, reason });
        }

        let player = self.current_player();
        let next = current
            .with_mark(cell, player)
            .ok_or(GameError::IllegalMove {
                cell,
                reason: IllegalReason::OffBoard,
            })?;

        let discarded = self.history.last_index() - self.pointer;
        self.history = self.history.branch(self.pointer, next);
        self.pointer = self.history.last_index();
        debug!(cell, %player, discarded, pointer = self.pointer, "Move applied");

        match self.current_view().status {
            Status::Winner(winner) => info!(%winner, moves = self.pointer, "Game won"),
            Status::Draw => info!(moves = self.pointer, "Game drawn"),
            Status::NextPlayer(_) => {}
        }

        Ok(())
    }

    /// Display the snapshot at history index `target` without altering history.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] when `target` is not a recorded index.
    #[instrument(skip(self), fields(pointer = self.pointer))]
    pub fn jump_to(&mut self, target: usize) -> Result<()> {
        let len = self.history.len();
        if target >= len {
            debug!(target, len, "Jump rejected");
            return Err(GameError::OutOfRange {
                requested: target,
                len,
            });
        }

        self.pointer = target;
        debug!(target, "Jumped");
        Ok(())
    }

    /// Start over from the empty board, dropping all history.
    pub fn reset(&mut self) {
        debug!(discarded = self.history.len() - 1, "Game reset");
        self.history = History::new();
        self.pointer = 0;
    }

    /// Full recorded history (pure).
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed snapshot (pure).
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// The displayed snapshot (pure).
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.history[self.pointer]
    }

    /// Player who moves next from the displayed snapshot (pure).
    pub fn current_player(&self) -> Player {
        if self.pointer % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Check if the displayed snapshot is won or drawn (pure).
    pub fn is_game_over(&self) -> bool {
        self.current_view().status.is_final()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    fn game_after(cells: &[usize]) -> Game {
        let mut game = Game::new();
        for &cell in cells {
            game.play(cell).unwrap();
        }
        game
    }

    #[test]
    fn new_game_starts_empty() {
        let game = Game::new();

        assert_eq!(game.pointer(), 0);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_snapshot(), &Snapshot::empty());
        assert_eq!(game.current_player(), Player::X);
        assert!(!game.is_game_over());
    }

    #[test]
    fn play_alternates_players() {
        let game = game_after(&[0, 1]);

        let snapshot = game.current_snapshot();
        assert_eq!(snapshot.get(0), Some(Cell::Occupied(Player::X)));
        assert_eq!(snapshot.get(1), Some(Cell::Occupied(Player::O)));
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn play_advances_pointer_to_latest() {
        let game = game_after(&[4, 0, 8]);

        assert_eq!(game.history().len(), 4);
        assert_eq!(game.pointer(), 3);
    }

    #[test]
    fn occupied_cell_is_rejected_without_change() {
        let mut game = game_after(&[4]);

        let result = game.play(4);

        assert_eq!(
            result,
            Err(GameError::IllegalMove {
                cell: 4,
                reason: IllegalReason::Occupied
            })
        );
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.pointer(), 1);
    }

    #[test]
    fn off_board_cell_is_rejected() {
        let mut game = Game::new();

        let result = game.play(9);

        assert_eq!(
            result.unwrap_err().illegal_reason(),
            Some(IllegalReason::OffBoard)
        );
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn decided_game_rejects_moves() {
        // X: 0, 1, 2 completes the top row
        let mut game = game_after(&[0, 3, 1, 4, 2]);
        assert!(game.is_game_over());

        let result = game.play(8);

        assert_eq!(
            result.unwrap_err().illegal_reason(),
            Some(IllegalReason::GameOver)
        );
        assert_eq!(game.history().len(), 6);
    }

    #[test]
    fn jump_moves_pointer_only() {
        let mut game = game_after(&[0, 1, 2]);

        game.jump_to(1).unwrap();

        assert_eq!(game.pointer(), 1);
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn jump_past_end_is_rejected() {
        let mut game = game_after(&[0]);

        let result = game.jump_to(2);

        assert_eq!(
            result,
            Err(GameError::OutOfRange {
                requested: 2,
                len: 2
            })
        );
        assert_eq!(game.pointer(), 1);
    }

    #[test]
    fn jump_then_play_discards_future() {
        let mut game = game_after(&[0, 1, 2, 3]);

        game.jump_to(2).unwrap();
        game.play(8).unwrap();

        assert_eq!(game.history().len(), 4);
        assert_eq!(game.pointer(), 3);
        assert_eq!(game.current_snapshot().get(8), Some(Cell::Occupied(Player::X)));
        assert_eq!(game.current_snapshot().get(3), Some(Cell::Empty));
    }

    #[test]
    fn jump_back_into_decided_game_reopens_play() {
        let mut game = game_after(&[0, 3, 1, 4, 2]);

        game.jump_to(4).unwrap();

        assert!(!game.is_game_over());
        assert!(game.play(5).is_ok());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut game = game_after(&[0, 1, 2]);

        game.reset();

        assert_eq!(game.pointer(), 0);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_snapshot(), &Snapshot::empty());
    }

    #[test]
    fn move_list_tracks_history_length() {
        let mut game = game_after(&[0, 1]);
        assert_eq!(game.move_list().count(), 3);

        game.jump_to(0).unwrap();
        assert_eq!(game.move_list().count(), 3);

        game.play(5).unwrap();
        assert_eq!(game.move_list().count(), 2);
    }

    #[test]
    fn custom_guard_refuses_move() {
        let mut game = Game::with_guards(vec![Guard::new("no-centre", |_, cell| cell != 4)]);

        let result = game.play(4);

        assert_eq!(
            result.unwrap_err().illegal_reason(),
            Some(IllegalReason::Refused("no-centre"))
        );
        assert!(game.play(0).is_ok());
    }
}
