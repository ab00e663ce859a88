//! Game state: board, turn, and terminal flag.
//!
//! `GameState` is the complete mutable state of one game. It is owned by
//! `GameEngine` and only changed through engine operations; this module
//! provides the raw accessors the engine builds on.
//!
//! The move history uses `im::Vector` so cloning a state (for playouts or
//! snapshots) stays O(1) in the history length.

use im::Vector;

use super::action::MoveRecord;
use super::board::{Board, Position};
use super::config::BoardConfig;
use super::player::Player;

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// The grid.
    pub board: Board,

    /// Whose mark the next accepted placement will be.
    pub current_player: Player,

    /// Terminal flag. Set when the board fills or scores are computed.
    pub is_over: bool,

    /// Accepted placements in order.
    pub history: Vector<MoveRecord>,
}

impl GameState {
    /// Create the initial state: empty board, Player One to move.
    #[must_use]
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            board: Board::new(config.size),
            current_player: Player::One,
            is_over: false,
            history: Vector::new(),
        }
    }

    /// Number of accepted placements.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// The most recent accepted placement.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Record an accepted placement and return its sequence number.
    pub fn record_move(&mut self, player: Player, position: Position) -> usize {
        let sequence = self.history.len();
        self.history
            .push_back(MoveRecord::new(player, position, sequence));
        sequence
    }

    /// Hand the turn to the other player.
    pub fn pass_turn(&mut self) {
        self.current_player = self.current_player.other();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(&BoardConfig::default());

        assert_eq!(state.board.size(), 10);
        assert_eq!(state.current_player, Player::One);
        assert!(!state.is_over);
        assert_eq!(state.move_count(), 0);
        assert!(state.last_move().is_none());
    }

    #[test]
    fn test_record_move() {
        let mut state = GameState::new(&BoardConfig::default());

        assert_eq!(state.record_move(Player::One, Position::new(0, 0)), 0);
        assert_eq!(state.record_move(Player::Two, Position::new(1, 1)), 1);

        assert_eq!(state.move_count(), 2);
        let last = state.last_move().unwrap();
        assert_eq!(last.player, Player::Two);
        assert_eq!(last.position, Position::new(1, 1));
        assert_eq!(last.sequence, 1);
        assert_eq!(last.sequence + 1, state.move_count());
    }

    #[test]
    fn test_pass_turn() {
        let mut state = GameState::new(&BoardConfig::default());
        state.pass_turn();
        assert_eq!(state.current_player, Player::Two);
        state.pass_turn();
        assert_eq!(state.current_player, Player::One);
    }

    #[test]
    fn test_clone_shares_history() {
        let mut state = GameState::new(&BoardConfig::default());
        state.record_move(Player::One, Position::new(0, 0));

        let mut cloned = state.clone();
        cloned.record_move(Player::Two, Position::new(0, 1));

        assert_eq!(state.move_count(), 1);
        assert_eq!(cloned.move_count(), 2);
    }
}
