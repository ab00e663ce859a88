//! Moves and the accepted-move log.
//!
//! A `Move` is a requested placement. A `MoveRecord` is a placement the
//! engine accepted, stamped with who made it and in what order.

use serde::{Deserialize, Serialize};

use super::board::Position;
use super::player::Player;

/// A requested mark placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The targeted position.
    #[must_use]
    pub const fn position(self) -> Position {
        Position::new(self.row, self.col)
    }
}

impl From<Position> for Move {
    fn from(pos: Position) -> Self {
        Self::new(pos.row, pos.col)
    }
}

/// An accepted placement.
///
/// Kept in order so a game can be replayed or relayed to a remote peer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Player whose mark was placed.
    pub player: Player,

    /// Where the mark went.
    pub position: Position,

    /// 0-based order of acceptance.
    pub sequence: usize,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub const fn new(player: Player, position: Position, sequence: usize) -> Self {
        Self {
            player,
            position,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_position() {
        let mv = Move::new(3, 7);
        assert_eq!(mv.position(), Position::new(3, 7));
        assert_eq!(Move::from(Position::new(1, 2)), Move::new(1, 2));
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(Player::Two, Position::new(4, 5), 9);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
