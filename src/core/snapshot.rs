//! Serializable game snapshots.
//!
//! A `Snapshot` captures exactly what a collaborator needs to persist or
//! share a game: configuration, mode tag, cells, current player, and the
//! terminal flag. Move history is not captured.
//!
//! The wire format is bincode; any serde format works on the struct.

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell};
use super::config::{BoardConfig, GameMode};
use super::player::Player;
use crate::error::SnapshotError;

/// Point-in-time copy of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board dimensions and scoring run length.
    pub config: BoardConfig,

    /// Opaque mode tag.
    pub mode: GameMode,

    /// Row-major cells, `config.size * config.size` long.
    pub cells: Vec<Cell>,

    /// Whose turn it is.
    pub current_player: Player,

    /// Whether the game has ended.
    pub is_over: bool,
}

impl Snapshot {
    /// Check structural validity: a valid config and a matching cell count.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        self.config.validate()?;
        let expected = self.config.cell_count();
        if self.cells.len() != expected {
            return Err(SnapshotError::CellCount {
                expected,
                actual: self.cells.len(),
            });
        }
        Ok(())
    }

    /// Rebuild the board described by this snapshot.
    pub fn board(&self) -> Result<Board, SnapshotError> {
        self.validate()?;
        Board::from_cells(self.config.size, self.cells.clone()).ok_or(SnapshotError::CellCount {
            expected: self.config.cell_count(),
            actual: self.cells.len(),
        })
    }

    /// Encode to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bytes and validate.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn sample() -> Snapshot {
        let config = BoardConfig::new(3, 3).unwrap();
        let mut cells = vec![Cell::Empty; 9];
        cells[0] = Cell::Marked(Player::One);
        cells[4] = Cell::Marked(Player::Two);
        Snapshot {
            config,
            mode: GameMode::Online,
            cells,
            current_player: Player::One,
            is_over: false,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_cell_count() {
        let mut snapshot = sample();
        snapshot.cells.pop();
        assert!(matches!(
            snapshot.validate(),
            Err(SnapshotError::CellCount { expected: 9, actual: 8 })
        ));
    }

    #[test]
    fn test_validate_config() {
        let mut snapshot = sample();
        snapshot.config.win_length = 4;
        assert!(matches!(snapshot.validate(), Err(SnapshotError::Config(_))));
    }

    #[test]
    fn test_from_bytes_rejects_overflowing_size() {
        let mut snapshot = sample();
        snapshot.config = BoardConfig { size: 1usize << (usize::BITS / 2 + 1), win_length: 5 };
        snapshot.cells.clear();

        let bytes = snapshot.to_bytes().unwrap();
        assert!(matches!(
            Snapshot::from_bytes(&bytes),
            Err(SnapshotError::Config(ConfigError::TooLarge { .. }))
        ));
    }

    #[test]
    fn test_bytes_roundtrip() {
        let snapshot = sample();
        let bytes = snapshot.to_bytes().unwrap();
        let decoded = Snapshot::from_bytes(&bytes).unwrap();
        assert_eq!(snapshot, decoded);
    }

    #[test]
    fn test_from_bytes_garbage() {
        assert!(matches!(
            Snapshot::from_bytes(&[0xff, 0x01]),
            Err(SnapshotError::Decode(_))
        ));
    }

    #[test]
    fn test_board_rebuild() {
        let board = sample().board().unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.count(Player::One), 1);
        assert_eq!(board.count(Player::Two), 1);
    }

    #[test]
    fn test_json_roundtrip() {
        let snapshot = sample();
        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, decoded);
    }
}
