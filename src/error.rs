//! Error types.
//!
//! The engine's primary surface treats illegal input as a no-op. These
//! errors back the strict variants (`try_place_mark`, `restore`) and
//! configuration validation.

use crate::core::Position;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is over")]
    GameOver,

    #[error("position ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("cell {0} is already occupied")]
    Occupied(Position),
}

/// Invalid board configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size must be at least 1")]
    EmptyBoard,

    #[error("board size {size} is too large")]
    TooLarge { size: usize },

    #[error("win length {win_length} must be between 1 and the board size {size}")]
    WinLength { win_length: usize, size: usize },
}

/// A snapshot that cannot be decoded or applied.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot has {actual} cells, expected {expected}")]
    CellCount { expected: usize, actual: usize },

    #[error("snapshot config is invalid: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to decode snapshot: {0}")]
    Decode(#[from] bincode::Error),
}
