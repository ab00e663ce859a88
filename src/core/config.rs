//! Board configuration.
//!
//! - `BoardConfig`: grid dimension and the run length that scores
//! - `GameMode`: opaque tag carried alongside the game for collaborators
//!
//! The standard game is a 10x10 board scoring runs of 5.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default board dimension.
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Default scoring run length.
pub const DEFAULT_WIN_LENGTH: usize = 5;

/// Board dimensions and scoring run length.
///
/// ```
/// use rust_gridline::core::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert_eq!(config.size, 10);
/// assert_eq!(config.win_length, 5);
///
/// let small = BoardConfig::new(6, 4).unwrap();
/// assert_eq!(small.cell_count(), 36);
///
/// assert!(BoardConfig::new(4, 5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Side length of the square board.
    pub size: usize,

    /// Number of consecutive same-player cells that form one alignment.
    pub win_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }
}

impl BoardConfig {
    /// Create a validated configuration.
    pub fn new(size: usize, win_length: usize) -> Result<Self, ConfigError> {
        let config = Self { size, win_length };
        config.validate()?;
        Ok(config)
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the scoring run length.
    #[must_use]
    pub fn with_win_length(mut self, win_length: usize) -> Self {
        self.win_length = win_length;
        self
    }

    /// Check that the dimensions describe a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.checked_cell_count().is_none() {
            return Err(ConfigError::TooLarge { size: self.size });
        }
        if self.win_length == 0 || self.win_length > self.size {
            return Err(ConfigError::WinLength {
                win_length: self.win_length,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Total number of cells on the board.
    ///
    /// Saturates for sizes that fail `validate`.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.size.saturating_mul(self.size)
    }

    /// Total number of cells, or `None` if it overflows `usize`.
    #[must_use]
    pub const fn checked_cell_count(&self) -> Option<usize> {
        self.size.checked_mul(self.size)
    }
}

/// How the game is being played.
///
/// The engine never interprets the mode. It is stored, carried through
/// snapshots, and switching it restarts the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Both players share one device.
    #[default]
    Local,
    /// Moves are relayed by an external transport.
    Online,
}
