//! # rust-gridline
//!
//! A two-player grid-marking game engine where scoring happens only once
//! the board is full.
//!
//! ## Rules
//!
//! Players alternate placing marks on an empty cell of a square board
//! (10x10 by default). There is no early win: when the last cell is
//! filled the game ends and each player scores one point for every window
//! of `win_length` (default 5) consecutive cells they own, horizontally,
//! vertically, or along either diagonal. Overlapping windows count
//! separately, so six in a row scores two.
//!
//! ## Design
//!
//! - **Explicit ownership**: the caller owns a `GameEngine` and threads it
//!   through; there is no global game.
//! - **Silent rejection**: illegal moves are no-ops on the main surface.
//!   `try_place_mark` reports the reason for callers that want it.
//! - **Observer seam**: the engine queues `GameEvent`s instead of calling
//!   out to UI, persistence, or networking code.
//!
//! ## Modules
//!
//! - `core`: players, board, configuration, moves, state, snapshots, RNG
//! - `rules`: the engine state machine and the scoring algorithm
//! - `events`: engine events and observers
//! - `playout`: random playouts for benchmarking and fuzzing
//! - `error`: error types
//!
//! ```
//! use rust_gridline::{GameEngine, ScoreResult};
//!
//! let mut engine = GameEngine::new();
//! for col in 0..6 {
//!     engine.place_mark(0, col);
//!     engine.switch_player();
//! }
//!
//! // Two overlapping horizontal windows of five.
//! assert_eq!(engine.compute_scores(), ScoreResult::new(2, 0));
//! assert!(engine.is_over());
//! ```

pub mod core;
pub mod rules;
pub mod events;
pub mod playout;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Player, Board, Cell, Position, BoardConfig, GameMode,
    Move, MoveRecord, GameState, Snapshot, GameRng, GameRngState,
};

pub use crate::rules::{
    GameEngine, GameResult, Phase, Placement,
    Alignment, Direction, ScoreResult, alignments, score_board,
};

pub use crate::events::{EventLog, GameEvent, GameObserver};

pub use crate::playout::{PlayoutConfig, PlayoutOutcome, PlayoutStats, play_moves, random_playout, run_playouts};

pub use crate::error::{ConfigError, MoveError, SnapshotError};
