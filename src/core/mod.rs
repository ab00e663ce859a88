//! Core value types: players, board, configuration, moves, state, RNG.
//!
//! Nothing here enforces game rules. `rules::GameEngine` owns a
//! `GameState` and is the only place moves are validated.

pub mod player;
pub mod board;
pub mod config;
pub mod action;
pub mod state;
pub mod snapshot;
pub mod rng;

pub use player::Player;
pub use board::{Board, Cell, Position};
pub use config::{BoardConfig, GameMode, DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH};
pub use action::{Move, MoveRecord};
pub use state::GameState;
pub use snapshot::Snapshot;
pub use rng::{GameRng, GameRngState};
