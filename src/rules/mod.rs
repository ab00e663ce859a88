//! Game rules: the engine and the scoring algorithm.
//!
//! - `engine`: `GameEngine`, the state machine that validates and applies moves
//! - `scoring`: alignment counting over a board
//!
//! Scoring is a pure function of a board and is usable without an engine.

pub mod engine;
pub mod scoring;

pub use engine::{GameEngine, GameResult, Phase, Placement};
pub use scoring::{alignments, score_board, Alignment, Direction, ScoreResult};
