//! Random playouts.
//!
//! Drives an engine with uniformly random legal moves until the board is
//! full (or a move cap is hit), then scores it. Used for benchmarking the
//! scorer, fuzzing engine invariants, and estimating score distributions.

use tracing::debug;

use crate::core::{BoardConfig, GameRng, Move, Player};
use crate::error::ConfigError;
use crate::rules::{GameEngine, GameResult, ScoreResult};

/// Configuration for a batch of playouts.
#[derive(Clone, Debug)]
pub struct PlayoutConfig {
    /// Board used for every game.
    pub board: BoardConfig,

    /// Stop after this many moves and score the partial board.
    /// `None` plays until the board is full.
    pub max_moves: Option<usize>,

    /// Seed for the batch RNG.
    pub seed: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            max_moves: None,
            seed: 0,
        }
    }
}

impl PlayoutConfig {
    /// Create a playout config for the standard board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board.
    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    /// Cap the number of moves per game.
    pub fn with_max_moves(mut self, max_moves: usize) -> Self {
        self.max_moves = Some(max_moves);
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Result of one playout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayoutOutcome {
    pub scores: ScoreResult,
    pub result: GameResult,
    pub moves_played: usize,
    /// True if the board was filled rather than cut off by the move cap.
    pub filled_board: bool,
}

/// Aggregate results over many playouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayoutStats {
    pub games: u32,
    pub wins_one: u32,
    pub wins_two: u32,
    pub draws: u32,
    pub total_one: u64,
    pub total_two: u64,
}

impl PlayoutStats {
    /// Fold one outcome into the totals.
    pub fn record(&mut self, outcome: &PlayoutOutcome) {
        self.games += 1;
        self.total_one += u64::from(outcome.scores.score_one);
        self.total_two += u64::from(outcome.scores.score_two);
        match outcome.result {
            GameResult::Winner(Player::One) => self.wins_one += 1,
            GameResult::Winner(Player::Two) => self.wins_two += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    /// Mean alignments per game for each player.
    #[must_use]
    pub fn mean_scores(&self) -> (f64, f64) {
        if self.games == 0 {
            return (0.0, 0.0);
        }
        let games = f64::from(self.games);
        (self.total_one as f64 / games, self.total_two as f64 / games)
    }
}

/// Apply a sequence of moves, returning how many were accepted.
///
/// Rejected moves are skipped.
pub fn play_moves(engine: &mut GameEngine, moves: impl IntoIterator<Item = Move>) -> usize {
    moves
        .into_iter()
        .filter(|mv| engine.try_place_mark(mv.row, mv.col).is_ok())
        .count()
}

/// Play random legal moves from the engine's current state, then score.
pub fn random_playout(
    engine: &mut GameEngine,
    rng: &mut GameRng,
    max_moves: Option<usize>,
) -> PlayoutOutcome {
    let mut moves = engine.legal_moves();
    rng.shuffle(&mut moves);
    if let Some(cap) = max_moves {
        moves.truncate(cap);
    }

    let moves_played = play_moves(engine, moves);
    let filled_board = engine.is_board_full();
    let scores = engine.compute_scores();

    PlayoutOutcome {
        scores,
        result: GameResult::from_scores(&scores),
        moves_played,
        filled_board,
    }
}

/// Run `games` independent playouts from the initial state.
pub fn run_playouts(config: &PlayoutConfig, games: u32) -> Result<PlayoutStats, ConfigError> {
    let mut engine = GameEngine::with_config(config.board)?;
    let mut rng = GameRng::new(config.seed);
    let mut stats = PlayoutStats::default();

    for game in 0..games {
        engine.reset();
        let mut game_rng = rng.fork();
        let outcome = random_playout(&mut engine, &mut game_rng, config.max_moves);
        debug!(game, scores = %outcome.scores, moves = outcome.moves_played, "playout finished");
        stats.record(&outcome);
        engine.drain_events();
    }

    Ok(stats)
}
