//! The game engine: move legality, turn order, fill detection, scoring.
//!
//! `GameEngine` is the single owner and mutator of a `GameState`. The
//! caller holds the engine and threads it explicitly; there is no ambient
//! game.
//!
//! ## State machine
//!
//! - `InProgress` -> `InProgress`: a mark is placed and the board still has
//!   empty cells. The turn passes to the other player.
//! - `InProgress` -> `Over`: the last empty cell is filled, or scores are
//!   computed explicitly.
//! - `Over` is terminal. Only `reset` (or `restore`) leaves it.
//!
//! The game never ends early on a completed run. Scores are counted once
//! the board is full.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::scoring::{score_board, Alignment, ScoreResult};
use crate::core::{
    Board, BoardConfig, Cell, GameMode, GameState, Move, MoveRecord, Player, Position, Snapshot,
};
use crate::error::{ConfigError, MoveError, SnapshotError};
use crate::events::{GameEvent, GameObserver};

/// Final outcome of a scored game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One player holds more alignments.
    Winner(Player),
    /// Equal alignment counts.
    Draw,
}

impl GameResult {
    /// Derive the outcome from a score pair.
    #[must_use]
    pub fn from_scores(scores: &ScoreResult) -> Self {
        scores.leader().map_or(GameResult::Draw, GameResult::Winner)
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Coarse engine state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    InProgress,
    Over,
}

/// What an accepted placement did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The recorded move.
    pub record: MoveRecord,

    /// True if this placement filled the board and ended the game.
    pub filled_board: bool,
}

/// Two-player fill-the-board game engine.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: BoardConfig,
    mode: GameMode,
    state: GameState,
    pending_events: Vec<GameEvent>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Create an engine for the standard 10x10 game scoring runs of 5.
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(BoardConfig::default())
    }

    /// Create an engine with custom dimensions.
    pub fn with_config(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Create an engine from a snapshot.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        let mut engine = Self::with_config(snapshot.config)?;
        engine.restore(snapshot)?;
        engine.pending_events.clear();
        Ok(engine)
    }

    fn from_valid_config(config: BoardConfig) -> Self {
        Self {
            config,
            mode: GameMode::default(),
            state: GameState::new(&config),
            pending_events: Vec::new(),
        }
    }

    // === Accessors ===

    /// Board dimensions and run length.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The full game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Contents of a cell. Out-of-bounds coordinates read as `Empty`.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.state
            .board
            .get(Position::new(row, col))
            .unwrap_or_default()
    }

    /// Whose mark the next placement will be.
    ///
    /// Meaningless once the game is over.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over
    }

    /// Current phase of the state machine.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.state.is_over {
            Phase::Over
        } else {
            Phase::InProgress
        }
    }

    /// True iff no cell is empty.
    #[must_use]
    pub fn is_board_full(&self) -> bool {
        self.state.board.is_full()
    }

    /// Accepted placements in order.
    #[must_use]
    pub fn history(&self) -> &im::Vector<MoveRecord> {
        &self.state.history
    }

    /// The most recent accepted placement.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.state.last_move()
    }

    /// Number of accepted placements since the last reset.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.state.move_count()
    }

    /// Every placement that would be accepted now, in row-major order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.state.is_over {
            return Vec::new();
        }
        self.state.board.empty_positions().map(Move::from).collect()
    }

    /// The opaque mode tag.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    // === Moves ===

    /// Place the current player's mark.
    ///
    /// Illegal placements (game over, out of bounds, occupied) are ignored
    /// and leave the state unchanged.
    pub fn place_mark(&mut self, row: usize, col: usize) {
        if let Err(err) = self.try_place_mark(row, col) {
            debug!(row, col, %err, "ignored placement");
        }
    }

    /// Place the current player's mark, reporting why a placement failed.
    ///
    /// On success the mark is recorded; if the board is now full the game
    /// ends and the current player is left as is, otherwise the turn passes.
    pub fn try_place_mark(&mut self, row: usize, col: usize) -> Result<Placement, MoveError> {
        let position = self.check_move(row, col)?;
        let player = self.state.current_player;

        self.state.board.set(position, Cell::Marked(player));
        let sequence = self.state.record_move(player, position);
        trace!(%player, row, col, sequence, "mark placed");
        self.pending_events
            .push(GameEvent::MarkPlaced { player, position });

        let filled_board = self.state.board.is_full();
        if filled_board {
            self.state.is_over = true;
            debug!(moves = self.state.move_count(), "board filled");
            self.pending_events.push(GameEvent::BoardFilled);
        } else {
            self.state.pass_turn();
            self.pending_events.push(GameEvent::TurnPassed {
                to: self.state.current_player,
            });
        }

        Ok(Placement {
            record: MoveRecord::new(player, position, sequence),
            filled_board,
        })
    }

    /// Check whether a placement would be accepted, without making it.
    pub fn check_move(&self, row: usize, col: usize) -> Result<Position, MoveError> {
        if self.state.is_over {
            return Err(MoveError::GameOver);
        }
        let position = Position::new(row, col);
        match self.state.board.get(position) {
            None => Err(MoveError::OutOfBounds {
                row,
                col,
                size: self.config.size,
            }),
            Some(Cell::Marked(_)) => Err(MoveError::Occupied(position)),
            Some(Cell::Empty) => Ok(position),
        }
    }

    /// Hand the turn to the other player without placing a mark.
    ///
    /// No effect once the game is over.
    pub fn switch_player(&mut self) {
        if self.state.is_over {
            debug!("ignored player switch after game over");
            return;
        }
        self.state.pass_turn();
        self.pending_events.push(GameEvent::PlayerSwitched {
            to: self.state.current_player,
        });
    }

    // === Scoring ===

    /// Count alignments, end the game, and return the scores.
    ///
    /// Works on any board; calling it before the board is full forces the
    /// game to end.
    pub fn compute_scores(&mut self) -> ScoreResult {
        let scores = self.scores();
        if !self.state.is_over {
            debug!(empty = self.state.board.empty_count(), "game ended before board filled");
        }
        self.state.is_over = true;
        info!(score_one = scores.score_one, score_two = scores.score_two, "game scored");
        self.pending_events.push(GameEvent::Scored(scores));
        scores
    }

    /// Count alignments on the current board without ending the game.
    #[must_use]
    pub fn scores(&self) -> ScoreResult {
        score_board(&self.state.board, self.config.win_length)
    }

    /// Every alignment on the current board.
    #[must_use]
    pub fn alignments(&self) -> Vec<Alignment> {
        super::scoring::alignments(&self.state.board, self.config.win_length).collect()
    }

    /// Outcome of a finished game, or `None` while in progress.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state
            .is_over
            .then(|| GameResult::from_scores(&self.scores()))
    }

    // === Lifecycle ===

    /// Restart from the initial state: empty board, Player One to move.
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.config);
        self.pending_events.push(GameEvent::Reset);
    }

    /// Change the mode tag. Any change restarts the game.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    /// Capture board, turn, terminal flag, and mode.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            config: self.config,
            mode: self.mode,
            cells: self.state.board.cells().to_vec(),
            current_player: self.state.current_player,
            is_over: self.state.is_over,
        }
    }

    /// Replace the game with a snapshot's contents.
    ///
    /// The snapshot's configuration replaces the engine's. Move history is
    /// cleared. Restoring a finished game also queues its final scores.
    /// On error the engine is left unchanged.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let board = snapshot.board()?;
        self.config = snapshot.config;
        self.mode = snapshot.mode;
        self.state = GameState {
            board,
            current_player: snapshot.current_player,
            is_over: snapshot.is_over,
            history: im::Vector::new(),
        };
        debug!(size = self.config.size, is_over = snapshot.is_over, "state restored");
        self.pending_events.push(GameEvent::Restored);
        if snapshot.is_over {
            self.pending_events.push(GameEvent::Scored(self.scores()));
        }
        Ok(())
    }

    // === Events ===

    /// Take all queued events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Deliver all queued events to an observer.
    pub fn dispatch_events(&mut self, observer: &mut dyn GameObserver) {
        for event in self.drain_events() {
            observer.on_event(&event);
        }
    }
}
