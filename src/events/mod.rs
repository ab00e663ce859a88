//! Engine events and the observer seam.
//!
//! The engine never calls out to rendering, persistence, or transport code.
//! Each mutation queues a `GameEvent`; collaborators drain the queue and
//! react, either directly or through a `GameObserver`.
//!
//! ```
//! use rust_gridline::events::{EventLog, GameEvent};
//! use rust_gridline::rules::GameEngine;
//!
//! let mut engine = GameEngine::default();
//! engine.place_mark(0, 0);
//!
//! let mut log = EventLog::new();
//! engine.dispatch_events(&mut log);
//! assert!(matches!(log.events()[0], GameEvent::MarkPlaced { .. }));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Player, Position};
use crate::rules::ScoreResult;

/// Something that happened to a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was accepted.
    MarkPlaced { player: Player, position: Position },

    /// The turn passed after an accepted mark.
    TurnPassed { to: Player },

    /// The turn was handed over without a mark.
    PlayerSwitched { to: Player },

    /// The last empty cell was filled; scoring is now due.
    BoardFilled,

    /// Scores were computed and the game ended.
    Scored(ScoreResult),

    /// The game restarted from the initial state.
    Reset,

    /// State was replaced from a snapshot.
    Restored,
}

/// Receives engine events.
pub trait GameObserver {
    /// Handle one event.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Observer that records every event it sees.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Forget all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
