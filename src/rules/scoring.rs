//! Alignment counting.
//!
//! A board is scored by sliding a window of `win_length` cells along four
//! directions from every starting cell whose window stays on the board.
//! Every window whose cells all belong to one player is one alignment for
//! that player.
//!
//! Overlapping windows count separately: six marks in a row hold two
//! horizontal windows of five, so they score 2.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Player, Position};

/// One of the four scanning directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Along a row, (0, 1).
    Horizontal,
    /// Down a column, (1, 0).
    Vertical,
    /// Down and right, (1, 1).
    DiagonalDown,
    /// Down and left, (1, -1).
    AntiDiagonal,
}

impl Direction {
    /// All scanning directions.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::AntiDiagonal,
    ];

    /// (row, col) step for this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }

    /// Positions of a `length`-cell window starting at `start`.
    ///
    /// Returns `None` unless both ends of the window lie on a board of
    /// side `size`.
    #[must_use]
    pub fn window(self, start: Position, length: usize, size: usize) -> Option<SmallVec<[Position; 8]>> {
        if length == 0 {
            return None;
        }
        let (d_row, d_col) = self.delta();
        let end = start.offset(d_row, d_col, length - 1)?;
        if start.row >= size || start.col >= size || end.row >= size || end.col >= size {
            return None;
        }
        (0..length)
            .map(|k| start.offset(d_row, d_col, k))
            .collect()
    }
}

/// A single scoring window owned entirely by one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alignment {
    pub player: Player,
    pub start: Position,
    pub direction: Direction,
}

impl Alignment {
    /// Cells covered by this alignment.
    #[must_use]
    pub fn positions(&self, win_length: usize) -> SmallVec<[Position; 8]> {
        let (d_row, d_col) = self.direction.delta();
        (0..win_length)
            .filter_map(|k| self.start.offset(d_row, d_col, k))
            .collect()
    }
}

/// Alignment counts per player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score_one: u32,
    pub score_two: u32,
}

impl ScoreResult {
    /// Create a score pair.
    #[must_use]
    pub const fn new(score_one: u32, score_two: u32) -> Self {
        Self { score_one, score_two }
    }

    /// Score for one player.
    #[must_use]
    pub const fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.score_one,
            Player::Two => self.score_two,
        }
    }

    /// Add one alignment for `player`.
    pub fn increment(&mut self, player: Player) {
        match player {
            Player::One => self.score_one += 1,
            Player::Two => self.score_two += 1,
        }
    }

    /// The player with the strictly higher score, or `None` on a tie.
    #[must_use]
    pub fn leader(&self) -> Option<Player> {
        match self.score_one.cmp(&self.score_two) {
            std::cmp::Ordering::Greater => Some(Player::One),
            std::cmp::Ordering::Less => Some(Player::Two),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl std::fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.score_one, self.score_two)
    }
}

/// Iterate over every alignment on the board.
///
/// Order: direction, then start row, then start column.
pub fn alignments(board: &Board, win_length: usize) -> impl Iterator<Item = Alignment> + '_ {
    let size = board.size();
    Direction::ALL.into_iter().flat_map(move |direction| {
        (0..size).flat_map(move |row| {
            (0..size).filter_map(move |col| {
                let start = Position::new(row, col);
                let window = direction.window(start, win_length, size)?;
                window_owner(board, &window).map(|player| Alignment {
                    player,
                    start,
                    direction,
                })
            })
        })
    })
}

/// Count alignments for both players.
///
/// Always succeeds; an empty board scores 0 - 0.
#[must_use]
pub fn score_board(board: &Board, win_length: usize) -> ScoreResult {
    alignments(board, win_length).fold(ScoreResult::default(), |mut score, alignment| {
        score.increment(alignment.player);
        score
    })
}

fn window_owner(board: &Board, window: &[Position]) -> Option<Player> {
    let first = board.get(*window.first()?)?.owner()?;
    window[1..]
        .iter()
        .all(|&pos| board.get(pos).and_then(|c| c.owner()) == Some(first))
        .then_some(first)
}
