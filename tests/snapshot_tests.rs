//! Snapshot and restore tests.

use proptest::prelude::*;
use rust_gridline::core::{BoardConfig, GameMode, Player, Snapshot};
use rust_gridline::playout::random_playout;
use rust_gridline::rules::GameEngine;
use rust_gridline::{GameRng, SnapshotError};

fn assert_same_game(a: &GameEngine, b: &GameEngine) {
    let size = a.config().size;
    assert_eq!(size, b.config().size);
    for row in 0..size {
        for col in 0..size {
            assert_eq!(a.cell(row, col), b.cell(row, col), "cell ({}, {})", row, col);
        }
    }
    assert_eq!(a.current_player(), b.current_player());
    assert_eq!(a.is_over(), b.is_over());
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

/// Test a bincode round-trip of a game in progress.
#[test]
fn test_roundtrip_in_progress() {
    let mut engine = GameEngine::new();
    engine.place_mark(3, 3);
    engine.place_mark(4, 4);
    engine.place_mark(5, 5);

    let bytes = engine.snapshot().to_bytes().unwrap();
    let restored = GameEngine::from_snapshot(&Snapshot::from_bytes(&bytes).unwrap()).unwrap();

    assert_same_game(&engine, &restored);
    assert_eq!(restored.current_player(), Player::Two);
}

/// Test a round-trip of a finished random game.
#[test]
fn test_roundtrip_finished_game() {
    let mut engine = GameEngine::new();
    random_playout(&mut engine, &mut GameRng::new(5), None);

    let restored = GameEngine::from_snapshot(&engine.snapshot()).unwrap();

    assert_same_game(&engine, &restored);
    assert!(restored.is_over());
    assert_eq!(restored.scores(), engine.scores());
}

/// Test that restore adopts the snapshot config and mode.
#[test]
fn test_restore_carries_mode_and_config() {
    let mut source = GameEngine::with_config(BoardConfig::new(6, 4).unwrap()).unwrap();
    source.set_mode(GameMode::Online);
    source.place_mark(0, 0);

    let mut target = GameEngine::new();
    target.restore(&source.snapshot()).unwrap();

    assert_eq!(target.config(), source.config());
    assert_eq!(target.mode(), GameMode::Online);
    assert_same_game(&source, &target);
}

/// Test that play continues after a restore.
#[test]
fn test_restored_game_continues() {
    let mut engine = GameEngine::new();
    engine.place_mark(0, 0);

    let mut restored = GameEngine::from_snapshot(&engine.snapshot()).unwrap();
    restored.place_mark(0, 1);

    assert_eq!(restored.current_player(), Player::One);
    assert_eq!(restored.move_count(), 1);
}

// =============================================================================
// Encoding Tests
// =============================================================================

/// Test that truncated bytes fail to decode.
#[test]
fn test_truncated_bytes_rejected() {
    let engine = GameEngine::new();
    let bytes = engine.snapshot().to_bytes().unwrap();

    let result = Snapshot::from_bytes(&bytes[..bytes.len() / 2]);
    assert!(matches!(result, Err(SnapshotError::Decode(_))));
}

/// Test a JSON round-trip of a snapshot.
#[test]
fn test_json_snapshot() {
    let mut engine = GameEngine::new();
    engine.place_mark(9, 9);

    let json = serde_json::to_string(&engine.snapshot()).unwrap();
    let snapshot: Snapshot = serde_json::from_str(&json).unwrap();
    let restored = GameEngine::from_snapshot(&snapshot).unwrap();

    assert_same_game(&engine, &restored);
}

// =============================================================================
// Round-Trip Properties
// =============================================================================

proptest! {
    /// Snapshot then restore reproduces board, player and terminal flag.
    #[test]
    fn prop_snapshot_roundtrip(
        moves in prop::collection::vec((0usize..10, 0usize..10), 0..120),
        switches in prop::collection::vec(any::<bool>(), 0..120),
        force_end in any::<bool>(),
    ) {
        let mut engine = GameEngine::new();
        for (i, (row, col)) in moves.into_iter().enumerate() {
            engine.place_mark(row, col);
            if switches.get(i).copied().unwrap_or(false) {
                engine.switch_player();
            }
        }
        if force_end {
            engine.compute_scores();
        }

        let bytes = engine.snapshot().to_bytes().unwrap();
        let snapshot = Snapshot::from_bytes(&bytes).unwrap();
        let restored = GameEngine::from_snapshot(&snapshot).unwrap();

        prop_assert_eq!(restored.board(), engine.board());
        prop_assert_eq!(restored.current_player(), engine.current_player());
        prop_assert_eq!(restored.is_over(), engine.is_over());
    }
}
