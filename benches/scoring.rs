use criterion::{criterion_group, criterion_main, Criterion};
use rust_gridline::playout::random_playout;
use rust_gridline::{score_board, Board, GameEngine, GameRng};
use std::hint::black_box;

fn corpus() -> Vec<Board> {
    let mut rng = GameRng::new(1337);
    (0..32)
        .map(|_| {
            let mut engine = GameEngine::new();
            random_playout(&mut engine, &mut rng.fork(), None);
            engine.board().clone()
        })
        .collect()
}

fn bench_score_board(c: &mut Criterion) {
    let boards = corpus();
    c.bench_function("scoring/full_board", |bch| {
        bch.iter(|| {
            let mut acc = 0u32;
            for board in &boards {
                let scores = score_board(black_box(board), 5);
                acc = acc.wrapping_add(scores.score_one ^ scores.score_two);
            }
            black_box(acc)
        })
    });
}

fn bench_playout(c: &mut Criterion) {
    let mut rng = GameRng::new(7);
    c.bench_function("playout/random_game", |bch| {
        bch.iter(|| {
            let mut engine = GameEngine::new();
            black_box(random_playout(&mut engine, &mut rng, None))
        })
    });
}

criterion_group!(benches, bench_score_board, bench_playout);
criterion_main!(benches);
