//! Hot paths of a search loop: win detection, validity, augmentation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_gomoku::agents::{Agent, RandomAgent};
use rust_gomoku::core::{Board, Side};
use rust_gomoku::games::GomokuGame;
use rust_gomoku::rules::GameEnvironment;

/// A half-filled 15x15 board from random play.
fn midgame(game: &GomokuGame) -> (Board, Side) {
    let mut agent = RandomAgent::seeded(*game, 7);
    let mut board = game.init_board();
    let mut side = Side::First;
    for _ in 0..game.action_size() / 2 {
        if game.game_ended(&board, side).is_some() {
            break;
        }
        let canonical = game.canonical_form(&board, side);
        let Ok(action) = agent.choose(&canonical) else {
            break;
        };
        let Ok(next) = game.next_state(&board, side, action) else {
            break;
        };
        (board, side) = next;
    }
    (board, side)
}

fn bench_engine(c: &mut Criterion) {
    let game = GomokuGame::default();
    let (board, side) = midgame(&game);
    let policy = vec![1.0 / game.action_size() as f32; game.action_size()];

    c.bench_function("game_ended", |b| {
        b.iter(|| game.game_ended(black_box(&board), side))
    });
    c.bench_function("valid_moves", |b| {
        b.iter(|| game.valid_moves(black_box(&board), side))
    });
    c.bench_function("canonical_form", |b| {
        b.iter(|| game.canonical_form(black_box(&board), side))
    });
    c.bench_function("symmetries", |b| {
        b.iter(|| game.symmetries(black_box(&board), black_box(&policy)))
    });
    c.bench_function("stable_key", |b| {
        b.iter(|| game.stable_key(black_box(&board)))
    });
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
