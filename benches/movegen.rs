//! Benchmarks for move generation and full greedy playouts.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use senet_engine::board::Board;
use senet_engine::core::PlayerColor;
use senet_engine::game::{choose_ai_move, SenetGame};

fn bench_legal_moves(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("legal_moves_opening", |b| {
        b.iter(|| {
            for color in PlayerColor::both() {
                for roll in 1..=5u8 {
                    black_box(board.legal_moves(black_box(color), black_box(roll)));
                }
            }
        });
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let board = Board::new();
    let mv = board
        .move_for_tile(PlayerColor::Light, 13, 2)
        .expect("opening move");

    c.bench_function("clone_and_apply", |b| {
        b.iter(|| {
            let mut scratch = board.clone();
            scratch.apply_move(black_box(&mv)).expect("move applies");
            black_box(scratch)
        });
    });
}

fn bench_greedy_playout(c: &mut Criterion) {
    c.bench_function("greedy_playout", |b| {
        b.iter(|| {
            let mut game = SenetGame::new(black_box(42));
            while game.winner().is_none() && game.turn_count() < 2000 {
                let context = game.roll_turn();
                match choose_ai_move(&context.moves) {
                    Some(mv) => {
                        let mv = mv.clone();
                        game.apply_move(&mv).expect("chosen move applies");
                    }
                    None => game.skip_turn(),
                }
            }
            black_box(game.turn_count())
        });
    });
}

criterion_group!(
    benches,
    bench_legal_moves,
    bench_apply_move,
    bench_greedy_playout
);
criterion_main!(benches);
