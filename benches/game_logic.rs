use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use falling_blocks::core::{rotate_with_kick, Board, Piece, Session};
use falling_blocks::types::{GameAction, PieceKind, Rgb, Vec2i};

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::with_seed(12345);
    session.handle_key_down(GameAction::MoveLeft);

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            session.tick(black_box(Duration::from_millis(16)));
            if session.is_game_over() {
                session.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let color = Rgb::new(1, 2, 3);
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::default();
            for y in 0..4 {
                for x in 0..10 {
                    board.fill(x, y, color);
                }
            }
            let rows = board.clearable_rows();
            board.clear_rows(black_box(&rows));
            board
        })
    });
}

fn bench_rotate_with_kick(c: &mut Criterion) {
    let board = Board::default();

    c.bench_function("rotate_with_kick_left_wall", |b| {
        b.iter(|| {
            let mut piece = Piece::new(PieceKind::I, Vec2i::new(0, 10));
            rotate_with_kick(black_box(&mut piece), &board, true)
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let board = Board::default();
    let piece = Piece::spawn(PieceKind::T, &board);

    c.bench_function("hard_drop_position", |b| {
        b.iter(|| black_box(&piece).hard_drop_position(&board))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let session = Session::with_seed(12345);
    let mut snap = session.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| session.snapshot_into(black_box(&mut snap)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_rotate_with_kick,
    bench_hard_drop,
    bench_snapshot
);
criterion_main!(benches);
