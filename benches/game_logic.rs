use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_gridfall::core::{GameSession, GameSnapshot, Grid};
use tui_gridfall::types::Command;

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            if session.is_game_over() {
                session = GameSession::new(12345);
            }
            session.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::default();
            for y in 16..20 {
                for x in 0..10 {
                    grid.set(x, y, 1);
                }
            }
            black_box(grid.clear_full_lines());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    let mut right = true;

    c.bench_function("apply_move", |b| {
        b.iter(|| {
            let command = if right { Command::MoveRight } else { Command::MoveLeft };
            if !session.apply(black_box(command)) {
                right = !right;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("apply_rotate", |b| {
        b.iter(|| {
            session.apply(black_box(Command::Rotate));
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let session = GameSession::new(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_move,
    bench_rotate,
    bench_snapshot_into
);
criterion_main!(benches);
