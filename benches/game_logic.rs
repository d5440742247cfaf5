use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{collides, Board, GameState, PieceSource};
use blockfall::term::{GameView, Viewport};
use blockfall::types::{Cell, InputEvent, PieceKind};

fn bench_gravity(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("gravity_pulse", |b| {
        b.iter(|| {
            if state.game_over() {
                state = GameState::new(12345);
                state.start();
            }
            state.gravity();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for row in 16..20 {
                board.fill_row(row);
            }
            board.set(15, 3, Cell::Filled);
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let mut board = Board::new();
    for row in 10..20 {
        board.fill_row(row);
        board.set(row as i8, (row % 12) as i8, Cell::Empty);
    }

    c.bench_function("collides", |b| {
        b.iter(|| {
            for kind in PieceKind::ALL {
                black_box(collides(&board, kind, 1, black_box(8), black_box(4)));
            }
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    c.bench_function("hard_drop_until_top_out", |b| {
        b.iter(|| {
            let mut state = GameState::with_source(Board::new(), PieceSource::uniform(7));
            state.start();
            while !state.game_over() {
                state.apply_input(InputEvent::HardDrop);
            }
            black_box(state.score())
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut state = GameState::with_source(Board::new(), PieceSource::cycle(&[]));
    state.start();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| black_box(state.spawn_piece()))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    state.apply_input(InputEvent::HardDrop);
    let snap = state.snapshot();
    let view = GameView::default();
    let mut fb = view.render(&snap, Viewport::new(80, 24));

    c.bench_function("render_into", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_gravity,
    bench_line_clear,
    bench_collides,
    bench_hard_drop,
    bench_spawn,
    bench_render
);
criterion_main!(benches);
