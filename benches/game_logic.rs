use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{collides, rotate, GameState, Grid, Piece};
use blockfall::term::{GameView, Viewport};
use blockfall::types::{Color, Command, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state.restart();
            }
            state.tick(black_box(16));
            state.drain_events();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let color = Some(Color::new(0x00f0f0));
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::standard();
            for y in 16..20 {
                for x in 0..10 {
                    grid.set(x, y, color);
                }
            }
            let rows = grid.find_full_rows();
            grid.clear_rows(black_box(&rows))
        })
    });
}

fn bench_collision(c: &mut Criterion) {
    let mut grid = Grid::standard();
    for x in 0..9 {
        grid.set(x, 19, Some(Color::new(0x808080)));
    }
    let piece = Piece::spawn(PieceKind::T, 10).moved(0, 10);

    c.bench_function("collides", |b| {
        b.iter(|| collides(black_box(&piece), black_box(&grid)))
    });
    c.bench_function("rotate", |b| {
        b.iter(|| rotate(black_box(&piece), black_box(&grid)))
    });
}

fn bench_soft_drop_game(c: &mut Criterion) {
    c.bench_function("soft_drop_until_game_over", |b| {
        b.iter(|| {
            let mut state = GameState::with_seed(black_box(7));
            while !state.is_game_over() {
                state.apply(Command::SoftDrop);
            }
            state.score()
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::with_seed(99);
    let view = GameView::default();

    c.bench_function("game_view_render_80x24", |b| {
        b.iter(|| view.render(&state.frame(), Some(1000), Viewport::new(80, 24)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_collision,
    bench_soft_drop_game,
    bench_render
);
criterion_main!(benches);
