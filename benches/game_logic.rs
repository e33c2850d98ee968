use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_bubble_pop::core::{find_connected, find_floating, resolve_shot, GameState, Grid, SimpleRng};
use tui_bubble_pop::types::{BubbleColor, Pos};

fn dense_grid() -> Grid {
    let mut grid = Grid::new();
    grid.seed_top_rows(&mut SimpleRng::new(42));
    grid
}

fn bench_find_connected(c: &mut Criterion) {
    let grid = dense_grid();
    let color = match grid.get(0, 0) {
        Some(Some(color)) => color,
        _ => BubbleColor::Red,
    };

    c.bench_function("find_connected_seeded", |b| {
        b.iter(|| find_connected(black_box(&grid), Pos::new(0, 0), color))
    });
}

fn bench_find_floating(c: &mut Criterion) {
    let grid = dense_grid();

    c.bench_function("find_floating_seeded", |b| {
        b.iter(|| find_floating(black_box(&grid)))
    });
}

fn bench_resolve_shot(c: &mut Criterion) {
    let grid = dense_grid();

    c.bench_function("resolve_shot_bounced", |b| {
        b.iter(|| resolve_shot(black_box(&grid), black_box(75.0)))
    });
}

fn bench_full_turn(c: &mut Criterion) {
    c.bench_function("shoot_and_settle", |b| {
        b.iter(|| {
            let mut state = GameState::new(black_box(7));
            state.shoot(0.0, state.current());
            while state.resolving() {
                state.animation_complete();
            }
            state.score()
        })
    });
}

criterion_group!(
    benches,
    bench_find_connected,
    bench_find_floating,
    bench_resolve_shot,
    bench_full_turn
);
criterion_main!(benches);
