use criterion::{Criterion, black_box, criterion_group, criterion_main};

use flowgrid_mvp::{FlowLayout, GridParams};

fn solve_playground_grid(c: &mut Criterion) {
    let layout = FlowLayout::new(GridParams::new(2, 10.0, 10.0, 10.0));
    c.bench_function("solve_playground_grid", |b| {
        b.iter(|| layout.solve(black_box(300.0), black_box(31)));
    });
}

fn solve_large_grid(c: &mut Criterion) {
    let layout = FlowLayout::new(GridParams::new(4, 16.0, 16.0, 8.0));
    c.bench_function("solve_large_grid", |b| {
        b.iter(|| layout.solve(black_box(1280.0), black_box(10_000)));
    });
}

fn params_construction(c: &mut Criterion) {
    c.bench_function("params_construction", |b| {
        b.iter(|| GridParams::new(black_box(2), 10.0, 10.0, 10.0).derived_padding());
    });
}

criterion_group!(
    benches,
    solve_playground_grid,
    solve_large_grid,
    params_construction
);
criterion_main!(benches);
