//! Layout pass benchmarks.

use cellgrid_core::{Anchor, Direction, GridConfig};
use cellgrid_layout::{compute_layout, Cell, Container, ContainerGeometry, GridLayoutEngine, GridParams};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;

const CELLS: usize = 10_000;

fn compute_vertical(c: &mut Criterion) {
    let params = GridParams::normalize(&GridConfig::vertical(7).with_spacing(4.0).with_alignment(Anchor::LowerCenter));
    let geometry = ContainerGeometry::new(1280.0, Vec2::new(0.5, 0.5));
    let pivots = vec![Vec2::splat(0.5); CELLS];

    c.bench_function("compute_vertical_10k", |b| {
        b.iter(|| compute_layout(black_box(&params), black_box(&geometry), black_box(&pivots)))
    });
}

fn engine_horizontal(c: &mut Criterion) {
    let mut engine = GridLayoutEngine::new(GridConfig::horizontal(5).with_aspect_ratio(1.5));
    let mut container = Container::pinned(Vec2::new(1920.0, 1080.0), Direction::Horizontal);
    let mut cells = vec![Cell::default(); CELLS];

    c.bench_function("engine_horizontal_10k", |b| {
        b.iter(|| engine.compute_along_primary_axis(black_box(&mut container), black_box(&mut cells)))
    });
}

criterion_group!(benches, compute_vertical, engine_horizontal);
criterion_main!(benches);
