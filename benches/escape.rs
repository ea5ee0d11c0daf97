#[macro_use]
extern crate criterion;
extern crate mandelgrid;
extern crate num;

use criterion::Criterion;
use num::Complex;

use mandelgrid::{escape_grid, escape_grid_threaded, escape_row, linspace, sample_grid};

fn bench_escape_row(c: &mut Criterion) {
    let row: Vec<Complex<f64>> = linspace(-2.25, 0.75, 256)
        .into_iter()
        .map(|re| Complex::new(re, 0.35))
        .collect();
    c.bench_function("escape_row 256", move |b| b.iter(|| escape_row(&row, 128)));
}

fn bench_escape_grid(c: &mut Criterion) {
    let xs = linspace(-2.25, 0.75, 128);
    let ys = linspace(-1.25, 1.25, 128);
    let grid = sample_grid(&xs, &ys);
    c.bench_function("escape_grid 128x128", move |b| {
        b.iter(|| escape_grid(&grid, 128))
    });
}

fn bench_escape_grid_threaded(c: &mut Criterion) {
    let xs = linspace(-2.25, 0.75, 128);
    let ys = linspace(-1.25, 1.25, 128);
    let grid = sample_grid(&xs, &ys);
    c.bench_function("escape_grid_threaded 128x128x4", move |b| {
        b.iter(|| escape_grid_threaded(&grid, 128, 4).unwrap())
    });
}

criterion_group!(
    benches,
    bench_escape_row,
    bench_escape_grid,
    bench_escape_grid_threaded
);
criterion_main!(benches);
