//! Benchmarks for the constraint-propagation solve.
//!
//! Measures a full `solve` on representative puzzle states: a puzzle that
//! resolves completely through forced singles, and an empty grid where
//! every pass is a no-op.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use pencilmark_core::Grid;
use pencilmark_solver::Propagator;

const WIKIPEDIA: &str = "
    53xx7xxxx
    6xx195xxx
    x98xxxx6x
    8xxx6xxx3
    4xx8x3xx1
    7xxx2xxx6
    x6xxxx28x
    xxx419xx5
    xxxx8xx79
";

fn bench_solve(c: &mut Criterion) {
    let puzzles = [
        ("wikipedia", WIKIPEDIA.parse::<Grid>().unwrap()),
        ("empty", Grid::empty()),
    ];

    let propagator = Propagator::new();

    for (param, grid) in puzzles {
        c.bench_with_input(BenchmarkId::new("solve", param), &grid, |b, grid| {
            b.iter_batched_ref(
                || hint::black_box(grid.clone()),
                |grid| {
                    let result = propagator.solve(grid).unwrap();
                    hint::black_box(result)
                },
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_propagate_all(c: &mut Criterion) {
    let grid = WIKIPEDIA.parse::<Grid>().unwrap();
    let propagator = Propagator::new();

    c.bench_function("propagate_all", |b| {
        b.iter_batched_ref(
            || hint::black_box(grid.clone()),
            |grid| propagator.propagate_all(grid),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_solve, bench_propagate_all);
criterion_main!(benches);
