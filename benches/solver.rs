//! Benchmarks for the board tiling solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tiler::board::format_board;
use tiler::geometry::orientations;
use tiler::shape::{Puzzle, Shape};
use tiler::solver::solve;

fn tromino_puzzle() -> Puzzle {
    Puzzle::new(
        3,
        3,
        vec![
            Shape::from_rows(&["AAA"]),
            Shape::from_rows(&["B", "BB"]),
            Shape::from_rows(&["CC", " C"]),
        ],
    )
}

fn corner_tromino(label: char) -> Shape {
    Shape::from_rows(&[format!("{label}"), format!("{label}{label}")])
}

/// Eight corner trominoes tile a 4x6 board (two per 2x3 block), so this
/// exercises a deeper search than the 3x3 case.
fn large_puzzle() -> Puzzle {
    let shapes = ('A'..='H').map(corner_tromino).collect();
    Puzzle::new(4, 6, shapes)
}

/// Benchmark solving the small tromino puzzle.
fn bench_solve(c: &mut Criterion) {
    let puzzle = tromino_puzzle();
    c.bench_function("solve_trominoes", |b| b.iter(|| solve(black_box(&puzzle))));
}

/// Benchmark solving the 4x6 puzzle.
fn bench_solve_large(c: &mut Criterion) {
    let puzzle = large_puzzle();
    let mut group = c.benchmark_group("large");
    group.sample_size(10);
    group.bench_function("solve_4x6", |b| b.iter(|| solve(black_box(&puzzle))));
    group.finish();
}

/// Benchmark computing the orientation orbit of a single piece.
fn bench_orientations(c: &mut Criterion) {
    let shape = Shape::from_rows(&["L", "L", "LL"]);
    c.bench_function("orientations", |b| {
        b.iter(|| orientations(black_box(&shape)))
    });
}

/// Benchmark formatting a solved board for display.
fn bench_format_board(c: &mut Criterion) {
    let outcome = solve(&tromino_puzzle());
    c.bench_function("format_board", |b| {
        b.iter(|| format_board(black_box(&outcome.board)))
    });
}

criterion_group!(
    benches,
    bench_solve,
    bench_solve_large,
    bench_orientations,
    bench_format_board
);
criterion_main!(benches);
