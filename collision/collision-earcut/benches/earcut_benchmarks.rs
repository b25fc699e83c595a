//! Benchmarks for ear-clipping triangulation.
//!
//! Run with: cargo bench -p collision-earcut
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p collision-earcut -- --save-baseline main
//! 2. After changes: cargo bench -p collision-earcut -- --baseline main

use collision_earcut::triangulate;
use collision_types::{ContourLoop, Point2, Polygon};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Star polygon with alternating spike radii - worst-case reflex density
/// for the O(n²) ear scan.
fn create_star(points: usize) -> Polygon {
    #[allow(clippy::cast_precision_loss)]
    let vertices = (0..points)
        .map(|i| {
            let theta = std::f64::consts::TAU * (i as f64) / (points as f64);
            let r = if i % 2 == 0 { 100.0 } else { 40.0 };
            Point2::new(r * theta.cos(), r * theta.sin())
        })
        .collect();
    Polygon::new(ContourLoop::outer(vertices))
}

/// Convex regular polygon - best case, every corner is an ear.
fn create_ring(points: usize) -> Polygon {
    #[allow(clippy::cast_precision_loss)]
    let vertices = (0..points)
        .map(|i| {
            let theta = std::f64::consts::TAU * (i as f64) / (points as f64);
            Point2::new(100.0 * theta.cos(), 100.0 * theta.sin())
        })
        .collect();
    Polygon::new(ContourLoop::outer(vertices))
}

fn bench_triangulate_star(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate_star");
    for size in [16, 64, 256] {
        let poly = create_star(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &poly, |b, poly| {
            b.iter(|| triangulate(black_box(poly)));
        });
    }
    group.finish();
}

fn bench_triangulate_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate_ring");
    for size in [16, 64, 256] {
        let poly = create_ring(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &poly, |b, poly| {
            b.iter(|| triangulate(black_box(poly)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_triangulate_star, bench_triangulate_ring);
criterion_main!(benches);
