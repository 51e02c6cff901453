//! Checked vs unchecked element access.
//!
//! Run with: `cargo bench --bench access`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rectangular::{CheckedGrid, FlatGrid};

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_all_cells");

    for side in [16usize, 128, 512] {
        let flat = FlatGrid::from_iter_exact(side, side, 0..(side * side) as u64)
            .unwrap_or_default();
        let checked = CheckedGrid::from(flat.clone());

        group.bench_with_input(BenchmarkId::new("at", side), &side, |b, &side| {
            b.iter(|| {
                let mut sum = 0u64;
                for r in 0..side {
                    for c in 0..side {
                        sum += flat.at(r, c).copied().unwrap_or(0);
                    }
                }
                black_box(sum);
            });
        });

        group.bench_with_input(BenchmarkId::new("row_accessor", side), &side, |b, &side| {
            b.iter(|| {
                let mut sum = 0u64;
                for r in 0..side {
                    for c in 0..side {
                        sum += checked.row(r).at(c).copied().unwrap_or(0);
                    }
                }
                black_box(sum);
            });
        });

        group.bench_with_input(BenchmarkId::new("index", side), &side, |b, &side| {
            b.iter(|| {
                let mut sum = 0u64;
                for r in 0..side {
                    for c in 0..side {
                        sum += flat[r][c];
                    }
                }
                black_box(sum);
            });
        });

        group.bench_with_input(BenchmarkId::new("get_unchecked", side), &side, |b, &side| {
            b.iter(|| {
                let mut sum = 0u64;
                for r in 0..side {
                    for c in 0..side {
                        // SAFETY: r < height and c < width
                        sum += unsafe { *flat.get_unchecked(r, c) };
                    }
                }
                black_box(sum);
            });
        });

        group.bench_with_input(BenchmarkId::new("iter", side), &side, |b, _| {
            b.iter(|| black_box(flat.iter().sum::<u64>()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sum);
criterion_main!(benches);
