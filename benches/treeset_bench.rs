//! Benchmark for `TreeSet` vs standard `BTreeSet`.
//!
//! Measures bulk insertion and compares the merge-based intersection with a
//! membership-lookup intersection over the same sets.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeSet;
use std::hint::black_box;
use treeset::TreeSet;

// =============================================================================
// add_all Benchmark
// =============================================================================

fn benchmark_add_all(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("add_all");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("TreeSet", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut set = TreeSet::with_int_comparator();
                set.add_all((0..size).map(|index| black_box(index * 7919 % size)));
                black_box(set)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let set: BTreeSet<i64> = (0..size)
                    .map(|index| black_box(index * 7919 % size))
                    .collect();
                black_box(set)
            });
        });
    }

    group.finish();
}

// =============================================================================
// intersection Benchmark
// =============================================================================

fn benchmark_intersection(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("intersection");

    for size in [100, 1000, 10000] {
        let mut evens = TreeSet::with_int_comparator();
        evens.add_all((0..size).map(|index| index * 2));
        let mut thirds = TreeSet::with_int_comparator();
        thirds.add_all((0..size).map(|index| index * 3));

        group.bench_with_input(BenchmarkId::new("merge", size), &size, |bencher, _| {
            bencher.iter(|| black_box(evens.intersection(black_box(&thirds))));
        });

        group.bench_with_input(BenchmarkId::new("merge_in_place", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut result = evens.clone();
                result.in_place_intersection(black_box(&thirds));
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("lookup", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut result = TreeSet::with_int_comparator();
                result.add_all(evens.iter().copied().filter(|value| thirds.contains(value)));
                black_box(result)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_add_all, benchmark_intersection);
criterion_main!(benches);
