//! Wall-clock benchmarks for the persistent Fibonacci heap
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_perf
//!
//! # Only the extract_min group
//! cargo bench --bench heap_perf -- extract_min
//! ```
//!
//! Sizes are powers of two so the per-element cost of each group can be
//! read off directly: insert and union should stay flat, extract_min should
//! grow with log n.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use persistent_fibonacci_heap::fibonacci::FibonacciHeap;
use persistent_fibonacci_heap::wheel::Wheel;
use std::collections::BinaryHeap;
use std::cmp::Reverse;

const SIZES: [u32; 3] = [1 << 8, 1 << 12, 1 << 16];

/// Deterministic pseudo-random keys (xorshift)
fn keys(n: u32) -> Vec<u32> {
    let mut state = 0x9E37_79B9u32;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for &n in &SIZES {
        let data = keys(n);
        let label = format!("2^{}", n.trailing_zeros());

        group.bench_with_input(BenchmarkId::new("fibonacci", &label), &data, |b, data| {
            b.iter(|| {
                let heap = data
                    .iter()
                    .fold(FibonacciHeap::new(), |heap, &k| heap.insert(k));
                black_box(heap.len())
            })
        });
        group.bench_with_input(BenchmarkId::new("std_binary", &label), &data, |b, data| {
            b.iter(|| {
                let heap: BinaryHeap<Reverse<u32>> = data.iter().map(|&k| Reverse(k)).collect();
                black_box(heap.len())
            })
        });
    }
    group.finish();
}

fn bench_extract_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_min");
    group.sample_size(20);

    for &n in &SIZES {
        let data = keys(n);
        let label = format!("2^{}", n.trailing_zeros());
        let heap: FibonacciHeap<u32> = data.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("fibonacci", &label), &heap, |b, heap| {
            b.iter(|| black_box(heap.clone().into_sorted_vec()))
        });
        group.bench_with_input(BenchmarkId::new("std_binary", &label), &data, |b, data| {
            b.iter(|| {
                let heap: BinaryHeap<Reverse<u32>> = data.iter().map(|&k| Reverse(k)).collect();
                black_box(heap.into_sorted_vec())
            })
        });
    }
    group.finish();
}

fn bench_union(c: &mut Criterion) {
    let mut group = c.benchmark_group("union");

    for &n in &SIZES {
        let data = keys(n);
        let label = format!("2^{}", n.trailing_zeros());
        let (left, right) = data.split_at(data.len() / 2);
        let left: FibonacciHeap<u32> = left.iter().copied().collect();
        let right: FibonacciHeap<u32> = right.iter().copied().collect();

        group.bench_function(BenchmarkId::new("fibonacci", &label), |b| {
            b.iter(|| black_box(left.union(&right).len()))
        });
    }
    group.finish();
}

fn bench_wheel_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("wheel_rotate");

    for &n in &SIZES {
        let wheel: Wheel<u32> = (0..n).collect();
        let label = format!("2^{}", n.trailing_zeros());

        group.bench_function(BenchmarkId::new("right_full_turn", &label), |b| {
            b.iter(|| {
                let turned = (0..n).fold(wheel.clone(), |w, _| w.rotate_right());
                black_box(turned.len())
            })
        });
        group.bench_function(BenchmarkId::new("left_full_turn", &label), |b| {
            b.iter(|| {
                let turned = (0..n).fold(wheel.clone(), |w, _| w.rotate_left());
                black_box(turned.len())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_extract_min,
    bench_union,
    bench_wheel_rotation
);
criterion_main!(benches);
