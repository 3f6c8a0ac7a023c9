//! Arity Benchmarks
//!
//! Compares d-ary heaps of several arities against each other and against
//! `std::collections::BinaryHeap` on the same workloads.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_perf
//!
//! # Only the bulk-build workload
//! cargo bench --bench heap_perf -- 'build/'
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_dary_heap::dary::DaryHeap;
use std::collections::BinaryHeap;
use std::hint::black_box;

const ARITIES: [usize; 5] = [2, 3, 4, 8, 16];
const SIZES: [usize; 3] = [1 << 10, 1 << 14, 1 << 17];

/// Deterministic xorshift keys so every run sees the same input
fn keys(n: usize) -> Vec<u32> {
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

// ========================================================================
// Benchmark workloads
// ========================================================================

/// Insert N keys, then extract all of them
fn workload_push_pop(arity: usize, input: &[u32]) -> u64 {
    let mut heap = DaryHeap::with_capacity(arity, input.len()).expect("valid arity");
    for &k in input {
        heap.insert(k);
    }
    let mut sum = 0u64;
    while let Ok(k) = heap.extract_max() {
        sum = sum.wrapping_add(k as u64);
    }
    sum
}

fn workload_push_pop_std(input: &[u32]) -> u64 {
    let mut heap = BinaryHeap::with_capacity(input.len());
    for &k in input {
        heap.push(k);
    }
    let mut sum = 0u64;
    while let Some(k) = heap.pop() {
        sum = sum.wrapping_add(k as u64);
    }
    sum
}

/// Build from an unordered vector, then extract a tenth of it
fn workload_build(arity: usize, input: &[u32]) -> u64 {
    let mut heap = DaryHeap::from_vec(arity, input.to_vec()).expect("valid arity");
    let mut sum = 0u64;
    for _ in 0..input.len() / 10 {
        if let Ok(k) = heap.extract_max() {
            sum = sum.wrapping_add(k as u64);
        }
    }
    sum
}

fn workload_build_std(input: &[u32]) -> u64 {
    let mut heap = BinaryHeap::from(input.to_vec());
    let mut sum = 0u64;
    for _ in 0..input.len() / 10 {
        if let Some(k) = heap.pop() {
            sum = sum.wrapping_add(k as u64);
        }
    }
    sum
}

/// Raise every leaf-level key in turn, as a priority-update-heavy workload
fn workload_increase_key(arity: usize, input: &[u32]) -> usize {
    let mut heap = DaryHeap::from_vec(arity, input.to_vec()).expect("valid arity");
    let n = heap.len();
    for i in (n / 2..n).step_by(7) {
        if let Some(&current) = heap.get(i) {
            let _ = heap.heap_increase_key(i, current.saturating_add(1 << 20));
        }
    }
    heap.len()
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    for n in SIZES {
        let input = keys(n);
        for d in ARITIES {
            group.bench_with_input(BenchmarkId::new(format!("dary_{}", d), n), &input, |b, keys| {
                b.iter(|| black_box(workload_push_pop(d, keys)))
            });
        }
        group.bench_with_input(BenchmarkId::new("std_binary", n), &input, |b, keys| {
            b.iter(|| black_box(workload_push_pop_std(keys)))
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for n in SIZES {
        let input = keys(n);
        for d in ARITIES {
            group.bench_with_input(BenchmarkId::new(format!("dary_{}", d), n), &input, |b, keys| {
                b.iter(|| black_box(workload_build(d, keys)))
            });
        }
        group.bench_with_input(BenchmarkId::new("std_binary", n), &input, |b, keys| {
            b.iter(|| black_box(workload_build_std(keys)))
        });
    }
    group.finish();
}

fn bench_increase_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("increase_key");
    for n in SIZES {
        let input = keys(n);
        for d in ARITIES {
            group.bench_with_input(BenchmarkId::new(format!("dary_{}", d), n), &input, |b, keys| {
                b.iter(|| black_box(workload_increase_key(d, keys)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_build, bench_increase_key);
criterion_main!(benches);
