//! Extreme stress tests that really push the heap to its limits
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use rust_dary_heap::dary::DaryHeap;

const ARITIES: [usize; 4] = [2, 3, 4, 16];

/// Cheap deterministic pseudo-random sequence (xorshift)
fn scrambled(n: usize, seed: u64) -> Vec<i64> {
    let mut state = seed.max(1);
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 10_000) as i64
        })
        .collect()
}

/// Test massive numbers of inserts and extractions
fn test_massive_operations(arity: usize) {
    let mut heap = DaryHeap::new(arity).unwrap();

    for i in 0..10_000 {
        heap.insert(i);
    }
    assert_eq!(heap.len(), 10_000);
    assert!(heap.is_max_heap());

    for i in (0..10_000).rev() {
        assert_eq!(heap.extract_max(), Ok(i));
    }
    assert!(heap.is_empty());
}

/// Test many increase_key operations on leaves
fn test_many_increase_keys(arity: usize) {
    let mut heap = DaryHeap::from_vec(arity, (0..2_000).collect::<Vec<i64>>()).unwrap();

    // Repeatedly push the current last leaf above the maximum
    for round in 0..500 {
        let last = heap.len() - 1;
        heap.heap_increase_key(last, 10_000 + round).unwrap();
        assert_eq!(heap.peek(), Some(&(10_000 + round)));
    }
    assert!(heap.is_max_heap());
    assert_eq!(heap.len(), 2_000);
}

/// Test alternating insert and extract
fn test_alternating_ops(arity: usize) {
    let mut heap = DaryHeap::new(arity).unwrap();
    let keys = scrambled(4_000, 42);

    for pair in keys.chunks(2) {
        heap.insert(pair[0]);
        heap.insert(pair[1]);
        let max = heap.extract_max().unwrap();
        assert!(max >= pair[0].max(pair[1]));
    }
    assert_eq!(heap.len(), 2_000);
    assert!(heap.is_max_heap());
}

/// Test deletes scattered through a large heap
fn test_scattered_deletes(arity: usize) {
    let keys = scrambled(5_000, 7);
    let mut heap = DaryHeap::from_vec(arity, keys.clone()).unwrap();
    let mut removed = Vec::new();

    let mut cursor = 0usize;
    while heap.len() > 1_000 {
        cursor = (cursor * 31 + 17) % heap.len();
        removed.push(heap.delete(cursor).unwrap());
    }
    assert!(heap.is_max_heap());

    let mut remaining = heap.into_sorted_vec();
    remaining.extend(removed);
    remaining.sort_unstable();
    let mut expected = keys;
    expected.sort_unstable();
    assert_eq!(remaining, expected);
}

/// Test bulk build on already-sorted and reverse-sorted input
fn test_sorted_inputs(arity: usize) {
    let ascending: Vec<i64> = (0..5_000).collect();
    let descending: Vec<i64> = (0..5_000).rev().collect();

    for input in [ascending, descending] {
        let mut heap = DaryHeap::from_vec(arity, input).unwrap();
        assert!(heap.is_max_heap());
        assert_eq!(heap.extract_max(), Ok(4_999));
        assert_eq!(heap.extract_max(), Ok(4_998));
    }
}

/// Test rapid-fire small batches
fn test_rapid_fire(arity: usize) {
    let mut heap = DaryHeap::new(arity).unwrap();
    for batch in 0..500 {
        for i in 0..5 {
            heap.insert(batch * 5 + i);
        }
        for _ in 0..3 {
            heap.extract_max().unwrap();
        }
    }
    assert_eq!(heap.len(), 1_000);
    assert!(heap.is_max_heap());
}

#[test]
fn test_massive() {
    for d in ARITIES {
        test_massive_operations(d);
    }
}

#[test]
fn test_increase_keys() {
    for d in ARITIES {
        test_many_increase_keys(d);
    }
}

#[test]
fn test_alternating() {
    for d in ARITIES {
        test_alternating_ops(d);
    }
}

#[test]
fn test_deletes() {
    for d in ARITIES {
        test_scattered_deletes(d);
    }
}

#[test]
fn test_sorted() {
    for d in ARITIES {
        test_sorted_inputs(d);
    }
}

#[test]
fn test_rapid() {
    for d in ARITIES {
        test_rapid_fire(d);
    }
}
