//! Common traits for heap data structures
//!
//! This module provides a two-tier trait hierarchy for max-heaps stored in
//! an implicit array:
//!
//! - [`Heap`]: Base trait mirroring the `push`/`pop`/`peek` shape of
//!   `std::collections::BinaryHeap`
//! - [`IncreaseKeyHeap`]: Extended trait adding index-addressed
//!   `increase_key` and `remove`
//!
//! Both traits report misuse through [`HeapError`] rather than panicking.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap was constructed with an arity below 2
    InvalidArity(usize),
    /// Extraction was attempted on an empty heap
    EmptyHeap,
    /// The new key is smaller than the key currently stored at that index
    InvalidKeyUpdate,
    /// The index does not address an occupied slot
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// Number of elements at the time of the call
        len: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidArity(d) => {
                write!(f, "heap arity must be at least 2, got {}", d)
            }
            HeapError::EmptyHeap => {
                write!(f, "heap underflow: no elements to extract")
            }
            HeapError::InvalidKeyUpdate => {
                write!(f, "new key is smaller than the current key")
            }
            HeapError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for heap of length {}", index, len)
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for max-heap/priority queue data structures
///
/// The API follows Rust's `BinaryHeap`: keys are stored directly and ordered
/// by `Ord`, and `pop` returns the greatest key first.
///
/// # Example
///
/// ```rust
/// use rust_dary_heap::Heap;
/// use rust_dary_heap::dary::DaryHeap;
///
/// let mut heap = DaryHeap::new(3).unwrap();
/// heap.push(3);
/// heap.push(7);
/// heap.push(5);
///
/// assert_eq!(heap.peek(), Some(&7));
/// assert_eq!(heap.pop(), Some(7));
/// ```
pub trait Heap<T: Ord> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts a key
    ///
    /// # Time Complexity
    /// O(log_d n) for a d-ary heap.
    fn push(&mut self, key: T);

    /// Returns the maximum key without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the maximum key, or `None` if the heap is empty
    ///
    /// # Time Complexity
    /// O(d log_d n) for a d-ary heap.
    fn pop(&mut self) -> Option<T>;
}

/// Extended heap trait with index-addressed updates
///
/// Array-backed heaps expose the position of every key, so updates are
/// addressed by index instead of by handle. Indices are only stable until
/// the next mutating call.
///
/// Only increasing a key is supported; lowering one has to go through
/// [`IncreaseKeyHeap::remove`] followed by [`Heap::push`].
///
/// # Example
///
/// ```rust
/// use rust_dary_heap::{Heap, IncreaseKeyHeap};
/// use rust_dary_heap::dary::DaryHeap;
///
/// let mut heap = DaryHeap::from_vec(2, vec![4, 1, 3]).unwrap();
/// let last = heap.len() - 1;
/// heap.increase_key(last, 10).unwrap();
/// assert_eq!(heap.peek(), Some(&10));
/// ```
pub trait IncreaseKeyHeap<T: Ord>: Heap<T> {
    /// Replaces the key at `index` with a key that is not smaller
    ///
    /// # Errors
    /// - `HeapError::IndexOutOfBounds` if `index >= len()`
    /// - `HeapError::InvalidKeyUpdate` if `key` is less than the current key
    fn increase_key(&mut self, index: usize, key: T) -> Result<(), HeapError>;

    /// Removes and returns the key at `index`
    ///
    /// # Errors
    /// Returns `HeapError::IndexOutOfBounds` if `index >= len()`.
    fn remove(&mut self, index: usize) -> Result<T, HeapError>;
}
