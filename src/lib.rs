//! d-ary Max-Heap for Rust
//!
//! This crate provides an array-backed max-heap whose nodes have a
//! configurable number of children `d >= 2`, together with a small
//! interactive console for exploring it.
//!
//! # Features
//!
//! - **d-ary Heap**: O(log_d n) insert and increase-key; O(d log_d n)
//!   extract-max and delete-at-index; O(n) bulk construction
//! - **Validity check**: `is_max_heap` verifies the heap property in O(n)
//! - **Depth rendering**: keys grouped one line per level via `Display`
//! - **Console**: the `dary-heap` binary drives a heap from stdin
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heap::dary::DaryHeap;
//! use rust_dary_heap::HeapError;
//!
//! let mut heap = DaryHeap::new(3).unwrap();
//! heap.insert(5);
//! heap.insert(12);
//! heap.insert(7);
//! assert_eq!(heap.extract_max(), Ok(12));
//! assert_eq!(heap.heap_increase_key(0, 1), Err(HeapError::InvalidKeyUpdate));
//! ```

pub mod console;
pub mod dary;
pub mod traits;

// Re-export the main types for convenience
pub use dary::DaryHeap;
pub use traits::{Heap, HeapError, IncreaseKeyHeap};
