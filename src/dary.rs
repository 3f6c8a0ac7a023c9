//! d-ary Max-Heap implementation
//!
//! An implicit max-heap where every node has up to `d` children, stored
//! level by level in a single `Vec`. For a node at index `i`:
//!
//! - its parent lives at `(i - 1) / d`
//! - its children occupy `d * i + 1 ..= d * i + d`, clipped to the length
//!
//! A larger arity gives a shallower tree, which makes `insert` and
//! `heap_increase_key` cheaper (`O(log_d n)`), at the cost of scanning up to
//! `d` children on every level of a downward sift.
//!
//! # Time Complexity
//!
//! | Operation           | Complexity     |
//! |---------------------|----------------|
//! | `insert`            | O(log_d n)     |
//! | `extract_max`       | O(d log_d n)   |
//! | `heap_increase_key` | O(log_d n)     |
//! | `delete`            | O(d log_d n)   |
//! | `build_max_heap`    | O(n)           |
//! | `is_max_heap`       | O(n)           |
//! | `peek`              | O(1)           |
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heap::dary::DaryHeap;
//!
//! let mut heap = DaryHeap::from_vec(2, vec![3, 9, 2, 1, 4, 8]).unwrap();
//! assert!(heap.is_max_heap());
//! assert_eq!(heap.extract_max(), Ok(9));
//!
//! heap.insert(6);
//! heap.heap_increase_key(heap.len() - 1, 20).unwrap();
//! assert_eq!(heap.peek(), Some(&20));
//! ```

use std::fmt;
use std::ops::Range;

use crate::traits::{Heap, HeapError, IncreaseKeyHeap};

/// A max-heap with a configurable branching factor
///
/// The arity is fixed at construction and must be at least 2. The heap owns
/// its keys; no mutable access to a stored key is ever handed out, so the
/// heap property can only be broken (and repaired) inside its own methods.
#[derive(Debug, Clone)]
pub struct DaryHeap<T> {
    data: Vec<T>,
    arity: usize,
}

impl<T: Ord> DaryHeap<T> {
    /// Creates an empty heap with the given arity
    ///
    /// # Errors
    /// Returns `HeapError::InvalidArity` if `arity < 2`.
    pub fn new(arity: usize) -> Result<Self, HeapError> {
        Self::with_capacity(arity, 0)
    }

    /// Creates an empty heap that can hold `capacity` keys without reallocating
    ///
    /// # Errors
    /// Returns `HeapError::InvalidArity` if `arity < 2`.
    pub fn with_capacity(arity: usize, capacity: usize) -> Result<Self, HeapError> {
        if arity < 2 {
            return Err(HeapError::InvalidArity(arity));
        }
        Ok(Self {
            data: Vec::with_capacity(capacity),
            arity,
        })
    }

    /// Builds a heap from an unordered vector, taking ownership of it
    ///
    /// The vector is rearranged in place with a single bottom-up pass.
    ///
    /// # Errors
    /// Returns `HeapError::InvalidArity` if `arity < 2`.
    ///
    /// # Time Complexity
    /// O(n)
    pub fn from_vec(arity: usize, elements: Vec<T>) -> Result<Self, HeapError> {
        if arity < 2 {
            return Err(HeapError::InvalidArity(arity));
        }
        let mut heap = Self {
            data: elements,
            arity,
        };
        heap.build_max_heap();
        Ok(heap)
    }

    /// The branching factor of this heap
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of keys in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True iff the heap holds no keys
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The maximum key, if any
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// The key stored at `index`
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// The backing array in heap order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap, returning the backing array in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its keys in ascending order
    ///
    /// Sorts in place by repeatedly moving the root behind a shrinking
    /// heap prefix.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.data.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            self.sift_down_within(0, end);
        }
        self.data
    }

    /// Removes every key, keeping the allocation and the arity
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Index of the parent of `index`, or `None` for the root or an
    /// unoccupied slot
    pub fn parent(&self, index: usize) -> Option<usize> {
        if index == 0 || index >= self.data.len() {
            None
        } else {
            Some((index - 1) / self.arity)
        }
    }

    /// Occupied child indices of `index`
    ///
    /// Empty when `index` is a leaf or not occupied at all.
    pub fn children(&self, index: usize) -> Range<usize> {
        Self::child_range(self.arity, index, self.data.len())
    }

    fn child_range(arity: usize, index: usize, end: usize) -> Range<usize> {
        let first = index.saturating_mul(arity).saturating_add(1).min(end);
        let last = first.saturating_add(arity).min(end);
        first..last
    }

    /// Inserts a key
    ///
    /// The key is appended as a new leaf and then promoted with the same
    /// upward sift that [`DaryHeap::heap_increase_key`] uses.
    ///
    /// # Time Complexity
    /// O(log_d n)
    pub fn insert(&mut self, key: T) {
        self.data.push(key);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the maximum key
    ///
    /// # Errors
    /// Returns `HeapError::EmptyHeap` if there is nothing to extract.
    pub fn extract_max(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyHeap);
        }
        // swap_remove moves the last leaf into the root slot
        let max = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.max_heapify(0);
        }
        Ok(max)
    }

    /// Replaces the key at `index` with `new_key` and restores the heap
    /// property by sifting it upward
    ///
    /// Equal keys are not promoted: a node only moves above its parent when
    /// it is strictly greater, so equal siblings keep their relative order.
    ///
    /// # Errors
    /// - `HeapError::IndexOutOfBounds` if `index >= len()`
    /// - `HeapError::InvalidKeyUpdate` if `new_key` is smaller than the
    ///   current key; the heap is left untouched
    pub fn heap_increase_key(&mut self, index: usize, new_key: T) -> Result<(), HeapError> {
        let len = self.data.len();
        let current = self
            .data
            .get(index)
            .ok_or(HeapError::IndexOutOfBounds { index, len })?;
        if new_key < *current {
            return Err(HeapError::InvalidKeyUpdate);
        }
        self.data[index] = new_key;
        self.sift_up(index);
        Ok(())
    }

    /// Removes and returns the key at `index`
    ///
    /// The last leaf takes the vacated slot. Depending on how it compares
    /// with its new neighbours it is sifted up or down, so the heap property
    /// holds afterwards in either case.
    ///
    /// # Errors
    /// Returns `HeapError::IndexOutOfBounds` if `index >= len()`.
    pub fn delete(&mut self, index: usize) -> Result<T, HeapError> {
        let len = self.data.len();
        if index >= len {
            return Err(HeapError::IndexOutOfBounds { index, len });
        }
        let removed = self.data.swap_remove(index);
        if index < self.data.len() && self.sift_up(index) == index {
            self.max_heapify(index);
        }
        Ok(removed)
    }

    /// Restores the heap property below `index`, assuming both subtrees
    /// already satisfy it
    ///
    /// A no-op for leaves and for unoccupied indices.
    pub fn max_heapify(&mut self, index: usize) {
        let end = self.data.len();
        self.sift_down_within(index, end);
    }

    /// Index of the greatest child of `index`, or `None` for a leaf
    ///
    /// On ties the lowest index wins.
    ///
    /// # Time Complexity
    /// O(d)
    pub fn find_max_child(&self, index: usize) -> Option<usize> {
        self.max_child_within(index, self.data.len())
    }

    /// Rearranges the whole array into a max-heap
    ///
    /// Visits the internal nodes from the last one back to the root.
    ///
    /// # Time Complexity
    /// O(n)
    pub fn build_max_heap(&mut self) {
        let len = self.data.len();
        if len < 2 {
            return;
        }
        let last_internal = (len - 2) / self.arity;
        for index in (0..=last_internal).rev() {
            self.max_heapify(index);
        }
    }

    /// Checks that no child is greater than its parent
    pub fn is_max_heap(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[(i - 1) / self.arity] >= self.data[i])
    }

    /// Iterates over the keys grouped by depth
    ///
    /// Level `k` holds up to `d^k` keys, in array order; only the last level
    /// may be partial.
    pub fn levels(&self) -> Levels<'_, T> {
        Levels {
            rest: &self.data,
            width: 1,
            arity: self.arity,
        }
    }

    /// Promotes the key at `index` while it is strictly greater than its
    /// parent, returning where it came to rest
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / self.arity;
            if self.data[index] > self.data[parent] {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Demotes the key at `index`, treating `end` as the heap length
    fn sift_down_within(&mut self, mut index: usize, end: usize) {
        while let Some(child) = self.max_child_within(index, end) {
            if self.data[child] > self.data[index] {
                self.data.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }

    fn max_child_within(&self, index: usize, end: usize) -> Option<usize> {
        let mut children = Self::child_range(self.arity, index, end);
        let mut best = children.next()?;
        for child in children {
            if self.data[child] > self.data[best] {
                best = child;
            }
        }
        Some(best)
    }
}

impl<T: Ord> Heap<T> for DaryHeap<T> {
    fn is_empty(&self) -> bool {
        DaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        DaryHeap::len(self)
    }

    fn push(&mut self, key: T) {
        self.insert(key);
    }

    fn peek(&self) -> Option<&T> {
        DaryHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        self.extract_max().ok()
    }
}

impl<T: Ord> IncreaseKeyHeap<T> for DaryHeap<T> {
    fn increase_key(&mut self, index: usize, key: T) -> Result<(), HeapError> {
        self.heap_increase_key(index, key)
    }

    fn remove(&mut self, index: usize) -> Result<T, HeapError> {
        self.delete(index)
    }
}

impl<T: Ord> Extend<T> for DaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for key in iter {
            self.insert(key);
        }
    }
}

/// Yields the keys in heap (array) order
impl<T> IntoIterator for DaryHeap<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Iterator over the depth levels of a [`DaryHeap`], see [`DaryHeap::levels`]
#[derive(Debug, Clone)]
pub struct Levels<'a, T> {
    rest: &'a [T],
    width: usize,
    arity: usize,
}

impl<'a, T> Iterator for Levels<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let (level, rest) = self.rest.split_at(self.width.min(self.rest.len()));
        self.rest = rest;
        self.width = self.width.saturating_mul(self.arity);
        Some(level)
    }
}

/// Renders one line per depth level, for human inspection only
///
/// ```rust
/// use rust_dary_heap::dary::DaryHeap;
///
/// let heap = DaryHeap::from_vec(2, vec![1, 2, 3, 4]).unwrap();
/// assert_eq!(heap.to_string(), "d-ary heap (d = 2):\n4\n2 3\n1");
/// ```
impl<T: Ord + fmt::Display> fmt::Display for DaryHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d-ary heap (d = {}):", self.arity)?;
        for level in self.levels() {
            writeln!(f)?;
            for (i, key) in level.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", key)?;
            }
        }
        Ok(())
    }
}
