//! Common traits for heap data structures
//!
//! This module provides a two-tier trait hierarchy for min-heap containers:
//!
//! - [`Heap`]: base trait covering insertion, minimum lookup, and extraction
//! - [`MergeableHeap`]: extended trait adding heap union
//!
//! The base [`Heap`] trait follows the API shape of Rust's standard
//! collections (`push`/`peek`/`pop` with `Option` results), while the
//! fallible inherent methods on concrete heaps (`get_min`/`extract_min`)
//! surface [`HeapError`] for callers that want an explicit error value.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap is empty; there is no minimum to read or extract
    Underflow,
    /// Two binomial trees of unequal degree were passed to a tree-level merge.
    ///
    /// This is an internal contract violation: only the heap's carry
    /// propagation links trees, and it always supplies equal-degree operands.
    /// It is never reachable through the public `BinomialHeap` API.
    DegreeMismatch,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Underflow => write!(f, "heap underflow: the heap is empty"),
            HeapError::DegreeMismatch => {
                write!(f, "cannot merge binomial trees of unequal degree")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for min-heap / priority queue data structures
///
/// Keys are stored by value and ordered by their `Ord` implementation; the
/// key type is otherwise opaque to the heap. Unlike the standard library's
/// `BinaryHeap`, implementations of this trait are min-heaps: `peek` and
/// `pop` observe the smallest key.
///
/// # Example
///
/// ```rust
/// use binomial_heap::{BinomialHeap, Heap};
///
/// let mut heap = BinomialHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<K: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of keys in the heap
    fn len(&self) -> usize;

    /// Inserts a key
    ///
    /// # Time Complexity
    /// O(log n) worst-case for binomial heaps.
    fn push(&mut self, key: K);

    /// Returns the minimum key without removing it, or `None` if empty
    ///
    /// # Time Complexity
    /// O(1) for all implementations.
    fn peek(&self) -> Option<&K>;

    /// Removes and returns the minimum key, or `None` if empty
    ///
    /// # Time Complexity
    /// O(log n) worst-case for binomial heaps.
    fn pop(&mut self) -> Option<K>;
}

/// Extended heap trait for heaps supporting efficient union
///
/// `merge` consumes the other heap; after the call every key it held is
/// owned by `self`.
pub trait MergeableHeap<K: Ord>: Heap<K> {
    /// Merges another heap into this one, consuming the other heap
    ///
    /// # Time Complexity
    /// O(log n) worst-case for binomial heaps.
    fn merge(&mut self, other: Self);
}
