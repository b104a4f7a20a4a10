//! Mergeable Binomial Heap for Rust
//!
//! This crate provides a binomial heap: a mergeable min-priority queue over
//! any `Ord` key type, built as a forest of binomial trees with at most one
//! tree per degree.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity          |
//! |---------------|---------------------|
//! | `insert`      | O(log n) worst-case |
//! | `get_min`     | O(1)                |
//! | `extract_min` | O(log n) worst-case |
//! | `merge`       | O(log n) worst-case |
//!
//! The O(log n) union is what distinguishes a binomial heap from the flat
//! array binary heap, whose merge degenerates to O(n log n) re-insertion.
//!
//! # Example
//!
//! ```rust
//! use binomial_heap::BinomialHeap;
//!
//! let mut heap = BinomialHeap::new();
//! heap.insert(5);
//! heap.insert(3);
//! heap.insert(8);
//!
//! let mut other = BinomialHeap::new();
//! other.insert(1);
//! other.insert(9);
//!
//! heap.merge(other);
//! assert_eq!(heap.len(), 5);
//! assert_eq!(heap.extract_min(), Ok(1));
//! assert_eq!(heap.extract_min(), Ok(3));
//! ```
//!
//! # Ownership model
//!
//! Every node is owned by exactly one parent (or by its tree as the root),
//! with no back-references, so `Clone` is a fully independent deep copy and
//! moving a heap (including into `merge`) transfers ownership wholesale.
//! The heap is single-threaded: no internal synchronization is provided.

pub mod binomial;
pub mod traits;

mod tree;

// Re-export the main types for convenience
pub use binomial::BinomialHeap;
pub use traits::{Heap, HeapError, MergeableHeap};
