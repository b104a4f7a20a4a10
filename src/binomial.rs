//! Binomial Heap implementation
//!
//! A binomial heap is a forest of binomial trees with:
//! - O(log n) insert and extract_min
//! - O(log n) merge with another heap
//! - O(1) get_min
//!
//! # Algorithm Overview
//!
//! The heap maintains at most one binomial tree per degree (0, 1, 2, ...,
//! log n), which makes the occupied degree slots exactly the binary
//! representation of the heap's size. Folding a tree into the forest is
//! binary-counter arithmetic: if slot d is free the tree lands there, and if
//! it is occupied the two degree-d trees link into one degree-(d+1) tree
//! that carries into the next slot.
//!
//! - **Insert**: fold a single-node tree into the forest (binary increment)
//! - **Extract-min**: remove the minimum-rooted tree, decay it into its
//!   child trees, and fold each child back in
//! - **Merge**: fold every tree of the other heap in, degree by degree
//!   (binary addition)
//!
//! **Invariant**: at rest the forest never holds two trees of one degree,
//! so there are O(log n) trees total, bounding every operation.

use crate::traits::{Heap, HeapError, MergeableHeap};
use crate::tree::BinomialTree;

/// Binomial Heap
///
/// A mergeable min-heap over any `Ord` key type. Cloning produces a fully
/// independent deep copy; moving (including [`merge`](BinomialHeap::merge),
/// which takes the other heap by value) transfers ownership of every node.
///
/// # Example
///
/// ```rust
/// use binomial_heap::BinomialHeap;
///
/// let mut heap = BinomialHeap::new();
/// heap.insert(5);
/// heap.insert(3);
/// heap.insert(8);
///
/// assert_eq!(heap.get_min(), Ok(&3));
/// assert_eq!(heap.extract_min(), Ok(3));
/// assert_eq!(heap.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct BinomialHeap<K: Ord> {
    /// Forest indexed by degree: slot d holds at most one tree of size 2^d
    trees: Vec<Option<BinomialTree<K>>>,
    /// Degree slot of the tree whose root is the minimum; `None` iff empty.
    /// Among slots with equal root keys this is always the lowest degree.
    min: Option<usize>,
    /// Number of keys in the heap
    len: usize,
}

impl<K: Ord> BinomialHeap<K> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        BinomialHeap {
            trees: Vec::new(),
            min: None,
            len: 0,
        }
    }

    /// Returns the number of keys in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a key
    ///
    /// **Time Complexity**: O(log n) worst-case, O(1) amortized carry work
    ///
    /// Builds a degree-0 tree and folds it into the forest. This is binary
    /// increment: a run of k occupied low slots costs k links, but each link
    /// empties a slot, so long carry chains are rare.
    pub fn insert(&mut self, key: K) {
        self.fold(BinomialTree::singleton(key));
        self.len += 1;
        self.refresh_min();
    }

    /// Returns a reference to the minimum key
    ///
    /// **Time Complexity**: O(1)
    ///
    /// # Errors
    /// [`HeapError::Underflow`] if the heap is empty.
    pub fn get_min(&self) -> Result<&K, HeapError> {
        self.min
            .and_then(|d| self.trees[d].as_ref())
            .map(BinomialTree::top_key)
            .ok_or(HeapError::Underflow)
    }

    /// Removes and returns the minimum key
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**:
    /// 1. Take the tree at the cached minimum slot. Among equal root keys
    ///    the cached slot is always the lowest degree, keeping the choice
    ///    deterministic.
    /// 2. Decay the removed degree-d tree step by step into its child trees
    ///    of degrees d-1, d-2, ..., 0, folding each back into the forest.
    /// 3. The fully decayed tree is a single node: the extracted key.
    /// 4. Rescan the O(log n) roots for the new minimum.
    ///
    /// # Errors
    /// [`HeapError::Underflow`] if the heap is empty.
    pub fn extract_min(&mut self) -> Result<K, HeapError> {
        let slot = self.min.take().ok_or(HeapError::Underflow)?;
        let mut tree = self.trees[slot].take().ok_or(HeapError::Underflow)?;

        self.len -= 1;

        // Unwind the removed tree: every decay step detaches an independent
        // tree of the next lower degree, which re-enters the forest through
        // the usual carry propagation.
        while let Some(detached) = tree.decay() {
            self.fold(detached);
        }

        self.refresh_min();

        Ok(tree.into_key())
    }

    /// Merges another heap into this one, consuming the other heap
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// Folds every tree of `other` into this forest, degree by degree. With
    /// at most one tree per degree on each side this is exactly binary
    /// addition with carries. After the call `self` owns every key; `other`
    /// is gone (moved into the call).
    pub fn merge(&mut self, mut other: Self) {
        if other.is_empty() {
            return;
        }

        self.len += other.len;
        for tree in other.trees.drain(..).flatten() {
            self.fold(tree);
        }

        self.refresh_min();
    }

    /// Removes all keys from the heap
    pub fn clear(&mut self) {
        self.trees.clear();
        self.min = None;
        self.len = 0;
    }

    /// Folds one binomial tree into the forest via carry propagation
    ///
    /// If the tree's degree slot is free, it lands there. Otherwise the
    /// resident tree and the incoming tree link into one tree of the next
    /// higher degree, which carries upward until a free slot is found. The
    /// tree with the smaller root key becomes the parent, preserving heap
    /// order; the resident wins ties.
    ///
    /// Does not touch `len` or the cached minimum; callers account for both.
    fn fold(&mut self, mut tree: BinomialTree<K>) {
        let mut degree = tree.degree();

        loop {
            if degree >= self.trees.len() {
                self.trees.resize_with(degree + 1, || None);
            }

            match self.trees[degree].take() {
                None => {
                    self.trees[degree] = Some(tree);
                    return;
                }
                Some(mut resident) => {
                    // Link two degree-d trees into one degree-(d+1) tree.
                    // Both takes succeeded at the same slot, so the degrees
                    // match and the tree-level merge cannot fail.
                    if resident.top_key() <= tree.top_key() {
                        resident
                            .merge(tree)
                            .expect("carry propagation links equal-degree trees");
                        tree = resident;
                    } else {
                        tree.merge(resident)
                            .expect("carry propagation links equal-degree trees");
                    }
                    degree += 1;
                }
            }
        }
    }

    /// Recomputes the cached minimum slot by scanning all roots
    ///
    /// Scans in ascending degree order and only replaces on a strictly
    /// smaller key, so equal minima resolve to the lowest degree.
    fn refresh_min(&mut self) {
        let mut best: Option<(usize, &K)> = None;

        for (degree, slot) in self.trees.iter().enumerate() {
            if let Some(tree) = slot {
                if best.map_or(true, |(_, key)| tree.top_key() < key) {
                    best = Some((degree, tree.top_key()));
                }
            }
        }

        self.min = best.map(|(degree, _)| degree);
    }

    /// Validates every structural invariant of the heap
    ///
    /// Checks that each occupied slot d holds a well-formed binomial tree of
    /// size 2^d, that tree sizes sum to `len`, and that the cached minimum
    /// names the lowest-degree slot holding the minimal root key.
    #[doc(hidden)]
    pub fn verify_internal_structure(&self) -> bool {
        let mut total = 0;

        for (degree, slot) in self.trees.iter().enumerate() {
            if let Some(tree) = slot {
                if tree.len() != 1 << degree || !tree.is_well_formed() {
                    return false;
                }
                total += tree.len();
            }
        }

        if total != self.len {
            return false;
        }

        let expected_min = {
            let mut best: Option<(usize, &K)> = None;
            for (degree, slot) in self.trees.iter().enumerate() {
                if let Some(tree) = slot {
                    if best.map_or(true, |(_, key)| tree.top_key() < key) {
                        best = Some((degree, tree.top_key()));
                    }
                }
            }
            best.map(|(degree, _)| degree)
        };

        self.min == expected_min
    }
}

impl<K: Ord> Heap<K> for BinomialHeap<K> {
    fn new() -> Self {
        BinomialHeap::new()
    }

    fn is_empty(&self) -> bool {
        BinomialHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinomialHeap::len(self)
    }

    fn push(&mut self, key: K) {
        self.insert(key);
    }

    fn peek(&self) -> Option<&K> {
        self.get_min().ok()
    }

    fn pop(&mut self) -> Option<K> {
        self.extract_min().ok()
    }
}

impl<K: Ord> MergeableHeap<K> for BinomialHeap<K> {
    fn merge(&mut self, other: Self) {
        BinomialHeap::merge(self, other);
    }
}

impl<K: Ord> Default for BinomialHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> Extend<K> for BinomialHeap<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for BinomialHeap<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut heap = BinomialHeap::new();
        heap.extend(iter);
        heap
    }
}
