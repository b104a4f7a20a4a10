//! Binomial tree primitive underlying [`BinomialHeap`](crate::BinomialHeap)
//!
//! A binomial tree of degree d has exactly 2^d nodes: its root carries d
//! child subtrees which are themselves binomial trees of degrees
//! 0, 1, ..., d-1, stored in that (ascending) order. Reading the child list
//! backwards from the most recently attached child gives degrees
//! d-1, d-2, ..., 0, which is what [`BinomialTree::decay`] exploits: popping
//! the last child always detaches a tree of degree d-1.
//!
//! Ownership is exclusive and recursive: every node owns its children
//! outright, and a tree owns its root. There are no parent back-references,
//! so a deep copy is plain `Clone` and teardown is plain drop.

use crate::traits::HeapError;

/// A single node: one key plus exclusively owned child subtrees.
///
/// Heap-order invariant: every child's key is >= its parent's key, so the
/// root of any subtree holds that subtree's minimum.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    /// Child subtrees in ascending degree order: `children[i]` is a
    /// binomial tree of degree `i`.
    pub(crate) children: Vec<Node<K>>,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Node {
            key,
            children: Vec::new(),
        }
    }
}

/// A binomial tree: one root [`Node`] plus a cached size.
///
/// The size is always a power of two; `degree() == log2(len())`. Trees are
/// created as singletons or by linking two equal-degree trees, and taken
/// apart one child at a time by [`decay`](BinomialTree::decay) during
/// extraction.
#[derive(Clone, Debug)]
pub(crate) struct BinomialTree<K> {
    root: Node<K>,
    /// Number of nodes in the tree; always `1 << degree`.
    size: usize,
}

impl<K: Ord> BinomialTree<K> {
    /// Creates a degree-0 tree holding a single key
    pub(crate) fn singleton(key: K) -> Self {
        BinomialTree {
            root: Node::new(key),
            size: 1,
        }
    }

    /// Number of nodes in the tree (a power of two)
    pub(crate) fn len(&self) -> usize {
        self.size
    }

    /// Degree of the tree: the root's child count, `log2(len())`
    pub(crate) fn degree(&self) -> usize {
        self.size.trailing_zeros() as usize
    }

    /// The root key, which is the minimum of the whole tree
    pub(crate) fn top_key(&self) -> &K {
        &self.root.key
    }

    /// Links another tree of the same degree under this tree's root
    ///
    /// `other`'s root becomes the new last child of `self`'s root and the
    /// size doubles, producing a well-formed tree of degree d+1. `other` is
    /// consumed; its root's ownership transfers into `self`.
    ///
    /// The caller is responsible for heap order: it must have arranged for
    /// `self.top_key() <= other.top_key()`. The heap's carry propagation is
    /// the only caller and always does.
    ///
    /// # Errors
    /// Returns [`HeapError::DegreeMismatch`] if the trees differ in size.
    /// That is an internal invariant breach, not a recoverable condition.
    pub(crate) fn merge(&mut self, other: Self) -> Result<(), HeapError> {
        if self.size != other.size {
            return Err(HeapError::DegreeMismatch);
        }

        self.root.children.push(other.root);
        self.size *= 2;

        Ok(())
    }

    /// Detaches the last child as an independent tree of degree d-1
    ///
    /// Halves the size of `self`, leaving it a well-formed tree of degree
    /// d-1 as well. Returns `None` for a degree-0 tree, which cannot be
    /// decomposed further.
    ///
    /// Extraction drives this in a loop: a removed degree-d tree decays into
    /// d independent trees of degrees d-1, d-2, ..., 0, each folded back
    /// into the forest.
    pub(crate) fn decay(&mut self) -> Option<BinomialTree<K>> {
        let child = self.root.children.pop()?;
        self.size /= 2;

        Some(BinomialTree {
            root: child,
            size: self.size,
        })
    }

    /// Consumes a fully decayed (size-1) tree, yielding its key
    pub(crate) fn into_key(self) -> K {
        debug_assert_eq!(self.size, 1, "into_key on a tree that still has children");
        self.root.key
    }

    /// Structural self-check: power-of-two size, binomial shape, heap order
    pub(crate) fn is_well_formed(&self) -> bool {
        self.size.is_power_of_two()
            && self.size == 1 << self.degree()
            && node_well_formed(&self.root, self.degree())
    }
}

/// Checks that `node` roots a binomial tree of the given degree: it has
/// exactly `degree` children, `children[i]` roots a binomial tree of degree
/// `i`, and every child key is >= the node's key.
fn node_well_formed<K: Ord>(node: &Node<K>, degree: usize) -> bool {
    node.children.len() == degree
        && node
            .children
            .iter()
            .enumerate()
            .all(|(i, child)| child.key >= node.key && node_well_formed(child, i))
}
