//! Core types and data structures for BTree.
//!
//! This module contains the fundamental data structures, type definitions,
//! and constants used throughout the B-tree implementation.

// ============================================================================
// CONSTANTS
// ============================================================================

/// Maximum number of items per node. Must be odd so that a full node splits
/// into two equal halves around the promoted median.
pub(crate) const MAX_ITEMS: usize = 31;

/// Minimum number of items a non-root node may hold.
///
/// This is a deliberately loose 40% bound rather than the textbook
/// `ceil(MAX_ITEMS / 2)`: nodes may run a little emptier before a delete
/// triggers a merge or rotation, which reduces rebalancing traffic at the
/// cost of some transient slack.
pub(crate) const MIN_ITEMS: usize = MAX_ITEMS * 40 / 100;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A single key/value entry stored inside a node.
#[derive(Debug)]
pub(crate) struct Item<V> {
    pub(crate) key: String,
    pub(crate) value: V,
}

/// A B-tree node holding sorted items and, above leaf level, one more child
/// than items.
///
/// Leaf-ness is not stored in the node itself; the tree's height is threaded
/// through every recursive call, and a node reached at height 0 is a leaf
/// with an empty `children` vector. An internal node's `children[i]` holds
/// every key strictly between `items[i - 1].key` and `items[i].key`, with
/// open bounds at the ends.
#[derive(Debug)]
pub(crate) struct Node<V> {
    /// Sorted list of items, strictly increasing by key.
    pub(crate) items: Vec<Item<V>>,
    /// Child nodes; empty at leaf level, `items.len() + 1` entries otherwise.
    pub(crate) children: Vec<Box<Node<V>>>,
}

/// An ordered map from string keys to values, backed by a B-tree.
///
/// Keys are compared byte-wise (standard string ordering) and are unique:
/// setting an existing key replaces its value in place. All operations are
/// single-threaded recursive descents from the root; there is no internal
/// locking and no background work.
///
/// A freshly constructed tree has no root and is fully usable in that state;
/// the root node is allocated lazily on first insertion and discarded again
/// when the last entry is deleted.
///
/// # Examples
///
/// ```
/// use tinybtree::BTree;
///
/// let mut tree = BTree::new();
/// tree.set("b", 2);
/// tree.set("a", 1);
/// tree.set("c", 3);
///
/// assert_eq!(tree.get("b"), Some(&2));
/// assert_eq!(tree.len(), 3);
///
/// let mut keys = Vec::new();
/// tree.scan(|key, _value| {
///     keys.push(key.to_string());
///     true
/// });
/// assert_eq!(keys, ["a", "b", "c"]);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n)
/// - **Lookup**: O(log n)
/// - **Deletion**: O(log n)
/// - **Traversal**: O(n), with early termination via the callback
#[derive(Debug)]
pub struct BTree<V> {
    /// The root node, absent while the tree is empty.
    pub(crate) root: Option<Box<Node<V>>>,
    /// Distance from the root to leaf level; 0 for a leaf root or empty tree.
    pub(crate) height: usize,
    /// Total number of items across the whole tree.
    pub(crate) length: usize,
}

// ============================================================================
// INTERNAL ENUMS
// ============================================================================

/// What a recursive delete is looking for.
///
/// `Max` is the delete-max mode used when an internal node replaces a deleted
/// separator with its in-order predecessor: it always descends into the last
/// child at every level, bypassing key comparison entirely.
#[derive(Clone, Copy)]
pub(crate) enum DeleteTarget<'a> {
    Key(&'a str),
    Max,
}

impl<V> Node<V> {
    /// Creates an empty node. Leaves and fresh split siblings start here.
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::new(),
            children: Vec::new(),
        }
    }
}
