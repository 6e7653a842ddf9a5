//! In-memory B-tree map from string keys to arbitrary values.
//!
//! This crate provides [`BTree`], an ordered associative container backed by
//! a balanced multi-way search tree. It supports point lookup, insertion
//! with in-place replacement, deletion with merge/rotation rebalancing, and
//! a callback-driven traversal family: full ordered scans in both directions
//! plus pivot-bounded ascending and descending range walks, all with early
//! termination.
//!
//! The tree is a pure, process-local, single-threaded data structure meant
//! to be embedded inside larger systems, for example as the index of a
//! higher-level store. There is no persistence, no wire format, and no
//! internal synchronization; concurrent access needs external mutual
//! exclusion.
//!
//! # Examples
//!
//! ```
//! use tinybtree::BTree;
//!
//! let mut tree = BTree::new();
//! for key in ["3", "1", "4", "1", "5"] {
//!     tree.set(key, key.to_string());
//! }
//! assert_eq!(tree.len(), 4); // the duplicate "1" replaced, not inserted
//!
//! let mut from_three = Vec::new();
//! tree.ascend("3", |key, _| {
//!     from_three.push(key.to_string());
//!     true
//! });
//! assert_eq!(from_three, ["3", "4", "5"]);
//! ```

mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod types;
mod validation;

pub use error::{TreeError, TreeResult};
pub use types::BTree;

impl<V> BTree<V> {
    /// Creates an empty tree.
    ///
    /// No allocation happens until the first insertion.
    pub fn new() -> Self {
        Self {
            root: None,
            height: 0,
            length: 0,
        }
    }

    /// Returns the number of items in the tree. O(1).
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Drop every item, returning the tree to its freshly constructed state.
    pub fn clear(&mut self) {
        self.root = None;
        self.height = 0;
        self.length = 0;
    }

    /// Returns the first (smallest-keyed) item in the tree.
    pub fn first(&self) -> Option<(&str, &V)> {
        let mut node = self.root.as_deref()?;
        for _ in 0..self.height {
            node = &node.children[0];
        }
        node.items
            .first()
            .map(|item| (item.key.as_str(), &item.value))
    }

    /// Returns the last (largest-keyed) item in the tree.
    pub fn last(&self) -> Option<(&str, &V)> {
        let mut node = self.root.as_deref()?;
        for _ in 0..self.height {
            node = &node.children[node.items.len()];
        }
        node.items
            .last()
            .map(|item| (item.key.as_str(), &item.value))
    }
}

impl<V> Default for BTree<V> {
    /// Creates an empty tree.
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tree_is_empty_and_usable() {
        let tree: BTree<String> = BTree::default();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
    }

    #[test]
    fn first_and_last_walk_the_spines() {
        let mut tree = BTree::new();
        for i in 0..500 {
            tree.set(format!("{:04}", i), i);
        }
        assert_eq!(tree.first(), Some(("0000", &0)));
        assert_eq!(tree.last(), Some(("0499", &499)));
    }

    #[test]
    fn clear_resets_everything() {
        let mut tree = BTree::new();
        for i in 0..100 {
            tree.set(format!("{:03}", i), i);
        }
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.get("050"), None);
        tree.check_invariants_detailed().unwrap();

        tree.set("fresh", 1);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn duplicate_set_replaces_then_delete_and_ascend() {
        let mut tree = BTree::new();
        for key in ["3", "1", "4", "1", "5"] {
            tree.set(key, key.to_string());
        }
        assert_eq!(tree.len(), 4);

        let keys: Vec<&str> = tree.slice().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["1", "3", "4", "5"]);

        assert_eq!(tree.delete("4"), Some("4".to_string()));
        assert_eq!(tree.len(), 3);

        let mut from_three = Vec::new();
        tree.ascend("3", |key, _| {
            from_three.push(key.to_string());
            true
        });
        assert_eq!(from_three, ["3", "5"]);
    }
}
