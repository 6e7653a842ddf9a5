//! INSERT operations for BTree.
//!
//! Insertion is a recursive descent with bottom-up split propagation: the
//! new item always lands in a leaf, and after every recursive call returns
//! the parent frame splits a child that reached capacity. The root is split
//! by the tree handle itself, which is the only place height grows.

use crate::error::{TreeError, TreeResult};
use crate::types::{BTree, Item, Node};

impl<V> BTree<V> {
    /// Set or replace the value for a key.
    ///
    /// Returns the previous value when `key` was already present (the value
    /// is overwritten in place and the length is unchanged), or `None` when
    /// a new entry was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinybtree::BTree;
    ///
    /// let mut tree = BTree::new();
    /// assert_eq!(tree.set("a", 1), None);
    /// assert_eq!(tree.set("a", 2), Some(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let Some(root) = self.root.as_mut() else {
            let mut root = Node::new();
            root.items.push(Item { key, value });
            self.root = Some(Box::new(root));
            self.length = 1;
            return None;
        };

        let prev = root.set(key, value, self.height);
        if prev.is_some() {
            return prev;
        }
        if root.is_full() {
            self.grow_root();
        }
        self.length += 1;
        None
    }

    /// Set with invariant checking before and after the mutation.
    ///
    /// Validates the whole tree around the insert and reports a
    /// [`TreeError::DataIntegrity`] if either check fails. Intended for
    /// debugging and paranoid embedders; `set` is the ordinary path.
    pub fn try_set(&mut self, key: impl Into<String>, value: V) -> TreeResult<Option<V>> {
        if let Err(report) = self.check_invariants_detailed() {
            return Err(TreeError::DataIntegrity(report));
        }
        let prev = self.set(key, value);
        if let Err(report) = self.check_invariants_detailed() {
            return Err(TreeError::DataIntegrity(report));
        }
        Ok(prev)
    }

    /// Split the full root and install a new root above it, holding exactly
    /// the promoted median and the two halves. Height grows by one.
    fn grow_root(&mut self) {
        if let Some(mut old_root) = self.root.take() {
            let (median, right) = old_root.split(self.height);
            let mut new_root = Node::new();
            new_root.items.push(median);
            new_root.children.push(old_root);
            new_root.children.push(Box::new(right));
            self.root = Some(Box::new(new_root));
            self.height += 1;
        }
    }
}

impl<V> Node<V> {
    /// Recursive insert below this node.
    ///
    /// Returns the previous value on a pure replacement, in which case no
    /// structural change happened anywhere. Otherwise the item was inserted
    /// into a descendant leaf, and this frame splits the child it descended
    /// into if the insert left it full. The caller is responsible for this
    /// node in turn, so `self` holds at most `MAX_ITEMS` items on return.
    fn set(&mut self, key: String, value: V, height: usize) -> Option<V> {
        let (i, found) = self.find(&key);
        if found {
            return Some(std::mem::replace(&mut self.items[i].value, value));
        }
        if height == 0 {
            self.items.insert(i, Item { key, value });
            return None;
        }

        let prev = self.children[i].set(key, value, height - 1);
        if prev.is_some() {
            return prev;
        }
        if self.children[i].is_full() {
            let (median, right) = self.children[i].split(height - 1);
            self.items.insert(i, median);
            self.children.insert(i + 1, Box::new(right));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_ITEMS;

    #[test]
    fn first_set_creates_the_root() {
        let mut tree = BTree::new();
        assert_eq!(tree.set("a", 1), None);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.height, 0);
        assert_eq!(tree.get("a"), Some(&1));
    }

    #[test]
    fn replace_keeps_length_and_returns_previous() {
        let mut tree = BTree::new();
        tree.set("k", "old");
        assert_eq!(tree.set("k", "new"), Some("old"));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get("k"), Some(&"new"));
    }

    #[test]
    fn root_split_grows_height_exactly_once_per_overflow() {
        let mut tree = BTree::new();
        for i in 0..MAX_ITEMS - 1 {
            tree.set(format!("{:03}", i), i);
            assert_eq!(tree.height, 0);
        }
        // The insert that brings the root to MAX_ITEMS triggers the root
        // split, the only way height ever grows.
        tree.set(format!("{:03}", MAX_ITEMS - 1), MAX_ITEMS - 1);
        assert_eq!(tree.height, 1);
        assert_eq!(tree.len(), MAX_ITEMS);
        tree.check_invariants_detailed().unwrap();
    }

    #[test]
    fn sequential_and_reversed_inserts_stay_valid() {
        let mut ascending = BTree::new();
        let mut descending = BTree::new();
        for i in 0..2000 {
            ascending.set(format!("{:05}", i), i);
            descending.set(format!("{:05}", 1999 - i), i);
        }
        assert_eq!(ascending.len(), 2000);
        assert_eq!(descending.len(), 2000);
        ascending.check_invariants_detailed().unwrap();
        descending.check_invariants_detailed().unwrap();
    }

    #[test]
    fn try_set_reports_previous_value() {
        let mut tree = BTree::new();
        assert_eq!(tree.try_set("a", 1).unwrap(), None);
        assert_eq!(tree.try_set("a", 2).unwrap(), Some(1));
    }
}
