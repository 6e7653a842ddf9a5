//! GET operations for BTree.
//!
//! Point lookups walk the tree from the root, binary-searching each node and
//! descending into the single candidate child on a miss.

use crate::types::{BTree, Node};

impl<V> BTree<V> {
    /// Get a reference to the value stored for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinybtree::BTree;
    ///
    /// let mut tree = BTree::new();
    /// tree.set("hello", "world");
    /// assert_eq!(tree.get("hello"), Some(&"world"));
    /// assert_eq!(tree.get("missing"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&V> {
        self.root.as_ref()?.get(key, self.height)
    }

    /// Get a mutable reference to the value stored for `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.root.as_mut()?.get_mut(key, self.height)
    }

    /// Returns true if the tree contains `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<V> Node<V> {
    fn get(&self, key: &str, height: usize) -> Option<&V> {
        let (i, found) = self.find(key);
        if found {
            return Some(&self.items[i].value);
        }
        if height == 0 {
            return None;
        }
        self.children[i].get(key, height - 1)
    }

    fn get_mut(&mut self, key: &str, height: usize) -> Option<&mut V> {
        let (i, found) = self.find(key);
        if found {
            return Some(&mut self.items[i].value);
        }
        if height == 0 {
            return None;
        }
        self.children[i].get_mut(key, height - 1)
    }
}
