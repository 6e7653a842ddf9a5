//! Traversal operations for BTree.
//!
//! All four traversals are callback-driven: the callback is invoked once per
//! visited item in the required order and returns a continue-flag. Returning
//! `false` stops the traversal immediately, everywhere — every recursion
//! frame checks the flag after each child visit and each callback call and
//! propagates the stop outward without further invocations.

use crate::types::{BTree, Node};

impl<V> BTree<V> {
    /// Visit every item in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinybtree::BTree;
    ///
    /// let mut tree = BTree::new();
    /// for key in ["3", "1", "4", "5"] {
    ///     tree.set(key, ());
    /// }
    ///
    /// let mut keys = Vec::new();
    /// tree.scan(|key, _| {
    ///     keys.push(key.to_string());
    ///     true
    /// });
    /// assert_eq!(keys, ["1", "3", "4", "5"]);
    /// ```
    pub fn scan<F>(&self, mut f: F)
    where
        F: FnMut(&str, &V) -> bool,
    {
        if let Some(root) = self.root.as_ref() {
            root.scan(&mut f, self.height);
        }
    }

    /// Visit every item in descending key order.
    pub fn reverse<F>(&self, mut f: F)
    where
        F: FnMut(&str, &V) -> bool,
    {
        if let Some(root) = self.root.as_ref() {
            root.reverse(&mut f, self.height);
        }
    }

    /// Visit every item with key `>= pivot`, in ascending key order.
    ///
    /// The pivot itself is included when present. Equivalent to the suffix
    /// of a full [`scan`](Self::scan) starting at the pivot, located in
    /// O(log n) instead of by scanning.
    pub fn ascend<F>(&self, pivot: &str, mut f: F)
    where
        F: FnMut(&str, &V) -> bool,
    {
        if let Some(root) = self.root.as_ref() {
            root.ascend(pivot, &mut f, self.height);
        }
    }

    /// Visit every item with key `<= pivot`, in descending key order.
    ///
    /// Mirror image of [`ascend`](Self::ascend).
    pub fn descend<F>(&self, pivot: &str, mut f: F)
    where
        F: FnMut(&str, &V) -> bool,
    {
        if let Some(root) = self.root.as_ref() {
            root.descend(pivot, &mut f, self.height);
        }
    }
}

impl<V> Node<V> {
    /// In-order walk of this subtree. Returns false as soon as the callback
    /// does, so callers stop without visiting anything further.
    pub(crate) fn scan<F>(&self, f: &mut F, height: usize) -> bool
    where
        F: FnMut(&str, &V) -> bool,
    {
        if height == 0 {
            for item in &self.items {
                if !f(&item.key, &item.value) {
                    return false;
                }
            }
            return true;
        }
        for (i, item) in self.items.iter().enumerate() {
            if !self.children[i].scan(f, height - 1) {
                return false;
            }
            if !f(&item.key, &item.value) {
                return false;
            }
        }
        self.children[self.items.len()].scan(f, height - 1)
    }

    /// Reverse in-order walk of this subtree.
    pub(crate) fn reverse<F>(&self, f: &mut F, height: usize) -> bool
    where
        F: FnMut(&str, &V) -> bool,
    {
        if height == 0 {
            for item in self.items.iter().rev() {
                if !f(&item.key, &item.value) {
                    return false;
                }
            }
            return true;
        }
        if !self.children[self.items.len()].reverse(f, height - 1) {
            return false;
        }
        for (i, item) in self.items.iter().enumerate().rev() {
            if !f(&item.key, &item.value) {
                return false;
            }
            if !self.children[i].reverse(f, height - 1) {
                return false;
            }
        }
        true
    }

    /// Bounded ascending walk starting at `pivot`.
    ///
    /// On a miss in a branch node, `children[i]` is the only subtree that can
    /// still hold keys between the pivot and `items[i]`, so it gets a bounded
    /// recursion first; everything from `items[i]` onward qualifies outright
    /// and is emitted with full scans of the subtrees in between. On an exact
    /// hit the bounded recursion is skipped entirely.
    fn ascend<F>(&self, pivot: &str, f: &mut F, height: usize) -> bool
    where
        F: FnMut(&str, &V) -> bool,
    {
        let (i, found) = self.find(pivot);
        if !found && height > 0 && !self.children[i].ascend(pivot, f, height - 1) {
            return false;
        }
        for j in i..self.items.len() {
            let item = &self.items[j];
            if !f(&item.key, &item.value) {
                return false;
            }
            if height > 0 && !self.children[j + 1].scan(f, height - 1) {
                return false;
            }
        }
        true
    }

    /// Bounded descending walk starting at `pivot`; structurally symmetric
    /// to `ascend`. On a miss the item at the located index is strictly
    /// greater than the pivot, so the walk starts one index lower.
    fn descend<F>(&self, pivot: &str, f: &mut F, height: usize) -> bool
    where
        F: FnMut(&str, &V) -> bool,
    {
        let (mut i, found) = self.find(pivot);
        if !found {
            if height > 0 && !self.children[i].descend(pivot, f, height - 1) {
                return false;
            }
            if i == 0 {
                return true;
            }
            i -= 1;
        }
        loop {
            let item = &self.items[i];
            if !f(&item.key, &item.value) {
                return false;
            }
            if height > 0 && !self.children[i].reverse(f, height - 1) {
                return false;
            }
            if i == 0 {
                return true;
            }
            i -= 1;
        }
    }
}
