//! Node-level mechanics for BTree.
//!
//! This module contains the within-node operations shared by the tree-level
//! algorithms: binary search, splitting an overflowing node, and the
//! merge/rotation rebalancing used after deletions.

use crate::types::{Item, Node, MAX_ITEMS, MIN_ITEMS};

impl<V> Node<V> {
    // ========================================================================
    // SEARCH
    // ========================================================================

    /// Binary search for `key` among this node's items.
    ///
    /// Returns the smallest index `i` with `items[i].key >= key`, plus
    /// whether the key was found exactly at that index. On a miss the index
    /// doubles as the insertion slot (at leaf level) or the child to descend
    /// into (at branch level).
    pub(crate) fn find(&self, key: &str) -> (usize, bool) {
        match self
            .items
            .binary_search_by(|item| item.key.as_str().cmp(key))
        {
            Ok(index) => (index, true),
            Err(index) => (index, false),
        }
    }

    // ========================================================================
    // STATUS CHECKS
    // ========================================================================

    /// Returns true if this node is at capacity and must be split before the
    /// next insertion below it.
    pub(crate) fn is_full(&self) -> bool {
        self.items.len() == MAX_ITEMS
    }

    /// Returns true if this node fell below minimum occupancy and needs
    /// rebalancing (never applies to the root).
    pub(crate) fn is_underfull(&self) -> bool {
        self.items.len() < MIN_ITEMS
    }

    // ========================================================================
    // SPLIT
    // ========================================================================

    /// Split this full node around its median, returning the promoted median
    /// item and the new right sibling.
    ///
    /// The left half (`MAX_ITEMS / 2` items) stays in place; the right half
    /// moves into the new sibling. Above leaf level the child pointers are
    /// partitioned correspondingly, `MAX_ITEMS / 2 + 1` staying left.
    pub(crate) fn split(&mut self, height: usize) -> (Item<V>, Node<V>) {
        debug_assert!(self.is_full());
        let mut right = Node::new();
        right.items = self.items.split_off(MAX_ITEMS / 2 + 1);
        if height > 0 {
            right.children = self.children.split_off(MAX_ITEMS / 2 + 1);
        }
        let median = self.items.pop().expect("split on a full node");
        (median, right)
    }

    // ========================================================================
    // REBALANCING
    // ========================================================================

    /// Restore minimum occupancy after a delete left `children[i]` underfull.
    ///
    /// Works on the sibling pair at `i` and `i + 1`, stepping back by one
    /// when `i` is the last child index. Merges when both siblings plus the
    /// separator still fit in one node; otherwise rotates a single item
    /// through the parent from the richer sibling. `height` is this node's
    /// height, so the children are at `height - 1` and carry child pointers
    /// of their own only when `height > 1`.
    pub(crate) fn rebalance(&mut self, mut i: usize, height: usize) {
        if i == self.items.len() {
            i -= 1;
        }
        let left_len = self.children[i].items.len();
        let right_len = self.children[i + 1].items.len();

        if left_len + right_len + 1 < MAX_ITEMS {
            // Merge: left + separator + right collapse into children[i], and
            // the separator slot and right sibling disappear from this node.
            let right = self.children.remove(i + 1);
            let separator = self.items.remove(i);
            let left = &mut self.children[i];
            left.items.push(separator);
            left.items.extend(right.items);
            if height > 1 {
                left.children.extend(right.children);
            }
        } else if left_len > right_len {
            // Rotate left -> right: the separator moves down to lead the
            // right sibling, the left sibling's last item moves up to replace
            // it, and (above leaf level) the left sibling's last child comes
            // along as the right sibling's new first child.
            let left = &mut self.children[i];
            let moved_item = left.items.pop().expect("left sibling is richer");
            let moved_child = if height > 1 { left.children.pop() } else { None };
            let separator = std::mem::replace(&mut self.items[i], moved_item);
            let right = &mut self.children[i + 1];
            right.items.insert(0, separator);
            if let Some(child) = moved_child {
                right.children.insert(0, child);
            }
        } else {
            // Rotate right -> left: mirror image of the branch above.
            let right = &mut self.children[i + 1];
            let moved_item = right.items.remove(0);
            let moved_child = if height > 1 {
                Some(right.children.remove(0))
            } else {
                None
            };
            let separator = std::mem::replace(&mut self.items[i], moved_item);
            let left = &mut self.children[i];
            left.items.push(separator);
            if let Some(child) = moved_child {
                left.children.push(child);
            }
        }
    }
}
