//! DELETE operations for BTree.
//!
//! Deletion is a recursive descent with rebalance-on-the-way-up: items are
//! physically removed from leaves, internal separators are replaced by their
//! in-order predecessor via a delete-max descent, and each parent frame
//! repairs an underfull child with a merge or rotation after its recursive
//! call returns. The tree handle collapses the root when it empties and
//! resets to the pristine empty state when the last item goes.

use crate::error::{TreeError, TreeResult};
use crate::types::{BTree, DeleteTarget, Item, Node};

impl<V> BTree<V> {
    /// Delete the value for a key.
    ///
    /// Returns the removed value, or `None` if the key was absent (in which
    /// case nothing changes).
    ///
    /// # Examples
    ///
    /// ```
    /// use tinybtree::BTree;
    ///
    /// let mut tree = BTree::new();
    /// tree.set("a", 1);
    /// assert_eq!(tree.delete("a"), Some(1));
    /// assert_eq!(tree.delete("a"), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, key: &str) -> Option<V> {
        let deleted = self
            .root
            .as_mut()?
            .delete(DeleteTarget::Key(key), self.height)?;

        let root_emptied = self.root.as_ref().is_some_and(|root| root.items.is_empty());
        if root_emptied && self.height > 0 {
            // The root lost its last separator; its sole remaining child
            // becomes the new root.
            if let Some(old_root) = self.root.take() {
                self.root = old_root.children.into_iter().next();
                self.height -= 1;
            }
        }
        self.length -= 1;
        if self.length == 0 {
            self.root = None;
            self.height = 0;
        }
        Some(deleted.value)
    }

    /// Delete with invariant checking before and after the mutation.
    ///
    /// Reports [`TreeError::KeyNotFound`] on a miss and
    /// [`TreeError::DataIntegrity`] if either validation pass fails.
    pub fn try_delete(&mut self, key: &str) -> TreeResult<V> {
        if let Err(report) = self.check_invariants_detailed() {
            return Err(TreeError::DataIntegrity(report));
        }
        let value = self.delete(key).ok_or(TreeError::KeyNotFound)?;
        if let Err(report) = self.check_invariants_detailed() {
            return Err(TreeError::DataIntegrity(report));
        }
        Ok(value)
    }
}

impl<V> Node<V> {
    /// Recursive delete below this node.
    ///
    /// Returns the removed item, or `None` if the target was absent. When a
    /// child actually lost an item and fell below minimum occupancy, this
    /// frame rebalances it against a sibling before returning, so every node
    /// except the root satisfies the occupancy invariant on the way out.
    pub(crate) fn delete(&mut self, target: DeleteTarget, height: usize) -> Option<Item<V>> {
        let (mut i, found) = match target {
            DeleteTarget::Max => (self.items.len() - 1, true),
            DeleteTarget::Key(key) => self.find(key),
        };

        if height == 0 {
            if !found {
                return None;
            }
            return Some(self.items.remove(i));
        }

        let deleted = if !found {
            self.children[i].delete(target, height - 1)?
        } else if matches!(target, DeleteTarget::Max) {
            // The maximum of this subtree lives under the last child.
            i += 1;
            self.children[i].delete(DeleteTarget::Max, height - 1)?
        } else {
            // The key is a separator here; it cannot simply be removed, so
            // swap in its in-order predecessor, the maximum of the left
            // subtree.
            let predecessor = self.children[i].delete(DeleteTarget::Max, height - 1)?;
            std::mem::replace(&mut self.items[i], predecessor)
        };

        if self.children[i].is_underfull() {
            self.rebalance(i, height);
        }
        Some(deleted)
    }
}
