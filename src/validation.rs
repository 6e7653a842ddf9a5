//! Validation and debugging utilities for BTree.
//!
//! This module contains the invariant checker used by the checked mutation
//! wrappers and the tests, plus debugging helpers for inspecting tree shape.

use crate::types::{BTree, Node, MAX_ITEMS, MIN_ITEMS};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<V> BTree<V> {
    /// Check if the tree maintains its B-tree invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies, for every node: strictly increasing keys confined to the
    /// separator bounds inherited from ancestors, the capacity ceiling, the
    /// non-root occupancy floor, the item/child count relationship, and that
    /// leaves sit exactly at depth `height`. Finally verifies that the
    /// recorded length matches the actual item count.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        let Some(root) = self.root.as_ref() else {
            if self.height != 0 {
                return Err(format!("empty tree has height {}", self.height));
            }
            if self.length != 0 {
                return Err(format!("empty tree has length {}", self.length));
            }
            return Ok(());
        };

        if root.items.is_empty() {
            return Err("root node has no items".to_string());
        }
        let counted = check_node(root, self.height, None, None, true)?;
        if counted != self.length {
            return Err(format!(
                "tree records length {} but holds {} items",
                self.length, counted
            ));
        }
        Ok(())
    }
}

/// Recursively check one node, returning the number of items in its subtree.
/// `min`/`max` are the exclusive key bounds inherited from ancestor
/// separators.
fn check_node<V>(
    node: &Node<V>,
    height: usize,
    min: Option<&str>,
    max: Option<&str>,
    is_root: bool,
) -> Result<usize, String> {
    if node.items.len() > MAX_ITEMS {
        return Err(format!(
            "node holds {} items, exceeding the maximum of {}",
            node.items.len(),
            MAX_ITEMS
        ));
    }
    if !is_root && node.items.len() < MIN_ITEMS {
        return Err(format!(
            "non-root node holds {} items, below the minimum of {}",
            node.items.len(),
            MIN_ITEMS
        ));
    }

    for window in node.items.windows(2) {
        if window[0].key >= window[1].key {
            return Err(format!(
                "keys {:?} and {:?} are out of order",
                window[0].key, window[1].key
            ));
        }
    }
    if let (Some(min), Some(first)) = (min, node.items.first()) {
        if first.key.as_str() <= min {
            return Err(format!(
                "key {:?} violates lower separator bound {:?}",
                first.key, min
            ));
        }
    }
    if let (Some(max), Some(last)) = (max, node.items.last()) {
        if last.key.as_str() >= max {
            return Err(format!(
                "key {:?} violates upper separator bound {:?}",
                last.key, max
            ));
        }
    }

    if height == 0 {
        if !node.children.is_empty() {
            return Err(format!(
                "leaf node has {} children",
                node.children.len()
            ));
        }
        return Ok(node.items.len());
    }

    if node.children.len() != node.items.len() + 1 {
        return Err(format!(
            "branch node has {} items but {} children",
            node.items.len(),
            node.children.len()
        ));
    }
    let mut total = node.items.len();
    for (i, child) in node.children.iter().enumerate() {
        let child_min = if i == 0 {
            min
        } else {
            Some(node.items[i - 1].key.as_str())
        };
        let child_max = if i == node.items.len() {
            max
        } else {
            Some(node.items[i].key.as_str())
        };
        total += check_node(child, height - 1, child_min, child_max, false)?;
    }
    Ok(total)
}

// ============================================================================
// DEBUGGING AND TESTING UTILITIES
// ============================================================================

impl<V> BTree<V> {
    /// Returns all key-value pairs in ascending order (for testing/debugging).
    pub fn slice(&self) -> Vec<(&str, &V)> {
        let mut out = Vec::with_capacity(self.length);
        if let Some(root) = self.root.as_ref() {
            collect_pairs(root, self.height, &mut out);
        }
        out
    }

    /// Returns the total number of nodes in the tree (for testing/debugging).
    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, |root| count_nodes(root))
    }

    /// Prints the tree shape for debugging.
    pub fn print_structure(&self) {
        match self.root.as_ref() {
            None => println!("BTree: empty"),
            Some(root) => {
                println!("BTree: height={}, length={}", self.height, self.length);
                print_node(root, self.height, 0);
            }
        }
    }
}

fn collect_pairs<'a, V>(node: &'a Node<V>, height: usize, out: &mut Vec<(&'a str, &'a V)>) {
    if height == 0 {
        for item in &node.items {
            out.push((item.key.as_str(), &item.value));
        }
        return;
    }
    for (i, item) in node.items.iter().enumerate() {
        collect_pairs(&node.children[i], height - 1, out);
        out.push((item.key.as_str(), &item.value));
    }
    collect_pairs(&node.children[node.items.len()], height - 1, out);
}

fn count_nodes<V>(node: &Node<V>) -> usize {
    1 + node.children.iter().map(|child| count_nodes(child)).sum::<usize>()
}

fn print_node<V>(node: &Node<V>, height: usize, depth: usize) {
    let indent = "  ".repeat(depth);
    let kind = if height == 0 { "Leaf" } else { "Branch" };
    match (node.items.first(), node.items.last()) {
        (Some(first), Some(last)) => println!(
            "{}{}: {} items [{:?} .. {:?}]",
            indent,
            kind,
            node.items.len(),
            first.key,
            last.key
        ),
        _ => println!("{}{}: 0 items", indent, kind),
    }
    if height > 0 {
        for child in &node.children {
            print_node(child, height - 1, depth + 1);
        }
    }
}
