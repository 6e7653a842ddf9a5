//! Error handling and result types for BTree operations.
//!
//! Ordinary outcomes — lookup miss, fresh insert, replacement, delete miss —
//! are signaled through `Option` returns, never through errors. `TreeError`
//! exists for the checked mutation wrappers and detailed validation, where an
//! invariant violation means an implementation bug rather than a data
//! outcome.

/// Error type for checked B-tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Key not found in the tree.
    KeyNotFound,
    /// Internal data structure integrity violation.
    DataIntegrity(String),
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::KeyNotFound => write!(f, "Key not found in tree"),
            TreeError::DataIntegrity(msg) => write!(f, "Data integrity error: {}", msg),
        }
    }
}

impl std::error::Error for TreeError {}

/// Result type for checked tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
