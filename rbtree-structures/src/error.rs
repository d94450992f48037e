use thiserror::Error;

/// A broken red-black tree invariant, as reported by
/// [`RBTree::validate`](crate::RBTree::validate).
///
/// Node numbers are arena indices; they are only meaningful for debugging
/// the tree that produced the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("root node {root} is red")]
    RedRoot { root: usize },

    #[error("root node {root} has a parent link")]
    RootHasParent { root: usize },

    #[error("red node {parent} has red child {child}")]
    RedRedViolation { parent: usize, child: usize },

    #[error("unequal black heights (expected {expected}, found {found})")]
    BlackHeightMismatch { expected: usize, found: usize },

    #[error("node {node} is out of order with respect to its ancestors")]
    OrderViolation { node: usize },

    #[error("broken parent/child link between nodes {parent} and {child}")]
    BrokenLink { parent: usize, child: usize },

    #[error("expected one parentless node, found {found}")]
    RootCount { found: usize },

    #[error("counted {counted} nodes but the tree records {stored}")]
    CountMismatch { counted: usize, stored: usize },

    #[error("null leaf sentinel was modified")]
    SentinelCorrupted,
}
