//! Errors reported by the checked graph accessors.

use thiserror::Error;

/// Failure of a checked graph operation.
///
/// Missing edges are not errors; queries report them as `None`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GraphError {
    /// A node id was not below the node count.
    #[error("node {node} out of range for graph with {node_count} nodes")]
    NodeOutOfRange {
        /// The offending node id.
        node: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// A serialized cost matrix did not have `node_count * node_count` cells.
    #[error("cost matrix has {actual} cells, expected {expected}")]
    MatrixSizeMismatch {
        /// Required number of cells.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },
}
