//! Graph layouts and the capability traits generic algorithms are written against.
//!
//! - `traits`: `Node`, `Edge`, `Graph`, `MutableGraph`
//! - `primitives`: concrete `NodeIndex` and `SimpleEdge` values
//! - `dense`: adjacency-matrix layout over contiguously numbered nodes

pub mod dense;
pub mod error;
pub mod primitives;
pub mod traits;

pub use dense::DenseGraph;
pub use error::GraphError;
pub use primitives::{NodeIndex, SimpleEdge};
pub use traits::{Edge, Graph, MutableGraph, Node};
