//! # `densegraph` - Dense Adjacency-Matrix Graphs
//!
//! A directed, weighted graph over nodes numbered `0..N`, stored as one flat
//! row-major `N x N` cost matrix, together with the small set of capability
//! traits that graph algorithms consume.
//!
//! ## Key Features
//!
//! - **Constant-time edges**: edge lookup and update are a single offset computation
//! - **Infinity as absence**: a cell of positive infinity means "no edge"; any other
//!   cost, zero and negatives included, is an edge
//! - **Capability traits**: [`Graph`] and [`MutableGraph`] let searches and traversals
//!   be written once and reused across layouts
//! - **Checked and unchecked access**: trait methods panic on out-of-range nodes like
//!   slice indexing, `try_*` methods return [`GraphError`]
//!
//! ## Cargo features
//!
//! - `tracing`: emit `trace!` events on construction and edge mutation
//! - `parallel`: rayon-backed `par_directed_edge_list`
//! - `proptest`: proptest strategies under `graph::dense::strategy`
//!
//! ## Example
//!
//! ```rust
//! use densegraph::{DenseGraph, Graph, MutableGraph, NodeIndex, SimpleEdge};
//!
//! let mut graph = DenseGraph::<f64>::new(4, false);
//! let (a, b) = (NodeIndex(0), NodeIndex(1));
//!
//! graph.set_edge_cost(&SimpleEdge::new(a, b), 2.5, true);
//!
//! assert_eq!(graph.successors(&a), vec![b]);
//! assert_eq!(graph.predecessors(&b), vec![a]);
//! let edge = graph.edge_to(&a, &b).unwrap();
//! assert_eq!(graph.cost(&edge), 2.5);
//! assert!(graph.edge_to(&b, &a).is_none());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod graph;

pub use graph::{DenseGraph, Edge, Graph, GraphError, MutableGraph, Node, NodeIndex, SimpleEdge};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // `NodeIndex` is `repr(transparent)` over `usize`.
    assert!(mem::size_of::<NodeIndex>() == mem::size_of::<usize>());
    assert!(mem::size_of::<SimpleEdge>() == 2 * mem::size_of::<usize>());
};
