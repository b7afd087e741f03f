//! Dense adjacency-matrix graph over contiguously numbered nodes.
//!
//! This module is vertically split:
//! - `iter`: lazy row-major edge iteration
//! - `snapshot`: serde representation
//! - `parallel`: rayon-backed scans (feature `parallel`)
//! - `strategy`: proptest strategies (feature `proptest`)
//! - `tests`: module-local tests
//!
//! ## Layout
//!
//! A graph with `N` nodes owns exactly `N * N` costs in one row-major buffer.
//! The cost of the directed edge `tail -> head` lives at offset
//! `tail * N + head`: rows are sources, columns are destinations. Every
//! accessor uses this single convention, so `successors` is a row scan and
//! `predecessors` a column scan.
//!
//! A cell holding positive infinity means "no edge"; any other value,
//! including zero and negative costs, is an edge with that cost.
//!
//! ## Bounds
//!
//! The [`Graph`] and [`MutableGraph`] methods treat an out-of-range node as a
//! caller bug and panic, just like slice indexing. Call
//! [`Graph::node_exists`] first, or use the `try_*` accessors which report
//! [`GraphError::NodeOutOfRange`] instead.

use num_traits::Float;

use super::error::GraphError;
use super::primitives::{NodeIndex, SimpleEdge};
use super::traits::{Graph, MutableGraph};

mod iter;
#[cfg(feature = "parallel")]
mod parallel;
mod snapshot;
#[cfg(feature = "proptest")]
pub mod strategy;
#[cfg(test)]
mod tests;

pub use iter::Edges;

/// A directed, weighted graph backed by an `N x N` cost matrix.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `cost` / `set_edge_cost` | \(O(1)\) | Direct offset arithmetic |
/// | `edge_to` / `edge_between` | \(O(1)\) | One or two cell reads |
/// | `successors` / `predecessors` | \(O(n)\) | Row or column scan |
/// | `neighbors` / `degree` | \(O(n)\) | Row and column scan |
/// | `directed_edge_list` | \(O(n^2)\) | Full matrix scan |
/// | memory | \(n^2\) costs | Independent of edge count |
#[derive(Clone, Debug, PartialEq)]
pub struct DenseGraph<C = f64> {
    /// Row-major costs; `costs[tail * node_count + head]`.
    costs: Vec<C>,
    /// Number of nodes, fixed at construction.
    node_count: usize,
}

impl<C: Float> DenseGraph<C> {
    /// Creates a graph with `node_count` nodes.
    ///
    /// With `passable == true` every ordered pair, self-loops included, is
    /// joined at cost `1`. Otherwise the graph starts without edges.
    ///
    /// # Panics
    /// Panics if `node_count * node_count` overflows `usize`.
    pub fn new(node_count: usize, passable: bool) -> Self {
        let cells = node_count
            .checked_mul(node_count)
            .unwrap_or_else(|| panic!("cost matrix for n={node_count} overflows usize"));
        let fill = if passable { C::one() } else { C::infinity() };

        #[cfg(feature = "tracing")]
        tracing::trace!(node_count, passable, "dense graph created");

        Self {
            costs: vec![fill; cells],
            node_count,
        }
    }

    /// Creates a graph from a row-major cost buffer.
    ///
    /// # Errors
    /// Returns [`GraphError::MatrixSizeMismatch`] if `costs.len()` is not
    /// `node_count * node_count`.
    pub fn from_costs(node_count: usize, costs: Vec<C>) -> Result<Self, GraphError> {
        let expected = node_count.saturating_mul(node_count);
        if costs.len() != expected {
            return Err(GraphError::MatrixSizeMismatch {
                expected,
                actual: costs.len(),
            });
        }
        Ok(Self { costs, node_count })
    }

    /// Returns the number of nodes.
    #[inline(always)]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns `true` if the graph has no nodes.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Returns the number of directed edges (finite cells).
    pub fn edge_count(&self) -> usize {
        self.costs.iter().filter(|&&c| is_edge(c)).count()
    }

    /// Returns the row-major cost matrix.
    #[inline]
    pub fn as_slice(&self) -> &[C] {
        &self.costs
    }

    /// Returns `true` if the directed edge `tail -> head` exists.
    ///
    /// # Panics
    /// Panics if either node is out of range.
    #[inline]
    #[track_caller]
    pub fn has_edge(&self, tail: usize, head: usize) -> bool {
        is_edge(self.cell(tail, head))
    }

    /// Returns a lazy row-major iterator over `(edge, cost)` for every edge.
    #[inline]
    pub fn edges(&self) -> Edges<'_, C> {
        Edges::new(&self.costs, self.node_count)
    }

    /// Checked variant of [`Graph::cost`].
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] if either endpoint is out of range.
    pub fn try_cost(&self, edge: &SimpleEdge) -> Result<C, GraphError> {
        self.check(edge.tail.0)?;
        self.check(edge.head.0)?;
        Ok(self.costs[self.offset(edge.tail.0, edge.head.0)])
    }

    /// Checked variant of [`MutableGraph::set_edge_cost`].
    ///
    /// Nothing is written when either endpoint is out of range.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] if either endpoint is out of range.
    pub fn try_set_edge_cost(
        &mut self,
        edge: &SimpleEdge,
        cost: C,
        directed: bool,
    ) -> Result<(), GraphError> {
        self.check(edge.tail.0)?;
        self.check(edge.head.0)?;
        self.write(edge.tail.0, edge.head.0, cost, directed);
        Ok(())
    }

    /// Checked variant of [`MutableGraph::remove_edge`].
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] if either endpoint is out of range.
    pub fn try_remove_edge(&mut self, edge: &SimpleEdge, directed: bool) -> Result<(), GraphError> {
        self.try_set_edge_cost(edge, C::infinity(), directed)
    }

    #[inline(always)]
    fn offset(&self, tail: usize, head: usize) -> usize {
        tail * self.node_count + head
    }

    #[inline]
    fn check(&self, node: usize) -> Result<(), GraphError> {
        if node < self.node_count {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node,
                node_count: self.node_count,
            })
        }
    }

    #[inline(always)]
    #[track_caller]
    fn assert_node(&self, node: usize) {
        assert!(
            node < self.node_count,
            "node {node} out of bounds for n={}",
            self.node_count
        );
    }

    /// Reads the cell `tail -> head`, panicking on out-of-range nodes.
    ///
    /// Both ids are checked individually: an oversized `head` would otherwise
    /// land inside the next row.
    #[inline]
    #[track_caller]
    fn cell(&self, tail: usize, head: usize) -> C {
        self.assert_node(tail);
        self.assert_node(head);
        self.costs[self.offset(tail, head)]
    }

    /// Edge test without bounds assertions; callers assert the scanned node once.
    #[inline(always)]
    fn stored(&self, tail: usize, head: usize) -> bool {
        is_edge(self.costs[self.offset(tail, head)])
    }

    /// Ids of every node `i` for which `pred(i)` holds, ascending.
    fn collect_nodes(&self, pred: impl Fn(usize) -> bool) -> Vec<NodeIndex> {
        (0..self.node_count).filter(|&i| pred(i)).map(NodeIndex).collect()
    }

    fn write(&mut self, tail: usize, head: usize, cost: C, directed: bool) {
        #[cfg(feature = "tracing")]
        tracing::trace!(tail, head, cost = ?cost.to_f64(), directed, "set edge cost");

        let forward = self.offset(tail, head);
        self.costs[forward] = cost;
        if !directed {
            let backward = self.offset(head, tail);
            self.costs[backward] = cost;
        }
    }
}

impl<C> Default for DenseGraph<C> {
    fn default() -> Self {
        Self {
            costs: Vec::new(),
            node_count: 0,
        }
    }
}

impl<C: Float> Graph for DenseGraph<C> {
    type Node = NodeIndex;
    type Edge = SimpleEdge;
    type Cost = C;

    #[inline]
    fn node_exists(&self, node: &NodeIndex) -> bool {
        node.0 < self.node_count
    }

    fn degree(&self, node: &NodeIndex) -> usize {
        self.assert_node(node.0);
        let n = node.0;
        (0..self.node_count)
            .map(|i| usize::from(self.stored(i, n)) + usize::from(self.stored(n, i)))
            .sum()
    }

    fn node_list(&self) -> Vec<NodeIndex> {
        (0..self.node_count).map(NodeIndex).collect()
    }

    fn directed_edge_list(&self) -> Vec<SimpleEdge> {
        self.edges().map(|(edge, _)| edge).collect()
    }

    fn neighbors(&self, node: &NodeIndex) -> Vec<NodeIndex> {
        self.assert_node(node.0);
        let n = node.0;
        self.collect_nodes(|i| self.stored(i, n) || self.stored(n, i))
    }

    /// The returned edge is oriented `node -> neighbor` even when only
    /// `neighbor -> node` is stored.
    fn edge_between(&self, node: &NodeIndex, neighbor: &NodeIndex) -> Option<SimpleEdge> {
        let joined = self.has_edge(node.0, neighbor.0) || self.has_edge(neighbor.0, node.0);
        joined.then_some(SimpleEdge::new(*node, *neighbor))
    }

    fn successors(&self, node: &NodeIndex) -> Vec<NodeIndex> {
        self.assert_node(node.0);
        self.collect_nodes(|i| self.stored(node.0, i))
    }

    fn edge_to(&self, node: &NodeIndex, succ: &NodeIndex) -> Option<SimpleEdge> {
        self.has_edge(node.0, succ.0)
            .then_some(SimpleEdge::new(*node, *succ))
    }

    fn predecessors(&self, node: &NodeIndex) -> Vec<NodeIndex> {
        self.assert_node(node.0);
        self.collect_nodes(|i| self.stored(i, node.0))
    }

    #[inline]
    fn cost(&self, edge: &SimpleEdge) -> C {
        self.cell(edge.tail.0, edge.head.0)
    }

    /// Already dense; there is nothing to compact.
    fn crunch(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(node_count = self.node_count, "crunch on dense graph is a no-op");
    }
}

impl<C: Float> MutableGraph for DenseGraph<C> {
    #[track_caller]
    fn set_edge_cost(&mut self, edge: &SimpleEdge, cost: C, directed: bool) {
        self.assert_node(edge.tail.0);
        self.assert_node(edge.head.0);
        self.write(edge.tail.0, edge.head.0, cost, directed);
    }
}

/// Positive infinity encodes a missing edge; everything else is an edge.
#[inline(always)]
pub(crate) fn is_edge<C: Float>(cost: C) -> bool {
    cost != C::infinity()
}
