//! Capability traits shared by graph layouts.
//!
//! Algorithms that only need to *read* a graph (searches, traversals, cost
//! accumulation) are written once against [`Graph`]; layouts that allow edge
//! updates additionally implement [`MutableGraph`]. Node and edge values are
//! kept abstract behind [`Node`] and [`Edge`], so a dense matrix and a sparse
//! list layout can hand out different concrete types.

use num_traits::Float;

/// Anything that carries an integer node identifier.
pub trait Node {
    /// Returns the node identifier.
    fn id(&self) -> usize;
}

impl Node for usize {
    #[inline(always)]
    fn id(&self) -> usize {
        *self
    }
}

/// A directed arc between two nodes.
///
/// `tail` is the source and `head` the destination.
pub trait Edge {
    /// Node type at either end of the edge.
    type Node: Node;

    /// Returns the source node.
    fn tail(&self) -> Self::Node;

    /// Returns the destination node.
    fn head(&self) -> Self::Node;
}

/// Read-only graph surface consumed by generic graph algorithms.
///
/// "No edge" is reported as `None`, never as an error.
pub trait Graph {
    /// Node values produced by this graph.
    type Node: Node + Copy;
    /// Edge values produced by this graph.
    type Edge: Edge<Node = Self::Node>;
    /// Edge cost type. Positive infinity means "no edge".
    type Cost: Float;

    /// Returns `true` if `node` is a valid node of this graph.
    fn node_exists(&self, node: &Self::Node) -> bool;

    /// Returns in-degree plus out-degree of `node`.
    ///
    /// A self-loop contributes to both sides.
    fn degree(&self, node: &Self::Node) -> usize;

    /// Returns a fresh snapshot of every node in ascending id order.
    fn node_list(&self) -> Vec<Self::Node>;

    /// Returns every directed edge, ordered by tail and then head.
    fn directed_edge_list(&self) -> Vec<Self::Edge>;

    /// Returns every node joined to `node` by an edge in either direction.
    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Returns an edge oriented `node -> neighbor` if the two nodes are joined
    /// in either direction.
    fn edge_between(&self, node: &Self::Node, neighbor: &Self::Node) -> Option<Self::Edge>;

    /// Returns every node reachable from `node` over one outgoing edge.
    fn successors(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Returns the outgoing edge `node -> succ`, if present.
    fn edge_to(&self, node: &Self::Node, succ: &Self::Node) -> Option<Self::Edge>;

    /// Returns every node with an outgoing edge into `node`.
    fn predecessors(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Returns the stored cost of the directed edge `tail -> head`.
    fn cost(&self, edge: &Self::Edge) -> Self::Cost;

    /// Finalizes auxiliary structures after bulk edits.
    ///
    /// Layouts without auxiliary indices keep the default no-op.
    fn crunch(&mut self) {}
}

/// A graph whose edge costs can be updated in place.
pub trait MutableGraph: Graph {
    /// Sets the cost of `edge`. With `directed == false` the reverse edge gets
    /// the same cost. A cost of positive infinity removes the edge.
    fn set_edge_cost(&mut self, edge: &Self::Edge, cost: Self::Cost, directed: bool);

    /// Removes `edge` (and its reverse when `directed == false`).
    fn remove_edge(&mut self, edge: &Self::Edge, directed: bool) {
        self.set_edge_cost(edge, Self::Cost::infinity(), directed);
    }
}
