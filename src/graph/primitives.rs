//! Concrete node and edge values handed out by the graph layouts.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::traits::{Edge, Node};

/// Identifier of a node in a contiguously numbered graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct NodeIndex(pub usize);

impl NodeIndex {
    /// Wraps a raw node id.
    #[inline(always)]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the raw node id.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl Node for NodeIndex {
    #[inline(always)]
    fn id(&self) -> usize {
        self.0
    }
}

impl From<usize> for NodeIndex {
    #[inline(always)]
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl From<NodeIndex> for usize {
    #[inline(always)]
    fn from(node: NodeIndex) -> Self {
        node.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A plain directed edge `tail -> head`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SimpleEdge<N = NodeIndex> {
    /// Source node.
    pub tail: N,
    /// Destination node.
    pub head: N,
}

impl<N> SimpleEdge<N> {
    /// Creates the edge `tail -> head`.
    #[inline(always)]
    pub const fn new(tail: N, head: N) -> Self {
        Self { tail, head }
    }

    /// Returns the edge pointing the other way.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            tail: self.head,
            head: self.tail,
        }
    }
}

impl<N: Node + Copy> Edge for SimpleEdge<N> {
    type Node = N;

    #[inline(always)]
    fn tail(&self) -> N {
        self.tail
    }

    #[inline(always)]
    fn head(&self) -> N {
        self.head
    }
}

impl<N: fmt::Display> fmt::Display for SimpleEdge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.tail, self.head)
    }
}
