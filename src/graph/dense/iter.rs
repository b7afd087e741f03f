use core::iter::FusedIterator;

use num_traits::Float;

use super::is_edge;
use crate::graph::primitives::{NodeIndex, SimpleEdge};

/// Row-major iterator over the edges of a [`DenseGraph`](super::DenseGraph).
///
/// Yields `(edge, cost)` ordered by tail and then head, skipping absent cells.
#[derive(Clone, Debug)]
pub struct Edges<'a, C> {
    costs: &'a [C],
    node_count: usize,
    offset: usize,
}

impl<'a, C> Edges<'a, C> {
    pub(super) fn new(costs: &'a [C], node_count: usize) -> Self {
        Self {
            costs,
            node_count,
            offset: 0,
        }
    }
}

impl<C: Float> Iterator for Edges<'_, C> {
    type Item = (SimpleEdge, C);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&cost) = self.costs.get(self.offset) {
            let offset = self.offset;
            self.offset += 1;
            if is_edge(cost) {
                let tail = NodeIndex(offset / self.node_count);
                let head = NodeIndex(offset % self.node_count);
                return Some((SimpleEdge::new(tail, head), cost));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.costs.len() - self.offset))
    }
}

impl<C: Float> FusedIterator for Edges<'_, C> {}
