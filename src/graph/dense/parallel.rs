use num_traits::Float;
use rayon::prelude::*;

use super::{is_edge, DenseGraph};
use crate::graph::primitives::{NodeIndex, SimpleEdge};

impl<C: Float + Send + Sync> DenseGraph<C> {
    /// Parallel counterpart of [`Graph::directed_edge_list`](crate::graph::Graph::directed_edge_list).
    ///
    /// Rows are scanned on the rayon pool; the result keeps row-major order.
    pub fn par_directed_edge_list(&self) -> Vec<SimpleEdge> {
        if self.node_count == 0 {
            return Vec::new();
        }
        self.costs
            .par_chunks(self.node_count)
            .enumerate()
            .flat_map_iter(|(tail, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &c)| is_edge(c))
                    .map(move |(head, _)| SimpleEdge::new(NodeIndex(tail), NodeIndex(head)))
            })
            .collect()
    }
}
