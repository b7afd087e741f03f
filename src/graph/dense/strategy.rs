//! Proptest strategies for property tests over dense graphs.

use proptest::prelude::*;

use super::DenseGraph;

/// Generates graphs with up to `max_nodes` nodes.
///
/// Roughly a quarter of the cells carry a finite cost in `-100.0..100.0`;
/// the rest are absent.
pub fn arb_dense_graph(max_nodes: usize) -> impl Strategy<Value = DenseGraph<f64>> {
    (0..=max_nodes)
        .prop_flat_map(|n| {
            let cell = prop_oneof![
                3 => Just(f64::INFINITY),
                1 => -100.0..100.0f64,
            ];
            (Just(n), proptest::collection::vec(cell, n * n))
        })
        .prop_map(|(node_count, costs)| DenseGraph { costs, node_count })
}
