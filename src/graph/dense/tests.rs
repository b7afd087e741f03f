use super::*;

fn edge(tail: usize, head: usize) -> SimpleEdge {
    SimpleEdge::new(NodeIndex(tail), NodeIndex(head))
}

fn ids(nodes: &[NodeIndex]) -> Vec<usize> {
    nodes.iter().map(|n| n.0).collect()
}

#[test]
fn dense_graph_passable_and_disconnected_construction() {
    let open = DenseGraph::<f64>::new(3, true);
    let closed = DenseGraph::<f64>::new(3, false);

    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(open.cost(&edge(i, j)), 1.0);
            assert_eq!(closed.cost(&edge(i, j)), f64::INFINITY);
        }
    }
    assert_eq!(open.edge_count(), 9);
    assert_eq!(closed.edge_count(), 0);
}

#[test]
fn dense_graph_empty() {
    let mut graph = DenseGraph::<f64>::new(0, true);
    assert!(graph.is_empty());
    assert!(graph.node_list().is_empty());
    assert!(graph.directed_edge_list().is_empty());
    assert!(!graph.node_exists(&NodeIndex(0)));
    graph.crunch();
    assert_eq!(graph, DenseGraph::default());
}

#[test]
fn dense_graph_directed_update_leaves_reverse() {
    let mut graph = DenseGraph::<f64>::new(4, false);
    graph.set_edge_cost(&edge(0, 1), 2.5, true);

    assert_eq!(graph.cost(&edge(0, 1)), 2.5);
    assert_eq!(graph.cost(&edge(1, 0)), f64::INFINITY);
    assert!(graph.has_edge(0, 1));
    assert!(!graph.has_edge(1, 0));
}

#[test]
fn dense_graph_undirected_update_mirrors() {
    let mut graph = DenseGraph::<f64>::new(4, false);
    graph.set_edge_cost(&edge(2, 3), -1.0, false);

    assert_eq!(graph.cost(&edge(2, 3)), -1.0);
    assert_eq!(graph.cost(&edge(3, 2)), -1.0);

    graph.remove_edge(&edge(3, 2), false);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn dense_graph_zero_and_negative_costs_are_edges() {
    let mut graph = DenseGraph::<f64>::new(2, false);
    graph.set_edge_cost(&edge(0, 1), 0.0, true);
    graph.set_edge_cost(&edge(1, 0), -7.0, true);

    assert_eq!(graph.directed_edge_list(), vec![edge(0, 1), edge(1, 0)]);
}

#[test]
fn dense_graph_degree_counts_self_loop_twice() {
    let graph = DenseGraph::<f64>::new(3, true);
    for node in graph.node_list() {
        assert_eq!(graph.degree(&node), 6);
    }

    let mut graph = DenseGraph::<f64>::new(3, false);
    graph.set_edge_cost(&edge(1, 1), 1.0, true);
    assert_eq!(graph.degree(&NodeIndex(1)), 2);
    assert_eq!(graph.neighbors(&NodeIndex(1)), vec![NodeIndex(1)]);
}

#[test]
fn dense_graph_scans_are_ascending() {
    let mut graph = DenseGraph::<f64>::new(5, false);
    graph.set_edge_cost(&edge(2, 4), 1.0, true);
    graph.set_edge_cost(&edge(2, 0), 1.0, true);
    graph.set_edge_cost(&edge(3, 2), 1.0, true);
    graph.set_edge_cost(&edge(4, 2), 1.0, true);

    assert_eq!(ids(&graph.successors(&NodeIndex(2))), vec![0, 4]);
    assert_eq!(ids(&graph.predecessors(&NodeIndex(2))), vec![3, 4]);
    assert_eq!(ids(&graph.neighbors(&NodeIndex(2))), vec![0, 3, 4]);
    assert_eq!(graph.degree(&NodeIndex(2)), 4);
}

#[test]
fn dense_graph_edge_between_keeps_caller_orientation() {
    let mut graph = DenseGraph::<f64>::new(3, false);
    graph.set_edge_cost(&edge(1, 0), 4.0, true);

    // Only 1 -> 0 is stored, yet the edge comes back as 0 -> 1.
    let between = graph.edge_between(&NodeIndex(0), &NodeIndex(1));
    assert_eq!(between, Some(edge(0, 1)));
    assert_eq!(graph.cost(&edge(0, 1)), f64::INFINITY);

    assert_eq!(graph.edge_to(&NodeIndex(0), &NodeIndex(1)), None);
    assert_eq!(graph.edge_to(&NodeIndex(1), &NodeIndex(0)), Some(edge(1, 0)));
    assert_eq!(graph.edge_between(&NodeIndex(0), &NodeIndex(2)), None);
}

#[test]
fn dense_graph_edges_iterator_yields_costs() {
    let mut graph = DenseGraph::<f32>::new(3, false);
    graph.set_edge_cost(&edge(2, 1), 0.5, true);
    graph.set_edge_cost(&edge(0, 2), 3.0, true);

    let edges: Vec<_> = graph.edges().collect();
    assert_eq!(edges, vec![(edge(0, 2), 3.0), (edge(2, 1), 0.5)]);

    let mut iter = graph.edges();
    iter.by_ref().for_each(drop);
    assert_eq!(iter.next(), None);
}

#[test]
fn dense_graph_checked_accessors() {
    let mut graph = DenseGraph::<f64>::new(2, false);

    assert_eq!(
        graph.try_cost(&edge(0, 2)),
        Err(GraphError::NodeOutOfRange { node: 2, node_count: 2 })
    );
    assert_eq!(
        graph.try_set_edge_cost(&edge(5, 0), 1.0, false),
        Err(GraphError::NodeOutOfRange { node: 5, node_count: 2 })
    );
    assert_eq!(graph.edge_count(), 0);

    graph.try_set_edge_cost(&edge(0, 1), 9.0, false).unwrap();
    assert_eq!(graph.try_cost(&edge(1, 0)), Ok(9.0));
    graph.try_remove_edge(&edge(0, 1), true).unwrap();
    assert_eq!(graph.try_cost(&edge(0, 1)), Ok(f64::INFINITY));
    assert_eq!(graph.try_cost(&edge(1, 0)), Ok(9.0));
}

#[test]
#[should_panic(expected = "node 3 out of bounds for n=3")]
fn dense_graph_head_past_row_end_panics() {
    // 0 * 3 + 3 would be a valid offset into row 1.
    let graph = DenseGraph::<f64>::new(3, true);
    let _ = graph.cost(&edge(0, 3));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn dense_graph_successors_out_of_range_panics() {
    let graph = DenseGraph::<f64>::new(2, true);
    let _ = graph.successors(&NodeIndex(2));
}

#[test]
fn dense_graph_from_costs_validates_length() {
    assert_eq!(
        DenseGraph::from_costs(2, vec![1.0f64; 3]),
        Err(GraphError::MatrixSizeMismatch { expected: 4, actual: 3 })
    );
    let graph = DenseGraph::from_costs(2, vec![f64::INFINITY, 2.0, f64::INFINITY, f64::INFINITY]).unwrap();
    assert_eq!(graph.directed_edge_list(), vec![edge(0, 1)]);
    assert_eq!(graph.as_slice().len(), 4);
}

#[cfg(feature = "parallel")]
#[test]
fn dense_graph_parallel_edge_list_matches_sequential() {
    let mut graph = DenseGraph::<f64>::new(16, false);
    for i in 0..16 {
        graph.set_edge_cost(&edge(i, (i * 7 + 3) % 16), i as f64, true);
    }
    assert_eq!(graph.par_directed_edge_list(), graph.directed_edge_list());
}

#[test]
fn dense_graph_scans_match_cell_reads() {
    let mut graph = DenseGraph::<f64>::new(6, false);
    for (tail, head) in [(0, 5), (5, 0), (2, 5), (5, 5), (4, 3)] {
        graph.set_edge_cost(&edge(tail, head), 1.0, true);
    }

    for node in graph.node_list() {
        let n = node.0;
        let out = (0..6).filter(|&i| graph.has_edge(n, i)).count();
        let inc = (0..6).filter(|&i| graph.has_edge(i, n)).count();
        assert_eq!(graph.degree(&node), out + inc);
        assert_eq!(graph.successors(&node).len(), out);
        assert_eq!(graph.predecessors(&node).len(), inc);
    }
    assert_eq!(ids(&graph.neighbors(&NodeIndex(5))), vec![0, 2, 5]);
    assert_eq!(graph.degree(&NodeIndex(5)), 5);
}

#[test]
#[should_panic(expected = "node 4 out of bounds for n=4")]
fn dense_graph_degree_out_of_range_panics() {
    let graph = DenseGraph::<f64>::new(4, true);
    let _ = graph.degree(&NodeIndex(4));
}
