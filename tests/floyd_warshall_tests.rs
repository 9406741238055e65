use dense_apsp::graph::{DenseGraph, Graph, MutableGraph};
use dense_apsp::{Error, FloydWarshall};

// Test helper to build a dense graph from an edge list
fn graph(vertex_count: usize, edges: &[(usize, usize, i64)]) -> DenseGraph<i64> {
    let mut graph = DenseGraph::new(vertex_count);
    for &(u, v, w) in edges {
        graph.add_edge(u, v, w).unwrap();
    }
    graph
}

#[test]
fn relay_vertex_beats_direct_edge() {
    // (1->2, 1), (2->3, 2), (1->3, 10) in one-based terms
    let graph = graph(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 10)]);
    let result = FloydWarshall::new().run(&graph).unwrap();

    assert_eq!(result.distance(0, 2).unwrap(), Some(3));
    assert_eq!(result.path(0, 2).unwrap(), vec![0, 1, 2]);
}

#[test]
fn disconnected_pair_has_no_path() {
    let graph = graph(2, &[]);
    let result = FloydWarshall::new().run(&graph).unwrap();

    assert_eq!(result.distance(0, 1).unwrap(), None);
    assert!(matches!(
        result.path(0, 1),
        Err(Error::NoPathExists(0, 1))
    ));
}

#[test]
fn negative_cycle_is_detected() {
    let graph = graph(2, &[(0, 1, 1), (1, 0, -3)]);
    let err = FloydWarshall::new().run(&graph).unwrap_err();

    assert!(matches!(err, Error::NegativeCycleDetected(_)));
}

#[test]
fn single_vertex_graph() {
    let graph = graph(1, &[]);
    let result = FloydWarshall::new().run(&graph).unwrap();

    assert_eq!(result.distance(0, 0).unwrap(), Some(0));
    assert_eq!(result.path(0, 0).unwrap(), vec![0]);
}

#[test]
fn empty_graph() {
    let graph: DenseGraph<i64> = DenseGraph::new(0);
    let result = FloydWarshall::new().run(&graph).unwrap();
    assert_eq!(result.vertex_count(), 0);
}

#[test]
fn diagonal_is_zero() {
    let graph = graph(4, &[(0, 1, 5), (1, 2, 1), (2, 0, 3), (3, 0, 2)]);
    let result = FloydWarshall::new().run(&graph).unwrap();

    for i in 0..4 {
        assert_eq!(result.distance(i, i).unwrap(), Some(0));
    }
}

#[test]
fn computes_expected_distance_matrix() {
    //     ----- b --------
    //    |      ^         | 2
    //    |    1 |    4    v
    //  2 |      a ------> c
    //    |   10 |         | 2
    //    |      v         v
    //     --->  d <-------
    let graph = graph(
        4,
        &[
            (0, 1, 1),
            (0, 2, 4),
            (0, 3, 10),
            (1, 2, 2),
            (1, 3, 2),
            (2, 3, 2),
        ],
    );
    let result = FloydWarshall::new().run(&graph).unwrap();

    let expected = [
        [Some(0), Some(1), Some(3), Some(3)],
        [None, Some(0), Some(2), Some(2)],
        [None, None, Some(0), Some(2)],
        [None, None, None, Some(0)],
    ];
    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(result.distance(i, j).unwrap(), expected[i][j], "pair ({i}, {j})");
        }
    }
}

#[test]
fn triangle_inequality_holds() {
    let graph = graph(
        5,
        &[
            (0, 1, 3),
            (1, 2, 4),
            (2, 3, 1),
            (3, 4, 6),
            (4, 0, 2),
            (0, 3, 9),
            (2, 0, 5),
            (1, 4, 8),
        ],
    );
    let result = FloydWarshall::new().run(&graph).unwrap();

    for i in 0..5 {
        for j in 0..5 {
            for k in 0..5 {
                let via = match (
                    result.distance(i, k).unwrap(),
                    result.distance(k, j).unwrap(),
                ) {
                    (Some(a), Some(b)) => Some(a + b),
                    _ => None,
                };
                if let Some(via) = via {
                    let direct = result
                        .distance(i, j)
                        .unwrap()
                        .expect("pair reachable through k must be reachable");
                    assert!(direct <= via, "triangle violated for ({i}, {j}) via {k}");
                }
            }
        }
    }
}

#[test]
fn relaxation_is_idempotent() {
    let graph = graph(4, &[(0, 1, 2), (1, 2, -1), (2, 3, 4), (0, 3, 10)]);
    let solver = FloydWarshall::new();

    let first = solver.run(&graph).unwrap();
    let second = solver.run(&graph).unwrap();
    assert_eq!(first, second);
}

#[test]
fn reconstructed_path_cost_matches_distance() {
    let graph = graph(
        6,
        &[
            (0, 1, 2),
            (1, 2, 3),
            (2, 5, 1),
            (0, 3, 1),
            (3, 4, 1),
            (4, 5, 10),
            (1, 4, 2),
        ],
    );
    let result = FloydWarshall::new().run(&graph).unwrap();

    for i in 0..6 {
        for j in 0..6 {
            let path = match result.path(i, j) {
                Ok(path) => path,
                Err(_) => continue,
            };
            assert_eq!(path[0], i);
            assert_eq!(path[path.len() - 1], j);

            let mut total = 0;
            for pair in path.windows(2) {
                let weight = graph
                    .edge_weight(pair[0], pair[1])
                    .expect("path must only use existing edges");
                total += weight;
            }
            assert_eq!(Some(total), result.distance(i, j).unwrap());
        }
    }
}

#[test]
fn negative_edge_shortens_path_without_cycle() {
    let graph = graph(3, &[(0, 1, 4), (0, 2, 1), (2, 1, -3)]);
    let result = FloydWarshall::new().run(&graph).unwrap();

    assert_eq!(result.distance(0, 1).unwrap(), Some(-2));
    assert_eq!(result.path(0, 1).unwrap(), vec![0, 2, 1]);
}

#[test]
fn duplicate_edge_last_write_wins() {
    let mut first = DenseGraph::new(2);
    first.add_edge(0, 1, 5).unwrap();
    first.add_edge(0, 1, 2).unwrap();
    assert_eq!(first.edge_count(), 1);
    let result = FloydWarshall::new().run(&first).unwrap();
    assert_eq!(result.distance(0, 1).unwrap(), Some(2));

    // The overwrite wins even when the new weight is worse
    let mut second = DenseGraph::new(2);
    second.add_edge(0, 1, 2).unwrap();
    second.add_edge(0, 1, 7).unwrap();
    let result = FloydWarshall::new().run(&second).unwrap();
    assert_eq!(result.distance(0, 1).unwrap(), Some(7));
}

#[test]
fn out_of_range_vertices_are_reported() {
    let mut graph: DenseGraph<i64> = DenseGraph::new(3);
    assert!(matches!(
        graph.add_edge(3, 0, 1),
        Err(Error::InvalidVertex(3))
    ));
    assert!(matches!(
        graph.add_edge(0, 9, 1),
        Err(Error::InvalidVertex(9))
    ));

    graph.add_edge(0, 1, 1).unwrap();
    let result = FloydWarshall::new().run(&graph).unwrap();
    assert!(matches!(
        result.distance(0, 7),
        Err(Error::InvalidVertex(7))
    ));
    assert!(matches!(result.path(5, 0), Err(Error::InvalidVertex(5))));
}

#[test]
fn parallel_rounds_match_sequential() {
    let graph = graph(
        5,
        &[
            (0, 1, 2),
            (1, 2, 3),
            (2, 3, -1),
            (3, 4, 4),
            (4, 0, 6),
            (0, 3, 10),
            (1, 4, 1),
        ],
    );
    let sequential = FloydWarshall::new()
        .with_parallel_threshold(usize::MAX)
        .run(&graph)
        .unwrap();
    let parallel = FloydWarshall::new()
        .with_parallel_threshold(0)
        .run(&graph)
        .unwrap();

    assert_eq!(sequential, parallel);
}
