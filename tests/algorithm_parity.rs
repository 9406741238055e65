use dense_apsp::graph::generators::random_dense;
use dense_apsp::graph::{DenseGraph, Graph, MutableGraph};
use dense_apsp::{Dijkstra, Error, FloydWarshall};

// On non-negative weights both algorithms must agree on every distance.
#[test]
fn dijkstra_and_floyd_warshall_agree_on_random_graphs() {
    let dijkstra = Dijkstra::new();
    let solver = FloydWarshall::new();

    for _ in 0..5 {
        let graph = random_dense(40, 3.0, 20).unwrap();
        let all_pairs = solver.run(&graph).unwrap();

        for source in 0..graph.vertex_count() {
            let single = dijkstra.run(&graph, source).unwrap();
            for target in 0..graph.vertex_count() {
                assert_eq!(
                    single.distance(target).unwrap(),
                    all_pairs.distance(source, target).unwrap(),
                    "disagreement for pair ({source}, {target})"
                );
            }
        }
    }
}

#[test]
fn dijkstra_path_cost_matches_distance() {
    let graph = random_dense(30, 3.0, 15).unwrap();
    let result = Dijkstra::new().run(&graph, 0).unwrap();

    for target in 0..graph.vertex_count() {
        let path = match result.path(target) {
            Ok(path) => path,
            Err(_) => continue,
        };
        assert_eq!(path[0], 0);
        assert_eq!(path[path.len() - 1], target);

        let mut total = 0;
        for pair in path.windows(2) {
            total += graph
                .edge_weight(pair[0], pair[1])
                .expect("path must only use existing edges");
        }
        assert_eq!(Some(total), result.distance(target).unwrap());
    }
}

#[test]
fn dijkstra_rejects_negative_weights() {
    let mut graph: DenseGraph<i64> = DenseGraph::new(3);
    graph.add_edge(0, 1, 2).unwrap();
    graph.add_edge(1, 2, -1).unwrap();

    assert!(matches!(
        Dijkstra::new().run(&graph, 0),
        Err(Error::NegativeWeight(1, 2))
    ));
}

#[test]
fn dijkstra_source_path_is_trivial() {
    let graph: DenseGraph<i64> = DenseGraph::new(2);
    let result = Dijkstra::new().run(&graph, 0).unwrap();

    assert_eq!(result.path(0).unwrap(), vec![0]);
    assert_eq!(result.distance(0).unwrap(), Some(0));
    assert!(matches!(result.path(1), Err(Error::NoPathExists(0, 1))));
}

#[test]
fn dijkstra_rejects_missing_source() {
    let graph: DenseGraph<i64> = DenseGraph::new(2);
    assert!(matches!(
        Dijkstra::new().run(&graph, 5),
        Err(Error::InvalidVertex(5))
    ));
}
