//! Wall-clock comparison of repeated single-source Dijkstra against
//! sequential and parallel Floyd-Warshall on random dense graphs.

use std::time::{Duration, Instant};

use dense_apsp::graph::generators::random_dense;
use dense_apsp::graph::{DenseGraph, Graph};
use dense_apsp::{Dijkstra, FloydWarshall};

fn time_repeated_dijkstra(graph: &DenseGraph<i64>) -> Duration {
    let dijkstra = Dijkstra::new();
    let start = Instant::now();
    for source in 0..graph.vertex_count() {
        dijkstra.run(graph, source).unwrap();
    }
    start.elapsed()
}

fn time_floyd_warshall(graph: &DenseGraph<i64>, solver: &FloydWarshall) -> Duration {
    let start = Instant::now();
    solver.run(graph).unwrap();
    start.elapsed()
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![50, 100, 200, 400, 800];
    let edge_factor = 4.0;
    let max_weight = 50;

    println!("=====================================================");
    println!("Benchmark: repeated Dijkstra vs Floyd-Warshall");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let sequential = FloydWarshall::new().with_parallel_threshold(usize::MAX);
    let parallel = FloydWarshall::new().with_parallel_threshold(0);

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = random_dense(size, edge_factor, max_weight).unwrap();
        println!(
            "Graph has {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let dijkstra_time = time_repeated_dijkstra(&graph);
        let sequential_time = time_floyd_warshall(&graph, &sequential);
        let parallel_time = time_floyd_warshall(&graph, &parallel);

        println!("  - Repeated Dijkstra:        {:?}", dijkstra_time);
        println!("  - Floyd-Warshall (seq):     {:?}", sequential_time);
        println!("  - Floyd-Warshall (par):     {:?}", parallel_time);

        results.push((size, dijkstra_time, sequential_time, parallel_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<15}",
        "Vertices", "Dijkstra (ms)", "FW-Seq (ms)", "FW-Par (ms)"
    );
    println!("-----------------------------------------------------");

    for (size, dijkstra_time, sequential_time, parallel_time) in &results {
        println!(
            "{:<10} | {:<15} | {:<15} | {:<15}",
            size,
            dijkstra_time.as_millis(),
            sequential_time.as_millis(),
            parallel_time.as_millis()
        );
    }
}
