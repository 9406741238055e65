use rand::Rng;

use crate::graph::dense::DenseGraph;
use crate::graph::traits::MutableGraph;
use crate::Result;

/// Generates a random directed graph with roughly `edge_factor * n` edges
/// and weights drawn uniformly from `1..=max_weight`.
///
/// Self-loops are skipped; duplicate pairs simply overwrite, so the final
/// edge count may be slightly below the target. Weights are strictly
/// positive so the result is usable by both Dijkstra and Floyd-Warshall.
pub fn random_dense(vertex_count: usize, edge_factor: f64, max_weight: i64) -> Result<DenseGraph<i64>> {
    let mut graph = DenseGraph::new(vertex_count);
    if vertex_count == 0 {
        return Ok(graph);
    }
    let mut rng = rand::thread_rng();

    let target_edges = (edge_factor * vertex_count as f64) as usize;

    for _ in 0..target_edges {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        if u != v {
            let weight = rng.gen_range(1..=max_weight);
            graph.add_edge(u, v, weight)?;
        }
    }

    Ok(graph)
}
