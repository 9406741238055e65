//! Dense APSP - All-Pairs Shortest Paths on dense directed graphs
//!
//! This library computes minimum-cost paths between every ordered pair of
//! vertices of a small dense directed graph with integer (possibly negative)
//! edge weights, using Floyd-Warshall relaxation with a predecessor matrix
//! for concrete path reconstruction.
//!
//! Negative cycles are detected after relaxation; when one is present the
//! whole result is withheld rather than exposing meaningless "shortest"
//! paths. A repeated single-source Dijkstra is also provided for graphs
//! without negative weights.

pub mod algorithm;
pub mod data_structures;
pub mod engine;
pub mod graph;
pub mod io;

pub use algorithm::{
    dijkstra::Dijkstra,
    floyd_warshall::FloydWarshall,
    results::{AllPairsResult, SingleSourceResult},
};
pub use engine::ApspEngine;
/// Re-export main types for convenient use
pub use graph::dense::DenseGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex index: {0}")]
    InvalidVertex(usize),

    #[error("No path exists from {0} to {1}")]
    NoPathExists(usize, usize),

    #[error("Negative cycle through vertex {0}")]
    NegativeCycleDetected(usize),

    #[error("Negative edge weight on {0} -> {1}")]
    NegativeWeight(usize, usize),

    #[error("Graph has not been relaxed yet")]
    NotRelaxed,

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
