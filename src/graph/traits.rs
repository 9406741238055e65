use num_traits::{PrimInt, Signed};
use std::fmt::Debug;

use crate::Result;

/// Trait representing a weighted directed graph with integer weights
pub trait Graph<W>: Debug
where
    W: PrimInt + Signed + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: usize, to: usize) -> Option<W>;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Adds a directed edge between vertices with the given weight.
    ///
    /// Inserting a second edge for the same ordered pair overwrites the
    /// earlier weight. Negative weights are accepted.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;
}
