use num_traits::{PrimInt, Signed, Zero};
use std::fmt::Debug;

use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};

/// A dense directed graph stored as two flat vertex_count x vertex_count
/// matrices addressed by `row * vertex_count + col`.
///
/// `dist[u][v]` is `Some(weight)` when a direct edge (or, later, a relaxed
/// path) is known and `None` when no finite path is known. `pred[u][v]`
/// seeds the predecessor matrix: `Some(u)` for every inserted edge, `None`
/// where no path is known. Using `Option` as the infinity sentinel makes
/// sentinel arithmetic unrepresentable.
#[derive(Debug, Clone)]
pub struct DenseGraph<W>
where
    W: PrimInt + Signed + Debug,
{
    vertex_count: usize,
    edge_count: usize,
    dist: Vec<Option<W>>,
    pred: Vec<Option<usize>>,
}

impl<W> DenseGraph<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Creates a graph with the given number of vertices and no edges.
    ///
    /// Distances start at `Some(0)` on the diagonal and `None` (infinity)
    /// everywhere else; the predecessor matrix starts all-`None`.
    pub fn new(vertex_count: usize) -> Self {
        let mut dist = vec![None; vertex_count * vertex_count];
        for i in 0..vertex_count {
            dist[i * vertex_count + i] = Some(W::zero());
        }

        DenseGraph {
            vertex_count,
            edge_count: 0,
            dist,
            pred: vec![None; vertex_count * vertex_count],
        }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.vertex_count + col
    }

    /// Returns true if any inserted edge has a negative weight
    pub fn has_negative_edge(&self) -> bool {
        self.pred
            .iter()
            .zip(self.dist.iter())
            .any(|(pred, dist)| match (pred, dist) {
                (Some(_), Some(weight)) => *weight < W::zero(),
                _ => false,
            })
    }

    /// Borrows the raw distance and predecessor matrices, in row-major order
    pub fn matrices(&self) -> (&[Option<W>], &[Option<usize>]) {
        (&self.dist, &self.pred)
    }
}

impl<W> Graph<W> for DenseGraph<W>
where
    W: PrimInt + Signed + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        // pred is only ever set by add_edge, so it doubles as the
        // explicit-edge marker (the diagonal starts at Some(0) without
        // being an edge).
        self.has_vertex(from) && self.has_vertex(to) && self.pred[self.index(from, to)].is_some()
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if self.has_edge(from, to) {
            self.dist[self.index(from, to)]
        } else {
            None
        }
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if !self.has_vertex(vertex) {
            return Box::new(std::iter::empty());
        }

        let n = self.vertex_count;
        Box::new((0..n).filter_map(move |target| {
            let idx = vertex * n + target;
            match (self.pred[idx], self.dist[idx]) {
                (Some(_), Some(weight)) => Some((target, weight)),
                _ => None,
            }
        }))
    }
}

impl<W> MutableGraph<W> for DenseGraph<W>
where
    W: PrimInt + Signed + Debug,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) {
            return Err(Error::InvalidVertex(from));
        }
        if !self.has_vertex(to) {
            return Err(Error::InvalidVertex(to));
        }

        let idx = self.index(from, to);
        if self.pred[idx].is_none() {
            self.edge_count += 1;
        }
        // Last write wins for duplicate ordered pairs
        self.dist[idx] = Some(weight);
        self.pred[idx] = Some(from);
        Ok(())
    }
}
