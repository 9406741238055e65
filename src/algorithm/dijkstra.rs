use num_traits::{PrimInt, Signed, Zero};
use std::fmt::Debug;

use crate::algorithm::results::SingleSourceResult;
use crate::data_structures::MinQueue;
use crate::graph::traits::Graph;
use crate::{Error, Result};

/// Classic single-source Dijkstra over a weighted directed graph.
///
/// Only valid on graphs without negative edge weights; the graph is
/// rejected up front instead of silently producing wrong distances.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Computes shortest paths from `source` to every other vertex
    pub fn run<W, G>(&self, graph: &G, source: usize) -> Result<SingleSourceResult<W>>
    where
        W: PrimInt + Signed + Debug,
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();
        for u in 0..n {
            for (v, weight) in graph.outgoing_edges(u) {
                if weight < W::zero() {
                    return Err(Error::NegativeWeight(u, v));
                }
            }
        }

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = Some(W::zero());

        let mut queue = MinQueue::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Stale queue entry: a shorter path to u was already settled
            if let Some(current) = distances[u] {
                if current < dist_u {
                    continue;
                }
            }

            for (v, weight) in graph.outgoing_edges(u) {
                let next = dist_u + weight;
                let improved = match distances[v] {
                    None => true,
                    Some(current) => next < current,
                };
                if improved {
                    distances[v] = Some(next);
                    predecessors[v] = Some(u);
                    queue.push(v, next);
                }
            }
        }

        Ok(SingleSourceResult {
            source,
            distances,
            predecessors,
        })
    }
}
