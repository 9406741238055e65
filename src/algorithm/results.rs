use num_traits::{PrimInt, Signed};
use std::fmt::Debug;

use crate::{Error, Result};

/// Finalized output of an all-pairs relaxation: the distance and predecessor
/// matrices for every ordered vertex pair, stored row-major.
///
/// `dist[i * n + j]` is `Some(cost)` of the cheapest known path from `i` to
/// `j`, or `None` when no finite path exists. `pred[i * n + j]` is the vertex
/// immediately preceding `j` on that path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllPairsResult<W>
where
    W: PrimInt + Signed + Debug,
{
    pub(crate) vertex_count: usize,
    pub(crate) dist: Vec<Option<W>>,
    pub(crate) pred: Vec<Option<usize>>,
}

impl<W> AllPairsResult<W>
where
    W: PrimInt + Signed + Debug,
{
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Minimum path cost from `i` to `j`; `None` means unreachable
    pub fn distance(&self, i: usize, j: usize) -> Result<Option<W>> {
        self.check_vertex(i)?;
        self.check_vertex(j)?;
        Ok(self.dist[i * self.vertex_count + j])
    }

    /// Reconstructs one concrete shortest path from `i` to `j` as a vertex
    /// sequence, by walking the predecessor matrix backwards from `j`.
    ///
    /// Ties between equal-cost paths are broken by whichever relaxation
    /// wrote the predecessor last; the result is not guaranteed to be the
    /// lexicographically smallest path.
    pub fn path(&self, i: usize, j: usize) -> Result<Vec<usize>> {
        self.check_vertex(i)?;
        self.check_vertex(j)?;

        if i == j {
            return Ok(vec![i]);
        }

        let n = self.vertex_count;
        if self.dist[i * n + j].is_none() {
            return Err(Error::NoPathExists(i, j));
        }

        // Build the path in reverse order
        let mut path = vec![j];
        let mut current = j;
        while current != i {
            current = self.pred[i * n + current].ok_or(Error::NoPathExists(i, j))?;
            path.push(current);
            if path.len() > n {
                // A simple path never revisits a vertex; hitting this means
                // the predecessor chain loops.
                log::warn!("predecessor chain from {} to {} does not terminate", i, j);
                return Err(Error::NoPathExists(i, j));
            }
        }
        path.reverse();

        Ok(path)
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(Error::InvalidVertex(vertex))
        }
    }
}

/// Result of a single-source shortest path computation
#[derive(Debug, Clone)]
pub struct SingleSourceResult<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Source vertex ID
    pub source: usize,

    /// Distances from source to each vertex
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,
}

impl<W> SingleSourceResult<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Minimum path cost from the source to `target`
    pub fn distance(&self, target: usize) -> Result<Option<W>> {
        if target >= self.distances.len() {
            return Err(Error::InvalidVertex(target));
        }
        Ok(self.distances[target])
    }

    /// Reconstructs the shortest path from the source to `target`
    pub fn path(&self, target: usize) -> Result<Vec<usize>> {
        if target >= self.distances.len() {
            return Err(Error::InvalidVertex(target));
        }
        if target == self.source {
            return Ok(vec![self.source]);
        }
        if self.distances[target].is_none() {
            return Err(Error::NoPathExists(self.source, target));
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current =
                self.predecessors[current].ok_or(Error::NoPathExists(self.source, target))?;
            path.push(current);
            if path.len() > self.distances.len() {
                return Err(Error::NoPathExists(self.source, target));
            }
        }
        path.reverse();

        Ok(path)
    }
}
