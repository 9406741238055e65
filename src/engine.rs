use num_traits::{CheckedAdd, PrimInt, Signed};
use std::fmt::Debug;

use crate::algorithm::floyd_warshall::FloydWarshall;
use crate::algorithm::results::AllPairsResult;
use crate::graph::dense::DenseGraph;
use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};

/// Query state of the engine between mutations and relaxations
#[derive(Debug, Clone)]
enum EngineState<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Edges changed since the last successful relaxation (or none ran yet)
    Unrelaxed,
    /// Relaxation finished and queries are served from this result
    Relaxed(AllPairsResult<W>),
    /// Relaxation found a negative cycle through the recorded vertex; every
    /// distance and path is unreliable until the graph changes and a
    /// re-relaxation succeeds
    Poisoned(usize),
}

/// All-pairs shortest path engine over one dense graph.
///
/// Lifecycle per graph: construct, insert edges, relax, query distances and
/// paths any number of times. Inserting an edge after relaxing invalidates
/// the cached result; querying before a successful relaxation is an error
/// rather than a stale answer.
#[derive(Debug, Clone)]
pub struct ApspEngine<W>
where
    W: PrimInt + Signed + Debug,
{
    graph: DenseGraph<W>,
    solver: FloydWarshall,
    state: EngineState<W>,
}

impl<W> ApspEngine<W>
where
    W: PrimInt + Signed + CheckedAdd + Debug + Send + Sync,
{
    /// Creates an engine for a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        ApspEngine {
            graph: DenseGraph::new(vertex_count),
            solver: FloydWarshall::new(),
            state: EngineState::Unrelaxed,
        }
    }

    /// Replaces the solver configuration (e.g. the parallelism threshold)
    pub fn with_solver(mut self, solver: FloydWarshall) -> Self {
        self.solver = solver;
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Borrows the underlying graph (for inspection and formatting)
    pub fn graph(&self) -> &DenseGraph<W> {
        &self.graph
    }

    /// Inserts or overwrites the edge `from -> to`. Any cached relaxation
    /// result is dropped, including a poisoned one, since the offending
    /// cycle may just have been repaired.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.graph.add_edge(from, to, weight)?;
        self.state = EngineState::Unrelaxed;
        Ok(())
    }

    /// Runs the all-pairs relaxation. Idempotent: a second call without an
    /// intervening edge change reuses the finished result.
    pub fn relax_all_pairs(&mut self) -> Result<()> {
        match self.state {
            EngineState::Relaxed(_) => {
                log::debug!("relaxation already complete, reusing result");
                Ok(())
            }
            EngineState::Poisoned(vertex) => Err(Error::NegativeCycleDetected(vertex)),
            EngineState::Unrelaxed => match self.solver.run(&self.graph) {
                Ok(result) => {
                    self.state = EngineState::Relaxed(result);
                    Ok(())
                }
                Err(Error::NegativeCycleDetected(vertex)) => {
                    self.state = EngineState::Poisoned(vertex);
                    Err(Error::NegativeCycleDetected(vertex))
                }
                Err(other) => Err(other),
            },
        }
    }

    /// Minimum path cost from `i` to `j`; `None` means no finite path
    pub fn distance(&self, i: usize, j: usize) -> Result<Option<W>> {
        self.result()?.distance(i, j)
    }

    /// One concrete shortest path from `i` to `j` as a vertex sequence
    pub fn reconstruct_path(&self, i: usize, j: usize) -> Result<Vec<usize>> {
        self.result()?.path(i, j)
    }

    fn result(&self) -> Result<&AllPairsResult<W>> {
        match &self.state {
            EngineState::Relaxed(result) => Ok(result),
            EngineState::Poisoned(vertex) => Err(Error::NegativeCycleDetected(*vertex)),
            EngineState::Unrelaxed => Err(Error::NotRelaxed),
        }
    }
}
