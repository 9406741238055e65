use num_traits::{CheckedAdd, PrimInt, Signed, Zero};
use rayon::prelude::*;
use std::fmt::Debug;

use crate::algorithm::results::AllPairsResult;
use crate::graph::dense::DenseGraph;
use crate::graph::traits::Graph;
use crate::{Error, Result};

/// Vertex count at which the inner loops switch to rayon
const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// All-pairs Floyd-Warshall relaxation with predecessor maintenance.
///
/// Runs in O(V^3) time and O(V^2) space with no early termination. The
/// outer loop over the intermediate vertex `k` is load-bearing: after the
/// k-th iteration every distance is optimal over paths whose intermediates
/// are drawn from `{0..k}`. The two inner loops carry no such ordering
/// constraint, so above a configurable vertex threshold they run
/// row-parallel per fixed `k`.
#[derive(Debug, Clone)]
pub struct FloydWarshall {
    parallel_threshold: usize,
}

impl Default for FloydWarshall {
    fn default() -> Self {
        FloydWarshall {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl FloydWarshall {
    /// Creates a new instance with the default parallelism threshold
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the vertex count at which the inner loops run on rayon.
    /// `usize::MAX` forces sequential execution, `0` always-parallel.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Relaxes every ordered pair of the graph, producing finalized distance
    /// and predecessor matrices.
    ///
    /// Returns `NegativeCycleDetected` when any diagonal distance goes
    /// negative; no result is exposed in that case since every distance
    /// reachable through the cycle is meaningless.
    pub fn run<W>(&self, graph: &DenseGraph<W>) -> Result<AllPairsResult<W>>
    where
        W: PrimInt + Signed + CheckedAdd + Debug + Send + Sync,
    {
        let n = graph.vertex_count();
        let (seed_dist, seed_pred) = graph.matrices();
        let mut dist = seed_dist.to_vec();
        let mut pred = seed_pred.to_vec();

        if n == 0 {
            return Ok(AllPairsResult {
                vertex_count: 0,
                dist,
                pred,
            });
        }

        // A non-negative self-loop edge never beats the empty path, so the
        // diagonal is pinned back to zero before relaxing. Negative
        // self-loops stay: they are one-vertex negative cycles and must
        // survive until the diagonal scan.
        for i in 0..n {
            let idx = i * n + i;
            if dist[idx].map_or(true, |d| d > W::zero()) {
                dist[idx] = Some(W::zero());
                pred[idx] = None;
            }
        }

        let parallel = n >= self.parallel_threshold;
        log::debug!(
            "relaxing {} vertices, {} edges (parallel: {})",
            n,
            graph.edge_count(),
            parallel
        );

        for k in 0..n {
            if parallel {
                relax_round_parallel(&mut dist, &mut pred, n, k);
            } else {
                relax_round(&mut dist, &mut pred, n, k);
            }
        }

        // Any negative diagonal entry means some cycle through that vertex
        // has negative total weight.
        for i in 0..n {
            if dist[i * n + i].map_or(false, |d| d < W::zero()) {
                log::warn!("negative cycle through vertex {}, result withheld", i);
                return Err(Error::NegativeCycleDetected(i));
            }
        }

        Ok(AllPairsResult {
            vertex_count: n,
            dist,
            pred,
        })
    }
}

/// One sequential k-round: allow vertex `k` as an intermediate hop for
/// every ordered pair.
fn relax_round<W>(dist: &mut [Option<W>], pred: &mut [Option<usize>], n: usize, k: usize)
where
    W: PrimInt + Signed + CheckedAdd + Debug,
{
    for i in 0..n {
        // Both legs must be finite before any addition happens; an
        // infinity sentinel never participates in arithmetic, and
        // checked_add keeps wraparound from posing as a shortcut.
        let dist_ik = match dist[i * n + k] {
            Some(d) => d,
            None => continue,
        };
        for j in 0..n {
            let dist_kj = match dist[k * n + j] {
                Some(d) => d,
                None => continue,
            };
            let candidate = match dist_ik.checked_add(&dist_kj) {
                Some(c) => c,
                None => continue,
            };
            let idx = i * n + j;
            if dist[idx].map_or(true, |current| candidate < current) {
                dist[idx] = Some(candidate);
                // Adopt k's final hop towards j, chaining through k
                pred[idx] = pred[k * n + j];
            }
        }
    }
}

/// One k-round with the row loop on rayon. Row `k` is snapshotted first so
/// every worker reads the same pre-round values while rows are mutated in
/// place; the round completes fully before `k + 1` starts (the outer loop
/// in `run` is the barrier).
fn relax_round_parallel<W>(dist: &mut [Option<W>], pred: &mut [Option<usize>], n: usize, k: usize)
where
    W: PrimInt + Signed + CheckedAdd + Debug + Send + Sync,
{
    let row_k_dist: Vec<Option<W>> = dist[k * n..(k + 1) * n].to_vec();
    let row_k_pred: Vec<Option<usize>> = pred[k * n..(k + 1) * n].to_vec();

    dist.par_chunks_mut(n)
        .zip(pred.par_chunks_mut(n))
        .for_each(|(dist_row, pred_row)| {
            let dist_ik = match dist_row[k] {
                Some(d) => d,
                None => return,
            };
            for j in 0..n {
                let dist_kj = match row_k_dist[j] {
                    Some(d) => d,
                    None => continue,
                };
                let candidate = match dist_ik.checked_add(&dist_kj) {
                    Some(c) => c,
                    None => continue,
                };
                if dist_row[j].map_or(true, |current| candidate < current) {
                    dist_row[j] = Some(candidate);
                    pred_row[j] = row_k_pred[j];
                }
            }
        });
}
