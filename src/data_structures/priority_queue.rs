use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-oriented priority queue over (priority, vertex) pairs, backed by the
/// standard binary heap. Duplicate entries for a vertex are allowed; stale
/// ones are skipped at pop time by the caller (lazy deletion).
#[derive(Debug)]
pub struct MinQueue<V, P>
where
    V: Copy + Ord,
    P: Copy + Ord,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> MinQueue<V, P>
where
    V: Copy + Ord,
    P: Copy + Ord,
{
    /// Creates an empty queue
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts a vertex with the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes and returns the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, vertex))| (vertex, priority))
    }
}

impl<V, P> Default for MinQueue<V, P>
where
    V: Copy + Ord,
    P: Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
