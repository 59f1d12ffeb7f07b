use log::warn;

use crate::graph::{EdgeWeight, Graph};
use crate::Result;

/// Counters collected while a query runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries inserted into the frontier
    pub pushes: usize,
    /// Entries removed from the frontier
    pub pops: usize,
    /// Popped entries whose priority had already been improved upon
    pub stale_pops: usize,
    /// Successful relaxations (distance improvements)
    pub relaxations: usize,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: EdgeWeight,
{
    /// Distances from source to each vertex, `None` when unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,

    /// Frontier and relaxation counters for this query
    pub stats: SearchStats,
}

impl<W> ShortestPathResult<W>
where
    W: EdgeWeight,
{
    /// Number of vertices covered by the result
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Follows predecessor links from `target` until a vertex without one
    ///
    /// The chain is target first. For the source or an unreachable vertex it
    /// holds just that vertex; for an unknown vertex it is empty.
    pub fn chain_from(&self, target: usize) -> Vec<usize> {
        if target >= self.vertex_count() {
            return Vec::new();
        }

        let mut chain = vec![target];
        let mut current = target;
        while let Some(pred) = self.predecessor(current) {
            if chain.len() > self.vertex_count() {
                warn!("Predecessor chain from vertex {} does not terminate", target);
                break;
            }
            chain.push(pred);
            current = pred;
        }
        chain
    }

    /// Shortest path from the source to `target`, source first
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = self.chain_from(target);
        if path.last() != Some(&self.source) {
            warn!("Predecessor chain from vertex {} does not reach the source", target);
            return None;
        }
        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: EdgeWeight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target)
    }
}
