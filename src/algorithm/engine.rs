use crate::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{EdgeWeight, Graph, GraphConfig, MatrixGraph};
use crate::Result;

/// Owns an immutable graph and answers single-source queries against it
///
/// Each query allocates its own distance, predecessor and frontier state, so
/// queries never influence each other and a shared `&ShortestPathEngine` can
/// be used from several threads.
#[derive(Debug, Clone)]
pub struct ShortestPathEngine<W>
where
    W: EdgeWeight,
{
    graph: MatrixGraph<W>,
    algorithm: Dijkstra,
}

impl<W> ShortestPathEngine<W>
where
    W: EdgeWeight,
{
    /// Creates an engine running the default `Dijkstra` over `graph`
    pub fn new(graph: MatrixGraph<W>) -> Self {
        ShortestPathEngine {
            graph,
            algorithm: Dijkstra::new(),
        }
    }

    /// Replaces the algorithm configuration, e.g. its stale entry policy
    pub fn with_algorithm(mut self, algorithm: Dijkstra) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Returns the graph queries run against
    pub fn graph(&self) -> &MatrixGraph<W> {
        &self.graph
    }

    /// Returns the number of vertices in the graph
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Distances and predecessors from `source` to every vertex
    pub fn compute_shortest_paths(&self, source: usize) -> Result<ShortestPathResult<W>> {
        self.algorithm.compute_shortest_paths(&self.graph, source)
    }
}

impl ShortestPathEngine<u64> {
    /// Builds the graph described by `config` and wraps it in an engine
    pub fn from_config(config: &GraphConfig) -> Result<Self> {
        Ok(Self::new(config.build()?))
    }
}
