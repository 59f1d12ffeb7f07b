use log::debug;

use crate::graph::config::GraphLimits;
use crate::graph::traits::{EdgeWeight, Graph};
use crate::{Error, Result};

/// An immutable directed graph stored as a dense adjacency matrix
///
/// Missing edges are `None`; there is no sentinel weight. All weights are
/// checked to be non-negative and finite when the graph is built, so a
/// constructed `MatrixGraph` is always valid input for Dijkstra.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGraph<W>
where
    W: EdgeWeight,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Row-major weights: `weights[from * vertex_count + to]`
    weights: Vec<Option<W>>,

    /// Number of present edges
    edge_count: usize,
}

impl<W> MatrixGraph<W>
where
    W: EdgeWeight,
{
    /// Builds a graph from a square matrix using the default limits
    pub fn from_matrix(rows: Vec<Vec<Option<W>>>) -> Result<Self> {
        Self::from_matrix_with_limits(rows, &GraphLimits::default())
    }

    /// Builds a graph from a square matrix where `rows[from][to]` is the edge weight
    pub fn from_matrix_with_limits(rows: Vec<Vec<Option<W>>>, limits: &GraphLimits) -> Result<Self> {
        let n = rows.len();
        limits.check_vertices(n)?;

        let mut weights = Vec::with_capacity(cell_count(n)?);
        let mut edge_count = 0;

        for (from, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(Error::MalformedGraph(format!(
                    "matrix row {} has {} entries, expected {}",
                    from,
                    row.len(),
                    n
                )));
            }

            for (to, weight) in row.into_iter().enumerate() {
                if let Some(weight) = weight {
                    validate_weight(from, to, weight)?;
                    edge_count += 1;
                }
                weights.push(weight);
            }
        }

        limits.check_edges(edge_count)?;
        debug!("Built matrix graph with {} vertices and {} edges", n, edge_count);

        Ok(MatrixGraph {
            vertex_count: n,
            weights,
            edge_count,
        })
    }

    /// Builds a graph from an edge list using the default limits
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        Self::from_edges_with_limits(vertex_count, edges, &GraphLimits::default())
    }

    /// Builds a graph from `(from, to, weight)` triples
    ///
    /// A repeated `(from, to)` pair keeps the weight listed last.
    pub fn from_edges_with_limits<I>(vertex_count: usize, edges: I, limits: &GraphLimits) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let cells = cell_count(vertex_count)?;
        limits.check_vertices(vertex_count)?;

        let mut weights = vec![None; cells];
        let mut edge_count = 0;

        for (from, to, weight) in edges {
            if from >= vertex_count || to >= vertex_count {
                return Err(Error::InvalidEdge(from, to));
            }
            validate_weight(from, to, weight)?;

            let slot = &mut weights[from * vertex_count + to];
            if slot.is_none() {
                edge_count += 1;
                limits.check_edges(edge_count)?;
            }
            *slot = Some(weight);
        }

        debug!(
            "Built matrix graph with {} vertices and {} edges",
            vertex_count, edge_count
        );

        Ok(MatrixGraph {
            vertex_count,
            weights,
            edge_count,
        })
    }

    fn row(&self, vertex: usize) -> &[Option<W>] {
        let start = vertex * self.vertex_count;
        &self.weights[start..start + self.vertex_count]
    }
}

fn cell_count(vertex_count: usize) -> Result<usize> {
    vertex_count.checked_mul(vertex_count).ok_or_else(|| {
        Error::LimitExceeded(format!("{} vertices do not fit in a matrix", vertex_count))
    })
}

fn validate_weight<W: EdgeWeight>(from: usize, to: usize, weight: W) -> Result<()> {
    if weight.is_negative() {
        return Err(Error::NegativeWeight(from, to));
    }
    if !weight.is_finite() {
        return Err(Error::MalformedGraph(format!(
            "edge {} -> {} has non-finite weight {:?}",
            from, to, weight
        )));
    }
    Ok(())
}

impl<W> Graph<W> for MatrixGraph<W>
where
    W: EdgeWeight,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if !self.has_vertex(vertex) {
            return Box::new(std::iter::empty());
        }

        Box::new(
            self.row(vertex)
                .iter()
                .enumerate()
                .filter_map(|(to, weight)| weight.map(|w| (to, w))),
        )
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return None;
        }
        self.weights[from * self.vertex_count + to]
    }
}
