use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::graph::matrix::MatrixGraph;
use crate::printer::NodeLabels;
use crate::{Error, Result};

fn default_max_vertices() -> usize { GraphLimits::CEILING.max_vertices }
fn default_max_edges() -> usize { GraphLimits::CEILING.max_edges }

/// Bounds applied when a graph is constructed
///
/// Limits may be tightened per graph but never raised above
/// `GraphLimits::CEILING`, whatever a configuration file asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLimits {
    #[serde(default = "default_max_vertices")]
    pub max_vertices: usize,
    #[serde(default = "default_max_edges")]
    pub max_edges: usize,
}

impl Default for GraphLimits {
    fn default() -> Self {
        Self {
            max_vertices: default_max_vertices(),
            max_edges: default_max_edges(),
        }
    }
}

impl GraphLimits {
    /// Largest graph the crate will build
    pub const CEILING: GraphLimits = GraphLimits {
        max_vertices: 4096,
        max_edges: 1_000_000,
    };

    /// Vertex bound actually enforced
    pub fn effective_max_vertices(&self) -> usize {
        self.max_vertices.min(Self::CEILING.max_vertices)
    }

    /// Edge bound actually enforced
    pub fn effective_max_edges(&self) -> usize {
        self.max_edges.min(Self::CEILING.max_edges)
    }

    pub fn check_vertices(&self, count: usize) -> Result<()> {
        let max = self.effective_max_vertices();
        if count > max {
            return Err(Error::LimitExceeded(format!(
                "{} vertices (maximum {})",
                count, max
            )));
        }
        Ok(())
    }

    pub fn check_edges(&self, count: usize) -> Result<()> {
        let max = self.effective_max_edges();
        if count > max {
            return Err(Error::LimitExceeded(format!(
                "{} edges (maximum {})",
                count, max
            )));
        }
        Ok(())
    }
}

/// An edge endpoint, given either as a vertex index or as a node label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeRef {
    Index(usize),
    Label(String),
}

/// One directed edge in a configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub from: NodeRef,
    pub to: NodeRef,
    /// Signed so that negative weights reach validation instead of failing to parse
    pub weight: i64,
}

/// Declarative description of a graph, loadable from JSON
///
/// Exactly one of `edges` or `matrix` must be set. `node_count` may be left
/// out when `labels` or `matrix` determine it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_count: Option<usize>,

    /// Add the reverse of every edge
    #[serde(default)]
    pub symmetric: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<EdgeConfig>>,

    /// `matrix[from][to]`, `null` for no edge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<Vec<Option<i64>>>>,

    #[serde(default)]
    pub limits: GraphLimits,
}

impl GraphConfig {
    /// The eight node A..H example graph, with every edge usable in both directions
    pub fn builtin() -> Self {
        let edge = |from: &str, to: &str, weight: i64| EdgeConfig {
            from: NodeRef::Label(from.to_string()),
            to: NodeRef::Label(to.to_string()),
            weight,
        };

        GraphConfig {
            labels: Some(('A'..='H').map(String::from).collect()),
            node_count: Some(8),
            symmetric: true,
            edges: Some(vec![
                edge("A", "B", 1),
                edge("A", "C", 4),
                edge("B", "C", 2),
                edge("B", "G", 4),
                edge("B", "H", 2),
                edge("C", "D", 1),
                edge("C", "E", 3),
                edge("D", "E", 1),
                edge("D", "F", 3),
                edge("D", "G", 1),
                edge("E", "F", 1),
                edge("F", "G", 6),
                edge("G", "H", 14),
            ]),
            matrix: None,
            limits: GraphLimits::default(),
        }
    }

    /// Parses a configuration from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GraphConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading graph configuration from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Resolves the number of vertices, checking that every source of it agrees
    pub fn vertex_count(&self) -> Result<usize> {
        let candidates = [
            ("node_count", self.node_count),
            ("labels", self.labels.as_ref().map(Vec::len)),
            ("matrix", self.matrix.as_ref().map(Vec::len)),
        ];

        let mut resolved: Option<(&str, usize)> = None;
        for (name, count) in candidates {
            let Some(count) = count else { continue };
            match resolved {
                None => resolved = Some((name, count)),
                Some((first, expected)) if expected != count => {
                    return Err(Error::MalformedGraph(format!(
                        "{} gives {} nodes but {} gives {}",
                        first, expected, name, count
                    )));
                }
                Some(_) => {}
            }
        }

        resolved
            .map(|(_, count)| count)
            .ok_or_else(|| Error::MalformedGraph("node count is not specified".to_string()))
    }

    /// Labels used when printing, generated alphabetically when none are configured
    pub fn node_labels(&self) -> Result<NodeLabels> {
        match &self.labels {
            Some(labels) => NodeLabels::new(labels.clone()),
            None => {
                let n = self.vertex_count()?;
                self.limits.check_vertices(n)?;
                Ok(NodeLabels::alphabetic(n))
            }
        }
    }

    /// Finds a vertex by label, falling back to a numeric index
    pub fn resolve_node(&self, name: &str) -> Result<usize> {
        let labels = self.node_labels()?;
        if let Some(index) = labels.index_of(name) {
            return Ok(index);
        }

        match name.parse::<usize>() {
            Ok(index) if index < labels.len() => Ok(index),
            Ok(index) => Err(Error::InvalidVertex(index)),
            Err(_) => Err(Error::UnknownLabel(name.to_string())),
        }
    }

    /// Validates the configuration and builds the immutable graph
    pub fn build(&self) -> Result<MatrixGraph<u64>> {
        let n = self.vertex_count()?;
        self.limits.check_vertices(n)?;
        let labels = self.node_labels()?;

        match (&self.edges, &self.matrix) {
            (Some(edges), None) => {
                let mut triples = Vec::with_capacity(edges.len() * 2);
                // Weight already claimed by each directed pair, symmetric mode only
                let mut claimed: HashMap<(usize, usize), u64> = HashMap::new();
                for edge in edges {
                    let from = resolve_ref(&labels, &edge.from)?;
                    let to = resolve_ref(&labels, &edge.to)?;
                    let weight = non_negative(from, to, edge.weight)?;
                    triples.push((from, to, weight));
                    if self.symmetric {
                        claim(&mut claimed, from, to, weight)?;
                        if from != to {
                            claim(&mut claimed, to, from, weight)?;
                        }
                        triples.push((to, from, weight));
                    }
                }
                MatrixGraph::from_edges_with_limits(n, triples, &self.limits)
            }
            (None, Some(matrix)) => {
                let mut rows = Vec::with_capacity(n);
                for (from, row) in matrix.iter().enumerate() {
                    let mut converted = Vec::with_capacity(row.len());
                    for (to, weight) in row.iter().enumerate() {
                        converted.push(match weight {
                            Some(w) => Some(non_negative(from, to, *w)?),
                            None => None,
                        });
                    }
                    rows.push(converted);
                }
                if self.symmetric {
                    mirror(&mut rows)?;
                }
                MatrixGraph::from_matrix_with_limits(rows, &self.limits)
            }
            (Some(_), Some(_)) => Err(Error::MalformedGraph(
                "both edges and matrix are given".to_string(),
            )),
            (None, None) => Err(Error::MalformedGraph(
                "one of edges or matrix is required".to_string(),
            )),
        }
    }
}

fn resolve_ref(labels: &NodeLabels, node: &NodeRef) -> Result<usize> {
    match node {
        NodeRef::Index(index) if *index < labels.len() => Ok(*index),
        NodeRef::Index(index) => Err(Error::InvalidVertex(*index)),
        NodeRef::Label(label) => labels
            .index_of(label)
            .ok_or_else(|| Error::UnknownLabel(label.clone())),
    }
}

fn claim(claimed: &mut HashMap<(usize, usize), u64>, from: usize, to: usize, weight: u64) -> Result<()> {
    match claimed.insert((from, to), weight) {
        Some(existing) if existing != weight => Err(Error::MalformedGraph(format!(
            "symmetric edge list gives {} -> {} both {} and {}",
            from, to, existing, weight
        ))),
        _ => Ok(()),
    }
}

fn non_negative(from: usize, to: usize, weight: i64) -> Result<u64> {
    u64::try_from(weight).map_err(|_| Error::NegativeWeight(from, to))
}

/// Copies every edge onto its reverse; conflicting weights are rejected
fn mirror(rows: &mut [Vec<Option<u64>>]) -> Result<()> {
    let n = rows.len();
    for from in 0..n {
        for to in 0..rows[from].len() {
            let Some(weight) = rows[from][to] else { continue };
            let Some(reverse) = rows.get_mut(to).and_then(|row| row.get_mut(from)) else {
                // Ragged rows are reported by the matrix constructor
                continue;
            };
            match *reverse {
                None => *reverse = Some(weight),
                Some(existing) if existing != weight => {
                    return Err(Error::MalformedGraph(format!(
                        "symmetric matrix has {} for {} -> {} but {} for the reverse",
                        weight, from, to, existing
                    )));
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}
