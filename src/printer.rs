//! Presentation of a shortest path tree as one predecessor chain per node.

use std::collections::HashMap;
use std::io::{self, Write};

use crate::algorithm::ShortestPathResult;
use crate::graph::EdgeWeight;
use crate::{Error, Result};

/// Display names for vertices, indexed by vertex ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLabels {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl NodeLabels {
    /// Uses the given labels; they must be non-empty and unique
    pub fn new(labels: Vec<String>) -> Result<Self> {
        let mut index = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if label.is_empty() {
                return Err(Error::MalformedGraph(format!("node {} has an empty label", i)));
            }
            if index.insert(label.clone(), i).is_some() {
                return Err(Error::MalformedGraph(format!("duplicate node label {}", label)));
            }
        }
        Ok(NodeLabels { labels, index })
    }

    /// Spreadsheet-style labels: A..Z, then AA, AB, ...
    pub fn alphabetic(count: usize) -> Self {
        let labels: Vec<String> = (0..count).map(alphabetic_label).collect();
        let index = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), i))
            .collect();
        NodeLabels { labels, index }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, vertex: usize) -> Option<&str> {
        self.labels.get(vertex).map(String::as_str)
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Label for `vertex`, or its index when no label covers it
    pub fn display(&self, vertex: usize) -> String {
        match self.get(vertex) {
            Some(label) => label.to_string(),
            None => vertex.to_string(),
        }
    }
}

fn alphabetic_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = index + 1;
    while remaining > 0 {
        remaining -= 1;
        letters.push(b'A' + (remaining % 26) as u8);
        remaining /= 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Writes predecessor chains, target first, e.g. `H <- B <- A`
#[derive(Debug, Clone)]
pub struct PathPrinter {
    labels: NodeLabels,
    separator: String,
    show_distances: bool,
}

impl PathPrinter {
    pub fn new(labels: NodeLabels) -> Self {
        PathPrinter {
            labels,
            separator: " <- ".to_string(),
            show_distances: false,
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Appends the distance (or "unreachable") to every line
    pub fn with_distances(mut self, show: bool) -> Self {
        self.show_distances = show;
        self
    }

    pub fn labels(&self) -> &NodeLabels {
        &self.labels
    }

    /// Formats the chain for a single vertex
    pub fn format_chain<W: EdgeWeight>(&self, result: &ShortestPathResult<W>, vertex: usize) -> String {
        let mut line = result
            .chain_from(vertex)
            .into_iter()
            .map(|v| self.labels.display(v))
            .collect::<Vec<_>>()
            .join(&self.separator);

        if self.show_distances {
            match result.distance(vertex) {
                Some(distance) => line.push_str(&format!("  (distance {:?})", distance)),
                None => line.push_str("  (unreachable)"),
            }
        }
        line
    }

    /// One line per vertex in index order
    pub fn format_all<W: EdgeWeight>(&self, result: &ShortestPathResult<W>) -> Vec<String> {
        (0..result.vertex_count())
            .map(|v| self.format_chain(result, v))
            .collect()
    }

    pub fn write_all<W: EdgeWeight, O: Write>(&self, result: &ShortestPathResult<W>, out: &mut O) -> io::Result<()> {
        for line in self.format_all(result) {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }
}
