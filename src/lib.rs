//! Dijkstra Paths - single-source shortest paths over a small immutable graph
//!
//! The library computes a shortest path tree with a priority-queue Dijkstra that
//! tolerates stale frontier entries instead of supporting decrease-key, and
//! provides helpers to print the resulting predecessor chains.
//!
//! Edge weights must be non-negative; this is enforced when the graph is built.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod printer;

pub use algorithm::{
    dijkstra::{Dijkstra, StaleEntryPolicy},
    engine::ShortestPathEngine,
    SearchStats, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{GraphConfig, GraphLimits, MatrixGraph};
pub use printer::{NodeLabels, PathPrinter};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid source vertex {0}: graph has {1} vertices")]
    InvalidSource(usize, usize),

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative edge weight on edge {0} -> {1}")]
    NegativeWeight(usize, usize),

    #[error("Malformed graph: {0}")]
    MalformedGraph(String),

    #[error("Graph limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("Vertex {1} is only reachable through edge {0} -> {1} and its distance overflows")]
    DistanceOverflow(usize, usize),

    #[error("Unknown node label: {0}")]
    UnknownLabel(String),

    #[error("Invalid graph configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
