use log::{debug, trace};

use crate::algorithm::{SearchStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::{EdgeWeight, Graph};
use crate::{Error, Result};

/// What to do with a frontier entry whose distance has since been improved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StaleEntryPolicy {
    /// Discard the entry without scanning its neighbours
    #[default]
    Skip,
    /// Scan the neighbours again using the current distance. Finds nothing
    /// new, only costs extra edge scans.
    Rescan,
}

/// Classic Dijkstra's algorithm with lazy deletion instead of decrease-key
///
/// Vertices may sit in the frontier more than once. Ties between equal
/// distances are broken by the smaller vertex index, so the order in which
/// vertices are settled is deterministic.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    stale_policy: StaleEntryPolicy,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Sets how superseded frontier entries are handled
    pub fn with_stale_policy(mut self, policy: StaleEntryPolicy) -> Self {
        self.stale_policy = policy;
        self
    }

    /// Returns the configured stale entry policy
    pub fn stale_policy(&self) -> StaleEntryPolicy {
        self.stale_policy
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: EdgeWeight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidSource(source, graph.vertex_count()));
        }

        let n = graph.vertex_count();

        // Initialize distances and predecessors
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut stats = SearchStats::default();

        // Edge whose sum overflowed, kept per target until the target is reached another way
        let mut overflowed: Vec<Option<usize>> = vec![None; n];

        // Distance to source is 0
        distances[source] = Some(W::zero());

        let mut frontier = Frontier::with_source(source);

        while let Some(entry) = frontier.pop(&distances) {
            let u = entry.vertex;
            if entry.stale && self.stale_policy == StaleEntryPolicy::Skip {
                trace!("Skipping stale entry for vertex {} at {:?}", u, entry.priority);
                continue;
            }

            // Every queued vertex has a recorded distance
            let Some(dist_u) = distances[u] else { continue };

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(u) {
                let Some(candidate) = dist_u.checked_extend(weight) else {
                    // An unrepresentable sum never improves a recorded distance
                    if distances[v].is_none() && overflowed[v].is_none() {
                        overflowed[v] = Some(u);
                    }
                    continue;
                };

                let should_update = match distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };

                if should_update {
                    trace!("Relaxed {} -> {}: {:?}", u, v, candidate);
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    frontier.push(v, candidate);
                    stats.relaxations += 1;
                }
            }
        }

        frontier.record(&mut stats);

        // Reachable, but only through a path longer than `W` can represent
        for (v, from) in overflowed.iter().enumerate() {
            if let (Some(u), None) = (from, distances[v]) {
                return Err(Error::DistanceOverflow(*u, v));
            }
        }

        debug!(
            "Dijkstra from {}: {} of {} vertices reachable, {:?}",
            source,
            distances.iter().filter(|d| d.is_some()).count(),
            n,
            stats
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
            stats,
        })
    }
}
