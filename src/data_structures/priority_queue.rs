use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::algorithm::SearchStats;
use crate::graph::EdgeWeight;

/// A vertex taken off the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry<W> {
    pub vertex: usize,
    /// Distance the vertex had when it was queued
    pub priority: W,
    /// True when the vertex has since been reached by a shorter path
    pub stale: bool,
}

/// Min-priority frontier for a single Dijkstra query
///
/// Entries are ordered by `(distance, vertex)`, so equal distances pop the
/// smaller vertex first. There is no decrease-key: an improved vertex is
/// queued again and the older entry is reported as stale when it surfaces.
#[derive(Debug)]
pub struct Frontier<W>
where
    W: EdgeWeight,
{
    heap: BinaryHeap<Reverse<(W, usize)>>,
    pushes: usize,
    pops: usize,
    stale_pops: usize,
}

impl<W> Frontier<W>
where
    W: EdgeWeight,
{
    /// Creates an empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            pushes: 0,
            pops: 0,
            stale_pops: 0,
        }
    }

    /// Creates a frontier holding only the source at distance zero
    pub fn with_source(source: usize) -> Self {
        let mut frontier = Self::new();
        frontier.push(source, W::zero());
        frontier
    }

    /// Returns true if no entries are queued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Queues `vertex` at its newly improved `distance`
    pub fn push(&mut self, vertex: usize, distance: W) {
        self.heap.push(Reverse((distance, vertex)));
        self.pushes += 1;
    }

    /// Removes the closest entry and checks it against the current distances
    ///
    /// An entry is stale when `distances[vertex]` is smaller than the
    /// distance it was queued with.
    pub fn pop(&mut self, distances: &[Option<W>]) -> Option<FrontierEntry<W>> {
        let Reverse((priority, vertex)) = self.heap.pop()?;
        self.pops += 1;

        let stale = match distances.get(vertex).copied().flatten() {
            Some(current) => current < priority,
            None => false,
        };
        if stale {
            self.stale_pops += 1;
        }

        Some(FrontierEntry { vertex, priority, stale })
    }

    /// Copies the push and pop counters into `stats`
    pub fn record(&self, stats: &mut SearchStats) {
        stats.pushes = self.pushes;
        stats.pops = self.pops;
        stats.stale_pops = self.stale_pops;
    }
}

impl<W> Default for Frontier<W>
where
    W: EdgeWeight,
{
    fn default() -> Self {
        Self::new()
    }
}
