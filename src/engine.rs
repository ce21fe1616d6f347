//! Dijkstra over the implicit graph: explicit edges, plus a unit edge for every
//! ordered pair that has no explicit edge in either direction.
//!
//! Every iteration relaxes all vertices in scope from the current vertex, then
//! settles the frontier minimum by `(distance, vertex)`. The loop runs exactly
//! `vertex_count - 1` times.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::{EngineConfig, FrontierKind, TargetScope};
use crate::frontier::{Frontier, FrontierStats, IndexedHeap, OrderedFrontier};
use crate::graph::{Graph, Hop, SYNTHETIC_WEIGHT};
use crate::{Weight, UNREACHABLE};

/// Sums of `i32` weights, kept wide so the sentinel never takes part in
/// arithmetic.
pub type Distance = i64;
pub const INFINITY: Distance = Distance::MAX;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub relaxations: u64,           // improving relaxations
    pub synthetic_relaxations: u64, // of which over a synthetic edge
    pub suppressed_pairs: u64,      // hops skipped because only the reverse edge exists
    pub settled: u32,
    pub frontier: FrontierStats,
}

#[derive(Debug, Clone)]
pub struct ShortestPath {
    pub target: usize,
    pub distance: Option<Distance>,
    /// Vertex each vertex was last improved from; `None` for the source and
    /// for unreached vertices.
    pub predecessors: Vec<Option<usize>>,
    /// Vertices in the order they were finalized, starting with the source.
    pub settled_order: Vec<usize>,
    pub stats: RunStats,
}

impl ShortestPath {
    /// Distance narrowed to the boundary type, `UNREACHABLE` when no path
    /// exists. Keeping real costs below `i32::MAX` is up to the caller.
    pub fn cost(&self) -> Weight {
        match self.distance {
            Some(d) => d as Weight,
            None => UNREACHABLE,
        }
    }

    /// 0-based vertices from the source to the target.
    pub fn path(&self) -> Option<Vec<usize>> {
        self.distance?;
        let mut path = vec![self.target];
        let mut at = self.target;
        while let Some(prev) = self.predecessors[at] {
            path.push(prev);
            at = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Minimum cost from vertex 0 to `target` (0-based).
pub fn shortest_path(graph: &Graph, target: usize, config: &EngineConfig) -> ShortestPath {
    let vertex_count = match config.scope {
        TargetScope::UpToTarget => target + 1,
        TargetScope::WholeGraph => graph.node_count(),
    };
    debug!("shortest path 0 -> {target} over {vertex_count} vertices ({:?} frontier)", config.frontier);
    let out = match config.frontier {
        FrontierKind::Heap => run(graph, target, vertex_count, IndexedHeap::with_vertices(vertex_count)),
        FrontierKind::Ordered => run(graph, target, vertex_count, OrderedFrontier::with_vertices(vertex_count)),
    };
    debug!("distance={:?} relaxations={} synthetic={} suppressed={}", out.distance, out.stats.relaxations, out.stats.synthetic_relaxations, out.stats.suppressed_pairs);
    out
}

fn run<F: Frontier>(graph: &Graph, target: usize, vertex_count: usize, mut frontier: F) -> ShortestPath {
    let mut distance = vec![INFINITY; vertex_count];
    let mut predecessors = vec![None; vertex_count];
    let mut settled_order = Vec::with_capacity(vertex_count);
    let mut stats = RunStats::default();

    distance[0] = 0;
    for v in 1..vertex_count { frontier.push(v, INFINITY); }
    let mut current = 0;
    settled_order.push(current);
    stats.settled = 1;

    while !frontier.is_empty() {
        relax_from(graph, current, &mut distance, &mut predecessors, &mut frontier, &mut stats);
        let Some((next, dist)) = frontier.pop_min() else { break };
        trace!("settle {next} at {dist}");
        current = next;
        settled_order.push(current);
        stats.settled += 1;
    }

    stats.frontier = frontier.stats();
    let d = distance[target];
    ShortestPath { target, distance: (d != INFINITY).then_some(d), predecessors, settled_order, stats }
}

fn relax_from<F: Frontier>(
    graph: &Graph,
    current: usize,
    distance: &mut [Distance],
    predecessors: &mut [Option<usize>],
    frontier: &mut F,
    stats: &mut RunStats,
) {
    let base = distance[current];
    // Unreached vertices stay at infinity: the sentinel never enters a sum,
    // and nothing reachable is left once the frontier minimum is unreached.
    if base == INFINITY { return; }
    for i in 0..distance.len() {
        if i == current { continue; }
        let (weight, synthetic) = match graph.hop(current, i) {
            Hop::Explicit(w) => (w, false),
            Hop::Synthetic => (SYNTHETIC_WEIGHT, true),
            Hop::Suppressed => { stats.suppressed_pairs += 1; continue; }
        };
        let candidate = base + Distance::from(weight);
        if candidate < distance[i] {
            distance[i] = candidate;
            predecessors[i] = Some(current);
            frontier.reposition(i, candidate);
            stats.relaxations += 1;
            if synthetic { stats.synthetic_relaxations += 1; }
        }
    }
}
