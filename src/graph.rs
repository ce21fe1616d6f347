//! Adjacency built from the three parallel edge arrays.
//!
//! Input vertices are 1-based, the stored adjacency is 0-based. A repeated
//! `(from, to)` pair keeps the weight of its last occurrence.

use std::collections::HashMap;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::Weight;

/// Weight of the implicit edge between two vertices with no explicit edge in
/// either direction.
pub const SYNTHETIC_WEIGHT: Weight = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("graph needs at least one node")]
    EmptyGraph,
    #[error("edge arrays differ in length (from={from}, to={to}, weight={weight})")]
    LengthMismatch { from: usize, to: usize, weight: usize },
    #[error("edge {index} names vertex {vertex}, outside 1..={node_count}")]
    VertexOutOfRange { index: usize, vertex: usize, node_count: usize },
    #[error("edge {index} has negative weight {weight}")]
    NegativeWeight { index: usize, weight: Weight },
}

impl GraphError {
    /// Negative status code reported through the C ABI.
    pub fn code(&self) -> i32 {
        match self {
            GraphError::EmptyGraph => -1,
            GraphError::VertexOutOfRange { .. } => -2,
            GraphError::LengthMismatch { .. } => -3,
            GraphError::NegativeWeight { .. } => -4,
        }
    }
}

/// What a single hop `from -> to` costs under the synthetic edge rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hop {
    Explicit(Weight),
    /// No edge either way, the unit edge applies.
    Synthetic,
    /// Only the reverse edge exists, so no edge is inserted.
    Suppressed,
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<HashMap<usize, Weight>>,
}

impl Graph {
    /// Builds the adjacency without checking the input. Vertices outside
    /// `1..=node_count` panic on indexing.
    pub fn from_edges(node_count: usize, from: &[usize], to: &[usize], weight: &[Weight]) -> Self {
        let mut adjacency = vec![HashMap::new(); node_count];
        for ((&u, &v), &w) in from.iter().zip(to).zip(weight) {
            adjacency[u - 1].insert(v - 1, w);
        }
        Self { adjacency }
    }

    pub fn try_from_edges(node_count: usize, from: &[usize], to: &[usize], weight: &[Weight]) -> Result<Self, GraphError> {
        if node_count == 0 { return Err(GraphError::EmptyGraph); }
        if from.len() != to.len() || from.len() != weight.len() {
            return Err(GraphError::LengthMismatch { from: from.len(), to: to.len(), weight: weight.len() });
        }
        for (index, ((&u, &v), &w)) in from.iter().zip(to).zip(weight).enumerate() {
            for vertex in [u, v] {
                if vertex == 0 || vertex > node_count {
                    return Err(GraphError::VertexOutOfRange { index, vertex, node_count });
                }
            }
            if w < 0 { return Err(GraphError::NegativeWeight { index, weight: w }); }
        }
        Ok(Self::from_edges(node_count, from, to, weight))
    }

    pub fn node_count(&self) -> usize { self.adjacency.len() }

    /// Distinct `(from, to)` pairs after duplicates collapsed.
    pub fn edge_count(&self) -> usize { self.adjacency.iter().map(HashMap::len).sum() }

    #[inline]
    pub fn weight(&self, from: usize, to: usize) -> Option<Weight> {
        self.adjacency.get(from)?.get(&to).copied()
    }

    #[inline]
    pub fn has_edge(&self, from: usize, to: usize) -> bool { self.weight(from, to).is_some() }

    #[inline]
    pub fn hop(&self, from: usize, to: usize) -> Hop {
        match self.weight(from, to) {
            Some(w) => Hop::Explicit(w),
            None if self.has_edge(to, from) => Hop::Suppressed,
            None => Hop::Synthetic,
        }
    }
}

/// Three parallel 1-based edge arrays, the input shape of [`crate::min_cost`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    pub from: Vec<usize>,
    pub to: Vec<usize>,
    pub weight: Vec<Weight>,
}

impl EdgeList {
    pub fn push(&mut self, from: usize, to: usize, weight: Weight) {
        self.from.push(from);
        self.to.push(to);
        self.weight.push(weight);
    }

    pub fn len(&self) -> usize { self.from.len() }
    pub fn is_empty(&self) -> bool { self.from.is_empty() }

    pub fn build(&self, node_count: usize) -> Graph {
        Graph::from_edges(node_count, &self.from, &self.to, &self.weight)
    }

    /// Path `1 -> 2 -> ... -> n` plus every back edge `i -> j` for `j < i - 1`,
    /// which leaves no pair without an edge in some direction. The cheapest
    /// route is the whole line, `(n - 1) * weight`.
    pub fn line_with_back_edges(node_count: usize, weight: Weight) -> Self {
        let mut edges = EdgeList::default();
        for i in 1..node_count { edges.push(i, i + 1, weight); }
        for i in 3..=node_count {
            for j in 1..i - 1 { edges.push(i, j, weight); }
        }
        edges
    }

    /// Seeded random edges (self loops skipped, duplicates allowed) with
    /// weights in `1..=max_weight`.
    pub fn random(node_count: usize, edge_count: usize, max_weight: Weight, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut edges = EdgeList::default();
        if node_count < 2 { return edges; }
        while edges.len() < edge_count {
            let u = rng.gen_range(1..=node_count);
            let v = rng.gen_range(1..=node_count);
            if u == v { continue; }
            edges.push(u, v, rng.gen_range(1..=max_weight.max(1)));
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_zero_based_adjacency() {
        let g = Graph::from_edges(3, &[1, 2], &[2, 3], &[5, 7]);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.weight(0, 1), Some(5));
        assert_eq!(g.weight(1, 2), Some(7));
        assert_eq!(g.weight(2, 1), None);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn duplicate_edge_keeps_last_weight() {
        let g = Graph::from_edges(2, &[1, 1, 1], &[2, 2, 2], &[9, 4, 6]);
        assert_eq!(g.weight(0, 1), Some(6));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn isolated_vertices_get_empty_entries() {
        let g = Graph::from_edges(4, &[], &[], &[]);
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn hop_classification() {
        let g = Graph::from_edges(3, &[1], &[2], &[3]);
        assert_eq!(g.hop(0, 1), Hop::Explicit(3));
        assert_eq!(g.hop(1, 0), Hop::Suppressed);
        assert_eq!(g.hop(0, 2), Hop::Synthetic);
    }

    #[test]
    fn checked_builder_rejects_bad_input() {
        assert_eq!(Graph::try_from_edges(0, &[], &[], &[]).unwrap_err(), GraphError::EmptyGraph);
        assert!(matches!(Graph::try_from_edges(2, &[1], &[2, 1], &[1]), Err(GraphError::LengthMismatch { .. })));
        assert_eq!(
            Graph::try_from_edges(2, &[1], &[3], &[1]).unwrap_err(),
            GraphError::VertexOutOfRange { index: 0, vertex: 3, node_count: 2 }
        );
        assert_eq!(
            Graph::try_from_edges(2, &[1, 2], &[2, 0], &[1, 1]).unwrap_err(),
            GraphError::VertexOutOfRange { index: 1, vertex: 0, node_count: 2 }
        );
        assert_eq!(Graph::try_from_edges(2, &[1], &[2], &[-2]).unwrap_err().code(), -4);
    }

    #[test]
    fn line_fixture_has_every_pair_covered() {
        let edges = EdgeList::line_with_back_edges(6, 10);
        assert_eq!(edges.len(), 6 * 5 / 2);
        let g = edges.build(6);
        for u in 0..6 {
            for v in 0..6 {
                if u != v { assert_ne!(g.hop(u, v), Hop::Synthetic, "{u}->{v}"); }
            }
        }
    }

    #[test]
    fn random_edges_are_seeded() {
        let a = EdgeList::random(20, 50, 9, 7);
        let b = EdgeList::random(20, 50, 9, 7);
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
        assert!(a.from.iter().zip(&a.to).all(|(u, v)| u != v));
        assert!(a.weight.iter().all(|w| (1..=9).contains(w)));
    }
}
