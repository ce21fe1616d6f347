//! Minimum-cost path from vertex 1 to vertex N in a directed weighted graph
//! where any ordered pair without an explicit edge gets an implicit edge of
//! weight 1, unless the reverse pair has an explicit edge.
//! Entry points:
//!  - `min_cost`: unchecked, returns `UNREACHABLE` (`i32::MAX`) when no path exists
//!  - `try_min_cost`: validates the edge arrays first
//!  - `min_cost_run`: C ABI (extern), status code plus `MinCostResultInfo`

use thiserror::Error;

pub mod config;
pub mod engine;
pub mod ffi;
pub mod frontier;
pub mod graph;

pub use config::{EngineConfig, FrontierKind, TargetScope};
pub use engine::{shortest_path, Distance, RunStats, ShortestPath, INFINITY};
pub use ffi::{min_cost_run, min_cost_version, MinCostResultInfo};
pub use graph::{EdgeList, Graph, GraphError, Hop, SYNTHETIC_WEIGHT};

pub type Weight = i32;

/// Returned by [`min_cost`] when vertex N cannot be reached from vertex 1.
pub const UNREACHABLE: Weight = Weight::MAX;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MinCostError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("path cost {0} does not fit in a 32-bit weight")]
    Overflow(Distance),
    #[error("path cost {} collides with the unreachable sentinel", UNREACHABLE)]
    SentinelCollision,
}

impl MinCostError {
    /// Negative status code reported through the C ABI.
    pub fn code(&self) -> i32 {
        match self {
            MinCostError::Graph(e) => e.code(),
            MinCostError::Overflow(_) | MinCostError::SentinelCollision => -5,
        }
    }
}

/// Narrows an engine distance to the boundary type. Costs that overflow `i32`
/// or land exactly on `UNREACHABLE` are rejected.
pub fn narrow_cost(distance: Distance) -> Result<Weight, MinCostError> {
    match Weight::try_from(distance) {
        Ok(UNREACHABLE) => Err(MinCostError::SentinelCollision),
        Ok(w) => Ok(w),
        Err(_) => Err(MinCostError::Overflow(distance)),
    }
}

/// Cost of the cheapest path from vertex 1 to vertex `node_count` (1-based
/// input arrays). Input is trusted: lengths must match, vertices must lie in
/// `1..=node_count`, and the answer must fit in `i32`.
pub fn min_cost(node_count: usize, from: &[usize], to: &[usize], weight: &[Weight]) -> Weight {
    let graph = Graph::from_edges(node_count, from, to, weight);
    shortest_path(&graph, node_count - 1, &EngineConfig::default()).cost()
}

/// Checked [`min_cost`]; `Ok(None)` when no path exists.
pub fn try_min_cost(node_count: usize, from: &[usize], to: &[usize], weight: &[Weight]) -> Result<Option<Weight>, MinCostError> {
    let graph = Graph::try_from_edges(node_count, from, to, weight)?;
    shortest_path(&graph, node_count - 1, &EngineConfig::default()).distance.map(narrow_cost).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_entry_reports_reachability() {
        assert_eq!(try_min_cost(2, &[1], &[2], &[3]), Ok(Some(3)));
        assert_eq!(try_min_cost(2, &[2], &[1], &[3]), Ok(None));
        assert_eq!(try_min_cost(0, &[], &[], &[]), Err(MinCostError::Graph(GraphError::EmptyGraph)));
    }

    #[test]
    fn checked_entry_detects_overflow() {
        let w = Weight::MAX / 2 + 1;
        let d = 2 * Distance::from(w);
        assert_eq!(try_min_cost(3, &[1, 2, 3], &[2, 3, 1], &[w, w, w]), Err(MinCostError::Overflow(d)));
        assert_eq!(MinCostError::Overflow(d).code(), -5);
    }

    #[test]
    fn cost_equal_to_sentinel_is_its_own_error() {
        let err = try_min_cost(2, &[1], &[2], &[Weight::MAX]).unwrap_err();
        assert_eq!(err, MinCostError::SentinelCollision);
        assert_eq!(err.to_string(), "path cost 2147483647 collides with the unreachable sentinel");
        assert_eq!(narrow_cost(Distance::from(Weight::MAX) - 1), Ok(Weight::MAX - 1));
    }
}
