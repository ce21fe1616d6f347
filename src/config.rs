//! Engine knobs. Defaults reproduce the plain query; the environment can
//! override them per process:
//!  - `MINCOST_FRONTIER` = `heap` | `ordered`
//!  - `MINCOST_SCOPE` = `target` | `graph`
//! Unknown values fall back to the default.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const FRONTIER_ENV: &str = "MINCOST_FRONTIER";
pub const SCOPE_ENV: &str = "MINCOST_SCOPE";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown value {value:?} for {key}")]
pub struct ConfigError { pub key: &'static str, pub value: String }

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierKind {
    #[default]
    Heap,
    Ordered,
}

impl FromStr for FrontierKind {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heap" => Ok(FrontierKind::Heap),
            "ordered" | "btree" => Ok(FrontierKind::Ordered),
            _ => Err(ConfigError { key: FRONTIER_ENV, value: s.to_string() }),
        }
    }
}

/// Which vertices the engine considers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetScope {
    /// Vertices `0..=target` only. Exact when the target is the last vertex.
    #[default]
    UpToTarget,
    /// Every vertex of the graph, so detours through higher vertices count.
    WholeGraph,
}

impl FromStr for TargetScope {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "target" | "up_to_target" => Ok(TargetScope::UpToTarget),
            "graph" | "whole_graph" => Ok(TargetScope::WholeGraph),
            _ => Err(ConfigError { key: SCOPE_ENV, value: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub frontier: FrontierKind,
    pub scope: TargetScope,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self {
            frontier: env_knob(FRONTIER_ENV).unwrap_or_default(),
            scope: env_knob(SCOPE_ENV).unwrap_or_default(),
        }
    }

    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self { self.frontier = frontier; self }
    pub fn with_scope(mut self, scope: TargetScope) -> Self { self.scope = scope; self }
}

fn env_knob<T: FromStr<Err = ConfigError>>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(e) => { log::warn!("{e}, using default"); None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_knob_values() {
        assert_eq!("heap".parse::<FrontierKind>(), Ok(FrontierKind::Heap));
        assert_eq!(" Ordered ".parse::<FrontierKind>(), Ok(FrontierKind::Ordered));
        assert_eq!("graph".parse::<TargetScope>(), Ok(TargetScope::WholeGraph));
        assert_eq!("up_to_target".parse::<TargetScope>(), Ok(TargetScope::UpToTarget));
        let err = "fib".parse::<FrontierKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown value \"fib\" for MINCOST_FRONTIER");
    }

    #[test]
    fn json_round_trip_and_defaults() {
        let cfg = EngineConfig::default().with_frontier(FrontierKind::Ordered).with_scope(TargetScope::WholeGraph);
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(json, r#"{"frontier":"ordered","scope":"whole_graph"}"#);
        assert_eq!(serde_json::from_str::<EngineConfig>(&json).unwrap(), cfg);
        let partial: EngineConfig = serde_json::from_str(r#"{"frontier":"ordered"}"#).unwrap();
        assert_eq!(partial.scope, TargetScope::UpToTarget);
    }
}
