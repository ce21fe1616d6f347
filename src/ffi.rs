//! Stable C ABI. Status codes: 0 success, -1 empty graph, -2 vertex out of
//! range, -3 null pointer, -4 negative weight, -5 path cost does not fit
//! below the `i32::MAX` sentinel.

use core::slice;

use crate::config::EngineConfig;
use crate::engine::shortest_path;
use crate::graph::Graph;
use crate::{narrow_cost, Weight, UNREACHABLE};

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinCostResultInfo {
    pub relaxations: u64,           // improving relaxations
    pub synthetic_relaxations: u64, // improving relaxations over unit edges
    pub suppressed_pairs: u64,      // pairs skipped because of a reverse edge
    pub settled: u32,               // vertices finalized
    pub error_code: i32,            // 0 == success
}

const ERR_NULL: i32 = -3;

#[inline(always)]
unsafe fn as_slice<'a, T>(ptr: *const T, len: usize) -> &'a [T] {
    if len == 0 { &[] } else { slice::from_raw_parts(ptr, len) }
}

/// Runs the query over `edge_count` 1-based edges and writes the cost (or
/// `i32::MAX` when unreachable) to `out_cost`. The input is validated first;
/// on any negative status `out_cost` is left untouched.
///
/// # Safety
/// `from`, `to` and `weight` must each point to `edge_count` readable values
/// (they may be null when `edge_count` is 0). `out_cost` must be writable;
/// `info` may be null.
#[no_mangle]
pub unsafe extern "C" fn min_cost_run(
    node_count: u32,
    from: *const u32,
    to: *const u32,
    weight: *const i32,
    edge_count: u32,
    out_cost: *mut i32,
    info: *mut MinCostResultInfo,
) -> i32 {
    let report = |code: i32, result: MinCostResultInfo| {
        if !info.is_null() { *info = MinCostResultInfo { error_code: code, ..result }; }
        code
    };
    let m = edge_count as usize;
    if out_cost.is_null() || (m > 0 && (from.is_null() || to.is_null() || weight.is_null())) {
        return report(ERR_NULL, MinCostResultInfo::default());
    }
    let from: Vec<usize> = as_slice(from, m).iter().map(|&v| v as usize).collect();
    let to: Vec<usize> = as_slice(to, m).iter().map(|&v| v as usize).collect();
    let weight: &[Weight] = as_slice(weight, m);

    let graph = match Graph::try_from_edges(node_count as usize, &from, &to, weight) {
        Ok(g) => g,
        Err(e) => {
            log::debug!("min_cost_run rejected input: {e}");
            return report(e.code(), MinCostResultInfo::default());
        }
    };
    let sp = shortest_path(&graph, graph.node_count() - 1, &EngineConfig::default());
    let result = MinCostResultInfo {
        relaxations: sp.stats.relaxations,
        synthetic_relaxations: sp.stats.synthetic_relaxations,
        suppressed_pairs: sp.stats.suppressed_pairs,
        settled: sp.stats.settled,
        error_code: 0,
    };
    match sp.distance.map(narrow_cost).transpose() {
        Ok(cost) => { *out_cost = cost.unwrap_or(UNREACHABLE); report(0, result) }
        Err(e) => {
            log::debug!("min_cost_run: {e}");
            report(e.code(), result)
        }
    }
}

#[no_mangle]
pub extern "C" fn min_cost_version() -> u32 { 2 } // status -5 added
