//! The empowerment measure: bounded-depth reachability, counted in bits.
//!
//! For a start node and a step bound `k`, the measure is `log2(n)` where `n`
//! is the number of distinct nodes reachable in 1..=`k` directed hops. An
//! agent with no choice of successor state has empowerment 0; one that can
//! steer itself into `n` distinct states has `log2(n)` bits of influence
//! over its own future.
//!
//! The expansion is deliberately naive: a brute-force walk with dedup only
//! at set insertion, no memoization across branches. Memoizing per-node
//! results is not generally valid here — a node first reached at depth 2 may
//! be reachable at depth 1 along another path, so a cached sub-result would
//! need to track the minimum remaining budget. Exponential in the step bound
//! and intended for modest grid worlds with bounds ≤ 5.

use hashbrown::HashSet;
use tracing::info;

use crate::graph::GridGraph;
use crate::model::Coord;
use crate::{Error, Result};

/// Per-node empowerment values for a whole graph.
pub type EmpowermentMap = hashbrown::HashMap<Coord, f64>;

// ============================================================================
// Origin convention
// ============================================================================

/// Whether the start node may count as one of its own reachable states.
///
/// The two conventions disagree exactly when a cycle of length ≤ `step_bound`
/// runs through the start node. With a 1-step bound on a self-loop-free graph
/// they always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OriginConvention {
    /// Seed the seen-set with the start node, then subtract one (clamped at
    /// zero) from the final count. The start node is never counted as
    /// "reached", even when a cycle routes back to it. This is the default:
    /// staying put is not an exercise of influence.
    #[default]
    Inclusive,
    /// Seed the seen-set empty. A cycle that returns to the start node counts
    /// it as a reachable state like any other.
    Exclusive,
}

// ============================================================================
// Per-node measure
// ============================================================================

/// Empowerment of a single node: `log2` of its bounded reachable-set size.
///
/// Fails fast with [`Error::InvalidStepBound`] for a zero bound and
/// [`Error::NodeNotFound`] for a start node the graph does not contain.
pub fn node_empowerment(
    graph: &GridGraph,
    start: Coord,
    step_bound: usize,
    convention: OriginConvention,
) -> Result<f64> {
    if step_bound == 0 {
        return Err(Error::InvalidStepBound(step_bound));
    }
    if !graph.contains(start) {
        return Err(Error::NodeNotFound(start));
    }

    let mut seen: HashSet<Coord> = HashSet::new();
    if convention == OriginConvention::Inclusive {
        seen.insert(start);
    }

    // Explicit work stack instead of recursion: each frame carries the number
    // of hops already taken, so the walk is bounded by the step budget rather
    // than the call stack.
    let mut stack: Vec<(Coord, usize)> = vec![(start, 0)];
    while let Some((node, depth)) = stack.pop() {
        for neighbor in graph.neighbors(node) {
            seen.insert(neighbor);
            if depth + 1 < step_bound {
                stack.push((neighbor, depth + 1));
            }
        }
    }

    let count = match convention {
        OriginConvention::Inclusive => seen.len().saturating_sub(1),
        OriginConvention::Exclusive => seen.len(),
    };
    Ok(log2_or_zero(count))
}

// ============================================================================
// Whole-graph measure
// ============================================================================

/// Empowerment of every node in the graph, all-or-nothing.
///
/// Either every node gets a value or the call fails before producing any.
pub fn graph_empowerment(
    graph: &GridGraph,
    step_bound: usize,
    convention: OriginConvention,
) -> Result<EmpowermentMap> {
    info!(nodes = graph.node_count(), step_bound, "computing empowerment");

    let mut values = EmpowermentMap::with_capacity(graph.node_count());
    for &node in graph.nodes() {
        values.insert(node, node_empowerment(graph, node, step_bound, convention)?);
    }

    info!(nodes = graph.node_count(), "finished computing empowerment");
    Ok(values)
}

/// `log2` with the convention `log2(0) := 0`, never −∞.
pub fn log2_or_zero(count: usize) -> f64 {
    if count == 0 { 0.0 } else { (count as f64).log2() }
}

// ============================================================================
// Tests
// ============================================================================
