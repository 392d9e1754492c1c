//! Directed movement graph over grid coordinates.
//!
//! This is the in-memory graph the measure and the generators share. It is
//! a plain adjacency-list structure: per-node outgoing edge lists keyed by
//! coordinate, plus the graph-level action vocabulary.
//!
//! Nodes iterate in insertion order, which for generated grid worlds is the
//! row-major scan order of the occupancy map. Topology and domain attributes
//! (`pos`, `action`, `distance`) live here; rendering configuration does not.

use std::collections::BTreeSet;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::model::{Action, Coord, Edge};
use crate::{Error, Result};

/// Out-edge list for one node. Grid-world degree never exceeds 8
/// (four cardinal plus four diagonal neighbors), so this stays inline.
type EdgeList = SmallVec<[Edge; 8]>;

// ============================================================================
// GridGraph
// ============================================================================

/// A directed graph whose nodes are grid coordinates.
#[derive(Debug, Clone, Default)]
pub struct GridGraph {
    /// Nodes in insertion order.
    order: Vec<Coord>,
    /// node → outgoing edges
    out: HashMap<Coord, EdgeList>,
    /// The action vocabulary of this graph (includes `Stay` for grid worlds).
    actions: BTreeSet<Action>,
}

impl GridGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with a fixed action vocabulary.
    pub fn with_actions(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            order: Vec::new(),
            out: HashMap::new(),
            actions: actions.into_iter().collect(),
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Add a node. Adding an existing node is a no-op.
    pub fn add_node(&mut self, node: Coord) {
        if !self.out.contains_key(&node) {
            self.order.push(node);
            self.out.insert(node, EdgeList::new());
        }
    }

    /// Add a directed edge. Both endpoints must already be nodes.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        if !self.out.contains_key(&edge.dst) {
            return Err(Error::MissingEndpoint(edge.dst));
        }
        let Some(list) = self.out.get_mut(&edge.src) else {
            return Err(Error::MissingEndpoint(edge.src));
        };
        list.push(edge);
        Ok(())
    }

    /// Mutable access to a node's outgoing edges, for label reassignment.
    pub(crate) fn out_edges_mut(&mut self, node: Coord) -> Option<&mut [Edge]> {
        self.out.get_mut(&node).map(|edges| edges.as_mut_slice())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn contains(&self, node: Coord) -> bool {
        self.out.contains_key(&node)
    }

    /// Outgoing edges of a node. Empty for unknown nodes.
    pub fn out_edges(&self, node: Coord) -> &[Edge] {
        self.out.get(&node).map(|edges| edges.as_slice()).unwrap_or(&[])
    }

    /// Out-neighbors of a node, in edge insertion order.
    pub fn neighbors(&self, node: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.out_edges(node).iter().map(|e| e.dst)
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Coord> {
        self.order.iter()
    }

    /// All edges, grouped by source node in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.order.iter().flat_map(|n| self.out_edges(*n).iter())
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.out.values().map(|edges| edges.len()).sum()
    }

    /// The action vocabulary of this graph.
    pub fn actions(&self) -> &BTreeSet<Action> {
        &self.actions
    }
}

// ============================================================================
// Tests
// ============================================================================
