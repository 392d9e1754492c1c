//! # empowerment-rs — Exact Empowerment over Grid-World Graphs
//!
//! Computes an information-theoretic empowerment measure over directed,
//! graph-structured state spaces: for each node, the base-2 logarithm of the
//! number of distinct states reachable within a bounded number of steps.
//! Also ships deterministic grid-world generators (occupancy maps converted
//! into directed movement graphs) used as test environments for the measure.
//!
//! ## Design Principles
//!
//! 1. **Pure computation**: no I/O in the core, no shared state between calls
//! 2. **Clean data model**: `Coord`, `Action`, `Edge` cross every boundary
//! 3. **Explicit conventions**: origin inclusion is a parameter, never a guess
//! 4. **Injectable randomness**: label shuffling takes a caller-owned `Rng`
//!
//! ## Quick Start
//!
//! ```rust
//! use empowerment_rs::{generate_grid_world, graph_empowerment, layouts, OriginConvention};
//!
//! # fn example() -> empowerment_rs::Result<()> {
//! let world = generate_grid_world(&layouts::simple())?;
//! let emp = graph_empowerment(&world, 3, OriginConvention::Inclusive)?;
//!
//! for node in world.nodes() {
//!     println!("{node}: {} bits", emp[node]);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Grid Worlds
//!
//! | Layout | Shape | Description |
//! |--------|-------|-------------|
//! | `layouts::line` | 4×1 | Four cells in a row |
//! | `layouts::simple` | 2×5 | Seven-node staircase |
//! | `layouts::unequal_rooms_small` | 7×5 | Two rooms, one doorway |
//! | `layouts::unequal_rooms` | 9×9 | Four rooms, narrow corridors |
//! | `layouts::six_rooms` | 31×25 | Van Dijk's six-room world |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod graph;
pub mod empowerment;
pub mod grid;
pub mod layouts;
pub mod export;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{Action, Coord, Edge};

// ============================================================================
// Re-exports: Graph
// ============================================================================

pub use graph::GridGraph;

// ============================================================================
// Re-exports: Empowerment
// ============================================================================

pub use empowerment::{
    EmpowermentMap, OriginConvention, graph_empowerment, node_empowerment,
};

// ============================================================================
// Re-exports: Grid-world construction
// ============================================================================

pub use grid::{
    GridWorldBuilder, OccupancyMap, generate_grid_world, shuffle_action_labels,
    two_rooms,
};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed occupancy map: row {row} has {got} cells, expected {expected}")]
    MalformedMap { row: usize, got: usize, expected: usize },

    #[error("Malformed occupancy map: unexpected cell {cell:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, cell: char },

    #[error("Node {0} is not in the graph")]
    NodeNotFound(Coord),

    #[error("Edge endpoint {0} is not in the graph")]
    MissingEndpoint(Coord),

    #[error("Step bound must be at least 1, got {0}")]
    InvalidStepBound(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
