//! Grid-world construction: occupancy maps → directed movement graphs.
//!
//! An occupancy map is a rectangular grid of 0/1 cells. Every occupied cell
//! becomes a node at `(x, y)` (column, row), and adjacent occupied cells are
//! wired with a pair of opposite-labeled directed edges, so the movement
//! graph is symmetric at the adjacency level while labels differ by
//! direction. Row index increases with `y`; maps written top-down as drawn
//! should be passed through [`OccupancyMap::flipped`] first.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::GridGraph;
use crate::model::{Action, Coord, Edge};
use crate::{Error, Result};

// ============================================================================
// OccupancyMap
// ============================================================================

/// A rectangular 0/1 grid describing which cells are traversable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyMap {
    rows: Vec<Vec<u8>>,
    width: usize,
}

impl OccupancyMap {
    /// Build a map from row-major cell data. Nonzero cells are occupied.
    ///
    /// Fails fast with [`Error::MalformedMap`] on ragged rows; a silently
    /// tolerated ragged map would construct a partial, asymmetric graph.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(Error::MalformedMap { row, got: cells.len(), expected: width });
            }
        }
        Ok(Self { rows, width })
    }

    /// Parse a map from string rows, `'1'` occupied and `'0'` empty.
    pub fn parse(rows: &[&str]) -> Result<Self> {
        let mut parsed = Vec::with_capacity(rows.len());
        for (y, row) in rows.iter().enumerate() {
            let mut cells = Vec::with_capacity(row.len());
            for (x, c) in row.chars().enumerate() {
                match c {
                    '1' => cells.push(1),
                    '0' => cells.push(0),
                    cell => return Err(Error::InvalidCell { row: y, col: x, cell }),
                }
            }
            parsed.push(cells);
        }
        Self::from_rows(parsed)
    }

    /// Reverse the row order, so a map written top-down as drawn comes out
    /// with `y` increasing upward.
    pub fn flipped(mut self) -> Self {
        self.rows.reverse();
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.rows.get(y).and_then(|row| row.get(x)).is_some_and(|&c| c != 0)
    }

    /// Occupied cell coordinates in row-major scan order.
    pub fn occupied(&self) -> impl Iterator<Item = Coord> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell != 0)
                .map(move |(x, _)| Coord::new(x as i32, y as i32))
        })
    }
}

// ============================================================================
// GridWorldBuilder
// ============================================================================

/// Configuration for grid-world construction.
///
/// Construction options live here, not as attributes on the graph: the graph
/// carries topology and domain attributes only.
#[derive(Debug, Clone, Copy)]
pub struct GridWorldBuilder {
    diagonals: bool,
    euclidean: bool,
}

impl Default for GridWorldBuilder {
    fn default() -> Self {
        Self { diagonals: false, euclidean: true }
    }
}

impl GridWorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also connect diagonally adjacent cells (NE, SE, SW, NW edges).
    pub fn diagonals(mut self, diagonals: bool) -> Self {
        self.diagonals = diagonals;
        self
    }

    /// Weight diagonal edges √2 instead of 1.
    pub fn euclidean_distance(mut self, euclidean: bool) -> Self {
        self.euclidean = euclidean;
        self
    }

    /// Scan the occupancy map and build the movement graph.
    ///
    /// The scan is row-major, so each cell only looks back at already-visited
    /// neighbors (`x-1`, `y-1` sides); the forward half of every adjacency is
    /// established when the later cell performs its own look-back. By the end
    /// of the scan the full adjacency is symmetric.
    pub fn build(&self, map: &OccupancyMap) -> Result<GridGraph> {
        let mut actions: Vec<Action> = Action::CARDINAL.to_vec();
        if self.diagonals {
            actions.extend(Action::DIAGONAL);
        }
        let mut graph = GridGraph::with_actions(actions);

        let diagonal_dist = if self.euclidean { std::f64::consts::SQRT_2 } else { 1.0 };

        for node in map.occupied() {
            graph.add_node(node);

            let west = Coord::new(node.x - 1, node.y);
            if graph.contains(west) {
                graph.add_edge(Edge::new(west, node, Action::East))?;
                graph.add_edge(Edge::new(node, west, Action::West))?;
            }

            let south = Coord::new(node.x, node.y - 1);
            if graph.contains(south) {
                graph.add_edge(Edge::new(south, node, Action::North))?;
                graph.add_edge(Edge::new(node, south, Action::South))?;
            }

            if self.diagonals {
                let south_west = Coord::new(node.x - 1, node.y - 1);
                if graph.contains(south_west) {
                    graph.add_edge(
                        Edge::new(node, south_west, Action::SouthWest)
                            .with_distance(diagonal_dist),
                    )?;
                    graph.add_edge(
                        Edge::new(south_west, node, Action::NorthEast)
                            .with_distance(diagonal_dist),
                    )?;
                }
                let south_east = Coord::new(node.x + 1, node.y - 1);
                if graph.contains(south_east) {
                    graph.add_edge(
                        Edge::new(node, south_east, Action::SouthEast)
                            .with_distance(diagonal_dist),
                    )?;
                    graph.add_edge(
                        Edge::new(south_east, node, Action::NorthWest)
                            .with_distance(diagonal_dist),
                    )?;
                }
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            diagonals = self.diagonals,
            "built grid world"
        );
        Ok(graph)
    }
}

/// Build a grid world with default options (no diagonals).
pub fn generate_grid_world(map: &OccupancyMap) -> Result<GridGraph> {
    GridWorldBuilder::new().build(map)
}

// ============================================================================
// Action-label randomization
// ============================================================================

/// Shuffle which action label is assigned to which outgoing edge,
/// independently per node and without replacement.
///
/// Deliberately decouples the semantic direction of travel from the label
/// shown, for experiments on label/action confounds. Topology and distances
/// are untouched. The random source is caller-owned so a seeded RNG yields
/// reproducible label assignments.
pub fn shuffle_action_labels<R: Rng>(graph: &mut GridGraph, rng: &mut R) {
    let nodes: Vec<Coord> = graph.nodes().copied().collect();
    for node in nodes {
        let Some(edges) = graph.out_edges_mut(node) else { continue };
        let mut labels: Vec<Action> = edges.iter().map(|e| e.action).collect();
        labels.shuffle(rng);
        for (edge, label) in edges.iter_mut().zip(labels) {
            edge.action = label;
        }
    }
}

// ============================================================================
// Two-room world
// ============================================================================

/// A hand-built 9×5 two-room world with a single doorway cell at (4, 2).
///
/// The dividing column is empty except for the doorway, which connects only
/// east–west; this layout is wired directly rather than derived from an
/// occupancy map.
pub fn two_rooms() -> Result<GridGraph> {
    const WIDTH: i32 = 9;
    const HEIGHT: i32 = 5;
    const DOOR: Coord = Coord::new(4, 2);

    fn wire(graph: &mut GridGraph, src: Coord, dst: Coord, action: Action) -> Result<()> {
        graph.add_edge(Edge::new(src, dst, action))?;
        graph.add_edge(Edge::new(dst, src, action.opposite()))
    }

    let mut graph = GridGraph::with_actions(Action::CARDINAL);

    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            if x != DOOR.x || y == DOOR.y {
                graph.add_node(Coord::new(x, y));
            }
        }
    }

    // All wired cells exist: only the non-doorway part of the dividing
    // column is missing, and both branches below step around it.
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let node = Coord::new(x, y);
            if x > 0 && x != DOOR.x && x - 1 != DOOR.x {
                wire(&mut graph, node, Coord::new(x - 1, y), Action::West)?;
            }
            if y > 0 && x != DOOR.x {
                wire(&mut graph, node, Coord::new(x, y - 1), Action::South)?;
            }
        }
    }

    // The doorway connects east-west only.
    wire(&mut graph, Coord::new(DOOR.x - 1, DOOR.y), DOOR, Action::East)?;
    wire(&mut graph, DOOR, Coord::new(DOOR.x + 1, DOOR.y), Action::East)?;

    Ok(graph)
}

// ============================================================================
// Tests
// ============================================================================
