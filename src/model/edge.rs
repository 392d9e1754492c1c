//! Directed, labeled movement edge.

use serde::{Deserialize, Serialize};
use super::{Action, Coord};

/// A directed edge in the movement graph.
///
/// Carries the action label for the move it represents and a distance
/// weight: 1 for cardinal moves, √2 for diagonal moves under Euclidean
/// weighting. The weight is cosmetic as far as reachability is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub src: Coord,
    pub dst: Coord,
    pub action: Action,
    pub distance: f64,
}

impl Edge {
    /// A unit-distance edge.
    pub fn new(src: Coord, dst: Coord, action: Action) -> Self {
        Self { src, dst, action, distance: 1.0 }
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }
}
