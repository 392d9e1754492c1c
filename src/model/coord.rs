//! Node identity: an integer grid coordinate.

use serde::{Deserialize, Serialize};

/// A cell position in the grid plane, with the origin at the bottom left.
///
/// Node identity is exact-value equality of the coordinate pair. The
/// coordinate doubles as the node's layout position (`pos`) for downstream
/// visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The layout position of this node: the coordinate itself.
    pub fn pos(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
