//! Action labels on movement edges.

use serde::{Deserialize, Serialize};

/// The semantic direction of travel an edge represents.
///
/// `Stay` (rendered `"o"`) is part of the action vocabulary of every grid
/// world but is never attached to a generated edge: it exists so downstream
/// consumers can reason over the full action alphabet, including the no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    Stay,
    North,
    East,
    South,
    West,
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Action {
    /// The four cardinal directions plus the no-op.
    pub const CARDINAL: [Action; 5] = [
        Action::Stay,
        Action::North,
        Action::East,
        Action::South,
        Action::West,
    ];

    /// The four diagonal directions.
    pub const DIAGONAL: [Action; 4] = [
        Action::NorthEast,
        Action::SouthEast,
        Action::SouthWest,
        Action::NorthWest,
    ];

    /// The action that undoes this one. `Stay` is its own opposite.
    pub fn opposite(self) -> Action {
        match self {
            Action::Stay => Action::Stay,
            Action::North => Action::South,
            Action::South => Action::North,
            Action::East => Action::West,
            Action::West => Action::East,
            Action::NorthEast => Action::SouthWest,
            Action::SouthWest => Action::NorthEast,
            Action::SouthEast => Action::NorthWest,
            Action::NorthWest => Action::SouthEast,
        }
    }

    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Action::NorthEast | Action::SouthEast | Action::SouthWest | Action::NorthWest
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Stay => "o",
            Action::North => "N",
            Action::East => "E",
            Action::South => "S",
            Action::West => "W",
            Action::NorthEast => "NE",
            Action::SouthEast => "SE",
            Action::SouthWest => "SW",
            Action::NorthWest => "NW",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
