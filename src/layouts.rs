//! Named grid-world layouts.
//!
//! Each layout is a plain function returning its occupancy map; `by_name`
//! offers a registry-style lookup. Maps are written top-down as drawn and
//! flipped so the origin sits at the bottom left.

use crate::grid::OccupancyMap;

fn layout(rows: &[&str]) -> OccupancyMap {
    OccupancyMap::parse(rows)
        .map(OccupancyMap::flipped)
        .expect("layout constants are rectangular")
}

/// Four cells in a row.
pub fn line() -> OccupancyMap {
    layout(&["1111"])
}

/// The seven-node staircase world:
///
/// ```text
/// O
/// OO
/// OO
/// O
/// O
/// ```
pub fn simple() -> OccupancyMap {
    layout(&[
        "10",
        "11",
        "11",
        "10",
        "10",
    ])
}

/// Two unequal rooms joined by a single doorway.
pub fn unequal_rooms_small() -> OccupancyMap {
    layout(&[
        "1101111",
        "1101111",
        "1111111",
        "1101111",
        "1100000",
    ])
}

/// Four unequal rooms with narrow corridors.
pub fn unequal_rooms() -> OccupancyMap {
    layout(&[
        "111011111",
        "111011111",
        "111111111",
        "111000100",
        "111011111",
        "010011111",
        "111011111",
        "111111111",
        "111011111",
    ])
}

/// The six-room grid world from Van Dijk's thesis.
pub fn six_rooms() -> OccupancyMap {
    layout(&[
        "1111111101111111110111111111111",
        "1111111101111111110111111111111",
        "1111111101111111110111111111111",
        "1111111101111111110111111111111",
        "1111111101111111110111111111111",
        "1111111101111111111111111111111",
        "1111111111111111110111111111111",
        "1111111101111111110111111111111",
        "1111111101111111110111111111111",
        "1111111101111111110111111111111",
        "1111111101111111110111111111111",
        "1111111100000010000111111111111",
        "1111111101111111110111111111111",
        "0010000001111111110111111111111",
        "1111111101111111110000000100000",
        "1111111101111111110111111111111",
        "1111111101111111110111111111111",
        "1111111101111111110111111111111",
        "1111111101111111111111111111111",
        "1111111111111111110111111111111",
        "1111111101111111110111111111111",
        "1111111101111111110111111111111",
        "1111111101111111110111111111111",
        "1111111101111111110111111111111",
    ])
}

/// A scaled-down six-room world.
pub fn six_rooms_small() -> OccupancyMap {
    layout(&[
        "111111011111101111111",
        "111111011111101111111",
        "111111011111111111111",
        "111111111111101111111",
        "111111011111101111111",
        "111111011111101111111",
        "111111000100001111111",
        "111111011111101111111",
        "000100011111101111111",
        "111111011111100000100",
        "111111011111101111111",
        "111111011111101111111",
        "111111011111111111111",
        "111111111111101111111",
        "111111011111101111111",
    ])
}

/// Look up a layout by name.
pub fn by_name(name: &str) -> Option<OccupancyMap> {
    match name {
        "line" => Some(line()),
        "simple" => Some(simple()),
        "unequal_rooms_small" => Some(unequal_rooms_small()),
        "unequal_rooms" => Some(unequal_rooms()),
        "six_rooms" => Some(six_rooms()),
        "six_rooms_small" => Some(six_rooms_small()),
        _ => None,
    }
}
