//! # Grid-World Graph Model
//!
//! Clean data types that define the movement graph: coordinates, action
//! labels, and directed edges. These types cross every boundary:
//! generator ↔ measure ↔ export ↔ user.
//!
//! Design rule: this module is pure data — no I/O, no state, no randomness.

pub mod action;
pub mod coord;
pub mod edge;

pub use action::Action;
pub use coord::Coord;
pub use edge::Edge;
