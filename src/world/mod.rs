//! World model
//!
//! Tile grid, occupancy tables, procedural generation, and lighting.

pub mod generation;
pub mod grid;
pub mod level;
pub mod lighting;
pub mod position;
pub mod tile;

pub use grid::GridMap;
pub use level::Level;
pub use lighting::{LightMap, MAX_LIGHT, SYMBOL_ASPECT};
pub use position::Position;
pub use tile::Tile;

use thiserror::Error;

/// Broken-invariant failures of the world core.
///
/// Every variant is a programming error meant to fail fast; there is no
/// user-recoverable case here. Stale entity removals and unplaceable
/// spawns are absorbed silently instead and never reach this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("generated map has no spawn marker")]
    NoSpawnMarker,

    #[error("generated map has {0} spawn markers, expected exactly one")]
    MultipleSpawnMarkers(usize),

    /// The exit scan found no carved cell along the right edge. Cannot
    /// happen for a grid produced by the labyrinth carver, which always
    /// reaches the rightmost column.
    #[error("no exit candidate along the right edge")]
    NoExitCandidate,

    #[error("coordinate {pos} outside map bounds {width}x{height}")]
    OutOfBounds {
        pos: Position,
        width: i32,
        height: i32,
    },
}
