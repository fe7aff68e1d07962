//! Tile definitions
//!
//! The four tile kinds a level grid is built from.

use serde::{Deserialize, Serialize};

/// A single tile in the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Floor,
    Wall,
    /// Marks the player start during construction; rewritten to `Floor`
    /// when the grid is built, with its coordinate cached as the spawn
    /// point.
    SpawnMarker,
    /// Door in the outer wall leading to the next level.
    Exit,
}

impl Tile {
    pub fn is_walkable(&self) -> bool {
        matches!(self, Tile::Floor | Tile::Exit)
    }

    /// Default display glyph. Wall shading and colors are the renderer's
    /// business; the exit reads as a wall segment until lit.
    pub fn glyph(&self) -> char {
        match self {
            Tile::Floor => ' ',
            Tile::Wall => '█',
            Tile::SpawnMarker => 'S',
            Tile::Exit => '█',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walkability() {
        assert!(Tile::Floor.is_walkable());
        assert!(Tile::Exit.is_walkable());
        assert!(!Tile::Wall.is_walkable());
        assert!(!Tile::SpawnMarker.is_walkable());
    }
}
