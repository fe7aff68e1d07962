//! Map data structure
//!
//! The finalized 2D tile grid for one level.

use super::position::Position;
use super::tile::Tile;
use super::WorldError;

/// A level's tile grid, fixed for the level's lifetime.
///
/// Built from a raw tile array that must contain exactly one
/// [`Tile::SpawnMarker`]; the marker is rewritten to floor and its
/// coordinate cached as the spawn point.
#[derive(Debug, Clone)]
pub struct GridMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    spawn_point: Position,
}

impl GridMap {
    /// Wrap a raw tile array into a grid, locating and clearing the spawn
    /// marker.
    pub fn from_tiles(width: i32, height: i32, mut tiles: Vec<Tile>) -> Result<Self, WorldError> {
        debug_assert_eq!(tiles.len(), (width * height) as usize);

        let markers: Vec<usize> = tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == Tile::SpawnMarker)
            .map(|(idx, _)| idx)
            .collect();

        let idx = match markers.as_slice() {
            [idx] => *idx,
            [] => return Err(WorldError::NoSpawnMarker),
            _ => return Err(WorldError::MultipleSpawnMarkers(markers.len())),
        };

        tiles[idx] = Tile::Floor;
        let spawn_point = Position::new(idx as i32 % width, idx as i32 / width);

        Ok(Self {
            width,
            height,
            tiles,
            spawn_point,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Where the player starts on this level. Always a floor tile.
    pub fn spawn_point(&self) -> Position {
        self.spawn_point
    }

    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Get the tile at a position, failing outside the grid extents.
    pub fn get(&self, pos: Position) -> Result<Tile, WorldError> {
        if self.in_bounds(pos) {
            Ok(self.tiles[(pos.y * self.width + pos.x) as usize])
        } else {
            Err(WorldError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles_with_marker(width: i32, height: i32, markers: &[Position]) -> Vec<Tile> {
        let mut tiles = vec![Tile::Floor; (width * height) as usize];
        for pos in markers {
            tiles[(pos.y * width + pos.x) as usize] = Tile::SpawnMarker;
        }
        tiles
    }

    #[test]
    fn test_spawn_marker_extracted() {
        let tiles = tiles_with_marker(5, 4, &[Position::new(2, 1)]);
        let map = GridMap::from_tiles(5, 4, tiles).unwrap();
        assert_eq!(map.spawn_point(), Position::new(2, 1));
        // The marker itself is gone; the spawn point resolves to floor.
        assert_eq!(map.get(map.spawn_point()).unwrap(), Tile::Floor);
    }

    #[test]
    fn test_no_spawn_marker_is_an_error() {
        let tiles = vec![Tile::Floor; 20];
        assert!(matches!(
            GridMap::from_tiles(5, 4, tiles),
            Err(WorldError::NoSpawnMarker)
        ));
    }

    #[test]
    fn test_multiple_spawn_markers_is_an_error() {
        let tiles = tiles_with_marker(5, 4, &[Position::new(0, 0), Position::new(3, 2)]);
        assert!(matches!(
            GridMap::from_tiles(5, 4, tiles),
            Err(WorldError::MultipleSpawnMarkers(2))
        ));
    }

    #[test]
    fn test_out_of_bounds_query() {
        let tiles = tiles_with_marker(5, 4, &[Position::new(1, 1)]);
        let map = GridMap::from_tiles(5, 4, tiles).unwrap();
        assert!(map.get(Position::new(2, 3)).is_ok());
        assert!(map.get(Position::new(5, 0)).is_err());
        assert!(map.get(Position::new(0, 4)).is_err());
        assert!(map.get(Position::new(-1, 0)).is_err());
    }
}
