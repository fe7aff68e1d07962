//! Hand-authored layouts
//!
//! Fixed rooms used for the tutorial and for trying things out without
//! the maze in the way. Both assume roughly full-screen dimensions.

use crate::world::grid::GridMap;
use crate::world::level::Level;
use crate::world::position::Position;
use crate::world::tile::Tile;
use crate::world::WorldError;
use crate::entities::{Enemy, GameObject, ObjectKind};

/// One open bordered room with a light, an enemy, and a chest already
/// placed. Spawn at (2, 2), exit in the right wall.
pub fn generate_fixed_room(width: i32, height: i32) -> Result<Level, WorldError> {
    let mut tiles = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let tile = if x == width - 1 && y == 8 {
                Tile::Exit
            } else if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                Tile::Wall
            } else if x == 2 && y == 2 {
                Tile::SpawnMarker
            } else {
                Tile::Floor
            };
            tiles.push(tile);
        }
    }
    let mut level = Level::new(GridMap::from_tiles(width, height, tiles)?);
    level.place_object(
        Position::new(5, 2),
        GameObject::new(ObjectKind::LightSource { radius: 3 }),
    );
    level.place_enemy(Position::new(2, 5), Enemy::new(6));
    level.place_object(Position::new(8, 2), GameObject::new(ObjectKind::Chest));
    Ok(level)
}

/// The tutorial corridor: a horizontal lane walled off at rows 7 and 11,
/// with a scripted sequence of encounters on the way to the exit.
pub fn generate_tutorial_room(width: i32, height: i32) -> Result<Level, WorldError> {
    let mut tiles = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let tile = if x == width - 1 && y == 9 {
                Tile::Exit
            } else if x == 0 || y == 0 || x == width - 1 || y == height - 1 || y == 7 || y == 11 {
                Tile::Wall
            } else if x == 2 && y == 9 {
                Tile::SpawnMarker
            } else {
                Tile::Floor
            };
            tiles.push(tile);
        }
    }
    let mut level = Level::new(GridMap::from_tiles(width, height, tiles)?);
    level.place_enemy(Position::new(30, 9), Enemy::new(1));
    level.place_object(
        Position::new(32, 8),
        GameObject::new(ObjectKind::LightSource { radius: 3 }),
    );
    level.place_object(Position::new(34, 9), GameObject::new(ObjectKind::Heal));
    level.place_object(Position::new(49, 9), GameObject::new(ObjectKind::Chest));
    level.place_object(
        Position::new(51, 8),
        GameObject::new(ObjectKind::LightSource { radius: 3 }),
    );
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_room_layout() {
        let level = generate_fixed_room(100, 30).unwrap();
        assert_eq!(level.spawn_point(), Position::new(2, 2));
        assert_eq!(
            level.get_tile(Position::new(99, 8)).unwrap(),
            Tile::Exit
        );
        assert_eq!(level.get_tile(Position::new(0, 0)).unwrap(), Tile::Wall);
        assert_eq!(level.get_tile(Position::new(50, 15)).unwrap(), Tile::Floor);
        assert!(level.get_enemy(Position::new(2, 5)).is_some());
        assert_eq!(level.light_sources().count(), 1);
    }

    #[test]
    fn test_tutorial_room_layout() {
        let level = generate_tutorial_room(100, 30).unwrap();
        assert_eq!(level.spawn_point(), Position::new(2, 9));
        assert_eq!(level.get_tile(Position::new(99, 9)).unwrap(), Tile::Exit);
        // The corridor is fenced off above and below.
        assert_eq!(level.get_tile(Position::new(40, 7)).unwrap(), Tile::Wall);
        assert_eq!(level.get_tile(Position::new(40, 11)).unwrap(), Tile::Wall);
        assert_eq!(level.get_tile(Position::new(40, 9)).unwrap(), Tile::Floor);
        assert_eq!(level.light_sources().count(), 2);
        assert!(level.get_enemy(Position::new(30, 9)).is_some());
        assert!(level.get_object(Position::new(49, 9)).is_some());
    }
}
