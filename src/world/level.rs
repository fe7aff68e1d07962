//! Level state
//!
//! One generated floor: the tile grid plus two independent occupancy
//! tables, one for objects (chests, heals, light sources) and one for
//! enemies. A tile can hold at most one of each, so "free to walk into"
//! means floor AND no object AND no enemy.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use super::grid::GridMap;
use super::position::Position;
use super::tile::Tile;
use super::WorldError;
use crate::entities::{Enemy, GameObject, ObjectKind};

/// Acceptance probability per eligible cell during stochastic placement.
const SPAWN_ACCEPT_CHANCE: f64 = 0.1;

/// A dungeon floor with everything standing on it
#[derive(Debug, Clone)]
pub struct Level {
    map: GridMap,
    objects: HashMap<Position, GameObject>,
    enemies: HashMap<Position, Enemy>,
}

impl Level {
    pub fn new(map: GridMap) -> Self {
        Self {
            map,
            objects: HashMap::new(),
            enemies: HashMap::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.map.width()
    }

    pub fn height(&self) -> i32 {
        self.map.height()
    }

    pub fn spawn_point(&self) -> Position {
        self.map.spawn_point()
    }

    /// Tile at a position; out of bounds is a caller bug and fails.
    pub fn get_tile(&self, pos: Position) -> Result<Tile, WorldError> {
        self.map.get(pos)
    }

    pub fn get_object(&self, pos: Position) -> Option<&GameObject> {
        self.objects.get(&pos)
    }

    pub fn get_enemy(&self, pos: Position) -> Option<&Enemy> {
        self.enemies.get(&pos)
    }

    /// Everything at one position: tile, object, enemy. The per-frame
    /// query used by the renderer and by movement checks.
    pub fn get_all(
        &self,
        pos: Position,
    ) -> Result<(Tile, Option<&GameObject>, Option<&Enemy>), WorldError> {
        Ok((self.get_tile(pos)?, self.get_object(pos), self.get_enemy(pos)))
    }

    /// Put an object on a tile, displacing whatever object was there.
    /// The entity's stored coordinate follows the placement.
    pub fn place_object(&mut self, pos: Position, mut obj: GameObject) {
        obj.move_to(pos);
        self.objects.insert(pos, obj);
    }

    /// Remove an object, but only if it is still the current occupant of
    /// its own coordinate. A stale handle (the tile was overwritten since)
    /// removes nothing.
    pub fn remove_object(&mut self, obj: &GameObject) {
        if self
            .objects
            .get(&obj.pos())
            .is_some_and(|cur| cur.id() == obj.id())
        {
            self.objects.remove(&obj.pos());
        }
    }

    pub fn place_enemy(&mut self, pos: Position, mut enemy: Enemy) {
        enemy.move_to(pos);
        self.enemies.insert(pos, enemy);
    }

    /// Identity-checked removal, same contract as [`Self::remove_object`].
    pub fn remove_enemy(&mut self, enemy: &Enemy) {
        if self
            .enemies
            .get(&enemy.pos())
            .is_some_and(|cur| cur.id() == enemy.id())
        {
            self.enemies.remove(&enemy.pos());
        }
    }

    /// All light-emitting objects currently on the level.
    ///
    /// This is a filtered view over the object table, so it can never get
    /// out of sync with placements and removals.
    pub fn light_sources(&self) -> impl Iterator<Item = &GameObject> {
        self.objects
            .values()
            .filter(|obj| matches!(obj.kind(), ObjectKind::LightSource { .. }))
    }

    /// `(position, radius)` of every light source, ready for the lighting
    /// engine.
    pub fn light_emitters(&self) -> impl Iterator<Item = (Position, i32)> + '_ {
        self.objects
            .values()
            .filter_map(|obj| obj.light_radius().map(|r| (obj.pos(), r)))
    }

    /// Scatter the standard pickup set for a fresh floor: one chest, one
    /// lantern, two heals. Placement is stochastic; on a very sparse map
    /// an item that finds no cell is silently skipped.
    pub fn spawn_objects(&mut self, rng: &mut StdRng) {
        let drops = [
            ObjectKind::Chest,
            ObjectKind::LightSource { radius: 3 },
            ObjectKind::Heal,
            ObjectKind::Heal,
        ];
        let mut placed = 0;
        for kind in drops {
            if let Some(pos) = self.sample_spawn_cell(rng) {
                self.place_object(pos, GameObject::new(kind));
                placed += 1;
            }
        }
        log::info!("Spawned {placed} objects");
    }

    /// Scatter `count` enemies, each at `difficulty` plus uniform jitter
    /// in {-1, 0, 1} (floored at zero). Same silent-skip contract as
    /// [`Self::spawn_objects`].
    pub fn spawn_enemies(&mut self, count: u32, difficulty: i32, rng: &mut StdRng) {
        let mut placed = 0;
        for _ in 0..count {
            let enemy = Enemy::new(difficulty + rng.gen_range(-1..=1));
            if let Some(pos) = self.sample_spawn_cell(rng) {
                self.place_enemy(pos, enemy);
                placed += 1;
            }
        }
        log::info!("Spawned {placed}/{count} enemies at difficulty ~{difficulty}");
    }

    /// Rejection-sample a spawn cell. Rows and columns are visited in
    /// shuffled order, restricted to the right 80% of the map so spawns
    /// land away from the player start near the left edge; each eligible
    /// floor cell (free in both tables) is accepted with 10% probability.
    /// Returns `None` when the scan runs out of candidates.
    fn sample_spawn_cell(&self, rng: &mut StdRng) -> Option<Position> {
        let mut ys: Vec<i32> = (2..self.height() - 3).collect();
        ys.shuffle(rng);
        let x_min = (self.width() as f32 * 0.2) as i32;
        for y in ys {
            let mut xs: Vec<i32> = (x_min..self.width() - 3).collect();
            xs.shuffle(rng);
            for x in xs {
                let pos = Position::new(x, y);
                let Ok((tile, obj, enemy)) = self.get_all(pos) else {
                    continue;
                };
                if tile == Tile::Floor
                    && obj.is_none()
                    && enemy.is_none()
                    && rng.gen_bool(SPAWN_ACCEPT_CHANCE)
                {
                    return Some(pos);
                }
            }
        }
        None
    }
}
