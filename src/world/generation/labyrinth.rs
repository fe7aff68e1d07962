//! Labyrinth carver
//!
//! Randomized recursive backtracker over a half-resolution logical grid:
//! rooms sit at even (x, y) offsets and walls occupy the cells between
//! them. A single openness knob injects loops while carving and erodes
//! leftover walls afterwards, taking the result from a perfect maze at 0
//! toward a nearly open room at 1.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::world::grid::GridMap;
use crate::world::level::Level;
use crate::world::position::Position;
use crate::world::tile::Tile;
use crate::world::WorldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawCell {
    /// Carve-able room not yet reached.
    Unvisited,
    Wall,
    /// Open cell: a reached room or a carved wall.
    Visited,
}

/// The logical carving grid, two cells smaller than the final map on
/// each axis to leave room for the outer wall border.
struct RawGrid {
    width: i32,
    height: i32,
    cells: Vec<RawCell>,
}

impl RawGrid {
    fn new(width: i32, height: i32) -> Self {
        let mut cells = vec![RawCell::Wall; (width * height) as usize];
        for y in (0..height).step_by(2) {
            for x in (0..width).step_by(2) {
                cells[(y * width + x) as usize] = RawCell::Unvisited;
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    fn get(&self, pos: Position) -> RawCell {
        self.cells[(pos.y * self.width + pos.x) as usize]
    }

    fn set(&mut self, pos: Position, cell: RawCell) {
        self.cells[(pos.y * self.width + pos.x) as usize] = cell;
    }

    fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Uniformly pick one of the four cells two steps away whose state
    /// matches `wanted`. The only randomness shaping maze topology apart
    /// from loop injection and erosion.
    fn pick_neighbor(
        &self,
        current: Position,
        wanted: RawCell,
        rng: &mut StdRng,
    ) -> Option<Position> {
        const OFFSETS: [Position; 4] = [
            Position { x: 0, y: 2 },
            Position { x: 0, y: -2 },
            Position { x: 2, y: 0 },
            Position { x: -2, y: 0 },
        ];
        let candidates: Vec<Position> = OFFSETS
            .iter()
            .map(|off| current + *off)
            .filter(|pos| self.in_bounds(*pos) && self.get(*pos) == wanted)
            .collect();
        candidates.choose(rng).copied()
    }
}

/// Generate a maze level.
///
/// `wall_destroy_chance` ranges from 0 (perfect maze, exactly one simple
/// path between any two rooms) to 1 (nearly open); values outside that
/// range are clamped. The spawn sits at the left edge, the exit is a
/// door in the right wall, and both are always connected: the knob only
/// ever opens cells, never closes them.
pub fn generate_labyrinth(
    rng: &mut StdRng,
    width: i32,
    height: i32,
    wall_destroy_chance: f64,
) -> Result<Level, WorldError> {
    let chance = wall_destroy_chance.clamp(0.0, 1.0);
    let mut raw = RawGrid::new(width - 2, height - 2);

    // Carving starts in a random room row of the leftmost column.
    let even_rows = (raw.height + 1) / 2;
    let start = Position::new(0, 2 * rng.gen_range(0..even_rows));
    raw.set(start, RawCell::Visited);

    let mut stack: Vec<Position> = Vec::new();
    let mut current = start;
    loop {
        // Loop injection: occasionally reopen a wall toward an already
        // visited room, creating a non-tree edge.
        if let Some(neighbor) = raw.pick_neighbor(current, RawCell::Visited, rng) {
            if rng.gen_bool(chance) {
                let wall = current + (neighbor - current) / 2;
                raw.set(wall, RawCell::Visited);
            }
        }

        // Depth-first carve; backtrack when boxed in.
        if let Some(neighbor) = raw.pick_neighbor(current, RawCell::Unvisited, rng) {
            stack.push(current);
            let wall = current + (neighbor - current) / 2;
            raw.set(wall, RawCell::Visited);
            raw.set(neighbor, RawCell::Visited);
            current = neighbor;
        } else {
            match stack.pop() {
                Some(prev) => current = prev,
                None => break,
            }
        }
    }

    let exit = locate_exit(&raw, rng)?;
    erode_walls(&mut raw, chance, rng);

    // Expand into the full tile grid, shifted by one for the border.
    let mut tiles = vec![Tile::Wall; (width * height) as usize];
    for y in 0..raw.height {
        for x in 0..raw.width {
            if raw.get(Position::new(x, y)) == RawCell::Visited {
                tiles[((y + 1) * width + (x + 1)) as usize] = Tile::Floor;
            }
        }
    }
    tiles[((start.y + 1) * width + (start.x + 1)) as usize] = Tile::SpawnMarker;
    tiles[((exit.y + 1) * width + (exit.x + 1)) as usize] = Tile::Exit;

    let map = GridMap::from_tiles(width, height, tiles)?;
    Ok(Level::new(map))
}

/// Pick the exit row: uniformly among rightmost-column cells whose
/// interior neighbor was reached by the carver. The carver always reaches
/// the last room column, so at least one candidate exists.
fn locate_exit(raw: &RawGrid, rng: &mut StdRng) -> Result<Position, WorldError> {
    let x = raw.width - 1;
    let candidates: Vec<Position> = (0..raw.height)
        .map(|y| Position::new(x, y))
        .filter(|pos| raw.get(Position::new(x - 1, pos.y)) == RawCell::Visited)
        .collect();
    candidates
        .choose(rng)
        .copied()
        .ok_or(WorldError::NoExitCandidate)
}

/// Independent second randomization pass: every remaining wall cell is
/// opened with the same chance, producing irregular gaps on top of the
/// loops injected while carving.
fn erode_walls(raw: &mut RawGrid, chance: f64, rng: &mut StdRng) {
    for y in 0..raw.height {
        for x in 0..raw.width {
            let pos = Position::new(x, y);
            if raw.get(pos) == RawCell::Wall && rng.gen_bool(chance) {
                raw.set(pos, RawCell::Visited);
            }
        }
    }
}
