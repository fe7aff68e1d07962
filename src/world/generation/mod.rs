//! Procedural level generation
//!
//! The labyrinth carver plus fixed layouts, and the depth schedule that
//! drives both openness and enemy pressure as the player descends.

pub mod labyrinth;
pub mod rooms;

pub use labyrinth::generate_labyrinth;
pub use rooms::{generate_fixed_room, generate_tutorial_room};

use rand::rngs::StdRng;

use super::level::Level;
use super::WorldError;

/// Depth at which mazes become perfect (no extra openings left).
const MAX_OPEN_DEPTH: u32 = 25;

/// Openness knob for a given depth: starts near 1 (almost open rooms)
/// and falls linearly to 0 at depth 25 and beyond.
pub fn openness_for_depth(depth: u32) -> f64 {
    if depth >= MAX_OPEN_DEPTH {
        0.0
    } else {
        1.0 - depth as f64 / MAX_OPEN_DEPTH as f64
    }
}

/// Generate a fully populated floor for a level transition: labyrinth at
/// the depth's openness, the standard pickup set, and a depth-scaled
/// enemy pack.
pub fn generate_depth(
    rng: &mut StdRng,
    width: i32,
    height: i32,
    depth: u32,
) -> Result<Level, WorldError> {
    let chance = openness_for_depth(depth);
    let mut level = generate_labyrinth(rng, width, height, chance)?;
    level.spawn_objects(rng);
    level.spawn_enemies(1 + depth / 4, (depth / 2) as i32, rng);
    log::info!("Generated depth {depth} ({width}x{height}, openness {chance:.2})");
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_openness_schedule() {
        assert_eq!(openness_for_depth(0), 1.0);
        assert!(openness_for_depth(5) > openness_for_depth(20));
        assert_eq!(openness_for_depth(25), 0.0);
        assert_eq!(openness_for_depth(100), 0.0);
    }

    #[test]
    fn test_generate_depth_populates_the_level() {
        let mut rng = StdRng::seed_from_u64(21);
        let level = generate_depth(&mut rng, 100, 30, 4).unwrap();
        // Open early floor, plenty of space: the pickup set lands.
        let objects = (0..level.height())
            .flat_map(|y| (0..level.width()).map(move |x| crate::world::Position::new(x, y)))
            .filter(|p| level.get_object(*p).is_some())
            .count();
        assert_eq!(objects, 4);
        assert_eq!(level.light_sources().count(), 1);
    }
}
