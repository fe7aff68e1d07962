//! Dynamic lighting
//!
//! Point lights cast a banded falloff disk, corrected for the fact that
//! terminal cells are much taller than they are wide; per-source disks
//! are accumulated over the whole grid and clamped.

use std::collections::HashSet;

use super::position::Position;

/// Width/height ratio of a terminal character cell.
pub const SYMBOL_ASPECT: f32 = 9.0 / 19.0;

/// Maximum light level a cell can reach.
pub const MAX_LIGHT: u8 = 4;

/// Horizontal compression applied to emitted offsets so the lit disk
/// reads visually circular.
const OFFSET_SQUEEZE: f32 = 0.95;

/// Compute the falloff disk of a single point light.
///
/// Returns `(offset, intensity)` pairs relative to the source, intensity
/// in `1..=4` from the rim inward. The horizontal scan range is widened
/// by the aspect ratio and each sampled `x` is scaled back before the
/// distance test; the emitted offset itself is then squeezed by 0.95
/// (truncating toward zero). Offsets that collide after the squeeze keep
/// the first-scanned value — a zero-intensity sample can claim a slot,
/// in which case nothing is emitted for it.
pub fn get_lighting(radius: i32, symbol_aspect: f32) -> Vec<(Position, u8)> {
    let r0 = (radius * radius) as f32;
    let r1 = r0 * 0.8;
    let r2 = r0 * 0.6;
    let r3 = r0 * 0.4;
    let x_from = -((radius as f32 / symbol_aspect) as i32);
    let x_to = ((radius + 1) as f32 / symbol_aspect) as i32;

    let mut taken = HashSet::new();
    let mut result = Vec::new();
    for y in -radius..=radius {
        for x in x_from..x_to {
            let xi = x as f32 * symbol_aspect;
            let dist_sq = xi * xi + (y * y) as f32;
            let value = if dist_sq < r3 {
                4
            } else if dist_sq < r2 {
                3
            } else if dist_sq < r1 {
                2
            } else if dist_sq < r0 {
                1
            } else {
                0
            };
            let ox = (x as f32 * OFFSET_SQUEEZE) as i32;
            if taken.insert((ox, y)) && value > 0 {
                result.push((Position::new(ox, y), value));
            }
        }
    }
    result
}

/// Per-cell illumination of a whole level, values in `0..=4`.
#[derive(Debug, Clone)]
pub struct LightMap {
    width: i32,
    height: i32,
    levels: Vec<u8>,
}

impl LightMap {
    /// Accumulate every `(position, radius)` source into a grid-sized
    /// intensity map. Contributions falling outside the grid are dropped;
    /// overlapping sources sum but never exceed [`MAX_LIGHT`]. With
    /// `reveal_all` the whole map is uniformly lit (debug no-fog mode).
    pub fn compute(
        width: i32,
        height: i32,
        sources: impl IntoIterator<Item = (Position, i32)>,
        symbol_aspect: f32,
        reveal_all: bool,
    ) -> Self {
        let fill = if reveal_all { MAX_LIGHT } else { 0 };
        let mut levels = vec![fill; (width * height) as usize];
        if !reveal_all {
            for (origin, radius) in sources {
                for (offset, strength) in get_lighting(radius, symbol_aspect) {
                    let pos = origin + offset;
                    if pos.x >= 0 && pos.x < width && pos.y >= 0 && pos.y < height {
                        let idx = (pos.y * width + pos.x) as usize;
                        levels[idx] = (levels[idx] + strength).min(MAX_LIGHT);
                    }
                }
            }
        }
        Self {
            width,
            height,
            levels,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Light level at a position; everything outside the grid is dark.
    pub fn get(&self, pos: Position) -> u8 {
        if pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height {
            self.levels[(pos.y * self.width + pos.x) as usize]
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intensity_at(disk: &[(Position, u8)], offset: Position) -> u8 {
        disk.iter()
            .find(|(o, _)| *o == offset)
            .map(|(_, v)| *v)
            .unwrap_or(0)
    }

    #[test]
    fn test_center_is_always_full_brightness() {
        for radius in 1..=8 {
            let disk = get_lighting(radius, SYMBOL_ASPECT);
            assert_eq!(
                intensity_at(&disk, Position::new(0, 0)),
                4,
                "radius {radius}"
            );
        }
    }

    #[test]
    fn test_intensity_never_increases_outward() {
        // Along the vertical axis the squeeze does not interfere, so
        // intensities must fall off monotonically with |y|.
        let disk = get_lighting(6, SYMBOL_ASPECT);
        let mut prev = 5;
        for y in 0..=6 {
            let v = intensity_at(&disk, Position::new(0, y));
            assert!(v <= prev, "intensity rose at y={y}: {v} > {prev}");
            prev = v;
        }
    }

    #[test]
    fn test_radius_three_scenario() {
        let disk = get_lighting(3, SYMBOL_ASPECT);
        assert_eq!(intensity_at(&disk, Position::new(0, 0)), 4);
        // The vertical extreme sits on the rim: dim or not emitted at all.
        assert!(intensity_at(&disk, Position::new(0, 3)) <= 1);
    }

    #[test]
    fn test_zero_intensity_is_not_emitted() {
        let disk = get_lighting(3, SYMBOL_ASPECT);
        assert!(disk.iter().all(|(_, v)| *v > 0));
    }

    #[test]
    fn test_squeezed_offsets_are_unique() {
        let disk = get_lighting(5, SYMBOL_ASPECT);
        let mut seen = HashSet::new();
        for (offset, _) in &disk {
            assert!(seen.insert(*offset), "duplicate offset {offset}");
        }
    }

    #[test]
    fn test_overlapping_sources_clamp_at_max() {
        let sources = vec![
            (Position::new(5, 5), 3),
            (Position::new(5, 5), 3),
            (Position::new(6, 5), 3),
        ];
        let map = LightMap::compute(12, 12, sources, SYMBOL_ASPECT, false);
        assert_eq!(map.get(Position::new(5, 5)), MAX_LIGHT);
        for y in 0..12 {
            for x in 0..12 {
                assert!(map.get(Position::new(x, y)) <= MAX_LIGHT);
            }
        }
    }

    #[test]
    fn test_out_of_bounds_contributions_are_dropped() {
        // Source in the corner: most of the disk falls off the grid.
        let map = LightMap::compute(8, 8, vec![(Position::new(0, 0), 3)], SYMBOL_ASPECT, false);
        assert_eq!(map.get(Position::new(0, 0)), 4);
        assert_eq!(map.get(Position::new(-1, 0)), 0);
    }

    #[test]
    fn test_reveal_all_lights_everything() {
        let map = LightMap::compute(6, 4, vec![], SYMBOL_ASPECT, true);
        for y in 0..4 {
            for x in 0..6 {
                assert_eq!(map.get(Position::new(x, y)), MAX_LIGHT);
            }
        }
    }

    #[test]
    fn test_default_is_dark() {
        let map = LightMap::compute(6, 4, vec![], SYMBOL_ASPECT, false);
        assert!((0..4).all(|y| (0..6).all(|x| map.get(Position::new(x, y)) == 0)));
    }
}
