//! Netbreach - demo entry point
//!
//! Generates one floor at a requested depth, lights it from its sources
//! plus a lantern at the spawn point, and prints the shaded grid. Usage:
//! `netbreach [seed] [depth]`.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use netbreach::world::generation::generate_depth;
use netbreach::world::{LightMap, Position, Tile, SYMBOL_ASPECT};

const SCREEN_WIDTH: i32 = 100;
const SCREEN_HEIGHT: i32 = 30;

/// Wall shading ramp indexed by light level 1..=4.
const WALL_SHADES: [char; 4] = ['░', '▒', '▓', '█'];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = match args.next() {
        Some(arg) => arg.parse()?,
        None => rand::random(),
    };
    let depth: u32 = match args.next() {
        Some(arg) => arg.parse()?,
        None => 1,
    };

    log::info!("Seed {seed}, depth {depth}");
    let mut rng = StdRng::seed_from_u64(seed);
    let level = generate_depth(&mut rng, SCREEN_WIDTH, SCREEN_HEIGHT, depth)?;

    // Light the floor from its own sources plus the player's lantern at
    // the spawn point.
    let sources = level
        .light_emitters()
        .chain(std::iter::once((level.spawn_point(), 3)))
        .collect::<Vec<_>>();
    let lighting = LightMap::compute(
        level.width(),
        level.height(),
        sources,
        SYMBOL_ASPECT,
        false,
    );

    let mut out = String::new();
    for y in 0..level.height() {
        for x in 0..level.width() {
            let pos = Position::new(x, y);
            let light = lighting.get(pos);
            if light == 0 {
                out.push(' ');
                continue;
            }
            let (tile, obj, enemy) = level.get_all(pos)?;
            let ch = if let Some(enemy) = enemy {
                enemy.glyph()
            } else if let Some(obj) = obj {
                obj.glyph()
            } else if tile == Tile::Wall {
                WALL_SHADES[(light - 1) as usize]
            } else {
                tile.glyph()
            };
            out.push(ch);
        }
        out.push('\n');
    }
    print!("{out}");
    println!(
        "spawn {} | {} lights | depth {depth} seed {seed}",
        level.spawn_point(),
        level.light_sources().count(),
    );
    Ok(())
}
