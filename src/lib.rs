//! Netbreach - maze-infiltration roguelike core
//!
//! You are a virus loose in a bank's network: procedurally carved
//! labyrinths, defense processes to hack, and a darkness only your
//! dropped lanterns push back. This crate is the world core — grid,
//! generation, occupancy, lighting; rendering and input live elsewhere.

pub mod entities;
pub mod world;

// Re-export commonly used types
pub use entities::{Enemy, GameObject, ObjectKind, Upgrade};
pub use world::{GridMap, Level, LightMap, Position, Tile, WorldError};
