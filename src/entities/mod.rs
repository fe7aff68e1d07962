//! Entities that occupy level tiles
//!
//! Objects (light sources, chests, heals) and enemies are closed sum
//! types rather than trait objects; every consumer matches exhaustively.

pub mod enemies;

pub use enemies::Enemy;

use std::sync::atomic::{AtomicU64, Ordering};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::world::Position;

/// Unique identity of a placed entity.
///
/// Removal from the occupancy tables is identity-checked: a stale handle
/// whose tile has since been taken by something else removes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(u64);

impl EntityId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        EntityId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Per-kind data of a non-enemy entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Dropped lantern lighting its surroundings.
    LightSource { radius: i32 },
    /// Yields a random upgrade on collection.
    Chest,
    /// Restores the player's health on collection.
    Heal,
}

/// A pickup or light source sitting on a tile
#[derive(Debug, Clone)]
pub struct GameObject {
    id: EntityId,
    pos: Position,
    kind: ObjectKind,
}

impl GameObject {
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            id: EntityId::next(),
            pos: Position::default(),
            kind,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub(crate) fn move_to(&mut self, pos: Position) {
        self.pos = pos;
    }

    /// Lighting radius, if this object emits light.
    pub fn light_radius(&self) -> Option<i32> {
        match self.kind {
            ObjectKind::LightSource { radius } => Some(radius),
            _ => None,
        }
    }

    pub fn glyph(&self) -> char {
        match self.kind {
            ObjectKind::LightSource { .. } => 'Ï',
            ObjectKind::Chest => '■',
            ObjectKind::Heal => '+',
        }
    }
}

/// What a chest yields when collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Upgrade {
    LightLevel,
    LightsAmount,
    MaxHp,
    BattleTime,
}

impl Upgrade {
    /// Roll the upgrade contained in a chest, uniformly over all kinds.
    pub fn random(rng: &mut impl Rng) -> Self {
        *[
            Upgrade::LightLevel,
            Upgrade::LightsAmount,
            Upgrade::BattleTime,
            Upgrade::MaxHp,
        ]
        .choose(rng)
        .unwrap_or(&Upgrade::LightLevel)
    }
}
