//! The [`Entity`] capability trait and the concrete entity categories.
//!
//! Categories that remote peers track (players, units, bullets, puddles,
//! fires) declare [`Entity::SYNCABLE`] so the removal-sync path can decide
//! at compile time whether a removal is worth reporting. Simulation behavior
//! (ballistics, pathfinding, spreading fire) lives elsewhere; these types
//! carry the state the group layer and tests need.

use glam::{IVec2, Vec2};

use crate::{EntityId, Team};

/// A simulated object owned by exactly one [`EntityGroup`](crate::EntityGroup).
/// Entity types are plain owned data (`'static`) so groups can box removal
/// listeners over them.
pub trait Entity: 'static {
    /// Whether this category's identity and removal are meaningful to
    /// remote peers. Declared per type, never probed at runtime.
    const SYNCABLE: bool = false;

    /// The entity's process-unique id.
    fn id(&self) -> EntityId;
}

// ---------------------------------------------------------------------------
// Syncable categories
// ---------------------------------------------------------------------------

/// A connected player's avatar.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: EntityId,
    /// Display name, as validated at join time.
    pub name: String,
    pub team: Team,
    pub pos: Vec2,
}

impl Player {
    pub fn new(id: EntityId, name: impl Into<String>, team: Team, pos: Vec2) -> Self {
        Self {
            id,
            name: name.into(),
            team,
            pos,
        }
    }
}

impl Entity for Player {
    const SYNCABLE: bool = true;

    fn id(&self) -> EntityId {
        self.id
    }
}

/// A combat unit belonging to one team.
#[derive(Debug, Clone)]
pub struct Unit {
    pub id: EntityId,
    pub team: Team,
    pub pos: Vec2,
    pub health: f32,
}

impl Unit {
    pub fn new(id: EntityId, team: Team, pos: Vec2, health: f32) -> Self {
        Self {
            id,
            team,
            pos,
            health,
        }
    }

    pub fn dead(&self) -> bool {
        self.health <= 0.0
    }
}

impl Entity for Unit {
    const SYNCABLE: bool = true;

    fn id(&self) -> EntityId {
        self.id
    }
}

/// An in-flight projectile.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub id: EntityId,
    pub team: Team,
    pub pos: Vec2,
    pub velocity: Vec2,
    pub damage: f32,
}

impl Bullet {
    pub fn new(id: EntityId, team: Team, pos: Vec2, velocity: Vec2, damage: f32) -> Self {
        Self {
            id,
            team,
            pos,
            velocity,
            damage,
        }
    }
}

impl Entity for Bullet {
    const SYNCABLE: bool = true;

    fn id(&self) -> EntityId {
        self.id
    }
}

/// A liquid puddle on a tile. Evaporates over time.
#[derive(Debug, Clone)]
pub struct Puddle {
    pub id: EntityId,
    /// Tile the puddle sits on.
    pub tile: IVec2,
    /// Remaining liquid amount.
    pub amount: f32,
}

impl Puddle {
    pub fn new(id: EntityId, tile: IVec2, amount: f32) -> Self {
        Self { id, tile, amount }
    }
}

impl Entity for Puddle {
    const SYNCABLE: bool = true;

    fn id(&self) -> EntityId {
        self.id
    }
}

/// A burning tile. Burns out over time.
#[derive(Debug, Clone)]
pub struct Fire {
    pub id: EntityId,
    /// Tile that is on fire.
    pub tile: IVec2,
    /// Remaining burn time in ticks.
    pub time: f32,
}

impl Fire {
    pub fn new(id: EntityId, tile: IVec2, time: f32) -> Self {
        Self { id, tile, time }
    }
}

impl Entity for Fire {
    const SYNCABLE: bool = true;

    fn id(&self) -> EntityId {
        self.id
    }
}

// ---------------------------------------------------------------------------
// Local-only categories
// ---------------------------------------------------------------------------

/// The simulation half of a placed block (turret, conveyor, core). Tile
/// state reconciles through the block protocol, not entity removal sync.
#[derive(Debug, Clone)]
pub struct TileEntity {
    pub id: EntityId,
    pub tile: IVec2,
    pub health: f32,
}

impl TileEntity {
    pub fn new(id: EntityId, tile: IVec2, health: f32) -> Self {
        Self { id, tile, health }
    }
}

impl Entity for TileEntity {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// A purely cosmetic effect (explosion flash, smoke). Never leaves the
/// local process.
#[derive(Debug, Clone)]
pub struct Effect {
    pub id: EntityId,
    pub pos: Vec2,
    /// Remaining lifetime in ticks.
    pub lifetime: f32,
}

impl Effect {
    pub fn new(id: EntityId, pos: Vec2, lifetime: f32) -> Self {
        Self { id, pos, lifetime }
    }
}

impl Entity for Effect {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// A decal-style effect drawn under units (scorch marks, craters).
#[derive(Debug, Clone)]
pub struct GroundEffect {
    pub id: EntityId,
    pub pos: Vec2,
    pub lifetime: f32,
}

impl GroundEffect {
    pub fn new(id: EntityId, pos: Vec2, lifetime: f32) -> Self {
        Self { id, pos, lifetime }
    }
}

impl Entity for GroundEffect {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// A force-projector dome. Derived from its projector tile, which is the
/// unit of reconciliation, so the shield itself stays local.
#[derive(Debug, Clone)]
pub struct Shield {
    pub id: EntityId,
    pub pos: Vec2,
    pub radius: f32,
}

impl Shield {
    pub fn new(id: EntityId, pos: Vec2, radius: f32) -> Self {
        Self { id, pos, radius }
    }
}

impl Entity for Shield {
    fn id(&self) -> EntityId {
        self.id
    }
}
