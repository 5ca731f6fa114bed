//! Entity identity, team registry, and typed entity groups.
//!
//! Every simulated object lives in exactly one [`EntityGroup`] for its
//! category. Groups that participate in multiplayer reconciliation are
//! created *mapped* and maintain an id index for O(1) lookup; purely local
//! categories skip the index entirely.

mod group;
mod id;
mod team;
mod types;

pub use group::{EntityGroup, GroupError, GroupVisitor, RemovalListener};
pub use id::{EntityId, IdAllocator};
pub use team::Team;
pub use types::{
    Bullet, Effect, Entity, Fire, GroundEffect, Player, Puddle, Shield, TileEntity, Unit,
};
