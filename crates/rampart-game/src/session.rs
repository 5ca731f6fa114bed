//! The session-wide entity-group registry.
//!
//! One [`Session`] exists per running match. It owns one group per entity
//! category plus one unit group per team, and wires the removal-sync
//! listener onto every group before the first gameplay tick. All group
//! access goes through the session object rather than ambient globals, so
//! tests build isolated sessions freely.

use std::sync::atomic::{AtomicBool, Ordering};

use rampart_entities::{
    Bullet, Effect, EntityGroup, Fire, GroundEffect, GroupVisitor, IdAllocator, Player, Puddle,
    Shield, Team, TileEntity, Unit,
};
use rampart_multiplayer::{RemovalSender, RemovalSync, RoleHandle};

/// Latch marking a live session in this process. Re-initializing while a
/// session still owns non-empty groups is undefined, so init refuses until
/// the previous session is dropped.
static SESSION_LIVE: AtomicBool = AtomicBool::new(false);

/// Session bootstrap failures. These abort startup; they are never
/// recovered from at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// [`Session::initialize`] ran twice without an intervening teardown.
    #[error("a session is already live in this process; drop it before initializing another")]
    AlreadyInitialized,
}

/// Process-wide simulation state: every entity group, and the id allocator
/// that numbers networked entities.
///
/// Mapping follows each category's role in multiplayer reconciliation:
/// players, bullets, puddles, fires, and units resolve by id; tiles,
/// effects, ground effects, and shields are local-only and skip the index.
pub struct Session {
    pub players: EntityGroup<Player>,
    pub tiles: EntityGroup<TileEntity>,
    pub bullets: EntityGroup<Bullet>,
    pub effects: EntityGroup<Effect>,
    pub ground_effects: EntityGroup<GroundEffect>,
    pub puddles: EntityGroup<Puddle>,
    pub shields: EntityGroup<Shield>,
    pub fires: EntityGroup<Fire>,
    units: [EntityGroup<Unit>; Team::COUNT],
    pub ids: IdAllocator,
}

impl Session {
    /// Creates every entity group and attaches the removal-sync listener to
    /// each one. Called once during application startup, after role
    /// detection and before the first gameplay tick.
    ///
    /// Fails with [`SessionError::AlreadyInitialized`] if a live session
    /// already exists; dropping the `Session` is the teardown that re-arms
    /// initialization.
    pub fn initialize(role: RoleHandle, removals: RemovalSender) -> Result<Self, SessionError> {
        if SESSION_LIVE
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SessionError::AlreadyInitialized);
        }

        let mut session = Session {
            players: EntityGroup::new(true),
            tiles: EntityGroup::new(false),
            bullets: EntityGroup::new(true),
            effects: EntityGroup::new(false),
            ground_effects: EntityGroup::new(false),
            puddles: EntityGroup::new(true),
            shields: EntityGroup::new(false),
            fires: EntityGroup::new(true),
            units: std::array::from_fn(|_| EntityGroup::new(true)),
            ids: IdAllocator::new(),
        };

        session.for_each_group(&mut RemovalSync::new(role, removals));
        tracing::info!(
            groups = 8 + Team::COUNT,
            teams = Team::COUNT,
            "session entity groups initialized, removal sync attached"
        );
        Ok(session)
    }

    /// The unit group for one team. Teams index a fixed-size table; the
    /// closed enum is the only accepted key.
    pub fn unit_group(&self, team: Team) -> &EntityGroup<Unit> {
        &self.units[team.ordinal()]
    }

    /// Mutable variant of [`unit_group`](Session::unit_group).
    pub fn unit_group_mut(&mut self, team: Team) -> &mut EntityGroup<Unit> {
        &mut self.units[team.ordinal()]
    }

    /// Visits every group, including each team's unit group. This is the
    /// uniform enumeration bootstrap uses to attach the removal hook, and
    /// teardown uses to clear.
    pub fn for_each_group(&mut self, visitor: &mut impl GroupVisitor) {
        visitor.visit(&mut self.players);
        visitor.visit(&mut self.tiles);
        visitor.visit(&mut self.bullets);
        visitor.visit(&mut self.effects);
        visitor.visit(&mut self.ground_effects);
        visitor.visit(&mut self.puddles);
        visitor.visit(&mut self.shields);
        visitor.visit(&mut self.fires);
        for group in &mut self.units {
            visitor.visit(group);
        }
    }

    /// Silently clears every group (map change, match end). Not a stream of
    /// simulated removals: removal listeners do not fire.
    pub fn clear_entities(&mut self) {
        struct ClearAll;
        impl GroupVisitor for ClearAll {
            fn visit<E: rampart_entities::Entity>(&mut self, group: &mut EntityGroup<E>) {
                group.clear();
            }
        }
        self.for_each_group(&mut ClearAll);
        tracing::debug!("all entity groups cleared");
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        SESSION_LIVE.store(false, Ordering::Release);
    }
}
