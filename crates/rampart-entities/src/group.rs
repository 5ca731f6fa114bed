//! Typed entity containers with optional identity lookup.
//!
//! An [`EntityGroup`] owns every live entity of one category. Mapped groups
//! additionally maintain an id index so networked entities resolve in O(1).
//! Removal is observable through a single replaceable listener; the session
//! installs one uniform listener on every group at bootstrap so no removal
//! path can bypass the network layer.

use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

use crate::{Entity, EntityId};

/// Hook invoked with each entity removed from a group, after the entity has
/// left both membership and the id index.
pub type RemovalListener<E> = Box<dyn FnMut(&E) + Send>;

/// Contract violations on group operations. These are programmer errors and
/// callers are expected to fail fast rather than swallow them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GroupError {
    /// `add` on a mapped group that already holds this id. Ignoring this
    /// would corrupt the id index.
    #[error("entity id {0} already present in mapped group")]
    DuplicateIdentity(EntityId),

    /// `by_id` on a group created without mapping. Distinct from a missing
    /// entity: the caller asked a question this group cannot answer.
    #[error("identity lookup is disabled for this group")]
    LookupDisabled,
}

/// Container for all live entities of one category.
///
/// Storage is a dense vector with swap-removal; mapped groups keep an
/// id-to-slot index that mirrors membership exactly after every mutation.
/// All mutation happens on the simulation thread; the group itself is
/// single-owner and never locked.
pub struct EntityGroup<E: Entity> {
    entities: Vec<E>,
    index: Option<FxHashMap<EntityId, usize>>,
    removal_listener: Option<RemovalListener<E>>,
}

impl<E: Entity> EntityGroup<E> {
    /// Creates an empty group. `mapped = false` groups never allocate an id
    /// index; categories with no networked members skip that cost entirely.
    pub fn new(mapped: bool) -> Self {
        Self {
            entities: Vec::new(),
            index: mapped.then(FxHashMap::default),
            removal_listener: None,
        }
    }

    /// Whether this group maintains an id index.
    pub fn mapped(&self) -> bool {
        self.index.is_some()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Inserts an entity. On a mapped group the entity's id must be fresh;
    /// a duplicate fails with [`GroupError::DuplicateIdentity`], membership
    /// is left untouched, and the rejected entity is dropped.
    pub fn add(&mut self, entity: E) -> Result<(), GroupError> {
        if let Some(index) = &mut self.index {
            match index.entry(entity.id()) {
                Entry::Occupied(_) => return Err(GroupError::DuplicateIdentity(entity.id())),
                Entry::Vacant(slot) => {
                    slot.insert(self.entities.len());
                }
            }
        }
        self.entities.push(entity);
        Ok(())
    }

    /// Removes the entity with the given id and returns it, or `None` if it
    /// is not a member. Fires the removal listener exactly once per
    /// successful removal, strictly after the entity is gone from the id
    /// index: a listener can never look up a half-removed entity.
    pub fn remove(&mut self, id: EntityId) -> Option<E> {
        let slot = match &mut self.index {
            Some(index) => index.remove(&id)?,
            None => self.entities.iter().position(|e| e.id() == id)?,
        };

        let removed = self.entities.swap_remove(slot);
        // swap_remove moved the former tail into `slot`; re-point its index.
        if let Some(index) = &mut self.index
            && let Some(moved) = self.entities.get(slot)
        {
            index.insert(moved.id(), slot);
        }

        if let Some(listener) = &mut self.removal_listener {
            listener(&removed);
        }
        Some(removed)
    }

    /// O(1) expected lookup by id. `Ok(None)` means the entity is absent;
    /// [`GroupError::LookupDisabled`] means this group was created without
    /// mapping and the call itself is a mistake.
    pub fn by_id(&self, id: EntityId) -> Result<Option<&E>, GroupError> {
        match &self.index {
            Some(index) => Ok(index.get(&id).map(|&slot| &self.entities[slot])),
            None => Err(GroupError::LookupDisabled),
        }
    }

    /// Mutable variant of [`by_id`](EntityGroup::by_id).
    pub fn by_id_mut(&mut self, id: EntityId) -> Result<Option<&mut E>, GroupError> {
        match &self.index {
            Some(index) => {
                let slot = index.get(&id).copied();
                Ok(slot.map(|slot| &mut self.entities[slot]))
            }
            None => Err(GroupError::LookupDisabled),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut E> {
        self.entities.iter_mut()
    }

    /// Drops every entity without firing the removal listener. Bulk
    /// teardown (map change, session end) is not a stream of simulated
    /// removals and must not feed the network path.
    pub fn clear(&mut self) {
        self.entities.clear();
        if let Some(index) = &mut self.index {
            index.clear();
        }
    }

    /// Installs the removal hook. At most one per group; the last listener
    /// attached wins.
    pub fn set_removal_listener(&mut self, listener: RemovalListener<E>) {
        self.removal_listener = Some(listener);
    }
}

/// Visitor over every group in a registry, regardless of entity category.
/// This is the seam the session uses to attach the shared removal-sync hook
/// uniformly at bootstrap.
pub trait GroupVisitor {
    fn visit<E: Entity>(&mut self, group: &mut EntityGroup<E>);
}
