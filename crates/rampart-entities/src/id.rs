//! Entity identity: process-unique ids and the session-owned allocator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a simulated entity, stable for the entity's
/// lifetime. For network-syncable categories this is the value remote peers
/// use to name the entity, so it is what the outgoing serializer encodes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id allocator. One instance is owned by the session; entities
/// are never numbered from ambient process state, so parallel test sessions
/// stay independent.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Creates an allocator starting at id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the next id.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}
