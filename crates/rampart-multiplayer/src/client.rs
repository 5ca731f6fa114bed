//! The net client collaborator: a queue of locally-removed entity ids
//! awaiting transmission to the server.

use crossbeam_channel::{Receiver, Sender, unbounded};
use rampart_entities::EntityId;

/// Append-only handle onto the removal queue. Clonable and `Send`, so the
/// session can bake one into each group's removal listener at attachment
/// time instead of reaching for process globals.
#[derive(Debug, Clone)]
pub struct RemovalSender {
    tx: Sender<EntityId>,
}

impl RemovalSender {
    /// Appends an id. Never blocks. Delivery is best-effort: if the owning
    /// [`NetClient`] is already gone the id is silently discarded, matching
    /// the contract that removal notifications are not re-sent.
    pub fn send(&self, id: EntityId) {
        let _ = self.tx.send(id);
    }
}

/// Client-side networking collaborator.
///
/// Only the removal-reconciliation surface lives here; full state sync is
/// the transport's problem. Queue policy: unbounded, appends never block,
/// entries are never dropped. The network send step drains every outgoing
/// frame, so depth stays bounded by removal volume per frame. Appends come
/// from the simulation thread, drains from the network send context; the
/// channel is the one cross-context hand-off in the core.
#[derive(Debug)]
pub struct NetClient {
    removals_tx: Sender<EntityId>,
    removals_rx: Receiver<EntityId>,
}

impl NetClient {
    pub fn new() -> Self {
        let (removals_tx, removals_rx) = unbounded();
        Self {
            removals_tx,
            removals_rx,
        }
    }

    /// Records that an entity was removed locally and must be reported in
    /// the next outgoing message. Non-blocking.
    pub fn add_removed_entity(&self, id: EntityId) {
        let _ = self.removals_tx.send(id);
    }

    /// A clonable append handle for removal listeners.
    pub fn removal_sender(&self) -> RemovalSender {
        RemovalSender {
            tx: self.removals_tx.clone(),
        }
    }

    /// Returns and clears every pending id, in exact append order. Never
    /// blocks; returns an empty vec when nothing is pending. Ids appended
    /// concurrently with the drain land in the next one.
    pub fn drain_removed_entities(&self) -> Vec<EntityId> {
        self.removals_rx.try_iter().collect()
    }

    /// Number of ids currently pending.
    pub fn pending_removals(&self) -> usize {
        self.removals_rx.len()
    }
}

impl Default for NetClient {
    fn default() -> Self {
        Self::new()
    }
}
