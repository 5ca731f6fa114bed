//! The removal-synchronization listener.
//!
//! Bullets expire, units die, puddles evaporate: many subsystems remove
//! entities, and none of them should know the network exists. Instead the
//! session attaches this one listener to every group at bootstrap, so any
//! removal of a syncable entity while we are a client lands in the net
//! client's pending-removal queue and no removal path can forget to notify
//! the server.

use rampart_entities::{Entity, EntityGroup, GroupVisitor};

use crate::{RemovalSender, RoleHandle};

/// Installs the shared removal hook on each group it visits.
///
/// Collaborators are injected here rather than captured from globals, so an
/// isolated test session can wire its own role handle and queue.
pub struct RemovalSync {
    role: RoleHandle,
    removals: RemovalSender,
}

impl RemovalSync {
    pub fn new(role: RoleHandle, removals: RemovalSender) -> Self {
        Self { role, removals }
    }
}

impl GroupVisitor for RemovalSync {
    fn visit<E: Entity>(&mut self, group: &mut EntityGroup<E>) {
        let role = self.role.clone();
        let removals = self.removals.clone();
        group.set_removal_listener(Box::new(move |entity: &E| {
            // Capability is a compile-time property of the category; role is
            // checked per removal because a connection may open mid-session.
            if E::SYNCABLE && role.is_client() {
                tracing::trace!(id = %entity.id(), "queueing removed entity for reconciliation");
                removals.send(entity.id());
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use rampart_entities::{EntityId, IdAllocator, Player, Shield, Team};

    use super::*;
    use crate::{NetClient, Role};

    fn synced_group<E: Entity>(mapped: bool, role: &RoleHandle, client: &NetClient) -> EntityGroup<E> {
        let mut group = EntityGroup::new(mapped);
        RemovalSync::new(role.clone(), client.removal_sender()).visit(&mut group);
        group
    }

    fn player(id: u32) -> Player {
        Player::new(EntityId(id), "probe", Team::Blue, glam::Vec2::ZERO)
    }

    #[test]
    fn test_client_removal_of_syncable_entity_is_queued_in_order() {
        let role = RoleHandle::new(Role::Client);
        let client = NetClient::new();
        let mut group = synced_group::<Player>(true, &role, &client);

        for id in [11, 12, 13] {
            group.add(player(id)).unwrap();
        }
        group.remove(EntityId(12));
        group.remove(EntityId(11));

        assert_eq!(
            client.drain_removed_entities(),
            vec![EntityId(12), EntityId(11)]
        );
    }

    #[test]
    fn test_server_and_offline_roles_never_queue() {
        for role in [Role::Server, Role::Offline] {
            let role = RoleHandle::new(role);
            let client = NetClient::new();
            let mut group = synced_group::<Player>(true, &role, &client);

            group.add(player(1)).unwrap();
            group.remove(EntityId(1));

            assert!(client.drain_removed_entities().is_empty());
        }
    }

    #[test]
    fn test_non_syncable_category_never_queues() {
        let role = RoleHandle::new(Role::Client);
        let client = NetClient::new();
        let mut group = synced_group::<Shield>(false, &role, &client);

        group
            .add(Shield::new(EntityId(2), glam::Vec2::ZERO, 40.0))
            .unwrap();
        group.remove(EntityId(2));

        assert!(client.drain_removed_entities().is_empty());
    }

    #[test]
    fn test_role_is_read_at_removal_time() {
        let role = RoleHandle::offline();
        let client = NetClient::new();
        let mut group = synced_group::<Player>(true, &role, &client);

        let mut ids = IdAllocator::new();
        let first = ids.next_id();
        let second = ids.next_id();
        group.add(player(first.0)).unwrap();
        group.add(player(second.0)).unwrap();

        group.remove(first);
        assert!(client.drain_removed_entities().is_empty());

        // Connect mid-session: the already-attached listener picks it up.
        role.set(Role::Client);
        group.remove(second);
        assert_eq!(client.drain_removed_entities(), vec![second]);
    }
}
