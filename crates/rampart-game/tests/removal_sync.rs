//! End-to-end removal synchronization: session bootstrap through queue
//! drain, across the entities, multiplayer, and game crates.

use std::sync::{Mutex, MutexGuard};

use glam::Vec2;
use rampart_entities::{Effect, EntityId, Player, Team, Unit};
use rampart_game::{DEFAULT_TEAM, Session};
use rampart_multiplayer::{NetClient, Role, RoleHandle};

// Sessions are process-exclusive; serialize the tests that create them.
static SESSION_TESTS: Mutex<()> = Mutex::new(());

fn session_lock() -> MutexGuard<'static, ()> {
    SESSION_TESTS.lock().unwrap_or_else(|e| e.into_inner())
}

fn client_session() -> (Session, NetClient, RoleHandle) {
    let role = RoleHandle::new(Role::Client);
    let client = NetClient::new();
    let session = Session::initialize(role.clone(), client.removal_sender()).unwrap();
    (session, client, role)
}

#[test]
fn client_player_removal_reaches_the_queue() {
    let _guard = session_lock();
    let (mut session, client, _role) = client_session();

    session
        .players
        .add(Player::new(EntityId(7), "p1", DEFAULT_TEAM, Vec2::ZERO))
        .unwrap();
    assert!(session.players.by_id(EntityId(7)).unwrap().is_some());

    session.players.remove(EntityId(7));

    assert!(session.players.by_id(EntityId(7)).unwrap().is_none());
    assert_eq!(client.drain_removed_entities(), vec![EntityId(7)]);
}

#[test]
fn decorative_effect_removal_stays_local() {
    let _guard = session_lock();
    let (mut session, client, _role) = client_session();

    let id = session.ids.next_id();
    session.effects.add(Effect::new(id, Vec2::ZERO, 30.0)).unwrap();
    session.effects.remove(id);

    assert!(client.drain_removed_entities().is_empty());
}

#[test]
fn server_removals_stay_local() {
    let _guard = session_lock();
    let role = RoleHandle::new(Role::Server);
    let client = NetClient::new();
    let mut session = Session::initialize(role, client.removal_sender()).unwrap();

    let id = session.ids.next_id();
    session
        .players
        .add(Player::new(id, "host", DEFAULT_TEAM, Vec2::ZERO))
        .unwrap();
    session.players.remove(id);

    assert!(client.drain_removed_entities().is_empty());
}

#[test]
fn unit_groups_cover_every_team() {
    let _guard = session_lock();
    let (mut session, _client, _role) = client_session();

    for team in Team::ALL {
        let id = session.ids.next_id();
        session
            .unit_group_mut(team)
            .add(Unit::new(id, team, Vec2::ZERO, 100.0))
            .unwrap();
    }

    for team in Team::ALL {
        assert_eq!(session.unit_group(team).len(), 1);
        let unit = session.unit_group(team).iter().next().unwrap();
        assert_eq!(unit.team, team);
    }
}

#[test]
fn removals_drain_in_removal_order_across_groups() {
    let _guard = session_lock();
    let (mut session, client, _role) = client_session();

    let player = session.ids.next_id();
    let unit = session.ids.next_id();
    let fire = session.ids.next_id();
    session
        .players
        .add(Player::new(player, "p", DEFAULT_TEAM, Vec2::ZERO))
        .unwrap();
    session
        .unit_group_mut(Team::Red)
        .add(Unit::new(unit, Team::Red, Vec2::ZERO, 50.0))
        .unwrap();
    session
        .fires
        .add(rampart_entities::Fire::new(fire, glam::IVec2::ZERO, 10.0))
        .unwrap();

    // Removal order, not spawn order, is what the server hears.
    session.fires.remove(fire);
    session.players.remove(player);
    session.unit_group_mut(Team::Red).remove(unit);

    assert_eq!(client.drain_removed_entities(), vec![fire, player, unit]);

    // A drain with nothing new pending is empty.
    assert!(client.drain_removed_entities().is_empty());
}

#[test]
fn network_context_drains_while_simulation_removes() {
    let _guard = session_lock();
    let (mut session, client, _role) = client_session();

    let ids: Vec<EntityId> = (0..64).map(|_| session.ids.next_id()).collect();
    for &id in &ids {
        session
            .players
            .add(Player::new(id, "p", DEFAULT_TEAM, Vec2::ZERO))
            .unwrap();
    }

    std::thread::scope(|scope| {
        let drainer = scope.spawn(|| {
            let mut drained = Vec::new();
            while drained.len() < ids.len() {
                drained.extend(client.drain_removed_entities());
            }
            drained
        });

        for &id in &ids {
            session.players.remove(id);
        }

        let drained = drainer.join().unwrap();
        assert_eq!(drained, ids);
    });
}
