//! Network role: is this process a client, a server, or neither?

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// The process's current network role. Client and server are mutually
/// exclusive; offline covers single-player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Single-player / not connected.
    Offline,
    /// Connected to a remote authoritative server.
    Client,
    /// Hosting: this process owns the authoritative state.
    Server,
}

/// Cheaply clonable shared view of the current [`Role`].
///
/// The role changes when a connection opens or closes, which can happen
/// well after session bootstrap, so consumers hold a handle and read it at
/// decision time instead of capturing a snapshot. The simulation core only
/// ever reads; the transport layer writes.
#[derive(Debug, Clone)]
pub struct RoleHandle {
    role: Arc<AtomicU8>,
}

const ROLE_OFFLINE: u8 = 0;
const ROLE_CLIENT: u8 = 1;
const ROLE_SERVER: u8 = 2;

impl RoleHandle {
    /// Creates a handle with the given starting role.
    pub fn new(role: Role) -> Self {
        let handle = Self {
            role: Arc::new(AtomicU8::new(ROLE_OFFLINE)),
        };
        handle.set(role);
        handle
    }

    /// Creates an offline handle.
    pub fn offline() -> Self {
        Self::new(Role::Offline)
    }

    pub fn get(&self) -> Role {
        // The role byte is independent state; no ordering with other data.
        match self.role.load(Ordering::Relaxed) {
            ROLE_CLIENT => Role::Client,
            ROLE_SERVER => Role::Server,
            _ => Role::Offline,
        }
    }

    pub fn set(&self, role: Role) {
        let raw = match role {
            Role::Offline => ROLE_OFFLINE,
            Role::Client => ROLE_CLIENT,
            Role::Server => ROLE_SERVER,
        };
        self.role.store(raw, Ordering::Relaxed);
    }

    pub fn is_client(&self) -> bool {
        self.get() == Role::Client
    }

    pub fn is_server(&self) -> bool {
        self.get() == Role::Server
    }

    pub fn is_offline(&self) -> bool {
        self.get() == Role::Offline
    }
}

impl Default for RoleHandle {
    fn default() -> Self {
        Self::offline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_given_role() {
        assert!(RoleHandle::offline().is_offline());
        assert!(RoleHandle::new(Role::Client).is_client());
        assert!(RoleHandle::new(Role::Server).is_server());
    }

    #[test]
    fn test_roles_are_mutually_exclusive() {
        let handle = RoleHandle::new(Role::Client);
        assert!(handle.is_client());
        assert!(!handle.is_server());
        assert!(!handle.is_offline());
    }

    #[test]
    fn test_clones_share_state() {
        let handle = RoleHandle::offline();
        let view = handle.clone();
        handle.set(Role::Server);
        assert_eq!(view.get(), Role::Server);
    }
}
