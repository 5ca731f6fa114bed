//! Client/server role state and removal synchronization.
//!
//! A client must tell the server which entities it removed locally so the
//! authoritative state can reconcile them. This crate provides the role
//! query, the net client's pending-removal queue, and the one listener
//! (installed uniformly on every entity group) that feeds it.

mod client;
mod removal_sync;
mod role;

pub use client::{NetClient, RemovalSender};
pub use removal_sync::RemovalSync;
pub use role::{Role, RoleHandle};
