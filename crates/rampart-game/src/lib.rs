//! Session state for a Rampart match: the entity-group registry and its
//! bootstrap, plus match-level constants.

mod session;

pub use session::{Session, SessionError};

use rampart_entities::Team;

/// Team assigned to joining players.
pub const DEFAULT_TEAM: Team = Team::Blue;

/// Team that attack waves spawn on.
pub const WAVE_TEAM: Team = Team::Red;

/// Maximum chat message length.
pub const MAX_CHAT_LENGTH: usize = 150;

/// Maximum player name length in bytes.
pub const MAX_NAME_LENGTH: usize = 40;
