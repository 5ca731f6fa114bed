//! The fixed set of teams and their ordinals.

use serde::{Deserialize, Serialize};

/// One of the fixed sides in a match. The set is closed at compile time and
/// a team's ordinal is only ever used to index fixed-size per-team tables
/// (e.g. the session's unit groups).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    /// The default team for joining players.
    Blue,
    /// The attacking wave team.
    Red,
    Green,
    Purple,
}

impl Team {
    /// Number of teams. Sizes every per-team table.
    pub const COUNT: usize = 4;

    /// All teams in ordinal order.
    pub const ALL: [Team; Team::COUNT] = [Team::Blue, Team::Red, Team::Green, Team::Purple];

    /// This team's index in `[0, COUNT)`.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Bounds-checked inverse of [`ordinal`](Team::ordinal). Raw integers
    /// coming from outside (save data, wire frames) must pass through here
    /// before indexing any per-team table.
    pub fn from_ordinal(ordinal: usize) -> Option<Team> {
        Team::ALL.get(ordinal).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_are_unique_and_in_range() {
        let mut seen = [false; Team::COUNT];
        for team in Team::ALL {
            let ord = team.ordinal();
            assert!(ord < Team::COUNT);
            assert!(!seen[ord], "ordinal {ord} assigned twice");
            seen[ord] = true;
        }
    }

    #[test]
    fn test_from_ordinal_roundtrip() {
        for team in Team::ALL {
            assert_eq!(Team::from_ordinal(team.ordinal()), Some(team));
        }
    }

    #[test]
    fn test_from_ordinal_rejects_out_of_range() {
        assert_eq!(Team::from_ordinal(Team::COUNT), None);
        assert_eq!(Team::from_ordinal(usize::MAX), None);
    }
}
