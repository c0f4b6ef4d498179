use std::fmt;

/// Stable, 1-based identifier of a player within one match.
///
/// Players are looked up by id, never by roster position, so renames and
/// turn rotation cannot confuse two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Id assigned to the player at the given roster position.
    #[inline]
    pub const fn for_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One of the two sides in a team game (and in Snooker singles, where each
/// player is alone on a side).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TeamId {
    A,
    B,
}

impl TeamId {
    /// Teams alternate by roster position: even → A, odd → B.
    #[inline]
    pub const fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Self::A } else { Self::B }
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Display label, e.g. `Team A`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "Team A",
            Self::B => "Team B",
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wall-clock instant attached to events, in Unix milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const EPOCH: Self = Self(0);

    pub const fn millis(self) -> i64 {
        self.0
    }
}

/// Cached per-team totals.
///
/// In Century team games these are derived from player scores and must be
/// recomputed from the roster after every change. In Snooker they are the
/// frame totals of each side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamScores {
    pub a: i32,
    pub b: i32,
}

impl TeamScores {
    pub const ZERO: Self = Self { a: 0, b: 0 };

    pub const fn get(&self, team: TeamId) -> i32 {
        match team {
            TeamId::A => self.a,
            TeamId::B => self.b,
        }
    }

    pub fn get_mut(&mut self, team: TeamId) -> &mut i32 {
        match team {
            TeamId::A => &mut self.a,
            TeamId::B => &mut self.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teams_alternate_by_index() {
        let teams: Vec<TeamId> = (0..6).map(TeamId::for_index).collect();
        assert_eq!(
            teams,
            vec![TeamId::A, TeamId::B, TeamId::A, TeamId::B, TeamId::A, TeamId::B]
        );
        assert_eq!(TeamId::A.opponent(), TeamId::B);
        assert_eq!(TeamId::B.to_string(), "Team B");
    }

    #[test]
    fn player_ids_are_one_based() {
        assert_eq!(PlayerId::for_index(0), PlayerId(1));
        assert_eq!(PlayerId::for_index(7), PlayerId(8));
    }
}
