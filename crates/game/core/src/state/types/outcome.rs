use std::fmt;

use super::{PlayerId, TeamId};

/// Something that can hold a score: a single player or a whole team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player(PlayerId),
    Team(TeamId),
}

/// Decided result of a frame or game.
///
/// "No result yet" is `Option::<Winner>::None` on the match state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    Player(PlayerId),
    Team(TeamId),
    Draw,
}

impl Winner {
    pub const fn is_draw(&self) -> bool {
        matches!(self, Self::Draw)
    }
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::Player(id) => Self::Player(id),
            Side::Team(team) => Self::Team(team),
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player(id) => write!(f, "player {id}"),
            Self::Team(team) => write!(f, "{team}"),
            Self::Draw => f.write_str("draw"),
        }
    }
}

/// A side paired with its total, as recorded in end-of-frame events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideScore {
    pub side: Side,
    pub score: i32,
}
