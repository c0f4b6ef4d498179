use arrayvec::ArrayVec;

use crate::config::GameConfig;

use super::{PlayerId, TeamId, TeamScores};

/// A participant in a match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: PlayerId,
    /// Free-form name; empty means "use the fallback label".
    pub name: String,
    /// Current break in Snooker, cumulative total in Century.
    pub score: i32,
    /// Snooker only: best break finalized so far.
    pub highest_break: i32,
    pub team: Option<TeamId>,
}

impl Player {
    pub fn new(id: PlayerId, team: Option<TeamId>) -> Self {
        Self {
            id,
            name: String::new(),
            score: 0,
            highest_break: 0,
            team,
        }
    }

    /// Name shown to users, falling back to `Player {id}` when unnamed.
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("Player {}", self.id.0)
        } else {
            self.name.clone()
        }
    }
}

/// Ordered, capacity-bounded list of players; turn order is roster order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Roster(ArrayVec<Player, { GameConfig::MAX_PLAYERS }>);

impl Roster {
    /// Creates `count` unnamed players with ids `1..=count`.
    ///
    /// With `teams` set, players alternate between Team A and Team B.
    /// Players beyond [`GameConfig::MAX_PLAYERS`] are not created.
    pub fn new(count: usize, teams: bool) -> Self {
        let players = (0..count.min(GameConfig::MAX_PLAYERS))
            .map(|index| {
                let team = teams.then(|| TeamId::for_index(index));
                Player::new(PlayerId::for_index(index), team)
            })
            .collect();
        Self(players)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Player> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.0.get_mut(index)
    }

    pub fn by_id(&self, id: PlayerId) -> Option<&Player> {
        self.0.iter().find(|player| player.id == id)
    }

    pub fn by_id_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.0.iter_mut().find(|player| player.id == id)
    }

    /// First player (in roster order) on the given team.
    pub fn first_on_team(&self, team: TeamId) -> Option<&Player> {
        self.0.iter().find(|player| player.team == Some(team))
    }

    /// Roster position that follows `index`, wrapping around.
    pub fn next_index(&self, index: usize) -> usize {
        if self.0.is_empty() {
            0
        } else {
            (index + 1) % self.0.len()
        }
    }

    /// Sums player scores per team from scratch, clamping at the `i32` bounds.
    pub fn team_totals(&self) -> TeamScores {
        self.0.iter().fold(TeamScores::ZERO, |mut totals, player| {
            if let Some(team) = player.team {
                let total = totals.get_mut(team);
                *total = total.saturating_add(player.score);
            }
            totals
        })
    }

    /// Per-team sums, or `None` if a sum leaves the `i32` range.
    pub fn checked_team_totals(&self) -> Option<TeamScores> {
        self.0.iter().try_fold(TeamScores::ZERO, |mut totals, player| {
            if let Some(team) = player.team {
                let total = totals.get_mut(team);
                *total = total.checked_add(player.score)?;
            }
            Some(totals)
        })
    }

    pub fn display_names(&self) -> Vec<String> {
        self.0.iter().map(Player::display_name).collect()
    }

    /// Copies names from `other` onto players with the same id.
    pub fn adopt_names(&mut self, other: &Roster) {
        for player in self.0.iter_mut() {
            if let Some(source) = other.by_id(player.id) {
                player.name.clone_from(&source.name);
            }
        }
    }
}
