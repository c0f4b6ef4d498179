use std::collections::BTreeMap;

use crate::config::{ConfigError, GameConfig, Variant};
use crate::history::EventLog;

use super::{
    CenturyEvent, MatchState, Player, Roster, Side, TeamId, TeamScores, Timestamp, Winner,
};

/// Live state of one Century game.
///
/// `team_scores` is a cache: it always equals the per-team sum of player
/// scores and is recomputed from the roster after every change.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CenturyState {
    pub mode_id: String,
    pub mode_label: String,
    pub target_score: i32,
    pub is_team_game: bool,
    pub foul_points: i32,
    pub players: Roster,
    pub team_scores: TeamScores,
    pub current_player: usize,
    pub winner: Option<Winner>,
    pub events: EventLog<CenturyEvent>,
}

impl CenturyState {
    pub fn active_player(&self) -> Option<&Player> {
        self.players.get(self.current_player)
    }

    pub fn team_score(&self, team: TeamId) -> i32 {
        self.team_scores.get(team)
    }

    pub fn recompute_team_scores(&mut self) {
        self.team_scores = self.players.team_totals();
    }

    /// The side whose total is compared against the target when `player` scores.
    pub fn side_of(&self, player: &Player) -> Side {
        match player.team {
            Some(team) if self.is_team_game => Side::Team(team),
            _ => Side::Player(player.id),
        }
    }

    pub fn side_score(&self, side: Side) -> i32 {
        match side {
            Side::Team(team) => self.team_scores.get(team),
            Side::Player(id) => self.players.by_id(id).map_or(0, |player| player.score),
        }
    }

    /// Every competing side with its total, in table order.
    pub fn side_totals(&self) -> Vec<(Side, i32)> {
        if self.is_team_game {
            [TeamId::A, TeamId::B]
                .into_iter()
                .map(|team| (Side::Team(team), self.team_scores.get(team)))
                .collect()
        } else {
            self.players
                .iter()
                .map(|player| (Side::Player(player.id), player.score))
                .collect()
        }
    }

    /// Totals keyed by display name (`Team A`/`Team B` in team games).
    ///
    /// Players sharing a display name collapse into one entry.
    pub fn final_scores(&self) -> BTreeMap<String, i32> {
        if self.is_team_game {
            [TeamId::A, TeamId::B]
                .into_iter()
                .map(|team| (team.label().to_string(), self.team_scores.get(team)))
                .collect()
        } else {
            self.players
                .iter()
                .map(|player| (player.display_name(), player.score))
                .collect()
        }
    }

    pub fn winner_name(&self, winner: Winner) -> String {
        match winner {
            Winner::Player(id) => self
                .players
                .by_id(id)
                .map_or_else(|| format!("Player {}", id.0), Player::display_name),
            Winner::Team(team) => team.label().to_string(),
            Winner::Draw => "Draw".to_string(),
        }
    }
}

impl MatchState for CenturyState {
    type Event = CenturyEvent;

    fn initialize(config: &GameConfig, at: Timestamp) -> Result<Self, ConfigError> {
        if config.variant != Variant::Century {
            return Err(ConfigError::WrongVariant {
                id: config.id.clone(),
                expected: Variant::Century,
                actual: config.variant,
            });
        }
        config.validate()?;

        let target_score = config.target_score.ok_or_else(|| ConfigError::MissingTarget {
            id: config.id.clone(),
            target: None,
        })?;
        let players = Roster::new(config.num_players, config.is_team_game());
        let start = CenturyEvent::GameStart {
            at,
            mode_label: config.label.clone(),
            target_score,
            player_names: players.display_names(),
        };

        Ok(Self {
            mode_id: config.id.clone(),
            mode_label: config.label.clone(),
            target_score,
            is_team_game: config.is_team_game(),
            foul_points: config.foul_points,
            team_scores: players.team_totals(),
            players,
            current_player: 0,
            winner: None,
            events: EventLog::starting_with(start),
        })
    }

    fn roster(&self) -> &Roster {
        &self.players
    }

    fn roster_mut(&mut self) -> &mut Roster {
        &mut self.players
    }

    fn events(&self) -> &EventLog<CenturyEvent> {
        &self.events
    }

    fn events_mut(&mut self) -> &mut EventLog<CenturyEvent> {
        &mut self.events
    }

    fn winner(&self) -> Option<Winner> {
        self.winner
    }

    fn rederive(&mut self) {
        self.recompute_team_scores();
    }
}
