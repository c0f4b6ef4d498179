use crate::config::{ConfigError, GameConfig, Variant};
use crate::history::EventLog;

use super::{
    Ball, BallName, FrameEvent, MatchState, Player, Roster, Side, SideScore, TeamId, TeamScores,
    Timestamp, Winner,
};

/// Snooker table format.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SnookerMode {
    Singles,
    Doubles,
}

/// Where the frame is in its progression from reds to the final colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Phase {
    /// Reds alternate with colours; a colour is due after a red.
    RedsAndColors { last_pot_was_red: bool },
    /// Reds are gone; colours must fall in fixed order.
    ColorsSequence { next: BallName },
}

impl Default for Phase {
    fn default() -> Self {
        Phase::RedsAndColors {
            last_pot_was_red: false,
        }
    }
}

/// The ball a scoreboard should prompt for next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpectedBall {
    /// The frame has a result.
    None,
    Red,
    AnyColor,
    Color(BallName),
}

/// Live state of one Snooker frame.
///
/// Frame totals are kept per side: in singles player 1 is side A and player 2
/// side B, in doubles the teams alternate around the table. `Player::score`
/// holds the running break of each player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnookerState {
    pub mode: SnookerMode,
    pub foul_points: i32,
    pub players: Roster,
    pub frame_scores: TeamScores,
    pub current_player: usize,
    pub reds_remaining: u8,
    pub phase: Phase,
    /// Balls potted in the active player's unfinished break.
    pub current_break: Vec<Ball>,
    pub winner: Option<Winner>,
    pub events: EventLog<FrameEvent>,
}

impl SnookerState {
    fn fresh(mode: SnookerMode, foul_points: i32, players: Roster, at: Timestamp) -> Self {
        let start = FrameEvent::FrameStart {
            at,
            mode,
            player_names: players.display_names(),
        };
        Self {
            mode,
            foul_points,
            players,
            frame_scores: TeamScores::ZERO,
            current_player: 0,
            reds_remaining: GameConfig::FULL_RACK_REDS,
            phase: Phase::default(),
            current_break: Vec::new(),
            winner: None,
            events: EventLog::starting_with(start),
        }
    }

    /// Racks a new frame with the same players and names.
    pub fn next_frame(&self, at: Timestamp) -> Self {
        let mut players = Roster::new(self.players.len(), true);
        players.adopt_names(&self.players);
        Self::fresh(self.mode, self.foul_points, players, at)
    }

    pub fn active_player(&self) -> Option<&Player> {
        self.players.get(self.current_player)
    }

    /// Points in the active player's unfinished break.
    pub fn current_break(&self) -> i32 {
        self.active_player().map_or(0, |player| player.score)
    }

    pub fn frame_score(&self, team: TeamId) -> i32 {
        self.frame_scores.get(team)
    }

    pub fn last_pot_was_red(&self) -> bool {
        matches!(
            self.phase,
            Phase::RedsAndColors {
                last_pot_was_red: true
            }
        )
    }

    pub fn next_color_in_sequence(&self) -> Option<BallName> {
        match self.phase {
            Phase::ColorsSequence { next } => Some(next),
            Phase::RedsAndColors { .. } => None,
        }
    }

    pub fn expected_ball(&self) -> ExpectedBall {
        if self.winner.is_some() {
            return ExpectedBall::None;
        }
        match self.phase {
            Phase::ColorsSequence { next } => ExpectedBall::Color(next),
            Phase::RedsAndColors { last_pot_was_red } => {
                if last_pot_was_red || self.reds_remaining == 0 {
                    ExpectedBall::AnyColor
                } else {
                    ExpectedBall::Red
                }
            }
        }
    }

    /// How a side is named in events: the player in singles, the team in doubles.
    pub fn side_for(&self, team: TeamId) -> Side {
        match self.mode {
            SnookerMode::Doubles => Side::Team(team),
            SnookerMode::Singles => self
                .players
                .first_on_team(team)
                .map_or(Side::Team(team), |player| Side::Player(player.id)),
        }
    }

    /// Frame totals of both sides, side A first.
    pub fn side_scores(&self) -> Vec<SideScore> {
        [TeamId::A, TeamId::B]
            .into_iter()
            .map(|team| SideScore {
                side: self.side_for(team),
                score: self.frame_scores.get(team),
            })
            .collect()
    }
}

impl MatchState for SnookerState {
    type Event = FrameEvent;

    fn initialize(config: &GameConfig, at: Timestamp) -> Result<Self, ConfigError> {
        if config.variant != Variant::Snooker {
            return Err(ConfigError::WrongVariant {
                id: config.id.clone(),
                expected: Variant::Snooker,
                actual: config.variant,
            });
        }
        config.validate()?;

        let mode = if config.is_team_game() {
            SnookerMode::Doubles
        } else {
            SnookerMode::Singles
        };
        // Every Snooker player sits on a side, singles included.
        let players = Roster::new(config.num_players, true);
        Ok(Self::fresh(mode, config.foul_points, players, at))
    }

    fn roster(&self) -> &Roster {
        &self.players
    }

    fn roster_mut(&mut self) -> &mut Roster {
        &mut self.players
    }

    fn events(&self) -> &EventLog<FrameEvent> {
        &self.events
    }

    fn events_mut(&mut self) -> &mut EventLog<FrameEvent> {
        &mut self.events
    }

    fn winner(&self) -> Option<Winner> {
        self.winner
    }
}
