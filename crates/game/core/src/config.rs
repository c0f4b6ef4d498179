//! Game mode configuration and the built-in mode registry.
//!
//! A [`GameConfig`] is an immutable description of one mode of play: how
//! many players, whether they form teams, the Century target and the foul
//! value. Configurations are resolved by id through a [`ModeRegistry`].

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Ball, BallName, CENTURY_BALLS, SNOOKER_BALLS, find_ball};

/// Variant of play a mode belongs to.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Variant {
    Snooker,
    Century,
}

impl Variant {
    /// Fixed ball catalog of this variant.
    pub fn catalog(self) -> &'static [Ball] {
        match self {
            Variant::Snooker => &SNOOKER_BALLS,
            Variant::Century => &CENTURY_BALLS,
        }
    }

    pub fn ball(self, name: BallName) -> Option<Ball> {
        find_ball(self.catalog(), name)
    }
}

/// Team structure of a team game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamLayout {
    pub players_per_team: usize,
}

/// Game configuration for one mode.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Registry key, e.g. `singles-2` or `snooker-doubles`.
    pub id: String,
    pub variant: Variant,
    /// Human-readable label.
    pub label: String,
    pub num_players: usize,
    /// Present for team games.
    #[cfg_attr(feature = "serde", serde(default))]
    pub team_layout: Option<TeamLayout>,
    /// Exact score that wins a Century game; Snooker frames have none.
    #[cfg_attr(feature = "serde", serde(default))]
    pub target_score: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default = "default_foul_points"))]
    pub foul_points: i32,
}

#[cfg(feature = "serde")]
fn default_foul_points() -> i32 {
    GameConfig::DEFAULT_FOUL_POINTS
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Largest roster any mode may define.
    pub const MAX_PLAYERS: usize = 8;
    /// Reds on the table at the start of a Snooker frame.
    pub const FULL_RACK_REDS: u8 = 15;

    // ===== defaults =====
    pub const DEFAULT_FOUL_POINTS: i32 = 4;
    pub const CENTURY_TARGET: i32 = 100;

    pub fn snooker_singles() -> Self {
        Self {
            id: "snooker-singles".into(),
            variant: Variant::Snooker,
            label: "Snooker Singles".into(),
            num_players: 2,
            team_layout: None,
            target_score: None,
            foul_points: Self::DEFAULT_FOUL_POINTS,
        }
    }

    pub fn snooker_doubles() -> Self {
        Self {
            id: "snooker-doubles".into(),
            variant: Variant::Snooker,
            label: "Snooker Doubles".into(),
            num_players: 4,
            team_layout: Some(TeamLayout { players_per_team: 2 }),
            target_score: None,
            foul_points: Self::DEFAULT_FOUL_POINTS,
        }
    }

    /// Individual Century game for `players` players, first to exactly 100.
    pub fn century_singles(players: usize) -> Self {
        Self {
            id: format!("singles-{players}"),
            variant: Variant::Century,
            label: format!("Singles ({players} Players - Target {})", Self::CENTURY_TARGET),
            num_players: players,
            team_layout: None,
            target_score: Some(Self::CENTURY_TARGET),
            foul_points: Self::DEFAULT_FOUL_POINTS,
        }
    }

    /// Two-team Century game; the target is 100 per team member.
    pub fn century_teams(id: &str, name: &str, players_per_team: usize) -> Self {
        let target = Self::CENTURY_TARGET * players_per_team as i32;
        Self {
            id: id.into(),
            variant: Variant::Century,
            label: format!("{name} (Target {target})"),
            num_players: players_per_team * 2,
            team_layout: Some(TeamLayout { players_per_team }),
            target_score: Some(target),
            foul_points: Self::DEFAULT_FOUL_POINTS,
        }
    }

    pub fn is_team_game(&self) -> bool {
        self.team_layout.is_some()
    }

    /// Checks the structural rules every mode must satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_players == 0 || self.num_players > Self::MAX_PLAYERS {
            return Err(ConfigError::PlayerCount {
                id: self.id.clone(),
                players: self.num_players,
                max: Self::MAX_PLAYERS,
            });
        }

        if let Some(layout) = self.team_layout
            && (layout.players_per_team == 0 || layout.players_per_team * 2 != self.num_players)
        {
            return Err(ConfigError::TeamLayout {
                id: self.id.clone(),
                players: self.num_players,
                players_per_team: layout.players_per_team,
            });
        }

        match self.variant {
            Variant::Century => match self.target_score {
                Some(target) if target > 0 => {}
                other => {
                    return Err(ConfigError::MissingTarget {
                        id: self.id.clone(),
                        target: other,
                    });
                }
            },
            Variant::Snooker => {
                let expected = if self.is_team_game() { 4 } else { 2 };
                if self.num_players != expected {
                    return Err(ConfigError::SnookerRoster {
                        id: self.id.clone(),
                        players: self.num_players,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Errors raised while resolving or validating mode configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown game mode '{0}'")]
    NotFound(String),

    #[error("mode '{id}' has {players} players (allowed: 1..={max})")]
    PlayerCount { id: String, players: usize, max: usize },

    #[error("mode '{id}' splits {players} players into teams of {players_per_team}")]
    TeamLayout {
        id: String,
        players: usize,
        players_per_team: usize,
    },

    #[error("century mode '{id}' needs a positive target score (got {target:?})")]
    MissingTarget { id: String, target: Option<i32> },

    #[error("snooker mode '{id}' must have 2 players (singles) or 4 (doubles), got {players}")]
    SnookerRoster { id: String, players: usize },

    #[error("mode '{id}' is a {actual} mode, expected {expected}")]
    WrongVariant {
        id: String,
        expected: Variant,
        actual: Variant,
    },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use ConfigError::*;
        match self {
            NotFound(_) => "CONFIG_NOT_FOUND",
            PlayerCount { .. } => "CONFIG_PLAYER_COUNT",
            TeamLayout { .. } => "CONFIG_TEAM_LAYOUT",
            MissingTarget { .. } => "CONFIG_MISSING_TARGET",
            SnookerRoster { .. } => "CONFIG_SNOOKER_ROSTER",
            WrongVariant { .. } => "CONFIG_WRONG_VARIANT",
        }
    }
}

/// Ordered lookup table from mode id to configuration.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeRegistry {
    modes: Vec<GameConfig>,
}

impl ModeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every mode the scorekeeper ships with.
    pub fn builtin() -> Self {
        let mut modes = vec![GameConfig::snooker_singles(), GameConfig::snooker_doubles()];
        modes.extend((2..=GameConfig::MAX_PLAYERS).map(GameConfig::century_singles));
        modes.push(GameConfig::century_teams("doubles", "Doubles", 2));
        modes.push(GameConfig::century_teams("triples", "Triples", 3));
        modes.push(GameConfig::century_teams("quadruples", "Quadruples", 4));
        Self { modes }
    }

    /// Adds a mode after validating it, replacing any mode with the same id.
    pub fn insert(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        config.validate()?;
        match self.modes.iter_mut().find(|mode| mode.id == config.id) {
            Some(existing) => *existing = config,
            None => self.modes.push(config),
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&GameConfig> {
        self.modes.iter().find(|mode| mode.id == id)
    }

    /// Resolves a mode id to an owned configuration.
    pub fn resolve(&self, id: &str) -> Result<GameConfig, ConfigError> {
        self.get(id)
            .cloned()
            .ok_or_else(|| ConfigError::NotFound(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameConfig> {
        self.modes.iter()
    }

    /// Modes of one variant, in registration order.
    pub fn of_variant(&self, variant: Variant) -> impl Iterator<Item = &GameConfig> {
        self.modes.iter().filter(move |mode| mode.variant == variant)
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}
