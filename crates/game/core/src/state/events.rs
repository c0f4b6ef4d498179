//! Append-only event records for display and audit.
//!
//! Events capture "what happened" with enough detail to render a history
//! without consulting the live state. They are never edited after being
//! appended, with one exception: renaming a player rewrites the name list of
//! the most recent start event (see [`StartEvent`]).

use std::collections::BTreeMap;

use super::{Ball, PlayerId, Side, SideScore, SnookerMode, Timestamp, Winner};

/// Event kinds that open a log and carry the roster's display names.
pub trait StartEvent {
    /// Mutable access to the recorded player names, if this is a start event.
    fn start_names_mut(&mut self) -> Option<&mut Vec<String>>;
}

/// Snooker frame history entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum FrameEvent {
    FrameStart {
        at: Timestamp,
        mode: SnookerMode,
        player_names: Vec<String>,
    },
    BreakCompleted {
        at: Timestamp,
        player: PlayerId,
        balls: Vec<Ball>,
        points: i32,
    },
    Foul {
        at: Timestamp,
        penalized: PlayerId,
        beneficiary: Side,
        points: i32,
    },
    Miss {
        at: Timestamp,
        player: PlayerId,
    },
    FrameEnd {
        at: Timestamp,
        winner: Winner,
        scores: Vec<SideScore>,
    },
}

impl FrameEvent {
    pub fn at(&self) -> Timestamp {
        match self {
            FrameEvent::FrameStart { at, .. }
            | FrameEvent::BreakCompleted { at, .. }
            | FrameEvent::Foul { at, .. }
            | FrameEvent::Miss { at, .. }
            | FrameEvent::FrameEnd { at, .. } => *at,
        }
    }

    /// Snake-case kind name, used for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            FrameEvent::FrameStart { .. } => "frame_start",
            FrameEvent::BreakCompleted { .. } => "break_completed",
            FrameEvent::Foul { .. } => "foul",
            FrameEvent::Miss { .. } => "miss",
            FrameEvent::FrameEnd { .. } => "frame_end",
        }
    }
}

impl StartEvent for FrameEvent {
    fn start_names_mut(&mut self) -> Option<&mut Vec<String>> {
        match self {
            FrameEvent::FrameStart { player_names, .. } => Some(player_names),
            _ => None,
        }
    }
}

/// Century game history entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum CenturyEvent {
    GameStart {
        at: Timestamp,
        mode_label: String,
        target_score: i32,
        player_names: Vec<String>,
    },
    Pot {
        at: Timestamp,
        player: PlayerId,
        ball: Ball,
        new_player_score: i32,
        new_team_score: Option<i32>,
    },
    Deduct {
        at: Timestamp,
        player: PlayerId,
        ball: Ball,
        new_player_score: i32,
        new_team_score: Option<i32>,
    },
    FoulPenalty {
        at: Timestamp,
        player: PlayerId,
        points_deducted: i32,
        new_player_score: i32,
        new_team_score: Option<i32>,
    },
    ResetScore {
        at: Timestamp,
        player: PlayerId,
        previous_player_score: i32,
        new_player_score: i32,
        previous_team_score: Option<i32>,
        new_team_score: Option<i32>,
    },
    TurnChange {
        at: Timestamp,
        previous_player: PlayerId,
        next_player: PlayerId,
    },
    GameEnd {
        at: Timestamp,
        winner: Winner,
        winner_name: String,
        /// Final totals keyed by player display name (or `Team A`/`Team B`).
        final_scores: BTreeMap<String, i32>,
        target_score: i32,
    },
}

impl CenturyEvent {
    pub fn at(&self) -> Timestamp {
        match self {
            CenturyEvent::GameStart { at, .. }
            | CenturyEvent::Pot { at, .. }
            | CenturyEvent::Deduct { at, .. }
            | CenturyEvent::FoulPenalty { at, .. }
            | CenturyEvent::ResetScore { at, .. }
            | CenturyEvent::TurnChange { at, .. }
            | CenturyEvent::GameEnd { at, .. } => *at,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CenturyEvent::GameStart { .. } => "game_start",
            CenturyEvent::Pot { .. } => "pot",
            CenturyEvent::Deduct { .. } => "deduct",
            CenturyEvent::FoulPenalty { .. } => "foul_penalty",
            CenturyEvent::ResetScore { .. } => "reset_score",
            CenturyEvent::TurnChange { .. } => "turn_change",
            CenturyEvent::GameEnd { .. } => "game_end",
        }
    }
}

impl StartEvent for CenturyEvent {
    fn start_names_mut(&mut self) -> Option<&mut Vec<String>> {
        match self {
            CenturyEvent::GameStart { player_names, .. } => Some(player_names),
            _ => None,
        }
    }
}
