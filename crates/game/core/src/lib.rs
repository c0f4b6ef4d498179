//! Deterministic scoring rules for Snooker frames and Century games.
//!
//! `cue-core` defines the canonical rules (ball catalogs, modes, match state,
//! actions, win evaluation, undo history) and exposes pure APIs that the
//! runtime drives. All state mutation flows through [`engine::GameEngine`];
//! supporting crates depend on the types re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod history;
#[cfg(feature = "serde")]
pub mod persist;
pub mod rules;
pub mod state;

pub use action::{
    ActionTransition, CenturyAction, CenturyError, SnookerAction, SnookerError,
    TransitionContext,
};
pub use config::{ConfigError, GameConfig, ModeRegistry, TeamLayout, Variant};
pub use engine::{
    CenturyEngine, CenturyMatch, CenturyOutcome, ExecuteError, GameEngine, Match, SnookerEngine,
    SnookerMatch, SnookerOutcome, TransitionPhase, TransitionPhaseError,
};
pub use env::{Clock, FixedClock};
pub use error::{ErrorSeverity, GameError};
pub use history::{EventLog, HistoryError, UndoStack};
#[cfg(feature = "serde")]
pub use persist::BlobError;
pub use rules::{Overshoot, TargetCheck, check_target, strict_leader};
pub use state::{
    Ball, BallName, CenturyEvent, CenturyState, ExpectedBall, FrameEvent, MatchState, Phase,
    Player, PlayerId, Roster, Side, SideScore, SnookerMode, SnookerState, StartEvent, StateError,
    TeamId, TeamScores, Timestamp, Winner,
};
