//! Authoritative match state for both variants.
//!
//! [`SnookerState`] and [`CenturyState`] hold everything a scoreboard needs to
//! render a match, including the event log. Runtime layers clone or query
//! these values but mutate them exclusively through the engine.
mod century;
mod error;
mod events;
mod snooker;
pub mod types;

pub use century::CenturyState;
pub use error::StateError;
pub use events::{CenturyEvent, FrameEvent, StartEvent};
pub use snooker::{ExpectedBall, Phase, SnookerMode, SnookerState};
pub use types::{
    Ball, BallName, CENTURY_BALLS, Player, PlayerId, Roster, SNOOKER_BALLS, Side, SideScore,
    TeamId, TeamScores, Timestamp, Winner, find_ball,
};

use crate::config::{ConfigError, GameConfig};
use crate::history::EventLog;

/// Behaviour shared by the two match states.
///
/// The engine, undo history and persisted blob are generic over this trait.
pub trait MatchState: Clone + PartialEq {
    type Event: StartEvent + Clone;

    /// Builds the opening state for a mode, with its start event logged.
    fn initialize(config: &GameConfig, at: Timestamp) -> Result<Self, ConfigError>;

    fn roster(&self) -> &Roster;

    fn roster_mut(&mut self) -> &mut Roster;

    fn events(&self) -> &EventLog<Self::Event>;

    fn events_mut(&mut self) -> &mut EventLog<Self::Event>;

    fn winner(&self) -> Option<Winner>;

    /// Re-derives cached values after the state was loaded from outside.
    fn rederive(&mut self) {}

    /// Changes a player's name without touching scores or turn order.
    ///
    /// The most recent start event is rewritten so that the history header
    /// shows the current roster.
    fn rename_player(&mut self, id: PlayerId, name: &str) -> Result<(), StateError> {
        let player = self
            .roster_mut()
            .by_id_mut(id)
            .ok_or(StateError::PlayerNotFound { id })?;
        player.name = name.trim().to_string();

        let names = self.roster().display_names();
        if let Some(recorded) = self.events_mut().latest_start_names_mut() {
            *recorded = names;
        }
        Ok(())
    }
}
