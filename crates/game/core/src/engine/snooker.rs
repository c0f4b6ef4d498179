use crate::action::SnookerAction;
use crate::env::Clock;
use crate::state::{FrameEvent, SnookerState, Winner};

use super::transition::execute_snooker;
use super::{ExecuteError, GameEngine, Match};

pub type SnookerMatch = Match<SnookerState>;
pub type SnookerEngine<'a> = GameEngine<'a, SnookerState>;

/// What an accepted Snooker action produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnookerOutcome {
    /// Events appended by the action (the whole new log after a re-rack).
    pub events: Vec<FrameEvent>,
    pub winner: Option<Winner>,
}

impl SnookerMatch {
    pub fn execute<C>(
        &mut self,
        action: &SnookerAction,
        clock: &C,
    ) -> Result<SnookerOutcome, ExecuteError>
    where
        C: Clock + ?Sized,
    {
        self.engine().execute(action, clock)
    }
}

impl SnookerEngine<'_> {
    pub fn execute<C>(
        &mut self,
        action: &SnookerAction,
        clock: &C,
    ) -> Result<SnookerOutcome, ExecuteError>
    where
        C: Clock + ?Sized,
    {
        let ((), logged) = self.run(clock, |state, ctx| execute_snooker(action, state, ctx))?;

        let state = &self.game.state;
        let events = if let SnookerAction::NewFrame(_) = action {
            self.game.history.clear();
            state.events.as_slice().to_vec()
        } else {
            state.events.since(logged).to_vec()
        };

        Ok(SnookerOutcome {
            events,
            winner: state.winner,
        })
    }
}
