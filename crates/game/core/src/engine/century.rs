use crate::action::CenturyAction;
use crate::env::Clock;
use crate::rules::Overshoot;
use crate::state::{CenturyEvent, CenturyState, Winner};

use super::transition::execute_century;
use super::{ExecuteError, GameEngine, Match};

pub type CenturyMatch = Match<CenturyState>;
pub type CenturyEngine<'a> = GameEngine<'a, CenturyState>;

/// What an accepted Century action produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CenturyOutcome {
    pub events: Vec<CenturyEvent>,
    pub winner: Option<Winner>,
    /// Set when the acting side went past the target. Play continues.
    pub overshoot: Option<Overshoot>,
}

impl CenturyMatch {
    pub fn execute<C>(
        &mut self,
        action: &CenturyAction,
        clock: &C,
    ) -> Result<CenturyOutcome, ExecuteError>
    where
        C: Clock + ?Sized,
    {
        self.engine().execute(action, clock)
    }
}

impl CenturyEngine<'_> {
    pub fn execute<C>(
        &mut self,
        action: &CenturyAction,
        clock: &C,
    ) -> Result<CenturyOutcome, ExecuteError>
    where
        C: Clock + ?Sized,
    {
        let (overshoot, logged) =
            self.run(clock, |state, ctx| execute_century(action, state, ctx))?;

        let state = &self.game.state;
        Ok(CenturyOutcome {
            events: state.events.since(logged).to_vec(),
            winner: state.winner,
            overshoot,
        })
    }
}
