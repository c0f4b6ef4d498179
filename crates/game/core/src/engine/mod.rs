//! Match ownership and the action execution pipeline.
//!
//! A [`Match`] pairs the live state with its undo history. The
//! [`GameEngine`] borrows a match and is the only way to mutate it: every
//! action runs through `pre_validate → apply → post_validate`, a rejected
//! action leaves the match untouched, and an accepted one that changed
//! anything leaves its pre-action copy on the undo stack.

mod century;
mod errors;
mod snooker;
mod transition;

pub use century::{CenturyEngine, CenturyMatch, CenturyOutcome};
pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use snooker::{SnookerEngine, SnookerMatch, SnookerOutcome};

use crate::action::TransitionContext;
use crate::config::{ConfigError, GameConfig};
use crate::env::Clock;
use crate::history::{HistoryError, UndoStack};
use crate::state::{MatchState, PlayerId, StateError, Winner};

/// Live match state plus the snapshots taken before each accepted action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match<S> {
    pub(crate) state: S,
    pub(crate) history: UndoStack<S>,
}

impl<S: MatchState> Match<S> {
    /// Starts a match for `config`, stamping the start event with `clock`.
    pub fn new(config: &GameConfig, clock: &impl Clock) -> Result<Self, ConfigError> {
        Ok(Self::from_state(S::initialize(config, clock.now())?))
    }

    /// Wraps an existing state with an empty undo history.
    pub fn from_state(state: S) -> Self {
        Self {
            state,
            history: UndoStack::new(),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn winner(&self) -> Option<Winner> {
        self.state.winner()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty() && self.state.winner().is_none()
    }

    pub fn engine(&mut self) -> GameEngine<'_, S> {
        GameEngine::new(self)
    }
}

/// Game engine that executes actions against a borrowed match.
pub struct GameEngine<'a, S> {
    game: &'a mut Match<S>,
}

impl<'a, S: MatchState> GameEngine<'a, S> {
    pub fn new(game: &'a mut Match<S>) -> Self {
        Self { game }
    }

    /// Restores the state from before the most recent accepted action.
    ///
    /// The event log comes back with the snapshot, so events appended by the
    /// undone action disappear with it.
    pub fn undo(&mut self) -> Result<(), HistoryError> {
        if self.game.state.winner().is_some() {
            return Err(HistoryError::Decided);
        }
        let snapshot = self.game.history.pop().ok_or(HistoryError::Empty)?;
        self.game.state = snapshot;
        Ok(())
    }

    /// Renames a player in the live state and throughout the undo history.
    ///
    /// Pushes no snapshot and is accepted after the result is decided. The
    /// id must be on the live roster and in every snapshot; otherwise nothing
    /// is renamed.
    pub fn rename(&mut self, id: PlayerId, name: &str) -> Result<(), StateError> {
        let known = self.game.state.roster().by_id(id).is_some()
            && self
                .game
                .history
                .iter()
                .all(|snapshot| snapshot.roster().by_id(id).is_some());
        if !known {
            return Err(StateError::PlayerNotFound { id });
        }

        self.game.state.rename_player(id, name)?;
        for snapshot in self.game.history.iter_mut() {
            snapshot.rename_player(id, name)?;
        }
        Ok(())
    }

    /// Runs `step` against the live state with rollback on failure.
    ///
    /// Returns the step's result and the event log length before the step.
    fn run<C, O, F>(&mut self, clock: &C, step: F) -> Result<(O, usize), ExecuteError>
    where
        C: Clock + ?Sized,
        F: FnOnce(&mut S, &TransitionContext) -> Result<O, ExecuteError>,
    {
        let ctx = TransitionContext::new(clock.now());
        let before = self.game.state.clone();
        let logged = before.events().len();

        match step(&mut self.game.state, &ctx) {
            Ok(result) => {
                if self.game.state != before {
                    self.game.history.push(before);
                }
                Ok((result, logged))
            }
            Err(error) => {
                self.game.state = before;
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModeRegistry;
    use crate::env::FixedClock;
    use crate::state::CenturyState;

    const CLOCK: FixedClock = FixedClock::at_millis(5);

    fn century(mode: &str) -> Match<CenturyState> {
        let config = ModeRegistry::builtin().resolve(mode).unwrap();
        Match::new(&config, &CLOCK).unwrap()
    }

    #[test]
    fn rename_reaches_every_snapshot() {
        let mut game = century("singles-3");
        game.history.push(game.state.clone());
        game.history.push(game.state.clone());

        game.engine().rename(PlayerId(2), "Mo").unwrap();

        assert_eq!(game.state.players.get(1).unwrap().name, "Mo");
        for snapshot in game.history.iter() {
            assert_eq!(snapshot.players.get(1).unwrap().name, "Mo");
        }
    }

    #[test]
    fn rename_missing_from_a_snapshot_changes_nothing() {
        let mut game = century("singles-3");
        let smaller = century("singles-2");
        game.history.push(smaller.state.clone());
        let before = game.clone();

        let err = game.engine().rename(PlayerId(3), "Mo").unwrap_err();
        assert_eq!(err, StateError::PlayerNotFound { id: PlayerId(3) });
        assert_eq!(game, before);
    }
}
