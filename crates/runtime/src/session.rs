//! Sessions: one live match bound to its save slot.
//!
//! A [`Session`] drives the core engine and keeps storage in step with it:
//! every accepted action, undo, or rename rewrites the slot, and a decided
//! match clears it. Opening a session resumes the saved match when there is
//! one worth resuming.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use cue_core::{
    CenturyAction, CenturyMatch, CenturyOutcome, CenturyState, Clock, ExecuteError, GameConfig,
    GameError, Match, MatchState, Overshoot, PlayerId, SnookerAction, SnookerMatch,
    SnookerOutcome, SnookerState, Winner,
};

use crate::api::Result;
use crate::clock::SystemClock;
use crate::config::RuntimeConfig;
use crate::repository::{Slot, StateRepository};

/// Match state a session can drive.
pub trait Scoreboard: MatchState + Serialize + DeserializeOwned {
    type Action: fmt::Debug;
    type Outcome;

    const SLOT: Slot;

    fn play<C>(
        game: &mut Match<Self>,
        action: &Self::Action,
        clock: &C,
    ) -> std::result::Result<Self::Outcome, ExecuteError>
    where
        C: Clock + ?Sized;

    fn overshoot(_outcome: &Self::Outcome) -> Option<&Overshoot> {
        None
    }
}

impl Scoreboard for SnookerState {
    type Action = SnookerAction;
    type Outcome = SnookerOutcome;

    const SLOT: Slot = Slot::Snooker;

    fn play<C>(
        game: &mut SnookerMatch,
        action: &SnookerAction,
        clock: &C,
    ) -> std::result::Result<SnookerOutcome, ExecuteError>
    where
        C: Clock + ?Sized,
    {
        game.execute(action, clock)
    }
}

impl Scoreboard for CenturyState {
    type Action = CenturyAction;
    type Outcome = CenturyOutcome;

    const SLOT: Slot = Slot::Century;

    fn play<C>(
        game: &mut CenturyMatch,
        action: &CenturyAction,
        clock: &C,
    ) -> std::result::Result<CenturyOutcome, ExecuteError>
    where
        C: Clock + ?Sized,
    {
        game.execute(action, clock)
    }

    fn overshoot(outcome: &CenturyOutcome) -> Option<&Overshoot> {
        outcome.overshoot.as_ref()
    }
}

pub type SnookerSession = Session<SnookerState>;
pub type CenturySession = Session<CenturyState>;

/// A live match plus the repository slot that mirrors it.
pub struct Session<S, C = SystemClock> {
    game: Match<S>,
    repo: Arc<dyn StateRepository>,
    clock: C,
    resumed: bool,
}

impl<S: fmt::Debug, C: fmt::Debug> fmt::Debug for Session<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("game", &self.game)
            .field("clock", &self.clock)
            .field("resumed", &self.resumed)
            .finish_non_exhaustive()
    }
}

impl<S: Scoreboard> Session<S> {
    /// Opens the session for `mode_id` using the runtime configuration.
    pub fn from_config(runtime: &RuntimeConfig, mode_id: &str) -> Result<Self> {
        let config = runtime.mode_registry()?.resolve(mode_id)?;
        Self::open(runtime.repository()?, SystemClock, &config)
    }
}

impl<S, C> Session<S, C>
where
    S: Scoreboard,
    C: Clock,
{
    /// Resumes the match saved in this variant's slot, or starts `config`.
    ///
    /// `config` is only used when nothing resumable is stored. A blob that
    /// does not decode, or that already carries a winner, is deleted.
    pub fn open(repo: Arc<dyn StateRepository>, clock: C, config: &GameConfig) -> Result<Self> {
        if let Some(game) = Self::restore(repo.as_ref())? {
            info!("Resumed {} match ({} undo steps)", S::SLOT, game.undo_depth());
            return Ok(Self {
                game,
                repo,
                clock,
                resumed: true,
            });
        }

        let game = Match::new(config, &clock)?;
        info!("Started {} match '{}'", S::SLOT, config.id);
        let session = Self {
            game,
            repo,
            clock,
            resumed: false,
        };
        session.sync()?;
        Ok(session)
    }

    fn restore(repo: &dyn StateRepository) -> Result<Option<Match<S>>> {
        let Some(blob) = repo.load(S::SLOT)? else {
            return Ok(None);
        };

        match Match::<S>::from_blob(&blob) {
            Ok(game) => match game.winner() {
                None => Ok(Some(game)),
                Some(winner) => {
                    warn!(
                        "Refusing saved {} match already decided ({}); starting fresh",
                        S::SLOT,
                        winner
                    );
                    repo.delete(S::SLOT)?;
                    Ok(None)
                }
            },
            Err(err) => {
                warn!(code = err.error_code(), "Discarding saved {} match: {}", S::SLOT, err);
                repo.delete(S::SLOT)?;
                Ok(None)
            }
        }
    }

    /// Runs one action and persists the result.
    ///
    /// A rules rejection leaves both the match and storage untouched. A
    /// [`RuntimeError::Repository`](crate::RuntimeError::Repository) means
    /// the action *was* applied but the slot still holds the previous blob;
    /// call [`persist`](Self::persist) to retry, or let the next accepted
    /// change catch storage up.
    pub fn apply(&mut self, action: &S::Action) -> Result<S::Outcome> {
        let outcome = match S::play(&mut self.game, action, &self.clock) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(
                    code = err.error_code(),
                    phase = err.phase().as_str(),
                    "Rejected {:?}: {}",
                    action,
                    err
                );
                return Err(err.into());
            }
        };

        debug!("Applied {:?} to {} match", action, S::SLOT);
        if let Some(overshoot) = S::overshoot(&outcome) {
            info!(
                "{:?} overshot the target: {} > {}",
                overshoot.side, overshoot.score, overshoot.target
            );
        }
        if let Some(winner) = self.game.winner() {
            info!("{} match decided: {}", S::SLOT, winner);
        }

        if let Err(err) = self.sync() {
            warn!("{} match changed but not saved: {}", S::SLOT, err);
            return Err(err);
        }
        Ok(outcome)
    }

    /// Writes the live match to its slot (or clears the slot once decided).
    pub fn persist(&self) -> Result<()> {
        self.sync()
    }

    /// Restores the state before the last accepted action.
    ///
    /// As with [`apply`](Self::apply), a repository error leaves the undo done
    /// in memory but not yet in storage.
    pub fn undo(&mut self) -> Result<()> {
        self.game.engine().undo()?;
        info!(
            "Undid last {} action ({} steps left)",
            S::SLOT,
            self.game.undo_depth()
        );
        self.sync()
    }

    pub fn rename(&mut self, id: PlayerId, name: &str) -> Result<()> {
        self.game.engine().rename(id, name)?;
        debug!("Renamed player {} to '{}'", id, name.trim());
        self.sync()
    }

    /// Abandons the current match and starts `config` in its place.
    pub fn reset(&mut self, config: &GameConfig) -> Result<()> {
        self.game = Match::new(config, &self.clock)?;
        self.resumed = false;
        info!("Started {} match '{}'", S::SLOT, config.id);
        self.sync()
    }

    pub fn game(&self) -> &Match<S> {
        &self.game
    }

    pub fn state(&self) -> &S {
        self.game.state()
    }

    pub fn winner(&self) -> Option<Winner> {
        self.game.winner()
    }

    pub fn can_undo(&self) -> bool {
        self.game.can_undo()
    }

    /// True when the session picked up a saved match instead of starting one.
    pub fn resumed(&self) -> bool {
        self.resumed
    }

    pub fn repository(&self) -> &Arc<dyn StateRepository> {
        &self.repo
    }

    pub fn into_match(self) -> Match<S> {
        self.game
    }

    fn sync(&self) -> Result<()> {
        if self.game.winner().is_some() {
            self.repo.delete(S::SLOT)?;
            debug!("Cleared {} slot", S::SLOT);
            return Ok(());
        }

        let blob = self.game.to_blob()?;
        self.repo.save(S::SLOT, &blob)?;
        debug!("Persisted {} match ({} bytes)", S::SLOT, blob.len());
        Ok(())
    }
}
