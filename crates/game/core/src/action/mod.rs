//! Scoring actions for both variants.
//!
//! # Module Structure
//!
//! - `error`: rejection reasons (`SnookerError`, `CenturyError`)
//! - `snooker`: pot, foul, miss, end frame, new frame
//! - `century`: pot, deduct, foul penalty, reset, end turn, end game
//!
//! Each concrete action implements [`ActionTransition`]; the engine drives
//! it through `pre_validate → apply → post_validate` and rolls the state
//! back if a later phase fails.

pub mod century;
pub mod error;
pub mod snooker;

pub use century::{
    CenturyAction, DeductAction, EndGameAction, EndTurnAction, FoulPenaltyAction,
    PotAction as CenturyPotAction, ResetScoreAction,
};
pub use error::{CenturyError, SnookerError};
pub use snooker::{
    EndFrameAction, FoulAction, MissAction, NewFrameAction, PotAction as SnookerPotAction,
    SnookerAction,
};

use crate::state::Timestamp;

/// Facts supplied by the caller for one action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionContext {
    /// Stamp for every event the action appends.
    pub now: Timestamp,
}

impl TransitionContext {
    pub const fn new(now: Timestamp) -> Self {
        Self { now }
    }
}

/// Defines how a concrete action mutates its match state.
pub trait ActionTransition {
    type State;
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(
        &self,
        _state: &Self::State,
        _ctx: &TransitionContext,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the state directly. Implementations may
    /// assume that `pre_validate` has already run successfully.
    fn apply(
        &self,
        state: &mut Self::State,
        ctx: &TransitionContext,
    ) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(
        &self,
        _state: &Self::State,
        _ctx: &TransitionContext,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
