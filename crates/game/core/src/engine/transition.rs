//! Action transition dispatch and execution logic.

use crate::action::{ActionTransition, CenturyAction, SnookerAction, TransitionContext};
use crate::rules::Overshoot;
use crate::state::{CenturyState, SnookerState};

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut T::State,
    ctx: &TransitionContext,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, ctx)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, ctx)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, ctx)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

pub(super) fn execute_snooker(
    action: &SnookerAction,
    state: &mut SnookerState,
    ctx: &TransitionContext,
) -> Result<(), ExecuteError> {
    match action {
        SnookerAction::Pot(transition) => drive_transition(transition, state, ctx),
        SnookerAction::Foul(transition) => drive_transition(transition, state, ctx),
        SnookerAction::Miss(transition) => drive_transition(transition, state, ctx),
        SnookerAction::EndFrame(transition) => drive_transition(transition, state, ctx),
        SnookerAction::NewFrame(transition) => drive_transition(transition, state, ctx),
    }
    .map_err(ExecuteError::Snooker)
}

pub(super) fn execute_century(
    action: &CenturyAction,
    state: &mut CenturyState,
    ctx: &TransitionContext,
) -> Result<Option<Overshoot>, ExecuteError> {
    match action {
        CenturyAction::Pot(transition) => drive_transition(transition, state, ctx),
        CenturyAction::Deduct(transition) => drive_transition(transition, state, ctx),
        CenturyAction::FoulPenalty(transition) => drive_transition(transition, state, ctx),
        CenturyAction::ResetScore(transition) => drive_transition(transition, state, ctx),
        CenturyAction::EndTurn(transition) => drive_transition(transition, state, ctx),
        CenturyAction::EndGame(transition) => drive_transition(transition, state, ctx),
    }
    .map_err(ExecuteError::Century)
}
