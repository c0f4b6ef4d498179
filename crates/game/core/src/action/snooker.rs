//! Snooker frame transitions.
//!
//! The frame moves through two phases: reds alternate with colours until the
//! last red is gone, then the six colours fall in fixed order and the final
//! Black ends the frame. The turn only passes on a foul or a miss.

use crate::action::{ActionTransition, SnookerError, TransitionContext};
use crate::config::Variant;
use crate::rules::strict_leader;
use crate::state::{BallName, FrameEvent, Phase, SnookerState, TeamId, Timestamp};

/// Player action at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SnookerAction {
    Pot(PotAction),
    Foul(FoulAction),
    Miss(MissAction),
    EndFrame(EndFrameAction),
    NewFrame(NewFrameAction),
}

impl SnookerAction {
    pub const fn pot(ball: BallName) -> Self {
        Self::Pot(PotAction { ball })
    }

    /// Foul worth the frame's configured foul value.
    pub const fn foul() -> Self {
        Self::Foul(FoulAction { penalty: None })
    }

    pub const fn foul_with(penalty: i32) -> Self {
        Self::Foul(FoulAction {
            penalty: Some(penalty),
        })
    }

    pub const fn miss() -> Self {
        Self::Miss(MissAction)
    }

    pub const fn end_frame() -> Self {
        Self::EndFrame(EndFrameAction)
    }

    pub const fn new_frame() -> Self {
        Self::NewFrame(NewFrameAction)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pot(_) => "pot",
            Self::Foul(_) => "foul",
            Self::Miss(_) => "miss",
            Self::EndFrame(_) => "end_frame",
            Self::NewFrame(_) => "new_frame",
        }
    }
}

// ============================================================================
// Shared checks
// ============================================================================

/// Accepts play only on an undecided frame with a seated active player.
fn ensure_open(state: &SnookerState) -> Result<(), SnookerError> {
    if state.winner.is_some() {
        return Err(SnookerError::GameDecided);
    }
    active_team(state).map(|_| ())
}

fn active_team(state: &SnookerState) -> Result<TeamId, SnookerError> {
    let player = state
        .active_player()
        .ok_or(SnookerError::NoActivePlayer {
            index: state.current_player,
            players: state.players.len(),
        })?;
    player.team.ok_or(SnookerError::PlayerWithoutTeam(player.id))
}

fn check_frame(state: &SnookerState) -> Result<(), SnookerError> {
    if state.reds_remaining > crate::config::GameConfig::FULL_RACK_REDS {
        return Err(SnookerError::RedsOutOfRange(state.reds_remaining));
    }
    if matches!(state.phase, Phase::ColorsSequence { .. }) && state.reds_remaining > 0 {
        return Err(SnookerError::PhaseMismatch {
            reds: state.reds_remaining,
        });
    }
    if state.current_player >= state.players.len() {
        return Err(SnookerError::NoActivePlayer {
            index: state.current_player,
            players: state.players.len(),
        });
    }
    Ok(())
}

fn add_points(score: i32, points: i32) -> Result<i32, SnookerError> {
    score
        .checked_add(points)
        .ok_or(SnookerError::ScoreOverflow { score })
}

/// Closes the active player's break, recording it if it scored.
fn finalize_break(state: &mut SnookerState, at: Timestamp) {
    let balls = std::mem::take(&mut state.current_break);
    let Some(player) = state.players.get_mut(state.current_player) else {
        return;
    };
    if player.score > 0 {
        player.highest_break = player.highest_break.max(player.score);
        state.events.append(FrameEvent::BreakCompleted {
            at,
            player: player.id,
            balls,
            points: player.score,
        });
    }
    player.score = 0;
}

fn finish_frame(state: &mut SnookerState, at: Timestamp) {
    finalize_break(state, at);

    let winner = strict_leader(
        state
            .side_scores()
            .into_iter()
            .map(|entry| (entry.side, entry.score)),
    );
    let scores = state.side_scores();
    state.events.append(FrameEvent::FrameEnd {
        at,
        winner,
        scores,
    });
    state.winner = Some(winner);
}

/// Passes the table to the next player in rotation.
fn end_visit(state: &mut SnookerState) {
    state.current_player = state.players.next_index(state.current_player);
    if let Phase::RedsAndColors { .. } = state.phase {
        state.phase = if state.reds_remaining == 0 {
            Phase::ColorsSequence {
                next: BallName::Yellow,
            }
        } else {
            Phase::RedsAndColors {
                last_pot_was_red: false,
            }
        };
    }
}

// ============================================================================
// Pot
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotAction {
    pub ball: BallName,
}

impl ActionTransition for PotAction {
    type State = SnookerState;
    type Error = SnookerError;
    type Result = ();

    fn pre_validate(
        &self,
        state: &SnookerState,
        _ctx: &TransitionContext,
    ) -> Result<(), SnookerError> {
        ensure_open(state)?;
        Variant::Snooker
            .ball(self.ball)
            .ok_or(SnookerError::BallNotInCatalog(self.ball))?;

        match state.phase {
            Phase::ColorsSequence { next } if self.ball != next => Err(SnookerError::WrongBall {
                expected: next,
                got: self.ball,
            }),
            Phase::RedsAndColors { .. }
                if self.ball == BallName::Red && state.reds_remaining == 0 =>
            {
                Err(SnookerError::NoRedsRemaining)
            }
            _ => Ok(()),
        }
    }

    fn apply(&self, state: &mut SnookerState, ctx: &TransitionContext) -> Result<(), SnookerError> {
        let ball = Variant::Snooker
            .ball(self.ball)
            .ok_or(SnookerError::BallNotInCatalog(self.ball))?;
        let team = active_team(state)?;
        let index = state.current_player;

        if let Some(player) = state.players.get_mut(index) {
            player.score = add_points(player.score, ball.value)?;
        }
        let frame = state.frame_scores.get_mut(team);
        *frame = add_points(*frame, ball.value)?;
        state.current_break.push(ball);

        match state.phase {
            Phase::RedsAndColors { .. } if ball.name == BallName::Red => {
                state.reds_remaining = state
                    .reds_remaining
                    .checked_sub(1)
                    .ok_or(SnookerError::NoRedsRemaining)?;
                state.phase = Phase::RedsAndColors {
                    last_pot_was_red: true,
                };
            }
            Phase::RedsAndColors { .. } => {
                state.phase = if state.reds_remaining == 0 {
                    Phase::ColorsSequence {
                        next: BallName::Yellow,
                    }
                } else {
                    Phase::RedsAndColors {
                        last_pot_was_red: false,
                    }
                };
            }
            Phase::ColorsSequence { next } => match next.next_in_sequence() {
                Some(following) => state.phase = Phase::ColorsSequence { next: following },
                None => finish_frame(state, ctx.now),
            },
        }
        Ok(())
    }

    fn post_validate(
        &self,
        state: &SnookerState,
        _ctx: &TransitionContext,
    ) -> Result<(), SnookerError> {
        check_frame(state)
    }
}

// ============================================================================
// Foul
// ============================================================================

/// Foul by the active player; the other side receives the penalty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoulAction {
    /// Points awarded; `None` uses the frame's foul value.
    pub penalty: Option<i32>,
}

impl FoulAction {
    fn points(&self, state: &SnookerState) -> i32 {
        self.penalty.unwrap_or(state.foul_points)
    }
}

impl ActionTransition for FoulAction {
    type State = SnookerState;
    type Error = SnookerError;
    type Result = ();

    fn pre_validate(
        &self,
        state: &SnookerState,
        _ctx: &TransitionContext,
    ) -> Result<(), SnookerError> {
        ensure_open(state)?;
        let points = self.points(state);
        if points <= 0 {
            return Err(SnookerError::InvalidPenalty(points));
        }
        Ok(())
    }

    fn apply(&self, state: &mut SnookerState, ctx: &TransitionContext) -> Result<(), SnookerError> {
        let team = active_team(state)?;
        let offender = state.players.get(state.current_player).map(|p| p.id);
        let points = self.points(state);

        finalize_break(state, ctx.now);

        let beneficiary = team.opponent();
        let frame = state.frame_scores.get_mut(beneficiary);
        *frame = add_points(*frame, points)?;
        if let Some(penalized) = offender {
            let beneficiary = state.side_for(beneficiary);
            state.events.append(FrameEvent::Foul {
                at: ctx.now,
                penalized,
                beneficiary,
                points,
            });
        }

        end_visit(state);
        Ok(())
    }

    fn post_validate(
        &self,
        state: &SnookerState,
        _ctx: &TransitionContext,
    ) -> Result<(), SnookerError> {
        check_frame(state)
    }
}

// ============================================================================
// Miss
// ============================================================================

/// Visit ends without a pot and without a penalty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissAction;

impl ActionTransition for MissAction {
    type State = SnookerState;
    type Error = SnookerError;
    type Result = ();

    fn pre_validate(
        &self,
        state: &SnookerState,
        _ctx: &TransitionContext,
    ) -> Result<(), SnookerError> {
        ensure_open(state)
    }

    fn apply(&self, state: &mut SnookerState, ctx: &TransitionContext) -> Result<(), SnookerError> {
        let player = state
            .active_player()
            .map(|p| p.id)
            .ok_or(SnookerError::NoActivePlayer {
                index: state.current_player,
                players: state.players.len(),
            })?;

        finalize_break(state, ctx.now);
        state.events.append(FrameEvent::Miss {
            at: ctx.now,
            player,
        });
        end_visit(state);
        Ok(())
    }

    fn post_validate(
        &self,
        state: &SnookerState,
        _ctx: &TransitionContext,
    ) -> Result<(), SnookerError> {
        check_frame(state)
    }
}

// ============================================================================
// End frame / new frame
// ============================================================================

/// Concedes or ends the frame on the current totals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndFrameAction;

impl ActionTransition for EndFrameAction {
    type State = SnookerState;
    type Error = SnookerError;
    type Result = ();

    fn pre_validate(
        &self,
        state: &SnookerState,
        _ctx: &TransitionContext,
    ) -> Result<(), SnookerError> {
        ensure_open(state)
    }

    fn apply(&self, state: &mut SnookerState, ctx: &TransitionContext) -> Result<(), SnookerError> {
        finish_frame(state, ctx.now);
        Ok(())
    }
}

/// Re-racks the table. Accepted whether or not the frame has a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewFrameAction;

impl ActionTransition for NewFrameAction {
    type State = SnookerState;
    type Error = SnookerError;
    type Result = ();

    fn apply(&self, state: &mut SnookerState, ctx: &TransitionContext) -> Result<(), SnookerError> {
        *state = state.next_frame(ctx.now);
        Ok(())
    }

    fn post_validate(
        &self,
        state: &SnookerState,
        _ctx: &TransitionContext,
    ) -> Result<(), SnookerError> {
        check_frame(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{MatchState, PlayerId, Side, Winner};

    const CTX: TransitionContext = TransitionContext::new(Timestamp(100));

    fn singles() -> SnookerState {
        SnookerState::initialize(&GameConfig::snooker_singles(), Timestamp::EPOCH).unwrap()
    }

    fn pot(state: &mut SnookerState, ball: BallName) {
        let action = PotAction { ball };
        action.pre_validate(state, &CTX).unwrap();
        action.apply(state, &CTX).unwrap();
        action.post_validate(state, &CTX).unwrap();
    }

    #[test]
    fn red_then_color_alternates() {
        let mut state = singles();
        pot(&mut state, BallName::Red);
        assert_eq!(state.reds_remaining, 14);
        assert!(state.last_pot_was_red());

        pot(&mut state, BallName::Black);
        assert!(!state.last_pot_was_red());
        assert_eq!(state.current_break(), 8);
        assert_eq!(state.frame_score(TeamId::A), 8);
        assert_eq!(state.current_break.len(), 2);
    }

    #[test]
    fn green_stripe_is_not_a_snooker_ball() {
        let state = singles();
        let err = PotAction {
            ball: BallName::GreenStripe,
        }
        .pre_validate(&state, &CTX)
        .unwrap_err();
        assert_eq!(err, SnookerError::BallNotInCatalog(BallName::GreenStripe));
    }

    #[test]
    fn sequence_rejects_out_of_order_color() {
        let mut state = singles();
        state.reds_remaining = 0;
        state.phase = Phase::ColorsSequence {
            next: BallName::Brown,
        };

        let err = PotAction {
            ball: BallName::Pink,
        }
        .pre_validate(&state, &CTX)
        .unwrap_err();
        assert_eq!(
            err,
            SnookerError::WrongBall {
                expected: BallName::Brown,
                got: BallName::Pink
            }
        );

        let err = PotAction { ball: BallName::Red }
            .pre_validate(&state, &CTX)
            .unwrap_err();
        assert!(matches!(err, SnookerError::WrongBall { .. }));
    }

    #[test]
    fn color_after_last_red_starts_sequence() {
        let mut state = singles();
        state.reds_remaining = 1;
        pot(&mut state, BallName::Red);
        assert_eq!(state.reds_remaining, 0);
        pot(&mut state, BallName::Blue);
        assert_eq!(state.next_color_in_sequence(), Some(BallName::Yellow));
    }

    #[test]
    fn final_black_ends_frame() {
        let mut state = singles();
        state.reds_remaining = 0;
        state.phase = Phase::ColorsSequence {
            next: BallName::Pink,
        };
        pot(&mut state, BallName::Pink);
        pot(&mut state, BallName::Black);

        assert_eq!(state.winner, Some(Winner::Player(PlayerId(1))));
        assert_eq!(state.players.get(0).unwrap().highest_break, 13);
        assert_eq!(state.current_break(), 0);
        assert!(matches!(
            state.events.last(),
            Some(FrameEvent::FrameEnd { .. })
        ));
    }

    #[test]
    fn foul_awards_opponent_and_passes_turn() {
        let mut state = singles();
        pot(&mut state, BallName::Red);
        let foul = FoulAction { penalty: None };
        foul.pre_validate(&state, &CTX).unwrap();
        foul.apply(&mut state, &CTX).unwrap();

        assert_eq!(state.current_player, 1);
        assert_eq!(state.frame_score(TeamId::B), 4);
        assert!(!state.last_pot_was_red());
        assert!(matches!(
            state.events.last(),
            Some(FrameEvent::Foul { beneficiary: Side::Player(PlayerId(2)), points: 4, .. })
        ));
    }

    #[test]
    fn non_positive_penalty_is_rejected() {
        let state = singles();
        let err = FoulAction { penalty: Some(0) }
            .pre_validate(&state, &CTX)
            .unwrap_err();
        assert_eq!(err, SnookerError::InvalidPenalty(0));
    }

    #[test]
    fn miss_with_no_reds_enters_sequence() {
        let mut state = singles();
        state.reds_remaining = 0;
        state.phase = Phase::RedsAndColors {
            last_pot_was_red: true,
        };
        MissAction.apply(&mut state, &CTX).unwrap();
        assert_eq!(state.next_color_in_sequence(), Some(BallName::Yellow));
        assert_eq!(state.current_player, 1);
    }

    #[test]
    fn decided_frame_rejects_play() {
        let mut state = singles();
        state.winner = Some(Winner::Draw);
        assert_eq!(
            MissAction.pre_validate(&state, &CTX),
            Err(SnookerError::GameDecided)
        );
        assert_eq!(NewFrameAction.pre_validate(&state, &CTX), Ok(()));
    }

    #[test]
    fn out_of_range_index_has_no_active_player() {
        let mut state = singles();
        state.current_player = 9;
        assert_eq!(
            EndFrameAction.pre_validate(&state, &CTX),
            Err(SnookerError::NoActivePlayer {
                index: 9,
                players: 2
            })
        );
    }
}
