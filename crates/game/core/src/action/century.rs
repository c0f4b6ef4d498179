//! Century transitions.
//!
//! Any catalog ball may be potted or deducted at any time. After every
//! score change the acting side is checked against the target: landing on it
//! exactly wins, going past it is reported as an [`Overshoot`] and play goes
//! on.

use crate::action::{ActionTransition, CenturyError, TransitionContext};
use crate::config::Variant;
use crate::rules::{Overshoot, TargetCheck, check_target, strict_leader};
use crate::state::{
    Ball, BallName, CenturyEvent, CenturyState, PlayerId, TeamId, Timestamp, Winner,
};

/// Player action in a Century game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CenturyAction {
    Pot(PotAction),
    Deduct(DeductAction),
    FoulPenalty(FoulPenaltyAction),
    ResetScore(ResetScoreAction),
    EndTurn(EndTurnAction),
    EndGame(EndGameAction),
}

impl CenturyAction {
    pub const fn pot(ball: BallName) -> Self {
        Self::Pot(PotAction { ball })
    }

    pub const fn deduct(ball: BallName) -> Self {
        Self::Deduct(DeductAction { ball })
    }

    pub const fn foul_penalty() -> Self {
        Self::FoulPenalty(FoulPenaltyAction)
    }

    pub const fn reset_score() -> Self {
        Self::ResetScore(ResetScoreAction)
    }

    pub const fn end_turn() -> Self {
        Self::EndTurn(EndTurnAction)
    }

    pub const fn end_game() -> Self {
        Self::EndGame(EndGameAction)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pot(_) => "pot",
            Self::Deduct(_) => "deduct",
            Self::FoulPenalty(_) => "foul_penalty",
            Self::ResetScore(_) => "reset_score",
            Self::EndTurn(_) => "end_turn",
            Self::EndGame(_) => "end_game",
        }
    }
}

// ============================================================================
// Shared helpers
// ============================================================================

fn ensure_open(state: &CenturyState) -> Result<(), CenturyError> {
    if state.winner.is_some() {
        return Err(CenturyError::GameDecided);
    }
    active_id(state).map(|_| ())
}

fn active_id(state: &CenturyState) -> Result<PlayerId, CenturyError> {
    state
        .active_player()
        .map(|player| player.id)
        .ok_or(CenturyError::NoActivePlayer {
            index: state.current_player,
            players: state.players.len(),
        })
}

fn catalog_ball(name: BallName) -> Result<Ball, CenturyError> {
    Variant::Century
        .ball(name)
        .ok_or(CenturyError::BallNotInCatalog(name))
}

/// Scores after a change: the player's and, in team games, their team's.
struct Scored {
    player: PlayerId,
    player_score: i32,
    team_score: Option<i32>,
}

/// Rescores the active player and re-sums both teams.
///
/// `rescore` maps the old score to the new one; `None` means it would
/// overflow.
fn adjust_active<F>(state: &mut CenturyState, rescore: F) -> Result<Scored, CenturyError>
where
    F: FnOnce(i32) -> Option<i32>,
{
    let (index, players) = (state.current_player, state.players.len());
    let player = state
        .players
        .get_mut(index)
        .ok_or(CenturyError::NoActivePlayer { index, players })?;
    player.score = rescore(player.score).ok_or(CenturyError::ScoreOverflow {
        score: player.score,
    })?;
    let (id, score, team) = (player.id, player.score, player.team);

    state.team_scores = state
        .players
        .checked_team_totals()
        .ok_or(CenturyError::ScoreOverflow { score })?;
    Ok(Scored {
        player: id,
        player_score: score,
        team_score: team
            .filter(|_| state.is_team_game)
            .map(|team| state.team_scores.get(team)),
    })
}

/// Runs the target check for the side `player` plays for.
fn check_win(state: &mut CenturyState, player: PlayerId, at: Timestamp) -> Option<Overshoot> {
    let side = state.players.by_id(player).map(|p| state.side_of(p))?;
    let score = state.side_score(side);

    match check_target(score, state.target_score) {
        TargetCheck::Below => None,
        TargetCheck::Reached => {
            declare_winner(state, side.into(), at);
            None
        }
        TargetCheck::Overshoot { .. } => Some(Overshoot {
            side,
            score,
            target: state.target_score,
        }),
    }
}

fn declare_winner(state: &mut CenturyState, winner: Winner, at: Timestamp) {
    let event = CenturyEvent::GameEnd {
        at,
        winner,
        winner_name: state.winner_name(winner),
        final_scores: state.final_scores(),
        target_score: state.target_score,
    };
    state.events.append(event);
    state.winner = Some(winner);
}

/// Hands the turn to the next player. Does nothing in a one-player game.
fn pass_turn(state: &mut CenturyState, at: Timestamp) {
    if state.players.len() <= 1 {
        return;
    }
    let previous = state.current_player;
    state.current_player = state.players.next_index(previous);

    if let (Some(previous), Some(next)) = (
        state.players.get(previous).map(|p| p.id),
        state.active_player().map(|p| p.id),
    ) {
        state.events.append(CenturyEvent::TurnChange {
            at,
            previous_player: previous,
            next_player: next,
        });
    }
}

fn check_totals(state: &CenturyState) -> Result<(), CenturyError> {
    let actual = state.players.team_totals();
    for team in [TeamId::A, TeamId::B] {
        if state.team_scores.get(team) != actual.get(team) {
            return Err(CenturyError::TeamScoreDrift {
                team,
                cached: state.team_scores.get(team),
                actual: actual.get(team),
            });
        }
    }
    if state.current_player >= state.players.len() {
        return Err(CenturyError::NoActivePlayer {
            index: state.current_player,
            players: state.players.len(),
        });
    }
    Ok(())
}

/// Implements the checks every Century transition shares.
macro_rules! century_transition {
    ($action:ty, |$self_:ident, $state:ident, $ctx:ident| $apply:block) => {
        impl ActionTransition for $action {
            type State = CenturyState;
            type Error = CenturyError;
            type Result = Option<Overshoot>;

            fn pre_validate(
                &self,
                state: &CenturyState,
                _ctx: &TransitionContext,
            ) -> Result<(), CenturyError> {
                ensure_open(state)
            }

            fn apply(
                &$self_,
                $state: &mut CenturyState,
                $ctx: &TransitionContext,
            ) -> Result<Option<Overshoot>, CenturyError> $apply

            fn post_validate(
                &self,
                state: &CenturyState,
                _ctx: &TransitionContext,
            ) -> Result<(), CenturyError> {
                check_totals(state)
            }
        }
    };
}

// ============================================================================
// Actions
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotAction {
    pub ball: BallName,
}

century_transition!(PotAction, |self, state, ctx| {
    let ball = catalog_ball(self.ball)?;
    let scored = adjust_active(state, |score| score.checked_add(ball.value))?;
    state.events.append(CenturyEvent::Pot {
        at: ctx.now,
        player: scored.player,
        ball,
        new_player_score: scored.player_score,
        new_team_score: scored.team_score,
    });
    Ok(check_win(state, scored.player, ctx.now))
});

/// Takes a ball's value off the active player and ends their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeductAction {
    pub ball: BallName,
}

century_transition!(DeductAction, |self, state, ctx| {
    let ball = catalog_ball(self.ball)?;
    let scored = adjust_active(state, |score| score.checked_sub(ball.value))?;
    state.events.append(CenturyEvent::Deduct {
        at: ctx.now,
        player: scored.player,
        ball,
        new_player_score: scored.player_score,
        new_team_score: scored.team_score,
    });
    let overshoot = check_win(state, scored.player, ctx.now);
    if state.winner.is_none() {
        pass_turn(state, ctx.now);
    }
    Ok(overshoot)
});

/// Takes the foul value off the active player and ends their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoulPenaltyAction;

century_transition!(FoulPenaltyAction, |self, state, ctx| {
    let points = state.foul_points;
    let scored = adjust_active(state, |score| score.checked_sub(points))?;
    state.events.append(CenturyEvent::FoulPenalty {
        at: ctx.now,
        player: scored.player,
        points_deducted: points,
        new_player_score: scored.player_score,
        new_team_score: scored.team_score,
    });
    let overshoot = check_win(state, scored.player, ctx.now);
    if state.winner.is_none() {
        pass_turn(state, ctx.now);
    }
    Ok(overshoot)
});

/// Sets the active player's score back to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetScoreAction;

century_transition!(ResetScoreAction, |self, state, ctx| {
    let (previous_player_score, previous_team_score) = {
        let player = state.active_player().ok_or(CenturyError::NoActivePlayer {
            index: state.current_player,
            players: state.players.len(),
        })?;
        let team = player
            .team
            .filter(|_| state.is_team_game)
            .map(|team| state.team_scores.get(team));
        (player.score, team)
    };

    let scored = adjust_active(state, |_| Some(0))?;
    state.events.append(CenturyEvent::ResetScore {
        at: ctx.now,
        player: scored.player,
        previous_player_score,
        new_player_score: scored.player_score,
        previous_team_score,
        new_team_score: scored.team_score,
    });
    Ok(check_win(state, scored.player, ctx.now))
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndTurnAction;

century_transition!(EndTurnAction, |self, state, ctx| {
    pass_turn(state, ctx.now);
    Ok(None)
});

/// Ends the game on the current totals; the strict leader wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndGameAction;

century_transition!(EndGameAction, |self, state, ctx| {
    let winner = strict_leader(state.side_totals());
    declare_winner(state, winner, ctx.now);
    Ok(None)
});
