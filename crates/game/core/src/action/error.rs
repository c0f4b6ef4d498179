//! Action rejection errors.
//!
//! A rejected action never changes the match: the engine restores the
//! pre-action state whichever phase failed.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{BallName, PlayerId, TeamId};

// ============================================================================
// Snooker
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnookerError {
    /// The frame already has a result.
    #[error("the frame is already decided")]
    GameDecided,

    /// The current player index does not point at a player.
    #[error("no active player at position {index} (roster of {players})")]
    NoActivePlayer { index: usize, players: usize },

    /// The active player is not assigned to a side.
    #[error("player {0} is not on a side")]
    PlayerWithoutTeam(PlayerId),

    #[error("{0} is not a snooker ball")]
    BallNotInCatalog(BallName),

    /// A colour was potted out of the fixed end-of-frame order.
    #[error("wrong ball: expected {expected}, got {got}")]
    WrongBall { expected: BallName, got: BallName },

    #[error("no reds remain on the table")]
    NoRedsRemaining,

    #[error("foul penalty must be positive (got {0})")]
    InvalidPenalty(i32),

    #[error("reds remaining out of range: {0}")]
    RedsOutOfRange(u8),

    #[error("colour sequence started with {reds} reds still on the table")]
    PhaseMismatch { reds: u8 },

    /// A score would leave the `i32` range.
    #[error("score of {score} would overflow")]
    ScoreOverflow { score: i32 },
}

impl GameError for SnookerError {
    fn severity(&self) -> ErrorSeverity {
        use SnookerError::*;
        match self {
            GameDecided | WrongBall { .. } | NoRedsRemaining | BallNotInCatalog(_)
            | InvalidPenalty(_) => ErrorSeverity::Validation,

            NoActivePlayer { .. }
            | PlayerWithoutTeam(_)
            | RedsOutOfRange(_)
            | PhaseMismatch { .. }
            | ScoreOverflow { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use SnookerError::*;
        match self {
            GameDecided => "SNOOKER_GAME_DECIDED",
            NoActivePlayer { .. } => "SNOOKER_NO_ACTIVE_PLAYER",
            PlayerWithoutTeam(_) => "SNOOKER_PLAYER_WITHOUT_TEAM",
            BallNotInCatalog(_) => "SNOOKER_BALL_NOT_IN_CATALOG",
            WrongBall { .. } => "SNOOKER_WRONG_BALL",
            NoRedsRemaining => "SNOOKER_NO_REDS_REMAINING",
            InvalidPenalty(_) => "SNOOKER_INVALID_PENALTY",
            RedsOutOfRange(_) => "SNOOKER_REDS_OUT_OF_RANGE",
            PhaseMismatch { .. } => "SNOOKER_PHASE_MISMATCH",
            ScoreOverflow { .. } => "SNOOKER_SCORE_OVERFLOW",
        }
    }
}

// ============================================================================
// Century
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CenturyError {
    #[error("the game is already decided")]
    GameDecided,

    #[error("no active player at position {index} (roster of {players})")]
    NoActivePlayer { index: usize, players: usize },

    #[error("{0} is not a century ball")]
    BallNotInCatalog(BallName),

    /// Cached team total disagrees with the sum of its players.
    #[error("{team} total is {cached} but its players sum to {actual}")]
    TeamScoreDrift {
        team: TeamId,
        cached: i32,
        actual: i32,
    },

    #[error("score of {score} would overflow")]
    ScoreOverflow { score: i32 },
}

impl GameError for CenturyError {
    fn severity(&self) -> ErrorSeverity {
        use CenturyError::*;
        match self {
            GameDecided | BallNotInCatalog(_) => ErrorSeverity::Validation,
            NoActivePlayer { .. } | TeamScoreDrift { .. } | ScoreOverflow { .. } => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use CenturyError::*;
        match self {
            GameDecided => "CENTURY_GAME_DECIDED",
            NoActivePlayer { .. } => "CENTURY_NO_ACTIVE_PLAYER",
            BallNotInCatalog(_) => "CENTURY_BALL_NOT_IN_CATALOG",
            TeamScoreDrift { .. } => "CENTURY_TEAM_SCORE_DRIFT",
            ScoreOverflow { .. } => "CENTURY_SCORE_OVERFLOW",
        }
    }
}
