//! State management errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::PlayerId;

/// Errors raised by direct state edits that bypass the action pipeline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// No player with this id is on the roster.
    #[error("player {id} not found")]
    PlayerNotFound { id: PlayerId },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            StateError::PlayerNotFound { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            StateError::PlayerNotFound { .. } => "STATE_PLAYER_NOT_FOUND",
        }
    }
}
