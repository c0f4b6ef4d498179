//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the engines, repositories, and mode loading so clients
//! can bubble them up with consistent context.
use thiserror::Error;

use cue_core::{BlobError, ConfigError, ExecuteError, GameError, HistoryError, StateError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error("undo refused: {0}")]
    History(#[from] HistoryError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Blob(#[from] BlobError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("failed to load game modes: {0}")]
    Modes(String),
}

impl RuntimeError {
    /// Stable code of the underlying rules error, if there is one.
    pub fn error_code(&self) -> Option<&'static str> {
        match self {
            RuntimeError::Config(err) => Some(err.error_code()),
            RuntimeError::Execute(err) => Some(err.error_code()),
            RuntimeError::History(err) => Some(err.error_code()),
            RuntimeError::State(err) => Some(err.error_code()),
            RuntimeError::Blob(err) => Some(err.error_code()),
            RuntimeError::Repository(_) | RuntimeError::Modes(_) => None,
        }
    }

    /// True when the user asked for something the rules refuse.
    pub fn is_rejection(&self) -> bool {
        match self {
            RuntimeError::Execute(err) => err.is_rejection(),
            RuntimeError::History(_) | RuntimeError::State(_) => true,
            _ => false,
        }
    }
}
