//! Persisted match blob.
//!
//! A blob is the JSON form of a whole [`Match`]: live state, event log and
//! undo stack. Cached values are re-derived on load so a hand-edited or
//! older blob cannot carry a stale team total into play.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::engine::Match;
use crate::error::{ErrorSeverity, GameError};
use crate::state::MatchState;

#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    #[error("malformed match blob: {0}")]
    Json(#[from] serde_json::Error),
}

impl GameError for BlobError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "BLOB_MALFORMED"
    }
}

impl<S> Match<S>
where
    S: MatchState + Serialize + DeserializeOwned,
{
    pub fn to_blob(&self) -> Result<String, BlobError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_blob(blob: &str) -> Result<Self, BlobError> {
        let mut game: Self = serde_json::from_str(blob)?;
        game.state.rederive();
        for snapshot in game.history.iter_mut() {
            snapshot.rederive();
        }
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::engine::CenturyMatch;
    use crate::env::FixedClock;

    #[test]
    fn garbage_is_rejected() {
        let err = CenturyMatch::from_blob("{not json").unwrap_err();
        assert_eq!(err.error_code(), "BLOB_MALFORMED");
    }

    #[test]
    fn load_resums_team_totals() {
        let config = GameConfig::century_teams("doubles", "Doubles", 2);
        let mut game = CenturyMatch::new(&config, &FixedClock::at_millis(1)).unwrap();
        game.state.players.get_mut(0).unwrap().score = 25;
        game.state.team_scores.a = 0;

        let restored = CenturyMatch::from_blob(&game.to_blob().unwrap()).unwrap();
        assert_eq!(restored.state().team_scores.a, 25);
    }
}
