//! Storage contract for saved matches.

use std::fmt;

use cue_core::Variant;

use super::Result;

/// Storage key for a saved match. One slot per variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Snooker,
    Century,
}

impl Slot {
    pub const fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Snooker => Slot::Snooker,
            Variant::Century => Slot::Century,
        }
    }

    /// File name used by [`FileStateRepository`](super::FileStateRepository).
    pub const fn file_name(self) -> &'static str {
        match self {
            Slot::Snooker => "snooker_game_state.json",
            Slot::Century => "century_game_state.json",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Snooker => f.write_str("snooker"),
            Slot::Century => f.write_str("century"),
        }
    }
}

/// Repository for saved match blobs.
///
/// Blobs are opaque JSON text here; decoding (and deciding what to do with a
/// blob that does not decode) is the session's job.
pub trait StateRepository: Send + Sync {
    /// Replace whatever is stored in `slot`.
    fn save(&self, slot: Slot, blob: &str) -> Result<()>;

    /// Load the blob stored in `slot`, if any.
    fn load(&self, slot: Slot) -> Result<Option<String>>;

    fn exists(&self, slot: Slot) -> bool;

    /// Clear `slot`. Clearing an empty slot is not an error.
    fn delete(&self, slot: Slot) -> Result<()>;
}
