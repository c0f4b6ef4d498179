//! Data-driven game mode definitions and loaders.
//!
//! The scorekeeper ships with a built-in table of modes
//! ([`cue_core::ModeRegistry::builtin`]). This crate lets a club add its own
//! modes, or override built-in ones, from a TOML file:
//!
//! ```toml
//! [[modes]]
//! id = "sprint-2"
//! variant = "century"
//! label = "Sprint (2 Players - Target 50)"
//! num_players = 2
//! target_score = 50
//! ```
//!
//! Content is consumed by the runtime when a match is set up and never
//! appears in match state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, ModeLoader};
