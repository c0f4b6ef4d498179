//! Runtime around the `cue-core` scoring engines.
//!
//! The core crate is pure: it knows nothing about files, clocks or logs.
//! This crate supplies those pieces:
//!
//! - [`Session`] drives a match and keeps its save slot in step
//! - [`StateRepository`] implementations store match blobs in memory or on disk
//! - [`SystemClock`] stamps events with wall-clock time
//! - [`RuntimeConfig`] resolves the data directory and mode table
//! - [`logging::init`] installs the tracing subscriber

pub mod api;
pub mod clock;
pub mod config;
pub mod logging;
pub mod repository;
pub mod session;

pub use api::{Result, RuntimeError};
pub use clock::{SystemClock, format_timestamp};
pub use config::RuntimeConfig;
pub use repository::{
    FileStateRepository, InMemoryStateRepo, RepositoryError, Slot, StateRepository,
};
pub use session::{CenturySession, Scoreboard, Session, SnookerSession};
