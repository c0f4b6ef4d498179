//! Repository layer for persisted match blobs.
//!
//! Each variant owns one [`Slot`]. The session writes the whole match blob
//! after every accepted action and clears the slot once a result is decided.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileStateRepository;
pub use memory::InMemoryStateRepo;
pub use traits::{Slot, StateRepository};
