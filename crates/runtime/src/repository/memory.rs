//! In-memory StateRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{RepositoryError, Result, Slot, StateRepository};

/// In-memory implementation of StateRepository.
#[derive(Debug, Default)]
pub struct InMemoryStateRepo {
    blobs: RwLock<HashMap<Slot, String>>,
}

impl InMemoryStateRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with `blob` already stored in `slot`.
    pub fn with_blob(slot: Slot, blob: impl Into<String>) -> Self {
        let mut blobs = HashMap::new();
        blobs.insert(slot, blob.into());
        Self {
            blobs: RwLock::new(blobs),
        }
    }
}

impl StateRepository for InMemoryStateRepo {
    fn save(&self, slot: Slot, blob: &str) -> Result<()> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        blobs.insert(slot, blob.to_owned());
        Ok(())
    }

    fn load(&self, slot: Slot) -> Result<Option<String>> {
        let blobs = self
            .blobs
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(blobs.get(&slot).cloned())
    }

    fn exists(&self, slot: Slot) -> bool {
        self.blobs
            .read()
            .map(|blobs| blobs.contains_key(&slot))
            .unwrap_or(false)
    }

    fn delete(&self, slot: Slot) -> Result<()> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        blobs.remove(&slot);
        Ok(())
    }
}
