//! File-based StateRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use super::{RepositoryError, Result, Slot, StateRepository};

/// File-based implementation of StateRepository.
///
/// Each slot is one JSON file in `base_dir` (see [`Slot::file_name`]).
/// Writes go to a sibling `.tmp` file first and are renamed into place, so a
/// crash mid-write leaves the previous blob intact.
#[derive(Debug)]
pub struct FileStateRepository {
    base_dir: PathBuf,
}

impl FileStateRepository {
    /// Create a new file-based state repository, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn slot_path(&self, slot: Slot) -> PathBuf {
        self.base_dir.join(slot.file_name())
    }
}

impl StateRepository for FileStateRepository {
    fn save(&self, slot: Slot, blob: &str) -> Result<()> {
        let path = self.slot_path(slot);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, blob)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved {} match to {}", slot, path.display());
        Ok(())
    }

    fn load(&self, slot: Slot) -> Result<Option<String>> {
        let path = self.slot_path(slot);

        match fs::read_to_string(&path) {
            Ok(blob) => {
                tracing::debug!("Loaded {} match from {}", slot, path.display());
                Ok(Some(blob))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(RepositoryError::Io(err)),
        }
    }

    fn exists(&self, slot: Slot) -> bool {
        self.slot_path(slot).exists()
    }

    fn delete(&self, slot: Slot) -> Result<()> {
        let path = self.slot_path(slot);

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted {} match", slot);
        }
        Ok(())
    }
}
