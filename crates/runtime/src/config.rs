use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cue_content::ModeLoader;
use cue_core::ModeRegistry;
use directories::ProjectDirs;

use crate::api::{Result, RuntimeError};
use crate::repository::{FileStateRepository, InMemoryStateRepo, StateRepository};

const APP_NAME: &str = "cue-scorekeeper";

/// Runtime configuration.
///
/// Environment overrides:
/// - `CUE_DATA_DIR`: directory holding saved matches
/// - `CUE_PERSISTENCE`: `false`/`0`/`off` keeps matches in memory only
/// - `CUE_MODES_FILE`: TOML file of extra or overriding game modes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Save directory; `None` resolves to the platform data directory.
    pub data_dir: Option<PathBuf>,
    pub persistence: bool,
    pub modes_file: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            persistence: true,
            modes_file: None,
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("CUE_DATA_DIR") {
            config.data_dir = Some(dir);
        }
        if let Some(enabled) = read_env_bool("CUE_PERSISTENCE") {
            config.persistence = enabled;
        }
        if let Some(path) = read_env::<PathBuf>("CUE_MODES_FILE") {
            config.modes_file = Some(path);
        }

        config
    }

    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn with_modes_file(mut self, path: impl AsRef<Path>) -> Self {
        self.modes_file = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    /// Built-in modes, plus the modes file when one is configured.
    pub fn mode_registry(&self) -> Result<ModeRegistry> {
        match &self.modes_file {
            Some(path) => ModeLoader::load_with_builtin(path)
                .map_err(|e| RuntimeError::Modes(format!("{e:#}"))),
            None => Ok(ModeRegistry::builtin()),
        }
    }

    /// Repository matching the persistence setting.
    pub fn repository(&self) -> Result<Arc<dyn StateRepository>> {
        if !self.persistence {
            return Ok(Arc::new(InMemoryStateRepo::new()));
        }
        let dir = self.resolved_data_dir();
        tracing::debug!("Saving matches under {}", dir.display());
        Ok(Arc::new(FileStateRepository::new(dir)?))
    }
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_data_dir_wins() {
        let config = RuntimeConfig::default().with_data_dir("/tmp/cue");
        assert_eq!(config.resolved_data_dir(), PathBuf::from("/tmp/cue"));
    }

    #[test]
    fn builtin_modes_without_file() {
        let registry = RuntimeConfig::default().mode_registry().unwrap();
        assert!(registry.get("quadruples").is_some());
    }

    #[test]
    fn missing_modes_file_is_reported() {
        let err = RuntimeConfig::default()
            .with_modes_file("/definitely/not/here.toml")
            .mode_registry()
            .unwrap_err();
        assert!(matches!(err, RuntimeError::Modes(ref msg) if msg.contains("here.toml")));
    }

    #[test]
    fn file_repository_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = RuntimeConfig::default().with_data_dir(dir.path().join("nested"));
        config.repository().unwrap();
        assert!(dir.path().join("nested").is_dir());
    }
}
