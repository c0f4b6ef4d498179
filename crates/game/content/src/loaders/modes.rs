//! Game mode loader.

use std::collections::HashSet;
use std::path::Path;

use cue_core::{GameConfig, ModeRegistry};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// On-disk layout: a list of `[[modes]]` tables.
#[derive(Debug, Deserialize)]
struct ModeFile {
    #[serde(default)]
    modes: Vec<GameConfig>,
}

/// Loader for game mode tables from TOML files.
pub struct ModeLoader;

impl ModeLoader {
    /// Load the modes defined in a TOML file, and nothing else.
    pub fn load(path: &Path) -> LoadResult<ModeRegistry> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load modes from {}: {}", path.display(), e))
    }

    /// Load a TOML file on top of the built-in modes.
    ///
    /// A file mode with the same id as a built-in one replaces it.
    pub fn load_with_builtin(path: &Path) -> LoadResult<ModeRegistry> {
        let content = read_file(path)?;
        let mut registry = ModeRegistry::builtin();
        Self::merge(&mut registry, &content)
            .map_err(|e| anyhow::anyhow!("Failed to load modes from {}: {}", path.display(), e))?;
        Ok(registry)
    }

    /// Parse modes from TOML text.
    pub fn parse(content: &str) -> LoadResult<ModeRegistry> {
        let mut registry = ModeRegistry::new();
        Self::merge(&mut registry, content)?;
        Ok(registry)
    }

    fn merge(registry: &mut ModeRegistry, content: &str) -> LoadResult<()> {
        let file: ModeFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse modes TOML: {}", e))?;

        let mut seen = HashSet::new();
        for mode in file.modes {
            if !seen.insert(mode.id.clone()) {
                anyhow::bail!("Mode '{}' is defined more than once", mode.id);
            }
            let id = mode.id.clone();
            registry
                .insert(mode)
                .map_err(|e| anyhow::anyhow!("Invalid mode '{}': {}", id, e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cue_core::Variant;

    #[test]
    fn parses_minimal_century_mode() {
        let registry = ModeLoader::parse(
            r#"
            [[modes]]
            id = "sprint-2"
            variant = "century"
            label = "Sprint"
            num_players = 2
            target_score = 50
            "#,
        )
        .unwrap();

        let sprint = registry.resolve("sprint-2").unwrap();
        assert_eq!(sprint.variant, Variant::Century);
        assert_eq!(sprint.target_score, Some(50));
        assert_eq!(sprint.foul_points, GameConfig::DEFAULT_FOUL_POINTS);
        assert!(sprint.team_layout.is_none());
    }

    #[test]
    fn rejects_century_mode_without_target() {
        let err = ModeLoader::parse(
            r#"
            [[modes]]
            id = "endless"
            variant = "century"
            label = "Endless"
            num_players = 2
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("endless"), "{err}");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = ModeLoader::parse(
            r#"
            [[modes]]
            id = "twice"
            variant = "century"
            label = "One"
            num_players = 2
            target_score = 60

            [[modes]]
            id = "twice"
            variant = "century"
            label = "Two"
            num_players = 3
            target_score = 60
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("more than once"), "{err}");
    }

    #[test]
    fn empty_file_has_no_modes() {
        assert!(ModeLoader::parse("").unwrap().is_empty());
    }

    #[test]
    fn parses_team_layout() {
        let registry = ModeLoader::parse(
            r#"
            [[modes]]
            id = "club-doubles"
            variant = "century"
            label = "Club Doubles"
            num_players = 4
            target_score = 150
            foul_points = 5
            team_layout = { players_per_team = 2 }
            "#,
        )
        .unwrap();

        let mode = registry.resolve("club-doubles").unwrap();
        assert!(mode.is_team_game());
        assert_eq!(mode.foul_points, 5);
    }
}
