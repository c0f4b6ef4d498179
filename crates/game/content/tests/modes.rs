use std::path::PathBuf;

use cue_content::ModeLoader;
use cue_core::{GameConfig, Variant};

fn sample_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/house_modes.toml")
}

#[test]
fn sample_file_loads_alone() {
    let registry = ModeLoader::load(&sample_file()).unwrap();
    assert_eq!(registry.len(), 3);
    assert!(registry.get("singles-2").is_none());
    assert_eq!(registry.of_variant(Variant::Century).count(), 2);
}

#[test]
fn sample_file_overrides_builtin() {
    let registry = ModeLoader::load_with_builtin(&sample_file()).unwrap();

    // 12 built-in modes, two new ones, one replaced.
    assert_eq!(registry.len(), 14);
    assert_eq!(registry.resolve("snooker-singles").unwrap().foul_points, 7);
    assert_eq!(
        registry.resolve("snooker-doubles").unwrap().foul_points,
        GameConfig::DEFAULT_FOUL_POINTS
    );
    assert_eq!(registry.resolve("club-doubles").unwrap().target_score, Some(150));
}

#[test]
fn missing_file_names_the_path() {
    let err = ModeLoader::load(&PathBuf::from("/nonexistent/modes.toml")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/modes.toml"), "{err}");
}
