//! Integration tests for loading maps and configuration from disk.

use std::io::Write;
use tempfile::NamedTempFile;
use tilecast::{
    GameConfig, GameState, Level, LevelData, TileLabel, TilecastError, TilecastResult, Vector2,
};

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_load_map_file() -> TilecastResult<()> {
    let file = write_temp(
        r##"{
            "width": 3,
            "height": 2,
            "tiles": [
                ["red", null, "#336699"],
                [null, null, "blue"]
            ],
            "spawn": { "x": 1.5, "y": 1.5 },
            "facing": { "x": 1.0, "y": 0.0 }
        }"##,
    );

    let data = LevelData::load(file.path())?;
    let state = GameState::from_level_data(data, GameConfig::default())?;

    assert_eq!(state.level.width(), 3);
    assert_eq!(state.level.height(), 2);
    assert_eq!(
        state.level.tile(Vector2::new(2.0, 0.0))?,
        Some(&TileLabel::new("#336699"))
    );
    assert_eq!(state.player.position(), Vector2::new(1.5, 1.5));
    assert_eq!(state.camera.center(), Vector2::new(2.5, 1.5));

    Ok(())
}

#[test]
fn test_load_map_with_short_row() {
    let file = write_temp(
        r#"{
            "width": 3,
            "height": 2,
            "tiles": [["red", null, "red"], ["red", null]]
        }"#,
    );

    let result = Level::load(file.path());
    assert!(matches!(
        result,
        Err(TilecastError::WidthMismatch {
            row: 1,
            expected: 3,
            actual: 2
        })
    ));
}

#[test]
fn test_load_map_with_wrong_height() {
    let file = write_temp(r#"{ "width": 1, "height": 3, "tiles": [["red"]] }"#);

    let result = Level::load(file.path());
    assert!(matches!(
        result,
        Err(TilecastError::HeightMismatch {
            expected: 3,
            actual: 1
        })
    ));
}

#[test]
fn test_missing_map_file_is_io_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let result = Level::load(dir.path().join("missing.json"));
    assert!(matches!(result, Err(TilecastError::Io(_))));
}

#[test]
fn test_spawn_outside_map_rejected() {
    let file = write_temp(
        r#"{
            "width": 2,
            "height": 2,
            "tiles": [[null, null], [null, null]],
            "spawn": { "x": 5.0, "y": 1.0 }
        }"#,
    );

    let data = LevelData::load(file.path()).unwrap();
    let result = GameState::from_level_data(data, GameConfig::default());
    assert!(matches!(result, Err(TilecastError::InvalidMap(_))));
}

#[test]
fn test_non_finite_facing_rejected() {
    // 1e39 overflows f32 and deserializes as infinity.
    let file = write_temp(
        r#"{
            "width": 2,
            "height": 2,
            "tiles": [[null, null], [null, null]],
            "spawn": { "x": 1.0, "y": 1.0 },
            "facing": { "x": 1e39, "y": 0.0 }
        }"#,
    );

    let data = LevelData::load(file.path()).unwrap();
    let result = GameState::from_level_data(data, GameConfig::default());
    assert!(matches!(result, Err(TilecastError::InvalidMap(_))));
}

#[test]
fn test_load_config_file() -> TilecastResult<()> {
    let file = write_temp(r#"{ "player_speed": 0.2, "show_debug_overlay": true }"#);

    let config = GameConfig::load(file.path())?;
    assert_eq!(config.player_speed, 0.2);
    assert!(config.show_debug_overlay);
    assert!(!config.scale_by_delta_time);

    Ok(())
}
