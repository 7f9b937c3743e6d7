//! # Game State Module
//!
//! Owns the level, the player and the camera plane, and advances them one
//! tick at a time.
//!
//! A frame loop calls [`GameState::tick`] once per frame with the current
//! [`InputIntent`] and hands the result to a renderer. Nothing here is global;
//! the caller owns the state and passes it explicitly.

use crate::input::InputIntent;
use crate::{
    config, CameraPlane, GameConfig, Level, LevelData, Player, TilecastError, TilecastResult,
    Vector2,
};
use serde::{Deserialize, Serialize};

/// Central state for one running level.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The level being played
    pub level: Level,
    /// The player's kinematic state
    pub player: Player,
    /// Camera plane derived from the player after every tick
    pub camera: CameraPlane,
    /// Movement and presentation settings
    pub config: GameConfig,
    /// Number of ticks run so far
    pub tick_count: u64,
    /// Seconds elapsed during the most recent frame
    pub last_frame_time: f32,
}

/// Serializable view of the per-tick state, for debugging and tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickSnapshot {
    pub tick: u64,
    pub position: Vector2,
    pub direction: Vector2,
    pub camera: CameraPlane,
}

impl GameState {
    /// Creates a game state with the player at `spawn` facing `facing`.
    ///
    /// The spawn point must lie within `[0, width] x [0, height]` and the
    /// facing must be finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilecast::{GameConfig, GameState, Level, Vector2};
    ///
    /// let level = Level::new(vec![vec![None; 5]; 5], 5, 5).unwrap();
    /// let state = GameState::new(
    ///     level,
    ///     Vector2::new(2.5, 2.5),
    ///     Vector2::new(0.0, -1.0),
    ///     GameConfig::default(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(state.tick_count, 0);
    /// assert_eq!(state.camera.center(), Vector2::new(2.5, 1.5));
    /// ```
    pub fn new(
        level: Level,
        spawn: Vector2,
        facing: Vector2,
        config: GameConfig,
    ) -> TilecastResult<Self> {
        config.validate()?;

        let in_bounds = spawn.is_finite()
            && spawn.clamp(0.0, level.width() as f32, 0.0, level.height() as f32) == spawn;
        if !in_bounds {
            return Err(TilecastError::InvalidMap(format!(
                "spawn point ({}, {}) lies outside the {}x{} level",
                spawn.x,
                spawn.y,
                level.width(),
                level.height()
            )));
        }

        if !facing.is_finite() {
            return Err(TilecastError::InvalidMap(format!(
                "facing ({}, {}) is not a finite vector",
                facing.x, facing.y
            )));
        }

        let player = Player::with_speed(spawn, facing, config.player_speed);
        let camera = CameraPlane::from_player(&player);

        log::debug!(
            "Game state created: {}x{} level, spawn ({}, {})",
            level.width(),
            level.height(),
            spawn.x,
            spawn.y
        );

        Ok(Self {
            level,
            player,
            camera,
            config,
            tick_count: 0,
            last_frame_time: 0.0,
        })
    }

    /// Creates a game state from map data.
    ///
    /// Without a spawn the player starts at the center of the level; without a
    /// facing the player looks up (negative y).
    pub fn from_level_data(data: LevelData, config: GameConfig) -> TilecastResult<Self> {
        let spawn = data
            .spawn
            .unwrap_or_else(|| Vector2::new(data.width as f32 / 2.0, data.height as f32 / 2.0));
        let facing = data.facing.unwrap_or(Vector2::new(0.0, -1.0));
        let level = data.into_level()?;
        Self::new(level, spawn, facing, config)
    }

    /// Runs one frame: player movement, then camera plane derivation.
    ///
    /// Movement is fixed-step unless `config.scale_by_delta_time` is set, in
    /// which case the step is scaled by `frame_time` relative to the target
    /// frame rate.
    pub fn tick(&mut self, intent: &InputIntent, frame_time: f32) {
        if self.config.scale_by_delta_time {
            let scale = frame_time * config::TARGET_FPS;
            self.player.update_scaled(intent, &self.level, scale);
        } else {
            self.player.update(intent, &self.level);
        }
        self.camera.update(&self.player);

        self.tick_count += 1;
        self.last_frame_time = frame_time;

        log::trace!("Tick {} completed in {:.4}s", self.tick_count, frame_time);
    }

    /// Captures the player and camera state after the latest tick.
    pub fn snapshot(&self) -> TickSnapshot {
        TickSnapshot {
            tick: self.tick_count,
            position: self.player.position(),
            direction: self.player.direction(),
            camera: self.camera,
        }
    }

    /// Serializes the current snapshot to pretty JSON.
    pub fn to_json(&self) -> TilecastResult<String> {
        serde_json::to_string_pretty(&self.snapshot()).map_err(TilecastError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn open_state(config: GameConfig) -> GameState {
        let level = Level::new(vec![vec![None; 10]; 10], 10, 10).unwrap();
        GameState::new(
            level,
            Vector2::new(2.5, 6.5),
            Vector2::new(0.0, -1.0),
            config,
        )
        .unwrap()
    }

    #[test]
    fn test_game_state_creation() {
        let state = open_state(GameConfig::default());
        assert_eq!(state.tick_count, 0);
        assert_eq!(state.player.position(), Vector2::new(2.5, 6.5));
        assert_eq!(state.camera.left(), Vector2::new(2.0, 5.5));
    }

    #[test]
    fn test_spawn_outside_level_rejected() {
        let level = Level::new(vec![vec![None; 3]; 3], 3, 3).unwrap();
        let result = GameState::new(
            level,
            Vector2::new(4.0, 1.0),
            Vector2::new(0.0, -1.0),
            GameConfig::default(),
        );
        assert!(matches!(result, Err(TilecastError::InvalidMap(_))));
    }

    #[test]
    fn test_non_finite_facing_rejected() {
        for facing in [
            Vector2::new(f32::INFINITY, 0.0),
            Vector2::new(0.0, f32::NEG_INFINITY),
            Vector2::new(f32::NAN, 1.0),
        ] {
            let level = Level::new(vec![vec![None; 3]; 3], 3, 3).unwrap();
            let result = GameState::new(level, Vector2::new(1.5, 1.5), facing, GameConfig::default());
            assert!(
                matches!(result, Err(TilecastError::InvalidMap(_))),
                "facing {:?} should be rejected",
                facing
            );
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let level = Level::new(vec![vec![None; 3]; 3], 3, 3).unwrap();
        let settings = GameConfig {
            tile_size: -1.0,
            ..GameConfig::default()
        };
        let result = GameState::new(level, Vector2::new(1.0, 1.0), Vector2::zero(), settings);
        assert!(matches!(result, Err(TilecastError::InvalidConfig(_))));
    }

    #[test]
    fn test_tick_moves_player_then_camera() {
        let mut state = open_state(GameConfig::default());
        let intent = InputIntent {
            right: true,
            ..InputIntent::default()
        };
        state.tick(&intent, 1.0 / 60.0);

        assert_eq!(state.tick_count, 1);
        let position = state.player.position();
        let direction = state.player.direction();
        assert!(state
            .camera
            .center()
            .approx_eq(position.add(direction), EPSILON));
    }

    #[test]
    fn test_fixed_step_ignores_frame_time() {
        let mut slow = open_state(GameConfig::default());
        let mut fast = open_state(GameConfig::default());
        let intent = InputIntent {
            up: true,
            ..InputIntent::default()
        };
        slow.tick(&intent, 0.1);
        fast.tick(&intent, 0.001);
        assert_eq!(slow.player.position(), fast.player.position());
        assert_eq!(slow.last_frame_time, 0.1);
    }

    #[test]
    fn test_delta_time_scaling() {
        let settings = GameConfig {
            scale_by_delta_time: true,
            ..GameConfig::default()
        };
        let mut state = open_state(settings);
        let intent = InputIntent {
            up: true,
            ..InputIntent::default()
        };
        state.tick(&intent, 2.0 / config::TARGET_FPS);

        let expected_y = 6.5 - 2.0 * config::PLAYER_SPEED;
        assert!((state.player.position().y - expected_y).abs() < EPSILON);
    }

    #[test]
    fn test_from_level_data_defaults() {
        let data = LevelData {
            width: 4,
            height: 2,
            tiles: vec![vec![None; 4]; 2],
            spawn: None,
            facing: None,
        };
        let state = GameState::from_level_data(data, GameConfig::default()).unwrap();
        assert_eq!(state.player.position(), Vector2::new(2.0, 1.0));
        assert_eq!(state.player.direction(), Vector2::new(0.0, -1.0));
    }

    #[test]
    fn test_snapshot_json() {
        let mut state = open_state(GameConfig::default());
        state.tick(&InputIntent::default(), 0.016);

        let json = state.to_json().unwrap();
        let snapshot: TickSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, state.snapshot());
        assert_eq!(snapshot.tick, 1);
    }
}
