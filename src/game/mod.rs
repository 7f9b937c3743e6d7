//! # Game Module
//!
//! Core simulation: the tile grid, the player's kinematics and the camera plane.
//!
//! This module contains the building blocks a frame loop drives:
//! - Level representation and bounds-checked tile lookup
//! - Player movement from directional intent
//! - Camera plane derivation for a perspective projector
//! - Game state that runs one tick of all of the above

pub mod camera;
pub mod level;
pub mod levels;
pub mod player;
pub mod state;

pub use camera::*;
pub use level::*;
pub use player::*;
pub use state::*;

use crate::{config, TilecastError, TilecastResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Runtime configuration for movement and presentation.
///
/// # Examples
///
/// ```
/// use tilecast::GameConfig;
///
/// let config = GameConfig::default();
/// assert!(config.validate().is_ok());
/// assert!(!config.scale_by_delta_time);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Distance moved per held axis per tick, in grid cells
    pub player_speed: f32,
    /// Size of one grid cell on screen, in pixels
    pub tile_size: f32,
    /// Scale movement by elapsed frame time instead of a fixed step
    pub scale_by_delta_time: bool,
    /// Draw the tick counter and frame time overlay
    pub show_debug_overlay: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_speed: config::PLAYER_SPEED,
            tile_size: config::DEFAULT_TILE_SIZE,
            scale_by_delta_time: false,
            show_debug_overlay: false,
        }
    }
}

impl GameConfig {
    /// Checks that every value is usable by the simulation and renderer.
    pub fn validate(&self) -> TilecastResult<()> {
        if !self.player_speed.is_finite() || self.player_speed < 0.0 {
            return Err(TilecastError::InvalidConfig(format!(
                "player_speed must be a non-negative number, got {}",
                self.player_speed
            )));
        }
        if !self.tile_size.is_finite() || self.tile_size <= 0.0 {
            return Err(TilecastError::InvalidConfig(format!(
                "tile_size must be positive, got {}",
                self.tile_size
            )));
        }
        Ok(())
    }

    /// Parses and validates a configuration from JSON.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> TilecastResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file.
    pub fn load(path: impl AsRef<Path>) -> TilecastResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded configuration from {}", path.as_ref().display());
        Self::from_json(&json)
    }
}
