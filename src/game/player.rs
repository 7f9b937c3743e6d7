//! # Player Kinematics
//!
//! Position, facing and per-tick movement of the player.

use crate::input::InputIntent;
use crate::{config, Level, TilecastError, Vector2};
use serde::{Deserialize, Serialize};

/// The player's kinematic state.
///
/// `position` and `direction` persist across ticks. `velocity` is an impulse
/// accumulator that is rebuilt from the intent on every tick and reset to zero
/// once applied.
///
/// # Examples
///
/// ```
/// use tilecast::{InputIntent, Level, Player, Vector2};
///
/// let level = Level::new(vec![vec![None; 4]; 4], 4, 4).unwrap();
/// let mut player = Player::new(Vector2::new(2.0, 2.0), Vector2::new(0.0, -1.0));
///
/// let intent = InputIntent { up: true, ..InputIntent::default() };
/// player.update(&intent, &level);
///
/// assert!(player.position().y < 2.0);
/// assert_eq!(player.direction(), Vector2::new(0.0, -1.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlayerFields")]
pub struct Player {
    position: Vector2,
    direction: Vector2,
    velocity: Vector2,
    speed: f32,
}

/// Raw serialized form; validated and normalized into a [`Player`].
#[derive(Deserialize)]
struct PlayerFields {
    position: Vector2,
    direction: Vector2,
    #[serde(default)]
    speed: Option<f32>,
}

impl TryFrom<PlayerFields> for Player {
    type Error = TilecastError;

    fn try_from(fields: PlayerFields) -> Result<Self, Self::Error> {
        if !fields.position.is_finite() || !fields.direction.is_finite() {
            return Err(TilecastError::InvalidMap(
                "player position and direction must be finite".to_string(),
            ));
        }
        let speed = fields.speed.unwrap_or(config::PLAYER_SPEED);
        Ok(Self::with_speed(fields.position, fields.direction, speed))
    }
}

impl Player {
    /// Creates a player at `position` facing `direction` with the default speed.
    ///
    /// The facing is normalized so it is always zero or unit length.
    pub fn new(position: Vector2, direction: Vector2) -> Self {
        Self::with_speed(position, direction, config::PLAYER_SPEED)
    }

    /// Creates a player with a custom per-tick speed.
    pub fn with_speed(position: Vector2, direction: Vector2, speed: f32) -> Self {
        Self {
            position,
            direction: direction.normalize(),
            velocity: Vector2::zero(),
            speed,
        }
    }

    /// Current position in grid units.
    pub fn position(&self) -> Vector2 {
        self.position
    }

    /// Current facing; zero or unit length.
    pub fn direction(&self) -> Vector2 {
        self.direction
    }

    /// Velocity accumulated for the current tick; zero between ticks.
    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Distance moved per held axis per tick.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Runs one fixed-step tick of movement.
    pub fn update(&mut self, intent: &InputIntent, level: &Level) {
        self.step(intent, level, self.speed);
    }

    /// Runs one tick with the speed multiplied by `scale`.
    ///
    /// Used for frame-time scaled movement; a scale of `1.0` is identical to
    /// [`Player::update`].
    pub fn update_scaled(&mut self, intent: &InputIntent, level: &Level, scale: f32) {
        self.step(intent, level, self.speed * scale);
    }

    fn step(&mut self, intent: &InputIntent, level: &Level, step: f32) {
        // Facing accumulates onto the previous facing rather than replacing it.
        self.direction = self.direction.add(intent.axis()).normalize();

        // Each held key contributes a full step, so diagonals move step * sqrt(2).
        self.velocity = self.velocity.add(intent.axis().mult(step));

        self.position = self.position.add(self.velocity).clamp(
            0.0,
            level.width() as f32,
            0.0,
            level.height() as f32,
        );

        log::trace!(
            "Player at ({:.3}, {:.3}) facing ({:.3}, {:.3})",
            self.position.x,
            self.position.y,
            self.direction.x,
            self.direction.y
        );

        self.velocity = Vector2::zero();
    }
}
