//! # Input Module
//!
//! Directional intent and the macroquad keyboard adapter that produces it.

use crate::Vector2;
use macroquad::prelude::{is_key_down, is_key_pressed, KeyCode};
use serde::{Deserialize, Serialize};

/// Snapshot of which directional controls are held this tick.
///
/// The movement core only reads this record; whoever owns it decides how it
/// is kept up to date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// One of the four directional controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentDirection {
    Up,
    Down,
    Left,
    Right,
}

impl IntentDirection {
    /// Maps a key to the control it drives, if any.
    ///
    /// Arrow keys and WASD are recognized; every other key is ignored.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Up | KeyCode::W => Some(IntentDirection::Up),
            KeyCode::Down | KeyCode::S => Some(IntentDirection::Down),
            KeyCode::Left | KeyCode::A => Some(IntentDirection::Left),
            KeyCode::Right | KeyCode::D => Some(IntentDirection::Right),
            _ => None,
        }
    }

    /// Unit grid delta for this control. Up is negative y.
    pub fn to_delta(self) -> Vector2 {
        match self {
            IntentDirection::Up => Vector2::new(0.0, -1.0),
            IntentDirection::Down => Vector2::new(0.0, 1.0),
            IntentDirection::Left => Vector2::new(-1.0, 0.0),
            IntentDirection::Right => Vector2::new(1.0, 0.0),
        }
    }
}

impl InputIntent {
    /// Returns whether the given control is held.
    pub fn is_held(&self, direction: IntentDirection) -> bool {
        match direction {
            IntentDirection::Up => self.up,
            IntentDirection::Down => self.down,
            IntentDirection::Left => self.left,
            IntentDirection::Right => self.right,
        }
    }

    /// Sets the held state of one control.
    pub fn set(&mut self, direction: IntentDirection, held: bool) {
        match direction {
            IntentDirection::Up => self.up = held,
            IntentDirection::Down => self.down = held,
            IntentDirection::Left => self.left = held,
            IntentDirection::Right => self.right = held,
        }
    }

    /// Applies a key press (`pressed = true`) or release event.
    ///
    /// Returns false and leaves the intent untouched for unrelated keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use macroquad::prelude::KeyCode;
    /// use tilecast::InputIntent;
    ///
    /// let mut intent = InputIntent::default();
    /// assert!(intent.apply_key(KeyCode::W, true));
    /// assert!(intent.up);
    /// assert!(!intent.apply_key(KeyCode::Space, true));
    /// assert!(intent.apply_key(KeyCode::Up, false));
    /// assert!(!intent.up);
    /// ```
    pub fn apply_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match IntentDirection::from_key(key) {
            Some(direction) => {
                self.set(direction, pressed);
                true
            }
            None => false,
        }
    }

    /// Sum of the unit deltas of every held control.
    pub fn axis(&self) -> Vector2 {
        [
            IntentDirection::Up,
            IntentDirection::Down,
            IntentDirection::Left,
            IntentDirection::Right,
        ]
        .into_iter()
        .filter(|&direction| self.is_held(direction))
        .fold(Vector2::zero(), |acc, direction| acc.add(direction.to_delta()))
    }

    /// Returns true if no control is held.
    pub fn is_idle(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }
}

/// Reads the keyboard into an [`InputIntent`] once per frame.
pub struct InputHandler {
    /// Whether WASD drives movement in addition to the arrow keys
    pub wasd_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self { wasd_enabled: true }
    }

    /// Samples the held directional keys.
    pub fn poll(&self) -> InputIntent {
        let mut intent = InputIntent::default();
        for key in self.bound_keys() {
            if is_key_down(key) {
                if let Some(direction) = IntentDirection::from_key(key) {
                    intent.set(direction, true);
                }
            }
        }
        intent
    }

    /// Returns true on the frame Escape is pressed.
    pub fn quit_requested(&self) -> bool {
        is_key_pressed(KeyCode::Escape)
    }

    /// Returns true on the frame F3 is pressed.
    pub fn overlay_toggled(&self) -> bool {
        is_key_pressed(KeyCode::F3)
    }

    /// Keys this handler polls.
    pub fn bound_keys(&self) -> Vec<KeyCode> {
        let mut keys = vec![KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right];
        if self.wasd_enabled {
            keys.extend([KeyCode::W, KeyCode::S, KeyCode::A, KeyCode::D]);
        }
        keys
    }
}
