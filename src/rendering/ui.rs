//! # User Interface Elements
//!
//! Debug overlay showing tick timing and the player's state.

use crate::GameState;
use macroquad::prelude::*;

/// Text overlay drawn over the top-left corner of the map.
pub struct DebugOverlay {
    /// Font size in pixels
    pub font_size: f32,
    /// Vertical distance between lines in pixels
    pub line_height: f32,
}

impl Default for DebugOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugOverlay {
    /// Creates an overlay with the default text size.
    pub fn new() -> Self {
        Self {
            font_size: 18.0,
            line_height: 20.0,
        }
    }

    /// Lines of text describing the current state.
    pub fn lines(&self, game_state: &GameState) -> Vec<String> {
        let position = game_state.player.position();
        let direction = game_state.player.direction();
        let fps = if game_state.last_frame_time > 0.0 {
            1.0 / game_state.last_frame_time
        } else {
            0.0
        };

        vec![
            format!("Tick: {}", game_state.tick_count),
            format!(
                "Frame: {:.1} ms ({:.0} fps)",
                game_state.last_frame_time * 1000.0,
                fps
            ),
            format!("Position: ({:.2}, {:.2})", position.x, position.y),
            format!("Facing: ({:.2}, {:.2})", direction.x, direction.y),
        ]
    }

    /// Draws the overlay.
    pub fn render(&self, game_state: &GameState) {
        let mut line_y = self.line_height;
        for line in self.lines(game_state) {
            draw_text(&line, 10.0, line_y, self.font_size, WHITE);
            line_y += self.line_height;
        }
    }
}
