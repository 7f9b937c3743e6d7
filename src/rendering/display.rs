//! # Display Management
//!
//! Draws the level grid, the player marker and the camera plane with macroquad.

use crate::rendering::{shade, tile_color, DebugOverlay};
use crate::{GameState, TilecastResult, Vector2};
use macroquad::prelude::*;

/// Macroquad display manager.
///
/// Converts grid units to pixels and issues the draw calls for one frame.
pub struct MacroquadDisplay {
    /// Size of one grid cell in pixels
    pub tile_size: f32,
    /// Pixel offset of the grid's top-left corner
    pub origin: Vec2,
    /// Grid line colour
    pub grid_color: Color,
    /// Whether the debug overlay is drawn
    pub show_overlay: bool,
    /// Overlay component
    pub overlay: DebugOverlay,
}

impl MacroquadDisplay {
    /// Creates a display with the given cell size.
    pub fn new(tile_size: f32) -> Self {
        Self {
            tile_size,
            origin: Vec2::ZERO,
            grid_color: Color::new(0.25, 0.25, 0.25, 1.0),
            show_overlay: false,
            overlay: DebugOverlay::new(),
        }
    }

    /// Converts a point in grid units to screen pixels.
    pub fn to_screen(&self, point: Vector2) -> Vec2 {
        self.origin + Vec2::from(point) * self.tile_size
    }

    /// Centers a `width` x `height` grid inside a screen of the given size.
    pub fn center_on_screen(&mut self, width: usize, height: usize, screen: Vec2) {
        let grid = vec2(width as f32, height as f32) * self.tile_size;
        self.origin = ((screen - grid) / 2.0).max(Vec2::ZERO);
    }

    /// Renders the complete frame.
    ///
    /// Tile lookups go through [`crate::Level::tile`], so a malformed level or an
    /// unknown tile colour aborts the frame with an error.
    pub fn render_game(&self, game_state: &GameState) -> TilecastResult<()> {
        clear_background(BLACK);

        self.render_tiles(game_state)?;
        self.render_grid(game_state);
        self.render_camera_plane(game_state);
        self.render_player(game_state);

        if self.show_overlay {
            self.overlay.render(game_state);
        }

        Ok(())
    }

    fn render_tiles(&self, game_state: &GameState) -> TilecastResult<()> {
        let level = &game_state.level;
        for row in 0..level.height() {
            for column in 0..level.width() {
                let cell = Vector2::new(column as f32, row as f32);
                if let Some(label) = level.tile(cell)? {
                    let color = tile_color(label);
                    let corner = self.to_screen(cell);
                    draw_rectangle(corner.x, corner.y, self.tile_size, self.tile_size, color);
                    draw_rectangle_lines(
                        corner.x,
                        corner.y,
                        self.tile_size,
                        self.tile_size,
                        2.0,
                        shade(color, 0.6),
                    );
                }
            }
        }
        Ok(())
    }

    fn render_grid(&self, game_state: &GameState) {
        let width = game_state.level.width() as f32;
        let height = game_state.level.height() as f32;

        for column in 0..=game_state.level.width() {
            let top = self.to_screen(Vector2::new(column as f32, 0.0));
            let bottom = self.to_screen(Vector2::new(column as f32, height));
            draw_line(top.x, top.y, bottom.x, bottom.y, 1.0, self.grid_color);
        }
        for row in 0..=game_state.level.height() {
            let left = self.to_screen(Vector2::new(0.0, row as f32));
            let right = self.to_screen(Vector2::new(width, row as f32));
            draw_line(left.x, left.y, right.x, right.y, 1.0, self.grid_color);
        }
    }

    fn render_player(&self, game_state: &GameState) {
        let player = &game_state.player;
        let center = self.to_screen(player.position());
        let nose = self.to_screen(player.position().add(player.direction().mult(0.4)));

        draw_circle(center.x, center.y, self.tile_size * 0.2, YELLOW);
        draw_line(center.x, center.y, nose.x, nose.y, 2.0, YELLOW);
    }

    fn render_camera_plane(&self, game_state: &GameState) {
        let camera = &game_state.camera;
        let player = self.to_screen(game_state.player.position());
        let left = self.to_screen(camera.left());
        let right = self.to_screen(camera.right());
        let center = self.to_screen(camera.center());

        let fov = Color::new(0.3, 0.8, 1.0, 0.5);
        draw_line(player.x, player.y, left.x, left.y, 1.0, fov);
        draw_line(player.x, player.y, right.x, right.y, 1.0, fov);
        draw_line(left.x, left.y, right.x, right.y, 2.0, SKYBLUE);
        draw_circle(center.x, center.y, 3.0, SKYBLUE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_screen_scales_by_tile_size() {
        let display = MacroquadDisplay::new(32.0);
        assert_eq!(display.to_screen(Vector2::new(2.5, 1.0)), vec2(80.0, 32.0));
    }

    #[test]
    fn test_center_on_screen() {
        let mut display = MacroquadDisplay::new(10.0);
        display.center_on_screen(4, 2, vec2(100.0, 100.0));
        assert_eq!(display.origin, vec2(30.0, 40.0));
        assert_eq!(display.to_screen(Vector2::zero()), vec2(30.0, 40.0));

        display.center_on_screen(40, 40, vec2(100.0, 100.0));
        assert_eq!(display.origin, Vec2::ZERO);
    }
}
