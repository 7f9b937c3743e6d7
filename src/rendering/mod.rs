//! # Rendering Module
//!
//! Top-down macroquad view of the level, the player and the camera plane.
//!
//! Everything is drawn in grid units scaled by the configured tile size, so one
//! unit on screen is one grid cell.

pub mod display;
pub mod palette;
pub mod ui;

pub use display::*;
pub use palette::*;
pub use ui::*;
