//! # Tilecast
//!
//! Movement and camera core for a grid-based first-person prototype.
//!
//! ## Architecture Overview
//!
//! The crate is built leaves first:
//!
//! - **Vector math**: [`Vector2`], the value type every other component uses
//! - **Level**: a fixed-size grid of optional tile labels with bounds-checked lookup
//! - **Player**: per-tick kinematic update driven by a directional [`InputIntent`]
//! - **Camera plane**: the perpendicular field-of-view segment in front of the player
//! - **Game state**: owns the above and runs one tick per frame
//!
//! Rendering and input polling are thin macroquad adapters around the core; the
//! core itself never touches a window and can be driven entirely from tests.

pub mod game;
pub mod input;
pub mod rendering;
pub mod utils;

// Core module re-exports
pub use game::*;
pub use input::*;
pub use rendering::*;
pub use utils::*;

/// Core error type for the Tilecast engine.
#[derive(thiserror::Error, Debug)]
pub enum TilecastError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Vector divided by a zero scalar
    #[error("Attempted to divide a vector by zero")]
    DivideByZero,

    /// Level declared a height different from its row count
    #[error("Level height mismatch: declared {expected}, found {actual} rows")]
    HeightMismatch { expected: usize, actual: usize },

    /// A level row has a length different from the declared width
    #[error("Level width mismatch in row {row}: declared {expected}, found {actual} tiles")]
    WidthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Tile lookup addressed a row outside the grid
    #[error("Row coordinate {y} is out of bounds (level height {height})")]
    RowOutOfBounds { y: f32, height: usize },

    /// Tile lookup addressed a column outside an existing row
    #[error("Column coordinate {x} is out of bounds in row {row} (level width {width})")]
    ColumnOutOfBounds { x: f32, row: usize, width: usize },

    /// Camera plane sampled outside its column range
    #[error("Column {column} is not a valid projection column (of {columns})")]
    InvalidColumn { column: usize, columns: usize },

    /// Configuration values are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Map data could not be interpreted
    #[error("Invalid map: {0}")]
    InvalidMap(String),
}

/// Result type used throughout the Tilecast codebase.
pub type TilecastResult<T> = Result<T, TilecastError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine configuration constants.
pub mod config {
    /// Distance the player moves along each held axis per tick, in grid cells
    pub const PLAYER_SPEED: f32 = 0.05;

    /// Default size of one grid cell on screen, in pixels
    pub const DEFAULT_TILE_SIZE: f32 = 48.0;

    /// Half-width of the camera plane relative to a unit facing vector
    pub const CAMERA_PLANE_HALF_WIDTH: f32 = 0.5;

    /// Frames per second the fixed-step movement is tuned for
    pub const TARGET_FPS: f32 = 60.0;

    /// Default window width in pixels
    pub const DEFAULT_WINDOW_WIDTH: f32 = 960.0;

    /// Default window height in pixels
    pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;
}
