//! # Utilities Module
//!
//! Vector mathematics shared by the level, player and camera.

pub mod math;

pub use math::*;
