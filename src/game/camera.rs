//! # Camera Plane
//!
//! The segment perpendicular to the player's facing, one unit ahead of the
//! player. A perspective projector casts one ray from the player through each
//! point of `[left, right]`, one point per output column.

use crate::{config, Player, TilecastError, TilecastResult, Vector2};
use serde::{Deserialize, Serialize};

/// Field-of-view segment derived from a player's position and facing.
///
/// # Examples
///
/// ```
/// use tilecast::{CameraPlane, Player, Vector2};
///
/// let player = Player::new(Vector2::new(2.5, 6.5), Vector2::new(0.0, -1.0));
/// let mut camera = CameraPlane::new();
/// camera.update(&player);
///
/// assert_eq!(camera.center(), Vector2::new(2.5, 5.5));
/// assert_eq!(camera.left(), Vector2::new(2.0, 5.5));
/// assert_eq!(camera.right(), Vector2::new(3.0, 5.5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraPlane {
    direction: Vector2,
    center: Vector2,
    left: Vector2,
    right: Vector2,
}

impl CameraPlane {
    /// Creates an empty plane; call [`CameraPlane::update`] before use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a plane already derived from `player`.
    pub fn from_player(player: &Player) -> Self {
        let mut camera = Self::new();
        camera.update(player);
        camera
    }

    /// Recomputes the whole plane from the player's current state.
    pub fn update(&mut self, player: &Player) {
        let facing = player.direction();

        self.direction = facing
            .rotate90()
            .normalize()
            .mult(config::CAMERA_PLANE_HALF_WIDTH);
        self.center = player.position().add(facing);
        self.left = self.center.sub(self.direction);
        self.right = self.center.add(self.direction);
    }

    /// Half-width vector from the center toward `right`.
    pub fn direction(&self) -> Vector2 {
        self.direction
    }

    /// Point one facing vector ahead of the player.
    pub fn center(&self) -> Vector2 {
        self.center
    }

    /// Left end of the segment.
    pub fn left(&self) -> Vector2 {
        self.left
    }

    /// Right end of the segment.
    pub fn right(&self) -> Vector2 {
        self.right
    }

    /// Point on the plane at the middle of projection column `column`.
    ///
    /// The segment is split into `columns` equal slices from `left` to
    /// `right`. Fails with [`TilecastError::InvalidColumn`] when `column` is not
    /// below `columns`.
    pub fn sample(&self, column: usize, columns: usize) -> TilecastResult<Vector2> {
        if column >= columns {
            return Err(TilecastError::InvalidColumn { column, columns });
        }
        let t = (column as f32 + 0.5) / columns as f32;
        Ok(self.left.lerp(self.right, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn camera_for(position: Vector2, direction: Vector2) -> CameraPlane {
        CameraPlane::from_player(&Player::new(position, direction))
    }

    #[test]
    fn test_facing_up() {
        let camera = camera_for(Vector2::new(2.5, 6.5), Vector2::new(0.0, -1.0));
        assert_eq!(camera.direction(), Vector2::new(0.5, 0.0));
        assert_eq!(camera.center(), Vector2::new(2.5, 5.5));
        assert_eq!(camera.left(), Vector2::new(2.0, 5.5));
        assert_eq!(camera.right(), Vector2::new(3.0, 5.5));
    }

    #[test]
    fn test_facing_right() {
        let camera = camera_for(Vector2::new(1.0, 1.0), Vector2::new(1.0, 0.0));
        assert_eq!(camera.direction(), Vector2::new(0.0, 0.5));
        assert_eq!(camera.center(), Vector2::new(2.0, 1.0));
        assert_eq!(camera.left(), Vector2::new(2.0, 0.5));
        assert_eq!(camera.right(), Vector2::new(2.0, 1.5));
    }

    #[test]
    fn test_plane_is_perpendicular_and_symmetric() {
        let facing = Vector2::new(0.6, 0.8);
        let camera = camera_for(Vector2::new(4.0, 4.0), facing);

        assert!(camera.direction().dot_product(facing).abs() < EPSILON);
        assert!((camera.direction().magnitude() - 0.5).abs() < EPSILON);
        assert!((camera.center().distance_to(camera.left())
            - camera.center().distance_to(camera.right()))
        .abs()
            < EPSILON);
    }

    #[test]
    fn test_zero_facing_collapses_plane() {
        let camera = camera_for(Vector2::new(3.0, 3.0), Vector2::zero());
        assert_eq!(camera.direction(), Vector2::zero());
        assert_eq!(camera.center(), Vector2::new(3.0, 3.0));
        assert_eq!(camera.left(), camera.right());
    }

    #[test]
    fn test_update_replaces_previous_plane() {
        let mut player = Player::new(Vector2::new(2.5, 6.5), Vector2::new(0.0, -1.0));
        let mut camera = CameraPlane::from_player(&player);

        player = Player::new(player.position(), Vector2::new(0.0, 1.0));
        camera.update(&player);
        assert_eq!(camera.center(), Vector2::new(2.5, 7.5));
        assert_eq!(camera.direction(), Vector2::new(-0.5, 0.0));
    }

    #[test]
    fn test_sample_columns() {
        let camera = camera_for(Vector2::new(2.5, 6.5), Vector2::new(0.0, -1.0));

        let first = camera.sample(0, 2).unwrap();
        let second = camera.sample(1, 2).unwrap();
        assert!(first.approx_eq(Vector2::new(2.25, 5.5), EPSILON));
        assert!(second.approx_eq(Vector2::new(2.75, 5.5), EPSILON));

        let middle = camera.sample(0, 1).unwrap();
        assert!(middle.approx_eq(camera.center(), EPSILON));
    }

    #[test]
    fn test_sample_invalid_column() {
        let camera = camera_for(Vector2::new(2.5, 6.5), Vector2::new(0.0, -1.0));
        assert!(matches!(
            camera.sample(4, 4),
            Err(TilecastError::InvalidColumn {
                column: 4,
                columns: 4
            })
        ));
        assert!(camera.sample(0, 0).is_err());
    }
}
