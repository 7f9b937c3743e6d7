//! # Vector Mathematics
//!
//! The 2D vector value type used for positions, directions and velocities.
//!
//! All operations are pure: they return a new vector and leave the receiver
//! untouched.

use crate::{TilecastError, TilecastResult};
use serde::{Deserialize, Serialize};

/// A 2D vector in grid units.
///
/// # Examples
///
/// ```
/// use tilecast::Vector2;
///
/// let a = Vector2::new(3.0, 4.0);
/// assert_eq!(a.magnitude(), 5.0);
///
/// let b = a.add(Vector2::new(1.0, -1.0));
/// assert_eq!(b, Vector2::new(4.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    /// Creates a new vector with the given components.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the zero vector (0, 0).
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Component-wise sum.
    pub fn add(self, other: Vector2) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference.
    pub fn sub(self, other: Vector2) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Scales both components by `scalar`.
    pub fn mult(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Divides both components by `scalar`.
    ///
    /// Fails with [`TilecastError::DivideByZero`] when `scalar` is exactly zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilecast::Vector2;
    ///
    /// let v = Vector2::new(4.0, -2.0);
    /// assert_eq!(v.div(2.0).unwrap(), Vector2::new(2.0, -1.0));
    /// assert!(v.div(0.0).is_err());
    /// ```
    pub fn div(self, scalar: f32) -> TilecastResult<Self> {
        if scalar == 0.0 {
            return Err(TilecastError::DivideByZero);
        }
        Ok(Self::new(self.x / scalar, self.y / scalar))
    }

    /// Euclidean length.
    pub fn magnitude(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Returns this vector scaled to unit length.
    ///
    /// A zero vector is returned unchanged rather than producing NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilecast::Vector2;
    ///
    /// let unit = Vector2::new(0.0, -3.0).normalize();
    /// assert_eq!(unit, Vector2::new(0.0, -1.0));
    /// assert_eq!(Vector2::zero().normalize(), Vector2::zero());
    /// ```
    pub fn normalize(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude > 0.0 {
            Self::new(self.x / magnitude, self.y / magnitude)
        } else {
            self
        }
    }

    /// Clamps each axis independently into its closed interval.
    ///
    /// A bound pair where the minimum exceeds the maximum resolves to the
    /// maximum instead of panicking.
    pub fn clamp(self, x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self::new(
            self.x.max(x_min).min(x_max),
            self.y.max(y_min).min(y_max),
        )
    }

    /// Standard dot product.
    pub fn dot_product(self, other: Vector2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean distance between two points.
    pub fn distance_to(self, other: Vector2) -> f32 {
        self.sub(other).magnitude()
    }

    /// Rotates by 90 degrees: `(x, y)` becomes `(-y, x)`.
    pub fn rotate90(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Linear interpolation from `self` (t = 0) to `other` (t = 1).
    pub fn lerp(self, other: Vector2, t: f32) -> Self {
        self.add(other.sub(self).mult(t))
    }

    /// Returns true when both components are within `epsilon` of `other`.
    pub fn approx_eq(self, other: Vector2, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }

    /// Returns true if both components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for Vector2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector2::add(self, other)
    }
}

impl std::ops::Sub for Vector2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vector2::sub(self, other)
    }
}

impl std::ops::Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        self.mult(scalar)
    }
}

impl std::ops::Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl std::ops::AddAssign for Vector2 {
    fn add_assign(&mut self, other: Self) {
        *self = Vector2::add(*self, other);
    }
}

impl From<Vector2> for macroquad::math::Vec2 {
    fn from(v: Vector2) -> Self {
        macroquad::math::Vec2::new(v.x, v.y)
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}
