use std::ops::{Add, Mul, Sub};

/// A 2D world-space vector/point with `f64` components.
///
/// The clipper works in continuous world coordinates, so unlike the
/// rasterizer's integer [`Pixel`](crate::raster::Pixel) this is a float
/// type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The vector rotated 90° counter-clockwise: `(-y, x)`.
    ///
    /// For an edge of a counter-clockwise polygon this is the inner
    /// normal, which is the convention the Cyrus–Beck clipper relies on.
    pub fn perp(&self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn dot_product() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(2.0, -1.0);
        assert_relative_eq!(a.dot(b), 2.0);
    }

    #[test]
    fn perp_is_ccw_rotation() {
        let e = Vec2::new(1.0, 0.0);
        assert_eq!(e.perp(), Vec2::new(0.0, 1.0));
        // Rotating twice gives the negation
        assert_eq!(e.perp().perp(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 5.0);
        assert_eq!(a + b, Vec2::new(4.0, 7.0));
        assert_eq!(b - a, Vec2::new(2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
    }
}
