//! 2D vector helpers
//!
//! `glam::Vec2` is a `Copy` value type, so every transform already yields a
//! fresh vector. This trait adds the few operations the collision code needs
//! that glam does not name directly. Subtraction is always `self - other`.

use glam::Vec2;

pub trait Vec2Ext {
    /// Mirror across the y axis
    fn negate_x(self) -> Self;
    /// Mirror across the x axis
    fn negate_y(self) -> Self;
    /// X component of the projection of `self` onto `onto` (0 if `onto` is zero)
    fn project_x(self, onto: Vec2) -> f32;
    /// Y component of the projection of `self` onto `onto` (0 if `onto` is zero)
    fn project_y(self, onto: Vec2) -> f32;
}

impl Vec2Ext for Vec2 {
    #[inline]
    fn negate_x(self) -> Self {
        Vec2::new(-self.x, self.y)
    }

    #[inline]
    fn negate_y(self) -> Self {
        Vec2::new(self.x, -self.y)
    }

    #[inline]
    fn project_x(self, onto: Vec2) -> f32 {
        scalar_projection(self, onto) * onto.x
    }

    #[inline]
    fn project_y(self, onto: Vec2) -> f32 {
        scalar_projection(self, onto) * onto.y
    }
}

#[inline]
fn scalar_projection(v: Vec2, onto: Vec2) -> f32 {
    let len_sq = onto.length_squared();
    if len_sq == 0.0 {
        0.0
    } else {
        v.dot(onto) / len_sq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(Vec2::ZERO.normalize_or_zero(), Vec2::ZERO);
        let n = Vec2::new(3.0, 4.0).normalize_or_zero();
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_perpendicular_rotates_counter_clockwise() {
        assert_eq!(Vec2::new(1.0, 0.0).perp(), Vec2::new(0.0, 1.0));
        assert_eq!(Vec2::new(0.0, 2.0).perp(), Vec2::new(-2.0, 0.0));
    }

    #[test]
    fn test_negate_axes() {
        let v = Vec2::new(0.4, -0.6);
        assert_eq!(v.negate_x(), Vec2::new(-0.4, -0.6));
        assert_eq!(v.negate_y(), Vec2::new(0.4, 0.6));
        assert_eq!(-v, Vec2::new(-0.4, 0.6));
        // original untouched
        assert_eq!(v, Vec2::new(0.4, -0.6));
    }

    #[test]
    fn test_projection() {
        let v = Vec2::new(3.0, 4.0);
        let onto = Vec2::new(2.0, 0.0);
        assert!((v.project_x(onto) - 3.0).abs() < 1e-6);
        assert_eq!(v.project_y(onto), 0.0);
        assert_eq!(v.project_x(Vec2::ZERO), 0.0);
    }
}
