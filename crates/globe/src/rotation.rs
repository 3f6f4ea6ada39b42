//! Axis-angle rotation.

use glam::DVec3;

/// Rotate `vector` by `theta` radians about `axis` (right-hand rule).
///
/// The axis does not need to be normalized. A zero-length axis produces
/// non-finite components.
#[must_use]
pub fn rotate_around_axis(vector: DVec3, axis: DVec3, theta: f64) -> DVec3 {
    let DVec3 { x, y, z } = vector;
    let DVec3 { x: u, y: v, z: w } = axis;

    let (sin_theta, cos_theta) = theta.sin_cos();
    let length_squared = axis.length_squared();
    let length = length_squared.sqrt();
    let projection = u * x + v * y + w * z;

    DVec3::new(
        (u * projection
            + (x * (v * v + w * w) - u * (v * y + w * z)) * cos_theta
            + length * (-w * y + v * z) * sin_theta)
            / length_squared,
        (v * projection
            + (y * (u * u + w * w) - v * (u * x + w * z)) * cos_theta
            + length * (w * x - u * z) * sin_theta)
            / length_squared,
        (w * projection
            + (z * (u * u + v * v) - w * (u * x + v * y)) * cos_theta
            + length * (-v * x + u * y) * sin_theta)
            / length_squared,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_close(a: DVec3, b: DVec3) {
        assert!((a - b).length() < 1e-12, "expected {b}, got {a}");
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let rotated = rotate_around_axis(DVec3::X, DVec3::Z, FRAC_PI_2);
        assert_close(rotated, DVec3::Y);
    }

    #[test]
    fn test_half_turn_about_x() {
        let rotated = rotate_around_axis(DVec3::new(0.0, 1.0, 2.0), DVec3::X, PI);
        assert_close(rotated, DVec3::new(0.0, -1.0, -2.0));
    }

    #[test]
    fn test_unnormalized_axis() {
        let v = DVec3::new(1.0, 2.0, 3.0);
        let axis = DVec3::new(1.0, 1.0, 0.0);
        let a = rotate_around_axis(v, axis, 0.7);
        let b = rotate_around_axis(v, axis * 25.0, 0.7);
        let c = rotate_around_axis(v, axis.normalize(), 0.7);
        assert_close(a, b);
        assert_close(a, c);
        assert!((a.length() - v.length()).abs() < 1e-12);
    }

    #[test]
    fn test_vector_on_axis_is_fixed() {
        let axis = DVec3::new(0.0, 3.0, 4.0);
        assert_close(rotate_around_axis(axis, axis, 1.234), axis);
    }

    #[test]
    fn test_zero_axis_is_non_finite() {
        let rotated = rotate_around_axis(DVec3::X, DVec3::ZERO, 1.0);
        assert!(!rotated.is_finite());
    }
}
