//! Interpolation primitives shared by the camera, avatar, and particle code.
//!
//! Everything here is the fixed-fraction exponential approach: each call moves
//! the current value a constant fraction of the remaining distance toward the
//! target, so repeated calls converge geometrically.

use glam::Vec3;

/// Linearly interpolate between two scalars.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Move `current` a fraction `alpha` of the way toward `target`.
#[inline]
pub fn approach(current: f32, target: f32, alpha: f32) -> f32 {
    current + (target - current) * alpha
}

/// Vector form of [`approach`].
#[inline]
pub fn approach_vec3(current: Vec3, target: Vec3, alpha: f32) -> Vec3 {
    current + (target - current) * alpha
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_converges() {
        let mut v = 0.0_f32;
        for _ in 0..60 {
            v = approach(v, 1.0, 0.2);
        }
        assert!((v - 1.0).abs() < 1e-4, "expected near 1.0, got {v}");
    }

    #[test]
    fn lerp_midpoint() {
        assert!((lerp(10.0, 20.0, 0.5) - 15.0).abs() < 1e-6);
    }
}
