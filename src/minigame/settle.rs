//! Settle detection for dice bodies
//!
//! A single sample below the threshold counts as settled; there is no hold
//! time, so a die that momentarily stops at the top of a bounce reads as
//! settled.

use bevy::math::Vec3;

/// Speed below which a die counts as at rest (applies to both linear and angular speed).
pub const SETTLE_VELOCITY_THRESHOLD: f32 = 0.01;

/// True when both speeds are strictly below [`SETTLE_VELOCITY_THRESHOLD`].
pub fn is_settled(linear_velocity: Vec3, angular_velocity: Vec3) -> bool {
    linear_velocity.length() < SETTLE_VELOCITY_THRESHOLD
        && angular_velocity.length() < SETTLE_VELOCITY_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_rest_is_settled() {
        assert!(is_settled(Vec3::ZERO, Vec3::ZERO));
        assert!(is_settled(Vec3::new(0.005, 0.0, 0.005), Vec3::new(0.0, 0.009, 0.0)));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!is_settled(Vec3::new(0.01, 0.0, 0.0), Vec3::ZERO));
        assert!(!is_settled(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.01)));
    }

    #[test]
    fn test_either_speed_keeps_it_moving() {
        assert!(!is_settled(Vec3::new(0.0, -2.0, 0.0), Vec3::ZERO));
        assert!(!is_settled(Vec3::ZERO, Vec3::new(3.0, 1.0, 0.0)));
        // Components below the threshold can still add up past it.
        assert!(!is_settled(Vec3::new(0.008, 0.008, 0.0), Vec3::ZERO));
    }
}
