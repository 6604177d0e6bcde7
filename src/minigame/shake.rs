//! Bowl shake animation
//!
//! A fixed-length procedural wobble: at normalized progress `t` the bowl is
//! tilted by
//!
//! ```text
//! x = sin(t * PI * x_wave) * amplitude * (1 - t)
//! z = cos(t * PI * z_wave) * amplitude * (1 - t)
//! ```
//!
//! degrees on top of the rotation it had when the shake started. When the
//! duration is used up the bowl is put back on exactly that rotation.

use std::f32::consts::PI;

use bevy::prelude::*;

use crate::minigame::types::BowlConfig;

/// Shake state, owned by the bowl entity.
#[derive(Component, Debug, Default, Clone)]
pub struct BowlShake {
    active: bool,
    elapsed: f32,
    original: Quat,
}

impl BowlShake {
    pub fn is_shaking(&self) -> bool {
        self.active
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Begin a shake from `current`. Returns `false` if already shaking.
    pub fn start(&mut self, current: Quat) -> bool {
        if self.active {
            return false;
        }

        self.active = true;
        self.elapsed = 0.0;
        self.original = current;
        true
    }

    /// Advance the shake and return the rotation the bowl should have now,
    /// or `None` when idle.
    pub fn advance(&mut self, dt: f32, config: &BowlConfig) -> Option<Quat> {
        if !self.active {
            return None;
        }

        self.elapsed += dt;
        let duration = config.shake_duration_secs.max(f32::EPSILON);

        if self.elapsed >= duration {
            self.active = false;
            return Some(self.original);
        }

        let t = self.elapsed / duration;
        Some(self.original * shake_offset(t, config))
    }
}

/// Tilt applied at normalized progress `t` (0..=1).
pub fn shake_offset(t: f32, config: &BowlConfig) -> Quat {
    let decay = 1.0 - t.clamp(0.0, 1.0);
    let x_angle = (t * PI * config.x_wave).sin() * config.amplitude_degrees * decay;
    let z_angle = (t * PI * config.z_wave).cos() * config.amplitude_degrees * decay;

    // Z first, then X, then Y (unused).
    Quat::from_euler(EulerRot::YXZ, 0.0, x_angle.to_radians(), z_angle.to_radians())
}

/// Volume for a die hitting the bowl at `relative_speed`, in `0..=1`.
pub fn impact_volume(relative_speed: f32, full_volume_speed: f32) -> f32 {
    (relative_speed / full_volume_speed.max(f32::EPSILON)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_guarded() {
        let mut shake = BowlShake::default();
        assert!(shake.start(Quat::IDENTITY));
        assert!(shake.is_shaking());
        shake.advance(0.1, &BowlConfig::default());
        assert!(!shake.start(Quat::from_rotation_y(1.0)));
        // Still counting from the first start.
        assert!((shake.elapsed() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_returns_exactly_to_original() {
        let config = BowlConfig::default();
        let original = Quat::from_rotation_y(0.7) * Quat::from_rotation_x(0.05);
        let mut shake = BowlShake::default();
        shake.start(original);

        let mut last = None;
        let mut frames = 0;
        while shake.is_shaking() {
            last = shake.advance(1.0 / 60.0, &config);
            frames += 1;
            assert!(frames < 1000);
        }

        assert_eq!(last, Some(original));
        assert_eq!(shake.advance(1.0 / 60.0, &config), None);
    }

    #[test]
    fn test_mid_shake_moves_the_bowl() {
        let config = BowlConfig::default();
        let mut shake = BowlShake::default();
        shake.start(Quat::IDENTITY);
        let rotation = shake.advance(0.05, &config).unwrap();
        assert!(rotation.angle_between(Quat::IDENTITY) > 0.01);
    }

    #[test]
    fn test_offset_decays_to_zero() {
        let config = BowlConfig::default();
        let start = shake_offset(0.0, &config);
        // cos(0) = 1: full Z tilt at the very start.
        assert!((start.angle_between(Quat::IDENTITY) - 5.0_f32.to_radians()).abs() < 1e-4);
        assert!(shake_offset(1.0, &config).angle_between(Quat::IDENTITY) < 1e-6);
        assert!(
            shake_offset(0.9, &config).angle_between(Quat::IDENTITY)
                <= 0.1 * 5.0_f32.to_radians() * 1.5
        );
    }

    #[test]
    fn test_impact_volume() {
        assert_eq!(impact_volume(0.0, 10.0), 0.0);
        assert_eq!(impact_volume(5.0, 10.0), 0.5);
        assert_eq!(impact_volume(25.0, 10.0), 1.0);
    }
}
