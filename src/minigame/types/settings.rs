//! Game configuration types and loading
//!
//! Configuration is authored ahead of time in a JSON file and read once at
//! startup. Every field has a default, so partial files are accepted.

use std::fs;
use std::path::Path;

use bevy::log::info;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Default location of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "dicebowl.json";

/// Static configuration for the dice, the bowl and the host bridge.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// World position of the first die before a throw.
    #[serde(default = "default_spawn_point")]
    pub spawn_point: [f32; 3],

    /// Offset of the second die from the first.
    #[serde(default = "default_dice_offset")]
    pub dice_offset: [f32; 3],

    /// Magnitude of the launch impulse applied to each die.
    #[serde(default = "default_throw_force")]
    pub throw_force: f32,

    /// Magnitude of the spin impulse applied to each die.
    #[serde(default = "default_torque_force")]
    pub torque_force: f32,

    /// Seconds after launch before settle polling starts.
    #[serde(default = "default_detection_delay_secs")]
    pub detection_delay_secs: f32,

    /// Seed for the throw RNG. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub bowl: BowlConfig,

    #[serde(default)]
    pub scene: SceneConfig,
}

fn default_spawn_point() -> [f32; 3] {
    [0.0, 2.0, 0.0]
}
fn default_dice_offset() -> [f32; 3] {
    [0.5, 0.0, 0.0]
}
fn default_throw_force() -> f32 {
    5.0
}
fn default_torque_force() -> f32 {
    10.0
}
fn default_detection_delay_secs() -> f32 {
    2.0
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            spawn_point: default_spawn_point(),
            dice_offset: default_dice_offset(),
            throw_force: default_throw_force(),
            torque_force: default_torque_force(),
            detection_delay_secs: default_detection_delay_secs(),
            seed: None,
            bowl: BowlConfig::default(),
            scene: SceneConfig::default(),
        }
    }
}

/// Bowl shake animation and audio settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BowlConfig {
    /// Total time (seconds) of a single shake.
    pub shake_duration_secs: f32,
    /// Peak tilt (degrees) at the start of the shake; decays linearly to zero.
    pub amplitude_degrees: f32,
    /// Half-cycles of the X tilt over the shake.
    pub x_wave: f32,
    /// Half-cycles of the Z tilt over the shake.
    pub z_wave: f32,
    /// Relative impact speed at which the collision cue plays at full volume.
    pub full_volume_impact_speed: f32,
    /// Asset path of the cue played when a shake starts.
    pub shake_sound: Option<String>,
    /// Asset path of the cue played when a die hits the bowl.
    pub collision_sound: Option<String>,
}

impl Default for BowlConfig {
    fn default() -> Self {
        Self {
            shake_duration_secs: 0.5,
            amplitude_degrees: 5.0,
            x_wave: 8.0,
            z_wave: 6.0,
            full_volume_impact_speed: 10.0,
            shake_sound: Some("sounds/bowl_shake.mp3".to_string()),
            collision_sound: Some("sounds/dice_bowl_hit.mp3".to_string()),
        }
    }
}

/// Values reported to the host in the scene-loaded notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub name: String,
    pub build_index: i32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            name: "DiceBowl".to_string(),
            build_index: 0,
        }
    }
}

impl GameConfig {
    pub fn spawn_point(&self) -> Vec3 {
        Vec3::from_array(self.spawn_point)
    }

    pub fn dice_offset(&self) -> Vec3 {
        Vec3::from_array(self.dice_offset)
    }

    /// Spawn position for the given die: the second die is offset laterally.
    pub fn spawn_position(&self, slot: super::DieSlot) -> Vec3 {
        match slot {
            super::DieSlot::First => self.spawn_point(),
            super::DieSlot::Second => self.spawn_point() + self.dice_offset(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.throw_force > 0.0) {
            return Err(format!("throw_force must be positive, got {}", self.throw_force));
        }
        if !(self.torque_force > 0.0) {
            return Err(format!("torque_force must be positive, got {}", self.torque_force));
        }
        if !(self.detection_delay_secs >= 0.0) {
            return Err(format!(
                "detection_delay_secs must not be negative, got {}",
                self.detection_delay_secs
            ));
        }
        if !(self.bowl.shake_duration_secs > 0.0) {
            return Err(format!(
                "bowl.shake_duration_secs must be positive, got {}",
                self.bowl.shake_duration_secs
            ));
        }
        if !(self.bowl.full_volume_impact_speed > 0.0) {
            return Err(format!(
                "bowl.full_volume_impact_speed must be positive, got {}",
                self.bowl.full_volume_impact_speed
            ));
        }
        Ok(())
    }

    pub fn from_json(text: &str) -> Result<Self, String> {
        let config: GameConfig =
            serde_json::from_str(text).map_err(|e| format!("Failed to parse config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, String> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        Self::from_json(&text)
    }

    /// Load the config file, falling back to defaults if it is absent or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from_file(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minigame::types::DieSlot;

    #[test]
    fn test_config_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.spawn_point(), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(config.throw_force, 5.0);
        assert_eq!(config.torque_force, 10.0);
        assert_eq!(config.detection_delay_secs, 2.0);
        assert_eq!(config.bowl.shake_duration_secs, 0.5);
        assert_eq!(config.bowl.amplitude_degrees, 5.0);
        assert_eq!(config.scene.name, "DiceBowl");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_second_die_is_offset() {
        let config = GameConfig::default();
        assert_eq!(
            config.spawn_position(DieSlot::Second) - config.spawn_position(DieSlot::First),
            Vec3::new(0.5, 0.0, 0.0)
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            GameConfig::from_json(r#"{"throw_force": 7.5, "bowl": {"amplitude_degrees": 3.0}}"#)
                .unwrap();
        assert_eq!(config.throw_force, 7.5);
        assert_eq!(config.torque_force, 10.0);
        assert_eq!(config.bowl.amplitude_degrees, 3.0);
        assert_eq!(config.bowl.shake_duration_secs, 0.5);
        assert_eq!(config.scene, SceneConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(GameConfig::from_json(r#"{"throw_force": 0.0}"#).is_err());
        assert!(GameConfig::from_json(r#"{"detection_delay_secs": -1.0}"#).is_err());
        assert!(GameConfig::from_json(r#"{"bowl": {"shake_duration_secs": 0.0}}"#).is_err());
        assert!(GameConfig::from_json("{ nope").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = GameConfig::load_or_default(Path::new("definitely/not/here.json"));
        assert_eq!(config, GameConfig::default());
    }
}
