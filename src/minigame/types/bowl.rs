//! Bowl-related types and components

use bevy::prelude::*;

/// Inner radius of the bowl (world units).
pub const BOWL_RADIUS: f32 = 1.2;
pub const BOWL_WALL_HEIGHT: f32 = 0.8;
pub const BOWL_WALL_THICKNESS: f32 = 0.12;
pub const BOWL_FLOOR_THICKNESS: f32 = 0.2;
/// Number of cuboid segments approximating the round wall.
pub const BOWL_WALL_SEGMENTS: usize = 24;

/// Marker for the bowl root entity (the kinematic body that shakes).
#[derive(Component)]
pub struct Bowl;

/// Marker for the bowl's floor and wall colliders (children of [`Bowl`]).
#[derive(Component)]
pub struct BowlCollider;

/// Sent by the roll button to shake the bowl alongside a roll.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct ShakeBowlRequested;

/// Audio cues for the bowl, loaded by the scene plugin when configured.
#[derive(Resource, Clone, Default)]
pub struct BowlAudio {
    pub shake: Option<Handle<AudioSource>>,
    pub collision: Option<Handle<AudioSource>>,
}
