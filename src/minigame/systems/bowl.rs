//! Bowl systems
//!
//! The bowl is a kinematic body driven by the shake animation. Its floor and
//! round wall are child colliders so the dice get pushed around when it tilts.

use bevy::audio::{AudioPlayer, PlaybackSettings};
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::minigame::shake::BowlShake;
use crate::minigame::types::*;

/// Spawn the bowl body and its colliders at the origin.
pub fn spawn_bowl(mut commands: Commands) {
    let floor_half_height = BOWL_FLOOR_THICKNESS / 2.0;

    commands
        .spawn((
            Transform::IDENTITY,
            Visibility::default(),
            RigidBody::KinematicPositionBased,
            // Written back by Rapier while the shake moves the body.
            Velocity::zero(),
            Bowl,
            BowlShake::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Transform::from_xyz(0.0, -floor_half_height, 0.0),
                Collider::cylinder(floor_half_height, BOWL_RADIUS + BOWL_WALL_THICKNESS),
                Restitution::coefficient(0.2),
                Friction::coefficient(0.8),
                BowlCollider,
            ));

            // Round wall approximated by a ring of cuboids
            let segment_length = (std::f32::consts::TAU * BOWL_RADIUS) / BOWL_WALL_SEGMENTS as f32;
            for i in 0..BOWL_WALL_SEGMENTS {
                let angle = (i as f32 / BOWL_WALL_SEGMENTS as f32) * std::f32::consts::TAU;
                let radius = BOWL_RADIUS + BOWL_WALL_THICKNESS / 2.0;
                let pos = Vec3::new(
                    angle.cos() * radius,
                    BOWL_WALL_HEIGHT / 2.0,
                    angle.sin() * radius,
                );
                let size = Vec3::new(
                    BOWL_WALL_THICKNESS,
                    BOWL_WALL_HEIGHT,
                    segment_length + BOWL_WALL_THICKNESS,
                );

                parent.spawn((
                    Transform::from_translation(pos).with_rotation(Quat::from_rotation_y(-angle)),
                    Collider::cuboid(size.x / 2.0, size.y / 2.0, size.z / 2.0),
                    Restitution::coefficient(0.2),
                    Friction::coefficient(0.8),
                    BowlCollider,
                ));
            }
        });
}

/// Start a shake on request; requests while shaking are ignored.
pub fn start_bowl_shake(
    mut commands: Commands,
    mut requests: MessageReader<ShakeBowlRequested>,
    mut bowl_query: Query<(&Transform, &mut BowlShake), With<Bowl>>,
    audio: Option<Res<BowlAudio>>,
) {
    if requests.read().count() == 0 {
        return;
    }

    for (transform, mut shake) in bowl_query.iter_mut() {
        if !shake.start(transform.rotation) {
            debug!("Bowl already shaking, ignoring request");
            continue;
        }

        if let Some(sound) = audio.as_ref().and_then(|audio| audio.shake.clone()) {
            commands.spawn((AudioPlayer(sound), PlaybackSettings::DESPAWN));
        }
    }
}

/// Apply the shake rotation every frame until it finishes.
pub fn animate_bowl_shake(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut bowl_query: Query<(&mut Transform, &mut BowlShake), With<Bowl>>,
) {
    let dt = time.delta_secs();
    for (mut transform, mut shake) in bowl_query.iter_mut() {
        if let Some(rotation) = shake.advance(dt, &config.bowl) {
            transform.rotation = rotation;
        }
    }
}
