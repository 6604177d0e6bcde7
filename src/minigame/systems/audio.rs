//! Bowl audio cues
//!
//! Plays the collision cue when a die hits the bowl, louder for harder hits.

use bevy::audio::{AudioPlayer, PlaybackSettings, Volume};
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::minigame::shake::impact_volume;
use crate::minigame::types::*;

/// Load the configured bowl cues. Unset paths leave the cue silent.
pub fn load_bowl_audio(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<GameConfig>,
) {
    let shake = config
        .bowl
        .shake_sound
        .as_ref()
        .map(|path| asset_server.load(path.clone()));
    let collision = config
        .bowl
        .collision_sound
        .as_ref()
        .map(|path| asset_server.load(path.clone()));

    commands.insert_resource(BowlAudio { shake, collision });
}

pub fn play_bowl_collision_sfx(
    mut commands: Commands,
    audio: Option<Res<BowlAudio>>,
    config: Res<GameConfig>,
    mut collision_events: MessageReader<CollisionEvent>,
    dice_query: Query<&Velocity, With<Die>>,
    bowl_colliders: Query<&ChildOf, With<BowlCollider>>,
    bowl_velocity: Query<&Velocity, With<Bowl>>,
) {
    let Some(sound) = audio.as_ref().and_then(|audio| audio.collision.clone()) else {
        collision_events.clear();
        return;
    };

    for ev in collision_events.read() {
        let CollisionEvent::Started(e1, e2, _flags) = *ev else {
            continue;
        };

        let (die_entity, collider_entity) =
            if dice_query.contains(e1) && bowl_colliders.contains(e2) {
                (e1, e2)
            } else if dice_query.contains(e2) && bowl_colliders.contains(e1) {
                (e2, e1)
            } else {
                continue;
            };

        let Ok(die_velocity) = dice_query.get(die_entity) else {
            continue;
        };
        let bowl_linvel = bowl_colliders
            .get(collider_entity)
            .ok()
            .and_then(|child_of| bowl_velocity.get(child_of.parent()).ok())
            .map(|velocity| velocity.linvel)
            .unwrap_or(Vec3::ZERO);

        let relative_speed = (die_velocity.linvel - bowl_linvel).length();
        let volume = impact_volume(relative_speed, config.bowl.full_volume_impact_speed);

        commands.spawn((
            AudioPlayer(sound.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(volume)),
        ));
    }
}
