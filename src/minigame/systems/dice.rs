//! Dice systems
//!
//! Spawning, throwing and settle polling for the two dice.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::minigame::roll::{RollSession, ThrowImpulse, ThrowRng};
use crate::minigame::types::*;

/// Spawn one die at `position`.
///
/// Without an impulse the die is frozen (kinematic) and just sits at the
/// spawn point; with one it is a dynamic body launched by the impulse.
pub fn spawn_die(
    commands: &mut Commands,
    slot: DieSlot,
    position: Vec3,
    throw: Option<ThrowImpulse>,
) -> Entity {
    let body = if throw.is_some() {
        RigidBody::Dynamic
    } else {
        RigidBody::KinematicPositionBased
    };

    let half = DIE_SIZE / 2.0;
    let mut entity = commands.spawn((
        Transform::from_translation(position),
        Visibility::default(),
        body,
        Collider::cuboid(half, half, half),
        Velocity::zero(),
        Restitution::coefficient(0.3),
        Friction::coefficient(0.6),
        ColliderMassProperties::Mass(1.0),
        Damping {
            linear_damping: 0.05,
            angular_damping: 0.3,
        },
        ActiveEvents::COLLISION_EVENTS,
        Die::new(slot),
    ));

    if let Some(throw) = throw {
        entity.insert(ExternalImpulse {
            impulse: throw.force,
            torque_impulse: throw.torque,
        });
    }

    entity.id()
}

/// Place the frozen dice at their spawn points on startup.
pub fn spawn_idle_dice(mut commands: Commands, config: Res<GameConfig>) {
    for slot in DieSlot::ALL {
        spawn_die(&mut commands, slot, config.spawn_position(slot), None);
    }
}

/// Start a roll for each request, unless one is already running.
pub fn start_roll(
    mut commands: Commands,
    mut requests: MessageReader<RollDiceRequested>,
    session: Option<ResMut<RollSession>>,
    config: Res<GameConfig>,
    mut rng: ResMut<ThrowRng>,
    dice_query: Query<Entity, With<Die>>,
) {
    if requests.is_empty() {
        return;
    }

    let Some(mut session) = session else {
        let dropped = requests.read().count();
        error!(
            "RollDice requested but no roll session is registered; dropping {} request(s)",
            dropped
        );
        return;
    };

    for _ in requests.read() {
        if !session.request_roll(config.detection_delay_secs) {
            debug!("Roll already in progress, ignoring request");
            continue;
        }

        for entity in dice_query.iter() {
            commands.entity(entity).despawn();
        }

        for slot in DieSlot::ALL {
            let throw = ThrowImpulse::random(&mut rng.0, config.throw_force, config.torque_force);
            spawn_die(&mut commands, slot, config.spawn_position(slot), Some(throw));
        }

        debug!("Dice thrown");
    }
}

/// Advance the roll timers and detect the result once both dice rest.
pub fn advance_roll(
    time: Res<Time>,
    session: Option<ResMut<RollSession>>,
    dice_query: Query<(&Die, &Transform, &Velocity)>,
    mut rolled: MessageWriter<DiceRolled>,
) {
    let Some(mut session) = session else {
        return;
    };
    if !session.is_rolling() {
        return;
    }

    let mut dice: Vec<(&Die, &Transform, &Velocity)> = dice_query.iter().collect();
    dice.sort_by_key(|(die, _, _)| die.slot);

    let samples: Vec<DieSample> = dice
        .iter()
        .map(|(die, transform, velocity)| DieSample {
            faces: &die.faces,
            orientation: transform.rotation,
            linear_velocity: velocity.linvel,
            angular_velocity: velocity.angvel,
        })
        .collect();

    if let Some(pair) = session.advance(time.delta_secs(), &samples) {
        info!("Dice Result: {}, {}", pair.dice1, pair.dice2);
        rolled.write(DiceRolled(pair));
    }
}
