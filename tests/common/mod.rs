//! Shared helpers for the integration tests

#![allow(dead_code)]

use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use tokio::sync::mpsc::UnboundedReceiver;

use dicebowl::minigame::{ChannelMessenger, DiceBowlCorePlugin, Die, DieSlot, GameConfig, HostBridge};

/// Fixed frame step used by every test app.
pub const FRAME: Duration = Duration::from_millis(100);

/// Build a core-only app (no renderer, no physics) with host traffic captured
/// on a channel. Startup has already run when this returns.
pub fn test_app(config: GameConfig) -> (App, UnboundedReceiver<String>) {
    let (messenger, outbox) = ChannelMessenger::new();

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .insert_resource(config)
        .insert_resource(HostBridge::new(messenger))
        .add_plugins(DiceBowlCorePlugin);
    app.update();

    (app, outbox)
}

pub fn quick_config() -> GameConfig {
    GameConfig {
        detection_delay_secs: 0.5,
        seed: Some(7),
        ..default()
    }
}

pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

/// Everything sent to the host so far.
pub fn drain_outbox(outbox: &mut UnboundedReceiver<String>) -> Vec<String> {
    let mut messages = Vec::new();
    while let Ok(message) = outbox.try_recv() {
        messages.push(message);
    }
    messages
}

/// Die entities sorted first die then second.
pub fn dice(app: &mut App) -> Vec<(Entity, DieSlot)> {
    let mut query = app.world_mut().query::<(Entity, &Die)>();
    let mut dice: Vec<(Entity, DieSlot)> = query
        .iter(app.world())
        .map(|(entity, die)| (entity, die.slot))
        .collect();
    dice.sort_by_key(|(_, slot)| *slot);
    dice
}

/// Rotation that leaves the face with the given value pointing up.
pub fn face_up(value: u8) -> Quat {
    match value {
        1 => Quat::IDENTITY,
        2 => Quat::from_rotation_z(FRAC_PI_2),
        3 => Quat::from_rotation_x(-FRAC_PI_2),
        4 => Quat::from_rotation_x(FRAC_PI_2),
        5 => Quat::from_rotation_z(-FRAC_PI_2),
        _ => Quat::from_rotation_x(std::f32::consts::PI),
    }
}

/// Lay the dice to rest showing `first` and `second`.
pub fn rest_dice(app: &mut App, first: u8, second: u8) {
    for (entity, slot) in dice(app) {
        let value = match slot {
            DieSlot::First => first,
            DieSlot::Second => second,
        };
        if let Some(mut transform) = app.world_mut().get_mut::<Transform>(entity) {
            transform.rotation = face_up(value);
        }
    }
}
