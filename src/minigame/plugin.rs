//! Plugins wiring the minigame into a Bevy app
//!
//! [`DiceBowlCorePlugin`] holds everything that matters to the host: roll
//! lifecycle, bowl shake, bridge traffic and UI state reflection. It needs no
//! renderer and runs under `MinimalPlugins`. [`DiceBowlScenePlugin`] adds the
//! camera, meshes, UI layout and audio on top; the dice only move once the
//! Rapier physics plugin is installed as well.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::minigame::bridge::HostBridge;
use crate::minigame::roll::{RollSession, ThrowRng};
use crate::minigame::systems::*;
use crate::minigame::types::*;

pub struct DiceBowlCorePlugin;

impl Plugin for DiceBowlCorePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<RollDiceRequested>()
            .add_message::<DiceRolled>()
            .add_message::<ShakeBowlRequested>()
            // Resources inserted before the plugin win over these defaults.
            .init_resource::<GameConfig>()
            .init_resource::<RollSession>()
            .init_resource::<HostBridge>()
            .init_resource::<ThrowRng>()
            .add_systems(Startup, (spawn_bowl, spawn_idle_dice))
            .add_systems(PostStartup, announce_scene_loaded)
            .add_systems(
                Update,
                (
                    handle_roll_button,
                    drain_host_inbox,
                    start_roll,
                    advance_roll,
                    report_dice_result,
                    start_bowl_shake,
                    animate_bowl_shake,
                    refresh_roll_ui,
                )
                    .chain(),
            );
    }
}

pub struct DiceBowlScenePlugin;

impl Plugin for DiceBowlScenePlugin {
    fn build(&self, app: &mut App) {
        // Registered by Rapier too; repeated registration is a no-op.
        app.add_message::<CollisionEvent>()
            .add_systems(Startup, (setup_scene, setup_roll_ui, load_bowl_audio))
            .add_systems(
                Update,
                (
                    attach_die_visuals,
                    attach_bowl_visuals,
                    play_bowl_collision_sfx,
                ),
            );
    }
}
