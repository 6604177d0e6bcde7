//! Systems module for the dice bowl minigame
//!
//! Thin Bevy adapters around the roll, shake and bridge logic, organized by
//! functionality:
//!
//! - `dice`: Spawning, throwing and settle polling for the dice
//! - `bowl`: Bowl colliders and the shake animation
//! - `host`: Host command intake and outgoing notifications
//! - `ui`: Status, result, loading indicator and roll button
//! - `setup`: Camera, lights, meshes and UI layout (windowed only)
//! - `audio`: Bowl shake and impact cues (windowed only)

mod audio;
mod bowl;
mod dice;
mod host;
mod setup;
mod ui;

pub use audio::{load_bowl_audio, play_bowl_collision_sfx};
pub use bowl::{animate_bowl_shake, spawn_bowl, start_bowl_shake};
pub use dice::{advance_roll, spawn_die, spawn_idle_dice, start_roll};
pub use host::{announce_scene_loaded, drain_host_inbox, report_dice_result};
pub use setup::{attach_bowl_visuals, attach_die_visuals, setup_roll_ui, setup_scene, DiceVisuals};
pub use ui::{handle_roll_button, reflect_roll_ui, refresh_roll_ui};
