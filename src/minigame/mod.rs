//! Dice bowl minigame
//!
//! Two dice are thrown into a bowl; once both come to rest the upward faces
//! are read and reported to the host. The roll and shake logic in [`roll`],
//! [`orientation`], [`settle`] and [`shake`] is plain Rust with no engine
//! state, and [`systems`] adapts it to Bevy.

pub mod bridge;
pub mod headless;
pub mod orientation;
pub mod plugin;
pub mod roll;
pub mod settle;
pub mod shake;
pub mod systems;
pub mod types;

pub use bridge::{
    host_channel, ChannelMessenger, HostBridge, HostHandle, HostInbox, HostMessenger,
    LogMessenger, StdoutMessenger,
};
pub use headless::{HeadlessRollsPlugin, HeadlessRun};
pub use plugin::{DiceBowlCorePlugin, DiceBowlScenePlugin};
pub use roll::{RollPhase, RollSession, ThrowImpulse, ThrowRng};
pub use types::*;
