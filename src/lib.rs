//! Dice Bowl: a two-dice bowl-shaking minigame meant to be embedded in a host app.
//!
//! The game lives in [`minigame`]. The binary in `main.rs` is the composition
//! root that picks the host bridge implementation and builds the Bevy app.

pub mod minigame;
