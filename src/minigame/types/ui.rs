//! UI marker components and the reflected roll UI state

use bevy::prelude::*;

pub const STATUS_IDLE: &str = "Tap to roll the dice";
pub const STATUS_ROLLING: &str = "Rolling the dice...";
pub const STATUS_SETTLED: &str = "The dice have settled";

/// Marker for the status line text
#[derive(Component)]
pub struct StatusText;

/// Marker for the "a + b = total" result text
#[derive(Component)]
pub struct ResultText;

/// Marker for the loading indicator node
#[derive(Component)]
pub struct LoadingIndicator;

/// The roll button. `enabled` mirrors the roll/shake state every frame.
#[derive(Component, Debug)]
pub struct RollButton {
    pub enabled: bool,
}

impl Default for RollButton {
    fn default() -> Self {
        Self { enabled: true }
    }
}

pub const ROLL_BUTTON_ENABLED: Color = Color::srgb(0.75, 0.35, 0.1);
pub const ROLL_BUTTON_DISABLED: Color = Color::srgb(0.35, 0.35, 0.35);

/// What the on-screen widgets should show for the current frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollUiState {
    pub status: &'static str,
    /// `None` leaves the result text as it is.
    pub result: Option<String>,
    pub loading: bool,
    pub roll_enabled: bool,
}
