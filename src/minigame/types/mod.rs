//! Types module for the dice bowl minigame
//!
//! Components, resources, messages and configuration shared by the systems.

mod bowl;
mod dice;
mod host;
mod settings;
mod ui;

pub use bowl::*;
pub use dice::*;
pub use host::*;
pub use settings::*;
pub use ui::*;
