//! Host boundary systems

use bevy::prelude::*;

use crate::minigame::bridge::{HostBridge, HostInbox};
use crate::minigame::types::*;

/// Turn queued host commands into game messages.
pub fn drain_host_inbox(
    inbox: Option<ResMut<HostInbox>>,
    mut roll_requests: MessageWriter<RollDiceRequested>,
) {
    let Some(mut inbox) = inbox else {
        return;
    };

    for command in inbox.drain() {
        debug!("Host invoked {}", command.name());
        match command {
            HostCommand::RollDice => {
                roll_requests.write(RollDiceRequested);
            }
        }
    }
}

/// Forward every detected result to the host.
pub fn report_dice_result(mut rolled: MessageReader<DiceRolled>, bridge: Res<HostBridge>) {
    for DiceRolled(pair) in rolled.read() {
        bridge.send_dice_result(*pair);
    }
}

/// Tell the host the game scene is up.
pub fn announce_scene_loaded(bridge: Res<HostBridge>, config: Res<GameConfig>) {
    info!(
        "Scene {} ({}) loaded, notifying host via {}",
        config.scene.name,
        config.scene.build_index,
        bridge.messenger_name()
    );
    bridge.send_scene_loaded(&config.scene.name, config.scene.build_index);
}
