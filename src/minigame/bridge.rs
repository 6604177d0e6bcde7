//! Host bridge
//!
//! Outbound messages are fire-and-forget strings handed to a [`HostMessenger`].
//! Which messenger is used is decided once, by whoever builds the app, and
//! stored in the [`HostBridge`] resource. Inbound commands arrive through a
//! [`HostInbox`] that the host feeds from its side with a [`HostHandle`].

use std::io::Write;

use bevy::prelude::*;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::minigame::types::{DicePair, HostCommand, HostMessage};

/// Delivers a serialized payload to the host.
pub trait HostMessenger: Send + Sync + 'static {
    fn deliver(&self, message: &str);

    fn name(&self) -> &'static str;
}

/// Logs payloads instead of delivering them (desktop/editor runs).
#[derive(Debug, Default)]
pub struct LogMessenger;

impl HostMessenger for LogMessenger {
    fn deliver(&self, message: &str) {
        info!("[HostBridge] deliver: {}", message);
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

/// Writes one payload per line to stdout for a host reading the pipe.
#[derive(Debug, Default)]
pub struct StdoutMessenger;

impl HostMessenger for StdoutMessenger {
    fn deliver(&self, message: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{}", message).and_then(|_| out.flush()) {
            warn!("Failed to write host message to stdout: {}", e);
        }
    }

    fn name(&self) -> &'static str {
        "stdout"
    }
}

/// Sends payloads over an in-process channel to a host running alongside the game.
#[derive(Debug, Clone)]
pub struct ChannelMessenger {
    sender: UnboundedSender<String>,
}

impl ChannelMessenger {
    pub fn new() -> (Self, UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl HostMessenger for ChannelMessenger {
    fn deliver(&self, message: &str) {
        if self.sender.send(message.to_string()).is_err() {
            warn!("Host channel closed, dropping message: {}", message);
        }
    }

    fn name(&self) -> &'static str {
        "channel"
    }
}

/// The outbound half of the bridge, shared by every system that reports to the host.
#[derive(Resource)]
pub struct HostBridge {
    messenger: Box<dyn HostMessenger>,
}

impl HostBridge {
    pub fn new(messenger: impl HostMessenger) -> Self {
        Self {
            messenger: Box::new(messenger),
        }
    }

    pub fn messenger_name(&self) -> &'static str {
        self.messenger.name()
    }

    pub fn send(&self, message: &HostMessage) {
        match message.to_json() {
            Ok(json) => self.messenger.deliver(&json),
            Err(e) => warn!("{}", e),
        }
    }

    pub fn send_dice_result(&self, pair: DicePair) {
        self.send(&HostMessage::dice_result(pair));
    }

    pub fn send_scene_loaded(&self, name: &str, build_index: i32) {
        self.send(&HostMessage::scene_loaded(name, build_index));
    }
}

impl Default for HostBridge {
    fn default() -> Self {
        Self::new(LogMessenger)
    }
}

/// Host-side handle for invoking game entry points.
#[derive(Debug, Clone)]
pub struct HostHandle {
    sender: UnboundedSender<HostCommand>,
}

impl HostHandle {
    /// Queue a command. Returns `false` if the game has shut down.
    pub fn send(&self, command: HostCommand) -> bool {
        self.sender.send(command).is_ok()
    }

    pub fn roll_dice(&self) -> bool {
        self.send(HostCommand::RollDice)
    }
}

/// Game-side queue of host commands, drained once per frame.
#[derive(Resource)]
pub struct HostInbox {
    receiver: UnboundedReceiver<HostCommand>,
}

impl HostInbox {
    /// Take every command queued since the last frame.
    pub fn drain(&mut self) -> Vec<HostCommand> {
        let mut commands = Vec::new();
        while let Ok(command) = self.receiver.try_recv() {
            commands.push(command);
        }
        commands
    }
}

/// Create a connected host handle and game inbox.
pub fn host_channel() -> (HostHandle, HostInbox) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (
        HostHandle { sender },
        HostInbox { receiver },
    )
}
