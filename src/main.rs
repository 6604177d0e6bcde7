//! Dice Bowl
//!
//! Composition root: loads the config, picks how messages reach the host and
//! builds either the windowed game or a headless batch run.

use std::io::BufRead;
use std::path::PathBuf;
use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use bevy::render::settings::{RenderCreation, WgpuSettings};
use bevy::render::RenderPlugin;
use bevy::window::ExitCondition;
use bevy::winit::WinitPlugin;
use bevy_rapier3d::prelude::*;
use clap::{Parser, ValueEnum};

use dicebowl::minigame::{
    host_channel, DiceBowlCorePlugin, DiceBowlScenePlugin, GameConfig, HeadlessRollsPlugin,
    HostBridge, HostCommand, HostHandle, LogMessenger, StdoutMessenger, DEFAULT_CONFIG_PATH,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BridgeKind {
    /// Write outgoing messages to the log
    Log,
    /// Write outgoing messages to stdout, one JSON object per line
    Stdout,
}

/// Two-dice bowl minigame
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the game config JSON file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Run without a window and exit after --rolls rolls
    #[arg(long)]
    headless: bool,

    /// Number of rolls in headless mode
    #[arg(short, long, default_value = "1")]
    rolls: u32,

    /// Where outgoing host messages go
    #[arg(short, long, value_enum, default_value = "log")]
    bridge: BridgeKind,

    /// Seed for the throw RNG (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Read host commands (e.g. "RollDice") from stdin, one per line
    #[arg(long)]
    stdin: bool,
}

/// Forward stdin lines to the game as host commands.
fn spawn_stdin_reader(handle: HostHandle) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }
            match HostCommand::parse(&line) {
                Some(command) => {
                    if !handle.send(command) {
                        break;
                    }
                }
                None => eprintln!("Unknown host command: {}", line.trim()),
            }
        }
    });
}

fn main() {
    let args = Args::parse();

    let mut config = GameConfig::load_or_default(&args.config);
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let bridge = match args.bridge {
        BridgeKind::Log => HostBridge::new(LogMessenger),
        BridgeKind::Stdout => HostBridge::new(StdoutMessenger),
    };

    let log_plugin = bevy::log::LogPlugin {
        level: bevy::log::Level::INFO,
        filter: "info,wgpu=error,naga=warn".to_string(),
        ..default()
    };

    let mut app = App::new();

    if args.headless {
        app.add_plugins(
            DefaultPlugins
                .set(RenderPlugin {
                    render_creation: RenderCreation::Automatic(WgpuSettings {
                        backends: None,
                        ..default()
                    }),
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: None,
                    exit_condition: ExitCondition::DontExit,
                    ..default()
                })
                .set(log_plugin)
                .disable::<WinitPlugin>()
                .disable::<bevy::audio::AudioPlugin>(),
        )
        .add_plugins(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / 60.0,
        )));
    } else {
        app.add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Dice Bowl".to_string(),
                        resolution: (720u32, 1280u32).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(log_plugin),
        );
    }

    app.insert_resource(config)
        .insert_resource(bridge)
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(DiceBowlCorePlugin);

    if args.stdin {
        let (handle, inbox) = host_channel();
        app.insert_resource(inbox);
        spawn_stdin_reader(handle);
    }

    if args.headless {
        app.add_plugins(HeadlessRollsPlugin { rolls: args.rolls });
    } else {
        app.add_plugins(DiceBowlScenePlugin);
    }

    app.run();
}
