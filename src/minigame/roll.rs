//! Roll lifecycle
//!
//! `RollSession` owns the state of the current roll and is advanced once per
//! frame by the dice systems:
//!
//! ```text
//! Idle --request--> Rolling --delay elapsed--> AwaitingSettle --both settled--> DetectionComplete
//! ```
//!
//! A request while `Rolling` or `AwaitingSettle` is ignored. There is no
//! cancellation: a started roll always runs until both dice settle.

use bevy::log::debug;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::minigame::orientation::detect_top_face;
use crate::minigame::types::{DicePair, DieSample, GameConfig, DICE_PER_ROLL};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum RollPhase {
    #[default]
    Idle,
    /// Dice are in flight; settle polling starts when the delay runs out.
    /// `launched` stays false until the frame the dice were thrown has passed,
    /// so the delay only counts down once physics has stepped at least once.
    Rolling { remaining_delay: f32, launched: bool },
    AwaitingSettle,
    DetectionComplete,
}

/// Resource tracking the current roll
#[derive(Resource, Debug, Default)]
pub struct RollSession {
    phase: RollPhase,
    last_result: Option<DicePair>,
    rolls_completed: u32,
}

impl RollSession {
    pub fn phase(&self) -> RollPhase {
        self.phase
    }

    /// True from the moment a roll is accepted until detection completes.
    pub fn is_rolling(&self) -> bool {
        matches!(
            self.phase,
            RollPhase::Rolling { .. } | RollPhase::AwaitingSettle
        )
    }

    pub fn is_detection_complete(&self) -> bool {
        self.phase == RollPhase::DetectionComplete
    }

    pub fn last_result(&self) -> Option<DicePair> {
        self.last_result
    }

    /// Values of both dice, `[0, 0]` until a roll completes.
    pub fn values(&self) -> [u8; DICE_PER_ROLL] {
        self.last_result.map(|pair| pair.values()).unwrap_or([0, 0])
    }

    pub fn total(&self) -> u8 {
        self.last_result.map(|pair| pair.total()).unwrap_or(0)
    }

    pub fn rolls_completed(&self) -> u32 {
        self.rolls_completed
    }

    /// Start a roll. Returns `false` (and changes nothing) if one is in progress.
    ///
    /// The caller is responsible for replacing the dice and applying impulses
    /// when this returns `true`.
    pub fn request_roll(&mut self, detection_delay_secs: f32) -> bool {
        if self.is_rolling() {
            return false;
        }

        self.phase = RollPhase::Rolling {
            remaining_delay: detection_delay_secs.max(0.0),
            launched: false,
        };
        self.last_result = None;
        true
    }

    /// Advance the roll by `dt` seconds.
    ///
    /// `dice` holds this frame's samples, ordered first die then second. The
    /// call in the frame the roll was accepted only marks the dice as launched.
    /// Once polling has begun, both dice must be present and settled for
    /// detection to fire; the detected pair is returned exactly once per roll.
    pub fn advance(&mut self, dt: f32, dice: &[DieSample<'_>]) -> Option<DicePair> {
        if let RollPhase::Rolling {
            remaining_delay,
            launched,
        } = self.phase
        {
            if !launched {
                self.phase = RollPhase::Rolling {
                    remaining_delay,
                    launched: true,
                };
                return None;
            }

            let remaining_delay = remaining_delay - dt;
            if remaining_delay > 0.0 {
                self.phase = RollPhase::Rolling {
                    remaining_delay,
                    launched: true,
                };
                return None;
            }
            debug!("Roll delay elapsed, polling for settled dice");
            self.phase = RollPhase::AwaitingSettle;
        }

        if self.phase != RollPhase::AwaitingSettle {
            return None;
        }

        if dice.len() != DICE_PER_ROLL || !dice.iter().all(|die| die.is_settled()) {
            return None;
        }

        let pair = DicePair::new(
            detect_top_face(dice[0].orientation, dice[0].faces),
            detect_top_face(dice[1].orientation, dice[1].faces),
        );

        self.phase = RollPhase::DetectionComplete;
        self.last_result = Some(pair);
        self.rolls_completed += 1;
        Some(pair)
    }
}

/// Launch and spin impulses for one die.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThrowImpulse {
    pub force: Vec3,
    pub torque: Vec3,
}

impl ThrowImpulse {
    /// Random horizontal direction with a fixed upward component for the
    /// force, a uniformly random per-axis direction for the torque.
    pub fn random(rng: &mut impl Rng, throw_force: f32, torque_force: f32) -> Self {
        let force = Vec3::new(rng.gen_range(-0.5..0.5), 1.0, rng.gen_range(-0.5..0.5))
            .normalize()
            * throw_force;

        let torque = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        )
        .try_normalize()
        .unwrap_or(Vec3::Y)
            * torque_force;

        Self { force, torque }
    }
}

/// RNG used for throws. Seeded from [`GameConfig::seed`] when set.
#[derive(Resource)]
pub struct ThrowRng(pub StdRng);

impl ThrowRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl FromWorld for ThrowRng {
    fn from_world(world: &mut World) -> Self {
        let seed = world
            .get_resource::<GameConfig>()
            .and_then(|config| config.seed);
        Self::new(seed)
    }
}
