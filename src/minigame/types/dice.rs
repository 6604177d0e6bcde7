//! Dice-related types and components
//!
//! This module contains the printed face values, the face-normal table,
//! the `Die` component, per-frame die samples and the result pair.

use std::fmt;

use bevy::prelude::*;

/// Number of dice thrown per roll.
pub const DICE_PER_ROLL: usize = 2;

/// Edge length of a die (world units).
pub const DIE_SIZE: f32 = 0.3;

/// A printed face value, always within `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceValue(u8);

impl FaceValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Out-of-range values are clamped into `1..=6`.
    pub const fn new(value: u8) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for FaceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed mapping from a die's six local-space outward directions to face values.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceNormalTable {
    faces: [(Vec3, FaceValue); 6],
}

impl FaceNormalTable {
    /// Standard six-sided die layout used by the bowl game.
    pub const CANONICAL: FaceNormalTable = FaceNormalTable {
        faces: [
            (Vec3::Y, FaceValue::new(1)),
            (Vec3::X, FaceValue::new(2)),
            (Vec3::Z, FaceValue::new(3)),
            (Vec3::NEG_Z, FaceValue::new(4)),
            (Vec3::NEG_X, FaceValue::new(5)),
            (Vec3::NEG_Y, FaceValue::new(6)),
        ],
    };

    pub const fn new(faces: [(Vec3, FaceValue); 6]) -> Self {
        Self { faces }
    }

    pub fn faces(&self) -> &[(Vec3, FaceValue); 6] {
        &self.faces
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Vec3, FaceValue)> {
        self.faces.iter()
    }
}

impl Default for FaceNormalTable {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// Which of the two dice an entity is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DieSlot {
    First,
    Second,
}

impl DieSlot {
    pub const ALL: [DieSlot; DICE_PER_ROLL] = [DieSlot::First, DieSlot::Second];

    pub fn index(&self) -> usize {
        match self {
            DieSlot::First => 0,
            DieSlot::Second => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DieSlot::First => "dice1",
            DieSlot::Second => "dice2",
        }
    }

    /// Base color for the die material.
    pub fn color(&self) -> Color {
        match self {
            DieSlot::First => Color::srgb(0.95, 0.95, 0.92), // Ivory
            DieSlot::Second => Color::srgb(0.85, 0.15, 0.15), // Lacquer red
        }
    }
}

/// Component attached to each die entity
#[derive(Component, Clone, Debug)]
pub struct Die {
    pub slot: DieSlot,
    pub faces: FaceNormalTable,
}

impl Die {
    pub fn new(slot: DieSlot) -> Self {
        Self {
            slot,
            faces: FaceNormalTable::CANONICAL,
        }
    }
}

/// Snapshot of one die read back from the physics engine for a single frame.
#[derive(Clone, Copy, Debug)]
pub struct DieSample<'a> {
    pub faces: &'a FaceNormalTable,
    pub orientation: Quat,
    pub linear_velocity: Vec3,
    pub angular_velocity: Vec3,
}

impl DieSample<'_> {
    pub fn is_settled(&self) -> bool {
        crate::minigame::settle::is_settled(self.linear_velocity, self.angular_velocity)
    }
}

/// The detected values of both dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DicePair {
    pub dice1: FaceValue,
    pub dice2: FaceValue,
}

impl DicePair {
    pub fn new(dice1: FaceValue, dice2: FaceValue) -> Self {
        Self { dice1, dice2 }
    }

    /// Sum of both dice, always within `2..=12`.
    pub fn total(&self) -> u8 {
        self.dice1.get() + self.dice2.get()
    }

    pub fn values(&self) -> [u8; DICE_PER_ROLL] {
        [self.dice1.get(), self.dice2.get()]
    }
}

impl fmt::Display for DicePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} = {}", self.dice1, self.dice2, self.total())
    }
}

/// Sent by the UI or the host to start a roll.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct RollDiceRequested;

/// Emitted exactly once per roll when both dice have come to rest.
#[derive(Message, Clone, Copy, Debug)]
pub struct DiceRolled(pub DicePair);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_value_clamps() {
        assert_eq!(FaceValue::new(0).get(), 1);
        assert_eq!(FaceValue::new(1).get(), 1);
        assert_eq!(FaceValue::new(6).get(), 6);
        assert_eq!(FaceValue::new(9).get(), 6);
    }

    #[test]
    fn test_canonical_table_values() {
        let values: Vec<u8> = FaceNormalTable::CANONICAL
            .iter()
            .map(|(_, v)| v.get())
            .collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(FaceNormalTable::default(), FaceNormalTable::CANONICAL);
    }

    #[test]
    fn test_dice_pair_display_and_total() {
        let pair = DicePair::new(FaceValue::new(3), FaceValue::new(5));
        assert_eq!(pair.total(), 8);
        assert_eq!(pair.values(), [3, 5]);
        assert_eq!(pair.to_string(), "3 + 5 = 8");
    }

    #[test]
    fn test_die_slot_names() {
        assert_eq!(DieSlot::First.name(), "dice1");
        assert_eq!(DieSlot::Second.name(), "dice2");
        assert_eq!(DieSlot::Second.index(), 1);
    }
}
