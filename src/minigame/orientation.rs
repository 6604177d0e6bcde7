//! Top-face detection from a die's orientation

use bevy::math::{Quat, Vec3};

use crate::minigame::types::{FaceNormalTable, FaceValue};

/// Determine the upward-facing value of a die based on its rotation.
///
/// Each local face normal is rotated into world space and compared against
/// world up; the largest dot product wins. Ties keep the face that comes
/// first in the table.
pub fn detect_top_face(orientation: Quat, table: &FaceNormalTable) -> FaceValue {
    let mut best_match = table.faces()[0].1;
    let mut best_dot = f32::MIN;

    for (normal, value) in table.iter() {
        let world_normal = orientation * *normal;
        let dot = world_normal.dot(Vec3::Y);

        if dot > best_dot {
            best_dot = dot;
            best_match = *value;
        }
    }

    best_match
}
