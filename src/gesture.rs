//! Hand-closure ("fist") classification.
//!
//! The classifier is memoryless: each frame's state is a pure function of
//! that frame's landmark set, with no hysteresis or temporal smoothing.
//! Jitter-resistance via enter/exit thresholds would be an extension on top
//! of this contract, not a change to it.

use crate::constants::KEY_POINT_COUNT;
use crate::topology::finger_pairs;
use nalgebra::Point3;

/// Per-frame hand closure state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    /// At least one finger is extended
    Open,
    /// All five fingertips are folded against their lower joints
    Closed,
}

impl GestureState {
    /// True when the hand is classified as a fist
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl Default for GestureState {
    fn default() -> Self {
        Self::Open
    }
}

/// Classify the current frame's landmark set.
///
/// Returns [`GestureState::Closed`] only if all five fingertip-to-lower-joint
/// distances are within `threshold` (same units as landmark coordinates).
#[must_use]
pub fn classify(landmarks: &[Point3<f32>; KEY_POINT_COUNT], threshold: f32) -> GestureState {
    for (tip, lower) in finger_pairs() {
        if nalgebra::distance(&landmarks[tip], &landmarks[lower]) > threshold {
            return GestureState::Open;
        }
    }
    GestureState::Closed
}

/// Fingertip-to-lower-joint distances for the five fingers, thumb first
#[must_use]
pub fn finger_distances(landmarks: &[Point3<f32>; KEY_POINT_COUNT]) -> [f32; 5] {
    let mut distances = [0.0; 5];
    for (i, (tip, lower)) in finger_pairs().enumerate() {
        distances[i] = nalgebra::distance(&landmarks[tip], &landmarks[lower]);
    }
    distances
}
