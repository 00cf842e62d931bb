//! Fixed skeleton topology for the 21-point hand model.
//!
//! The adjacency table and landmark-role sets are immutable configuration
//! data: exactly 21 landmark indices exist, their semantic roles never
//! change, and every frame iterates the same 22 bone pairs and 5
//! fingertip/lower-joint pairs regardless of landmark values.

use crate::constants::{BONE_PAIR_COUNT, FINGER_COUNT};

/// Landmark indices by anatomical role (MediaPipe hand landmark convention)
pub mod landmarks {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_FINGER_MCP: usize = 5;
    pub const INDEX_FINGER_PIP: usize = 6;
    pub const INDEX_FINGER_DIP: usize = 7;
    pub const INDEX_FINGER_TIP: usize = 8;
    pub const MIDDLE_FINGER_MCP: usize = 9;
    pub const MIDDLE_FINGER_PIP: usize = 10;
    pub const MIDDLE_FINGER_DIP: usize = 11;
    pub const MIDDLE_FINGER_TIP: usize = 12;
    pub const RING_FINGER_MCP: usize = 13;
    pub const RING_FINGER_PIP: usize = 14;
    pub const RING_FINGER_DIP: usize = 15;
    pub const RING_FINGER_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;
}

/// Skeletal edges, as ordered landmark index pairs.
///
/// The (1, 2) thumb edge appears twice, matching the reference topology;
/// the duplicate only causes a redundant, harmless draw.
pub const BONE_PAIRS: [(usize, usize); BONE_PAIR_COUNT] = [
    (0, 1), (1, 2), (1, 2), (2, 3), (3, 4),     // Thumb
    (5, 6), (6, 7), (7, 8),                     // Index finger
    (9, 10), (10, 11), (11, 12),                // Middle finger
    (13, 14), (14, 15), (15, 16),               // Ring finger
    (17, 18), (18, 19), (19, 20),               // Pinky
    (0, 17), (2, 5), (5, 9), (9, 13), (13, 17), // Palm
];

/// Fingertip landmark indices, thumb first
pub const FINGERTIPS: [usize; FINGER_COUNT] = [4, 8, 12, 16, 20];

/// Lower-joint landmark indices, paired positionally with [`FINGERTIPS`]
pub const LOWER_JOINTS: [usize; FINGER_COUNT] = [3, 7, 11, 15, 19];

/// Iterate the 5 (fingertip, lower joint) index pairs used for curl detection
pub fn finger_pairs() -> impl Iterator<Item = (usize, usize)> {
    FINGERTIPS.into_iter().zip(LOWER_JOINTS)
}

/// Check whether a landmark index is a fingertip
#[must_use]
pub fn is_fingertip(index: usize) -> bool {
    FINGERTIPS.contains(&index)
}
