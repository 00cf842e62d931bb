//! Tests for the memoryless fist classifier


use hand_pose_tracking::constants::{DEFAULT_FIST_THRESHOLD, KEY_POINT_COUNT};
use hand_pose_tracking::gesture::{classify, finger_distances, GestureState};
use hand_pose_tracking::topology::{FINGERTIPS, LOWER_JOINTS};
use nalgebra::{Point3, Vector3};
use proptest::prelude::*;
use test_helpers::{closed_hand, open_hand};

#[test]
fn test_closed_iff_all_five_distances_within_threshold() {
    let landmarks = closed_hand();
    assert_eq!(classify(&landmarks, DEFAULT_FIST_THRESHOLD), GestureState::Closed);

    // Open each finger in turn; a single extended finger is enough to open
    for finger in 0..5 {
        let mut partial = closed_hand();
        partial[FINGERTIPS[finger]] = partial[LOWER_JOINTS[finger]] + Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(
            classify(&partial, DEFAULT_FIST_THRESHOLD),
            GestureState::Open,
            "finger {finger} extended should open the hand"
        );
    }
}

#[test]
fn test_open_hand_is_open() {
    assert_eq!(classify(&open_hand(), DEFAULT_FIST_THRESHOLD), GestureState::Open);
}

#[test]
fn test_classification_ignores_non_finger_landmarks() {
    let mut landmarks = closed_hand();
    // Moving the wrist far away must not affect closure
    landmarks[0] = Point3::new(100.0, 100.0, 100.0);
    assert_eq!(classify(&landmarks, DEFAULT_FIST_THRESHOLD), GestureState::Closed);
}

#[test]
fn test_finger_distances_match_classifier() {
    let landmarks = open_hand();
    let distances = finger_distances(&landmarks);
    assert!(distances.iter().all(|&d| d > DEFAULT_FIST_THRESHOLD));

    let landmarks = closed_hand();
    let distances = finger_distances(&landmarks);
    assert!(distances.iter().all(|&d| d <= DEFAULT_FIST_THRESHOLD));
}

proptest! {
    /// Scaling all landmark positions by k and the threshold by k leaves
    /// the classification unchanged
    #[test]
    fn test_scale_invariance(k in 0.01f32..100.0, seed in 0u64..1000) {
        // Deterministic pseudo-random hand: each coordinate mixed
        // independently (splitmix-style) so the landmarks fill the cube
        // rather than a correlated curve
        let coordinate = |i: usize, axis: u64| -> f32 {
            let mut z = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add((i as u64).wrapping_mul(1_442_695_040_888_963_407))
                .wrapping_add(axis.wrapping_mul(0x9E37_79B9_7F4A_7C15));
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            z ^= z >> 31;
            ((z >> 40) as f32) / 8_388_608.0 - 1.0
        };
        let landmarks: [Point3<f32>; KEY_POINT_COUNT] = std::array::from_fn(|i| {
            Point3::new(coordinate(i, 0), coordinate(i, 1), coordinate(i, 2))
        });

        let scaled: [Point3<f32>; KEY_POINT_COUNT] =
            std::array::from_fn(|i| Point3::from(landmarks[i].coords * k));

        let threshold = 0.5;
        // Skip knife-edge hands where a distance sits within float rounding
        // of the threshold
        prop_assume!(finger_distances(&landmarks)
            .iter()
            .all(|d| (d - threshold).abs() > 1e-4));

        prop_assert_eq!(
            classify(&landmarks, threshold),
            classify(&scaled, threshold * k)
        );
    }
}
