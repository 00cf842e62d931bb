//! Geometry synthesis: landmark positions into renderable placements.
//!
//! Converts a single landmark (joint sphere) or a landmark pair (oriented
//! bone cylinder) into a translation/rotation/scale placement for the render
//! sink. Both synthesizers are pure functions of their inputs and are safe
//! on degenerate input: a zero-length bone falls back to an identity
//! rotation instead of propagating NaN into the renderer.

use crate::constants::EPSILON;
use nalgebra::{Matrix4, Point3, Translation3, UnitQuaternion, Vector3};

/// A rigid + non-uniform-scale placement for one rendered skeleton element
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// World-space position of the element center
    pub translation: Point3<f32>,
    /// Orientation of the element
    pub rotation: UnitQuaternion<f32>,
    /// Per-axis scale (uniform for joints, radius/half-length/radius for bones)
    pub scale: Vector3<f32>,
}

impl Placement {
    /// Compose the placement into a column-major TRS matrix
    #[must_use]
    pub fn to_homogeneous(&self) -> Matrix4<f32> {
        let tr = Translation3::from(self.translation.coords).to_homogeneous()
            * self.rotation.to_homogeneous();
        tr * Matrix4::new_nonuniform_scaling(&self.scale)
    }
}

/// Placement for a joint sphere: identity rotation, uniform scale.
#[must_use]
pub fn joint_placement(pos: Point3<f32>, joint_scale: f32) -> Placement {
    Placement {
        translation: pos,
        rotation: UnitQuaternion::identity(),
        scale: Vector3::new(joint_scale, joint_scale, joint_scale),
    }
}

/// Placement for a bone cylinder connecting two landmarks.
///
/// The cylinder is centered on the midpoint, rotated so its +Y axis points
/// from `p1` to `p2` (shortest arc), and scaled to (radius, length/2,
/// radius). If the two landmarks coincide the rotation is the identity and
/// the length component is zero.
#[must_use]
pub fn bone_placement(p1: Point3<f32>, p2: Point3<f32>, radius: f32) -> Placement {
    let direction = p2 - p1;
    let length = direction.norm();
    let center = nalgebra::center(&p1, &p2);

    let rotation = if length < EPSILON {
        UnitQuaternion::identity()
    } else {
        // rotation_between returns None only for antiparallel vectors,
        // where any half-turn perpendicular to +Y is a valid shortest arc
        UnitQuaternion::rotation_between(&Vector3::y(), &direction).unwrap_or_else(|| {
            UnitQuaternion::from_axis_angle(&Vector3::x_axis(), std::f32::consts::PI)
        })
    };

    Placement {
        translation: center,
        rotation,
        scale: Vector3::new(radius, length / 2.0, radius),
    }
}
