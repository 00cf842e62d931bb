//! Collaborator contracts at the boundary of the tracking core.
//!
//! Landmark acquisition (camera, inference, GPU readback) and output
//! consumption (mesh rendering, image passthrough, object placement) live
//! outside this crate. The core depends only on the traits here, never on
//! how landmarks are computed or what a sink does with the values.

use crate::error::Result;
use crate::geometry::Placement;
use nalgebra::Point3;

/// Acquisition collaborator: refreshes 21 hand landmarks once per frame.
///
/// With async readback enabled, landmark data may lag the submitted frame by
/// one cycle; callers treat the returned positions as the current snapshot
/// either way. Warm-up frames may return default (zeroed) positions, which
/// are processed like any other landmark set.
pub trait LandmarkSource {
    /// Opaque source image type; the core never inspects it
    type Image;

    /// Toggle asynchronous GPU-to-CPU readback
    fn set_async_readback(&mut self, enabled: bool);

    /// Push the current source image and let the collaborator refresh its
    /// landmark buffer
    fn submit_frame(&mut self, image: &Self::Image) -> Result<()>;

    /// Current position of landmark `index` (0..20)
    fn landmark(&self, index: usize) -> Point3<f32>;

    /// Release acquisition resources; must be idempotent
    fn dispose(&mut self);
}

/// Mesh/material identity of a rendered skeleton element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonPart {
    /// Joint sphere
    Joint,
    /// Bone cylinder
    Bone,
}

/// Render sink: receives one placement per joint and per bone each frame.
/// Fire-and-forget; the core consumes no return value.
pub trait RenderSink {
    fn draw(&mut self, part: SkeletonPart, placement: &Placement, layer: u32);
}

/// Display sink: receives the source image for passthrough display
pub trait DisplaySink<I> {
    fn present(&mut self, image: &I);
}

/// Placement sink: applies a mapped position to a target object's x/y.
/// The consumer retains control of the object's z coordinate.
pub trait PlacementSink {
    fn place(&mut self, position: Point3<f32>);
}
