//! Hand centroid computation and centroid-to-world mapping.
//!
//! The centroid is the unweighted mean of the current frame's landmark set.
//! Mapping runs in two stages: the centroid's normalized x/y are first
//! stretched into viewport pixels, then the viewport point is unprojected
//! through the active camera/view transform onto a fixed depth plane and the
//! resulting x/y are amplified by the movement scale factor (z is left
//! unscaled; the placement consumer keeps control of depth).

use crate::error::{Error, Result};
use nalgebra::{Isometry3, Perspective3, Point3};

/// Mean of all landmark positions; the zero vector for an empty set.
///
/// The empty case is a defensive default for warm-up frames, not an error.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // f64 mean narrows back to landmark precision
pub fn centroid(landmarks: &[Point3<f32>]) -> Point3<f32> {
    if landmarks.is_empty() {
        return Point3::origin();
    }

    // Accumulate in f64 so the mean of identical points round-trips exactly
    let sum = landmarks
        .iter()
        .fold(nalgebra::Vector3::<f64>::zeros(), |acc, p| acc + p.coords.cast::<f64>());
    let mean = sum / landmarks.len() as f64;
    Point3::new(mean.x as f32, mean.y as f32, mean.z as f32)
}

/// Active camera/view transform supplied by the rendering collaborator.
///
/// Wraps the camera's world pose and perspective projection so viewport
/// points can be unprojected into world space.
#[derive(Debug, Clone)]
pub struct ViewContext {
    camera_to_world: Isometry3<f32>,
    projection: Perspective3<f32>,
}

impl ViewContext {
    /// Create a view context from a camera pose and projection
    #[must_use]
    pub fn new(camera_to_world: Isometry3<f32>, projection: Perspective3<f32>) -> Self {
        Self {
            camera_to_world,
            projection,
        }
    }

    /// Camera at the world origin looking down -Z, with the crate's default
    /// perspective parameters for the given viewport aspect ratio
    #[must_use]
    pub fn with_default_projection(viewport_width: f32, viewport_height: f32) -> Self {
        use crate::constants::{DEFAULT_FAR_PLANE, DEFAULT_NEAR_PLANE, DEFAULT_VERTICAL_FOV};
        Self::new(
            Isometry3::identity(),
            Perspective3::new(
                viewport_width / viewport_height,
                DEFAULT_VERTICAL_FOV,
                DEFAULT_NEAR_PLANE,
                DEFAULT_FAR_PLANE,
            ),
        )
    }

    /// Unproject a viewport point onto the camera-space plane `depth` units
    /// along the view direction, returning the world-space position.
    ///
    /// Viewport coordinates are y-up with the origin at the lower-left
    /// corner.
    #[must_use]
    pub fn viewport_to_world(
        &self,
        x: f32,
        y: f32,
        depth: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Point3<f32> {
        let ndc = Point3::new(
            2.0 * x / viewport_width - 1.0,
            2.0 * y / viewport_height - 1.0,
            -1.0,
        );

        // Point on the near plane, then scale the view ray out to the
        // requested depth (camera space looks down -Z)
        let near = self.projection.unproject_point(&ndc);
        let t = depth / -near.z;
        let at_depth = Point3::new(near.x * t, near.y * t, -depth);

        self.camera_to_world * at_depth
    }
}

/// Map the hand centroid into the target world frame.
///
/// Stage 1 stretches the centroid's normalized `[-1, 1]` x/y into viewport
/// pixels via `(v + 1) * 0.5 * dimension`. Stage 2 unprojects that viewport
/// point onto `depth_plane` through the active view transform and amplifies
/// x/y by `scale`.
///
/// # Errors
///
/// Returns [`Error::MissingViewContext`] when `view` is `None`; the caller
/// skips that frame's placement update rather than guessing a transform.
pub fn map_to_target(
    center: Point3<f32>,
    viewport_width: f32,
    viewport_height: f32,
    depth_plane: f32,
    scale: f32,
    view: Option<&ViewContext>,
) -> Result<Point3<f32>> {
    let view = view.ok_or(Error::MissingViewContext)?;

    let viewport_x = (center.x + 1.0) * 0.5 * viewport_width;
    let viewport_y = (center.y + 1.0) * 0.5 * viewport_height;

    let world = view.viewport_to_world(viewport_x, viewport_y, depth_plane, viewport_width, viewport_height);

    Ok(Point3::new(world.x * scale, world.y * scale, world.z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_centroid_empty_is_origin() {
        assert_eq!(centroid(&[]), Point3::origin());
    }

    #[test]
    fn test_centroid_identical_points() {
        let p = Point3::new(0.3, -0.7, 2.0);
        let landmarks = [p; 21];
        assert_eq!(centroid(&landmarks), p);
    }

    #[test]
    fn test_centroid_identical_points_bit_exact_for_any_count() {
        // Values like 0.3 and -0.7 are not exactly representable; the mean
        // must still return the input bit-for-bit
        let p = Point3::new(0.3, -0.7, 0.1);
        for n in [1, 2, 5, 21] {
            let landmarks = vec![p; n];
            assert_eq!(centroid(&landmarks), p, "count {n}");
        }
    }

    #[test]
    fn test_centroid_is_order_independent_mean() {
        let a = [
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];
        let mut b = a;
        b.reverse();

        let expected = Point3::new(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0);
        assert_relative_eq!(centroid(&a), expected, epsilon = 1e-6);
        assert_eq!(centroid(&a), centroid(&b));
    }

    #[test]
    fn test_map_to_target_requires_view_context() {
        let result = map_to_target(Point3::origin(), 1920.0, 1080.0, 10.0, 1.0, None);
        assert!(matches!(result, Err(Error::MissingViewContext)));
    }

    #[test]
    fn test_map_to_target_center_round_trip() {
        let view = ViewContext::with_default_projection(1920.0, 1080.0);

        // Normalized (0, 0) lands on viewport (960, 540); with scale 1.0 the
        // mapped point equals the unprojection of the viewport center
        let mapped = map_to_target(Point3::new(0.0, 0.0, 0.5), 1920.0, 1080.0, 10.0, 1.0, Some(&view))
            .expect("mapping with a valid view context");
        let expected = view.viewport_to_world(960.0, 540.0, 10.0, 1920.0, 1080.0);

        assert_relative_eq!(mapped, expected, epsilon = 1e-4);
        // Viewport center sits on the optical axis
        assert_relative_eq!(mapped.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(mapped.y, 0.0, epsilon = 1e-4);
        assert_relative_eq!(mapped.z, -10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_map_to_target_scales_xy_only() {
        let view = ViewContext::with_default_projection(1920.0, 1080.0);
        let center = Point3::new(0.5, -0.25, 0.0);

        let unit = map_to_target(center, 1920.0, 1080.0, 10.0, 1.0, Some(&view)).unwrap();
        let amplified = map_to_target(center, 1920.0, 1080.0, 10.0, 10.0, Some(&view)).unwrap();

        assert_relative_eq!(amplified.x, unit.x * 10.0, epsilon = 1e-4);
        assert_relative_eq!(amplified.y, unit.y * 10.0, epsilon = 1e-4);
        assert_relative_eq!(amplified.z, unit.z, epsilon = 1e-6);
    }

    #[test]
    fn test_viewport_to_world_respects_camera_pose() {
        let pose = Isometry3::translation(5.0, 0.0, 0.0);
        let projection = Perspective3::new(16.0 / 9.0, std::f32::consts::FRAC_PI_3, 0.1, 1000.0);
        let view = ViewContext::new(pose, projection);

        let world = view.viewport_to_world(960.0, 540.0, 10.0, 1920.0, 1080.0);
        assert_relative_eq!(world, Point3::new(5.0, 0.0, -10.0), epsilon = 1e-4);
    }
}
