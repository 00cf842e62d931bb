//! Hand skeleton tracking core.
//!
//! This library consumes a per-frame stream of 21 three-dimensional hand
//! landmarks (produced by an external hand-pose estimation pipeline) and
//! derives:
//! 1. A renderable skeleton: joint spheres and oriented bone cylinders
//! 2. A hand-closure ("fist") classification
//! 3. The hand centroid
//! 4. A mapped cursor/object position driven by that centroid
//!
//! Landmark acquisition and output consumption are external collaborators
//! reached through the traits in [`pipeline`]; the core holds no opinion on
//! how landmarks are computed or rendered.
//!
//! # Examples
//!
//! ## Geometry synthesis
//!
//! ```
//! use hand_pose_tracking::geometry::{bone_placement, joint_placement};
//! use nalgebra::Point3;
//!
//! let wrist = Point3::new(0.0, 0.0, 0.0);
//! let thumb_cmc = Point3::new(0.1, 0.1, 0.0);
//!
//! let joint = joint_placement(wrist, 0.07);
//! let bone = bone_placement(wrist, thumb_cmc, 0.03);
//! let matrix = bone.to_homogeneous();
//! assert!(matrix.iter().all(|v| v.is_finite()));
//! ```
//!
//! ## Gesture classification
//!
//! ```
//! use hand_pose_tracking::gesture::{classify, GestureState};
//! use nalgebra::Point3;
//!
//! // All 21 landmarks coincide, so every fingertip touches its lower joint
//! let landmarks = [Point3::origin(); 21];
//! assert_eq!(classify(&landmarks, 0.05), GestureState::Closed);
//! ```
//!
//! ## Running the per-frame loop
//!
//! ```no_run
//! use hand_pose_tracking::{
//!     app::HandTracker,
//!     config::Config,
//!     mapping::ViewContext,
//!     pipeline::{LandmarkSource, PlacementSink, RenderSink, SkeletonPart},
//! };
//! # use hand_pose_tracking::geometry::Placement;
//! # use nalgebra::Point3;
//! # struct Source;
//! # impl LandmarkSource for Source {
//! #     type Image = ();
//! #     fn set_async_readback(&mut self, _: bool) {}
//! #     fn submit_frame(&mut self, _: &()) -> hand_pose_tracking::Result<()> { Ok(()) }
//! #     fn landmark(&self, _: usize) -> Point3<f32> { Point3::origin() }
//! #     fn dispose(&mut self) {}
//! # }
//! # struct Render;
//! # impl RenderSink for Render {
//! #     fn draw(&mut self, _: SkeletonPart, _: &Placement, _: u32) {}
//! # }
//! # struct Target;
//! # impl PlacementSink for Target {
//! #     fn place(&mut self, _: Point3<f32>) {}
//! # }
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! let mut tracker = HandTracker::new(config, Render, Some(Target));
//! tracker.set_view_context(ViewContext::with_default_projection(1920.0, 1080.0));
//! tracker.initialize(Source)?;
//!
//! loop {
//!     let output = tracker.tick(&())?;
//!     if output.gesture.is_closed() {
//!         println!("Fist at {:?}", output.mapped);
//!     }
//!     # break;
//! }
//!
//! tracker.dispose();
//! # Ok(())
//! # }
//! ```

/// Fixed skeleton topology tables for the 21-point hand model
pub mod topology;

/// Geometry synthesis for joint spheres and bone cylinders
pub mod geometry;

/// Memoryless fist classification
pub mod gesture;

/// Hand centroid and centroid-to-world mapping
pub mod mapping;

/// Collaborator trait contracts (acquisition source, output sinks)
pub mod pipeline;

/// Frame orchestrator
pub mod app;

/// Error types and result handling
pub mod error;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
