//! Frame orchestrator driving the per-frame derivation pipeline.
//!
//! [`HandTracker`] owns the frame-synchronous loop body: it pulls 21
//! landmarks from the acquisition collaborator, synthesizes joint and bone
//! placements for the render sink, classifies hand closure, computes the
//! centroid, and (while the hand is closed) maps the centroid into the
//! target world frame for the placement sink. The tick entry point is called
//! once per rendering frame by whatever runtime owns the frame loop: an
//! engine callback, a test harness, or the bundled demo binary.

use crate::config::Config;
use crate::constants::KEY_POINT_COUNT;
use crate::error::{AppError, Result};
use crate::gesture::{self, GestureState};
use crate::geometry::{bone_placement, joint_placement};
use crate::mapping::{centroid, map_to_target, ViewContext};
use crate::pipeline::{DisplaySink, LandmarkSource, PlacementSink, RenderSink, SkeletonPart};
use crate::topology::{is_fingertip, BONE_PAIRS};
use log::{debug, info, warn};
use nalgebra::Point3;

/// Tracker lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    /// Acquisition collaborator not yet bound
    Uninitialized,
    /// Steady per-frame loop
    Running,
    /// Torn down; acquisition resources released
    Disposed,
}

/// Per-frame results handed back to the caller
#[derive(Debug, Clone)]
pub struct FrameOutput {
    /// Snapshot of the 21 landmark positions read this frame
    pub landmarks: [Point3<f32>; KEY_POINT_COUNT],
    /// Hand closure classification for this frame
    pub gesture: GestureState,
    /// Mean of all landmark positions
    pub center: Point3<f32>,
    /// Mapped world position, present only when the hand was closed and
    /// mapping succeeded
    pub mapped: Option<Point3<f32>>,
}

/// Hand skeleton tracker generic over its collaborators
pub struct HandTracker<S, R, P> {
    config: Config,
    state: TrackerState,
    source: Option<S>,
    render_sink: R,
    placement_sink: Option<P>,
    view_context: Option<ViewContext>,
    last_gesture: GestureState,
    frame_count: u64,
}

impl<S, R, P> HandTracker<S, R, P>
where
    S: LandmarkSource,
    R: RenderSink,
    P: PlacementSink,
{
    /// Create an uninitialized tracker.
    ///
    /// `placement_sink` may be `None` when the mapping/placement step is
    /// disabled; with mapping enabled in the configuration, a missing sink
    /// is reported at initialization.
    pub fn new(config: Config, render_sink: R, placement_sink: Option<P>) -> Self {
        Self {
            config,
            state: TrackerState::Uninitialized,
            source: None,
            render_sink,
            placement_sink,
            view_context: None,
            last_gesture: GestureState::default(),
            frame_count: 0,
        }
    }

    /// Bind the acquisition collaborator and enter the running state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingCollaborator`] if mapping is enabled without a
    /// placement sink, and [`AppError::InvalidInput`] if called more than once.
    pub fn initialize(&mut self, mut source: S) -> Result<()> {
        if self.state != TrackerState::Uninitialized {
            return Err(AppError::InvalidInput(format!(
                "initialize called in state {:?}",
                self.state
            )));
        }
        if self.config.mapping.enabled && self.placement_sink.is_none() {
            return Err(AppError::MissingCollaborator(
                "mapping enabled but no placement sink bound".to_string(),
            ));
        }

        source.set_async_readback(self.config.pipeline.async_readback);
        self.source = Some(source);
        self.state = TrackerState::Running;
        info!(
            "Hand tracker initialized (async readback: {})",
            self.config.pipeline.async_readback
        );
        Ok(())
    }

    /// Provide the active camera/view transform used for centroid mapping.
    /// Without one, closed-hand frames log a warning and skip placement.
    pub fn set_view_context(&mut self, view: ViewContext) {
        self.view_context = Some(view);
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> TrackerState {
        self.state
    }

    /// Number of frames processed since initialization
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Borrow the render sink (for inspection by test harnesses)
    #[must_use]
    pub const fn render_sink(&self) -> &R {
        &self.render_sink
    }

    /// Borrow the placement sink, if one is bound
    #[must_use]
    pub fn placement_sink(&self) -> Option<&P> {
        self.placement_sink.as_ref()
    }

    /// Process one frame.
    ///
    /// Stale or default landmark data (for example during acquisition
    /// warm-up, or one-frame lag under async readback) is processed like any
    /// other landmark set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingCollaborator`] if the tracker is not running.
    pub fn tick(&mut self, image: &S::Image) -> Result<FrameOutput> {
        let source = match (self.state, self.source.as_mut()) {
            (TrackerState::Running, Some(source)) => source,
            _ => {
                return Err(AppError::MissingCollaborator(format!(
                    "tick called in state {:?} without a bound acquisition source",
                    self.state
                )))
            }
        };

        // Feed the input image to the acquisition collaborator
        source.submit_frame(image)?;

        // Read-only landmark snapshot for this frame
        let landmarks: [Point3<f32>; KEY_POINT_COUNT] = std::array::from_fn(|i| source.landmark(i));

        // Joint balls
        let layer = self.config.geometry.layer;
        for (i, &position) in landmarks.iter().enumerate() {
            let placement = joint_placement(position, self.config.geometry.joint_scale);
            self.render_sink.draw(SkeletonPart::Joint, &placement, layer);

            if is_fingertip(i) {
                debug!("Fingertip {i}: {position}");
            } else {
                debug!("Joint {i}: {position}");
            }
        }

        // Bones
        for &(a, b) in &BONE_PAIRS {
            let placement = bone_placement(landmarks[a], landmarks[b], self.config.geometry.bone_radius);
            self.render_sink.draw(SkeletonPart::Bone, &placement, layer);
        }

        let gesture = gesture::classify(&landmarks, self.config.gesture.fist_threshold);
        if gesture != self.last_gesture {
            info!("Gesture changed: {:?} -> {:?}", self.last_gesture, gesture);
            self.last_gesture = gesture;
        }

        let center = centroid(&landmarks);

        let mapped = if gesture.is_closed() && self.config.mapping.enabled {
            self.place_center(center)
        } else {
            None
        };

        self.frame_count += 1;

        Ok(FrameOutput {
            landmarks,
            gesture,
            center,
            mapped,
        })
    }

    /// Map the centroid and forward it to the placement sink. A missing view
    /// context skips this frame's placement; all other per-frame work has
    /// already completed.
    fn place_center(&mut self, center: Point3<f32>) -> Option<Point3<f32>> {
        let mapping = &self.config.mapping;
        match map_to_target(
            center,
            mapping.viewport_width,
            mapping.viewport_height,
            mapping.depth_plane,
            mapping.movement_scale,
            self.view_context.as_ref(),
        ) {
            Ok(position) => {
                if let Some(sink) = self.placement_sink.as_mut() {
                    sink.place(position);
                }
                Some(position)
            }
            Err(e) => {
                warn!("Skipping placement update: {e}");
                None
            }
        }
    }

    /// Forward the source image to a display sink for passthrough display
    pub fn present<D: DisplaySink<S::Image>>(&self, display: &mut D, image: &S::Image) {
        display.present(image);
    }

    /// Release the acquisition collaborator. Idempotent, and safe to call
    /// even if initialization never completed.
    pub fn dispose(&mut self) {
        if let Some(mut source) = self.source.take() {
            source.dispose();
            info!("Hand tracker disposed after {} frames", self.frame_count);
        }
        self.state = TrackerState::Disposed;
    }
}
