//! Headless demo driver for the hand tracking core.
//!
//! Stands in for the engine frame loop: a synthetic landmark source animates
//! a hand that drifts across the view and periodically closes into a fist,
//! and the sinks log what a renderer/placement consumer would receive.

use anyhow::Result;
use clap::Parser;
use hand_pose_tracking::{
    app::HandTracker,
    config::Config,
    constants::KEY_POINT_COUNT,
    geometry::Placement,
    mapping::ViewContext,
    pipeline::{LandmarkSource, PlacementSink, RenderSink, SkeletonPart},
    topology::{FINGERTIPS, LOWER_JOINTS},
};
use log::{debug, info};
use nalgebra::{Point3, Vector3};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of frames to simulate
    #[arg(short = 'n', long, default_value = "300")]
    frames: u64,

    /// Fist-distance threshold override
    #[arg(short, long)]
    threshold: Option<f32>,

    /// Movement scale override for centroid mapping
    #[arg(short, long)]
    scale: Option<f32>,

    /// Disable the mapping/placement step
    #[arg(long)]
    no_placement: bool,

    /// Disable asynchronous landmark readback
    #[arg(long)]
    sync_readback: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,
}

/// Scripted landmark source: a fist that opens and closes on a fixed cycle
/// while drifting horizontally
struct SyntheticHand {
    frame: u64,
    landmarks: [Point3<f32>; KEY_POINT_COUNT],
}

impl SyntheticHand {
    fn new() -> Self {
        Self {
            frame: 0,
            landmarks: [Point3::origin(); KEY_POINT_COUNT],
        }
    }
}

impl LandmarkSource for SyntheticHand {
    type Image = u64; // frame number stands in for a texture handle

    fn set_async_readback(&mut self, enabled: bool) {
        debug!("Synthetic source async readback: {enabled}");
    }

    fn submit_frame(&mut self, image: &u64) -> hand_pose_tracking::Result<()> {
        self.frame = *image;
        let t = self.frame as f32 / 60.0;
        let center = Vector3::new(0.5 * (t * 0.7).sin(), 0.3 * (t * 0.5).cos(), 0.2);

        // Curl factor swings between open (1.0) and closed (0.0)
        let curl = 0.5 + 0.5 * (t * 2.0).sin();

        for i in 0..KEY_POINT_COUNT {
            let spread = i as f32 / KEY_POINT_COUNT as f32 - 0.5;
            self.landmarks[i] = Point3::from(center + Vector3::new(spread * 0.2, 0.05 * i as f32 % 0.15, 0.0));
        }
        // Pull fingertips toward their lower joints as the hand closes
        for (tip, lower) in FINGERTIPS.into_iter().zip(LOWER_JOINTS) {
            self.landmarks[tip] = self.landmarks[lower] + Vector3::new(0.0, 0.3, 0.0) * curl;
        }
        Ok(())
    }

    fn landmark(&self, index: usize) -> Point3<f32> {
        self.landmarks[index]
    }

    fn dispose(&mut self) {
        info!("Synthetic hand source disposed");
    }
}

/// Render sink that counts draws and logs them at debug level
#[derive(Default)]
struct LogRenderSink {
    joints: u64,
    bones: u64,
}

impl RenderSink for LogRenderSink {
    fn draw(&mut self, part: SkeletonPart, placement: &Placement, layer: u32) {
        match part {
            SkeletonPart::Joint => self.joints += 1,
            SkeletonPart::Bone => self.bones += 1,
        }
        debug!("Draw {part:?} at {} on layer {layer}", placement.translation);
    }
}

/// Placement sink that logs the driven object position
struct LogPlacementSink;

impl PlacementSink for LogPlacementSink {
    fn place(&mut self, position: Point3<f32>) {
        info!("Object placed at ({:.3}, {:.3}, {:.3})", position.x, position.y, position.z);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Hand Pose Tracking - demo driver");

    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if let Some(threshold) = args.threshold {
        config.gesture.fist_threshold = threshold;
    }
    if let Some(scale) = args.scale {
        config.mapping.movement_scale = scale;
    }
    if args.no_placement {
        config.mapping.enabled = false;
    }
    if args.sync_readback {
        config.pipeline.async_readback = false;
    }
    config.validate()?;

    let placement_sink = config.mapping.enabled.then_some(LogPlacementSink);
    let mut tracker = HandTracker::new(config.clone(), LogRenderSink::default(), placement_sink);
    tracker.set_view_context(ViewContext::with_default_projection(
        config.mapping.viewport_width,
        config.mapping.viewport_height,
    ));
    tracker.initialize(SyntheticHand::new())?;

    let mut closed_frames = 0u64;
    for frame in 0..args.frames {
        let output = tracker.tick(&frame)?;
        if output.gesture.is_closed() {
            closed_frames += 1;
        }
    }

    info!(
        "Processed {} frames ({} with a closed hand)",
        tracker.frame_count(),
        closed_frames
    );
    tracker.dispose();

    Ok(())
}
