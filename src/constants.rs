//! Constants used throughout the application

/// Number of hand landmarks in the fixed topology
pub const KEY_POINT_COUNT: usize = 21;

/// Number of skeletal bone pairs drawn per frame
pub const BONE_PAIR_COUNT: usize = 22;

/// Number of fingers (fingertip / lower-joint pairs)
pub const FINGER_COUNT: usize = 5;

/// Uniform scale applied to joint spheres
pub const DEFAULT_JOINT_SCALE: f32 = 0.07;

/// Radius of bone cylinders
pub const DEFAULT_BONE_RADIUS: f32 = 0.03;

/// Fingertip-to-lower-joint distance threshold for fist detection,
/// in landmark coordinate units
pub const DEFAULT_FIST_THRESHOLD: f32 = 0.05;

/// Amplification applied to mapped x/y object movement
pub const DEFAULT_MOVEMENT_SCALE: f32 = 10.0;

/// Default viewport dimensions for centroid mapping
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1920.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 1080.0;

/// Camera-space distance of the reference plane used when unprojecting
/// the hand centroid
pub const DEFAULT_DEPTH_PLANE: f32 = 10.0;

/// Default perspective projection parameters for the demo view context
pub const DEFAULT_VERTICAL_FOV: f32 = std::f32::consts::FRAC_PI_3;
pub const DEFAULT_NEAR_PLANE: f32 = 0.1;
pub const DEFAULT_FAR_PLANE: f32 = 1000.0;

/// Numeric precision epsilon for degenerate-geometry checks
pub const EPSILON: f32 = 1e-6;
