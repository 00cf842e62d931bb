//! Configuration management for the hand tracking application

use crate::constants::{
    DEFAULT_BONE_RADIUS, DEFAULT_DEPTH_PLANE, DEFAULT_FIST_THRESHOLD, DEFAULT_JOINT_SCALE,
    DEFAULT_MOVEMENT_SCALE, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Acquisition pipeline configuration
    pub pipeline: PipelineConfig,

    /// Skeleton geometry configuration
    pub geometry: GeometryConfig,

    /// Gesture classification configuration
    pub gesture: GestureConfig,

    /// Centroid mapping configuration
    pub mapping: MappingConfig,
}

/// Acquisition pipeline parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Use asynchronous GPU-to-CPU landmark readback (landmarks may lag the
    /// visual frame by one cycle)
    pub async_readback: bool,
}

/// Skeleton geometry parameters (cosmetic, not behavior-critical)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Uniform scale of joint spheres
    pub joint_scale: f32,

    /// Radius of bone cylinders
    pub bone_radius: f32,

    /// Render layer tag forwarded to the render sink
    pub layer: u32,
}

/// Gesture classification parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Fingertip-to-lower-joint distance threshold for fist detection
    pub fist_threshold: f32,
}

/// Centroid mapping parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingConfig {
    /// Enable centroid mapping and placement output
    pub enabled: bool,

    /// Amplification of mapped x/y movement
    pub movement_scale: f32,

    /// Viewport width in pixels
    pub viewport_width: f32,

    /// Viewport height in pixels
    pub viewport_height: f32,

    /// Camera-space distance of the unprojection reference plane
    pub depth_plane: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            geometry: GeometryConfig::default(),
            gesture: GestureConfig::default(),
            mapping: MappingConfig::default(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { async_readback: true }
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            joint_scale: DEFAULT_JOINT_SCALE,
            bone_radius: DEFAULT_BONE_RADIUS,
            layer: 0,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            fist_threshold: DEFAULT_FIST_THRESHOLD,
        }
    }
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            movement_scale: DEFAULT_MOVEMENT_SCALE,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            depth_plane: DEFAULT_DEPTH_PLANE,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.geometry.joint_scale <= 0.0 {
            return Err(Error::ConfigError(
                "Joint scale must be greater than 0".to_string(),
            ));
        }
        if self.geometry.bone_radius <= 0.0 {
            return Err(Error::ConfigError(
                "Bone radius must be greater than 0".to_string(),
            ));
        }
        if self.gesture.fist_threshold <= 0.0 {
            return Err(Error::ConfigError(
                "Fist threshold must be greater than 0".to_string(),
            ));
        }
        if self.mapping.viewport_width <= 0.0 || self.mapping.viewport_height <= 0.0 {
            return Err(Error::ConfigError(
                "Viewport dimensions must be greater than 0".to_string(),
            ));
        }
        if self.mapping.depth_plane <= 0.0 {
            return Err(Error::ConfigError(
                "Depth plane must be greater than 0".to_string(),
            ));
        }
        if self.mapping.movement_scale <= 0.0 {
            return Err(Error::ConfigError(
                "Movement scale must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Hand Pose Tracking Configuration

# Acquisition pipeline
pipeline:
  async_readback: true

# Skeleton geometry
geometry:
  joint_scale: 0.07
  bone_radius: 0.03
  layer: 0

# Gesture classification
gesture:
  fist_threshold: 0.05

# Centroid mapping
mapping:
  enabled: true
  movement_scale: 10.0
  viewport_width: 1920.0
  viewport_height: 1080.0
  depth_plane: 10.0
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.pipeline.async_readback);
        assert_eq!(config.gesture.fist_threshold, DEFAULT_FIST_THRESHOLD);
        assert_eq!(config.mapping.movement_scale, DEFAULT_MOVEMENT_SCALE);
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = serde_yaml::from_str(EXAMPLE_CONFIG).expect("example config parses");
        assert!(config.validate().is_ok());
        assert!(config.mapping.enabled);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("gesture:\n  fist_threshold: 0.1\n").unwrap();
        assert_eq!(config.gesture.fist_threshold, 0.1);
        assert_eq!(config.geometry.joint_scale, DEFAULT_JOINT_SCALE);
    }

    #[test]
    fn test_validate_rejects_nonpositive_threshold() {
        let mut config = Config::default();
        config.gesture.fist_threshold = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_viewport() {
        let mut config = Config::default();
        config.mapping.viewport_height = -1.0;
        assert!(config.validate().is_err());
    }
}
