//! Game tuning
//!
//! Every constant the simulation uses lives in [`GameConfig`]. A config is
//! validated once, up front; the simulation assumes it is sane afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// How tunnel segments move each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TunnelMotion {
    /// Segments travel with the player; recycled once they fall a full
    /// window below the camera.
    #[default]
    Scrolling,
    /// Segments stay put in world space; recycled once the camera passes them.
    Anchored,
}

/// What happens to a segment's hole when the segment is recycled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HolePolicy {
    /// Keep the hole (repeating layout)
    #[default]
    Preserve,
    /// Roll a fresh hole every lap
    Reroll,
}

/// Which axes the hole check looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CollisionMode {
    /// Distance along the travel axis only; the hole's lateral offset is ignored
    #[default]
    AlongTrack,
    /// Also require the player to be laterally inside the hole
    Footprint,
}

/// Rejected configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must be within {min}..={max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("num_segments must be at least 1")]
    NoSegments,
    #[error("move_speed ({move_speed}) must be less than segment_length ({segment_length})")]
    SpeedExceedsSegment { move_speed: f32, segment_length: f32 },
    #[error("gravity must be negative (got {0})")]
    GravityNotDownward(f32),
    #[error("safe_start_segments ({safe}) exceeds num_segments ({total})")]
    TooManySafeSegments { safe: usize, total: usize },
    #[error("invalid config JSON: {0}")]
    Parse(String),
}

/// Complete game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Tunnel ===
    pub segment_length: f32,
    pub num_segments: usize,
    pub tunnel_width: f32,
    pub safe_start_segments: usize,
    pub motion: TunnelMotion,

    // === Holes ===
    /// Chance that a segment gets a hole (0.0 - 1.0)
    pub hole_probability: f64,
    /// Hole width as a fraction of tunnel width
    pub hole_width_fraction: f32,
    /// Hole length as a fraction of segment length
    pub hole_length_fraction: f32,
    pub hole_policy: HolePolicy,
    pub hole_detection_radius: f32,
    pub fall_threshold: f32,
    pub collision: CollisionMode,

    // === Player (per tick) ===
    pub move_speed: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub ground_level: f32,

    // === Camera ===
    pub follow_distance_z: f32,
    pub follow_height_y: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            segment_length: SEGMENT_LENGTH,
            num_segments: NUM_SEGMENTS,
            tunnel_width: TUNNEL_WIDTH,
            safe_start_segments: SAFE_START_SEGMENTS,
            motion: TunnelMotion::default(),

            hole_probability: HOLE_PROBABILITY,
            hole_width_fraction: HOLE_WIDTH_FRACTION,
            hole_length_fraction: HOLE_LENGTH_FRACTION,
            hole_policy: HolePolicy::default(),
            hole_detection_radius: HOLE_DETECTION_RADIUS,
            fall_threshold: FALL_THRESHOLD,
            collision: CollisionMode::default(),

            move_speed: MOVE_SPEED,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            ground_level: GROUND_LEVEL,

            follow_distance_z: FOLLOW_DISTANCE_Z,
            follow_height_y: FOLLOW_HEIGHT_Y,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Length of tunnel covered by the whole pool
    pub fn window_length(&self) -> f32 {
        self.segment_length * self.num_segments as f32
    }

    /// Hole width along x
    pub fn hole_width(&self) -> f32 {
        self.tunnel_width * self.hole_width_fraction
    }

    /// Hole length along z
    pub fn hole_length(&self) -> f32 {
        self.segment_length * self.hole_length_fraction
    }

    /// Reject anything that would corrupt the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("segment_length", self.segment_length)?;
        positive("tunnel_width", self.tunnel_width)?;
        positive("move_speed", self.move_speed)?;
        positive("jump_velocity", self.jump_velocity)?;
        positive("hole_detection_radius", self.hole_detection_radius)?;
        positive("fall_threshold", self.fall_threshold)?;
        finite("ground_level", self.ground_level)?;
        finite("follow_distance_z", self.follow_distance_z)?;
        finite("follow_height_y", self.follow_height_y)?;
        finite("gravity", self.gravity)?;

        if self.num_segments == 0 {
            return Err(ConfigError::NoSegments);
        }
        if self.safe_start_segments > self.num_segments {
            return Err(ConfigError::TooManySafeSegments {
                safe: self.safe_start_segments,
                total: self.num_segments,
            });
        }
        if self.move_speed >= self.segment_length {
            return Err(ConfigError::SpeedExceedsSegment {
                move_speed: self.move_speed,
                segment_length: self.segment_length,
            });
        }
        if self.gravity >= 0.0 {
            return Err(ConfigError::GravityNotDownward(self.gravity));
        }

        in_range("hole_probability", self.hole_probability, 0.0, 1.0)?;
        fraction("hole_width_fraction", self.hole_width_fraction)?;
        fraction("hole_length_fraction", self.hole_length_fraction)?;

        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive {
            field,
            value: value as f64,
        })
    }
}

fn in_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Fractions must leave a non-empty hole: (0, 1]
fn fraction(field: &'static str, value: f32) -> Result<(), ConfigError> {
    positive(field, value)?;
    in_range(field, value as f64, 0.0, 1.0)
}
