//! Tunnel Runner - an endless runner through a recycled tunnel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, segment pool, holes, camera)
//! - `config`: Validated game tuning loaded from JSON
//! - `clock`: Fixed-step frame clock driving the simulation
//! - `renderer`: WebGPU rendering adapter

pub mod clock;
pub mod config;
pub mod renderer;
pub mod sim;

pub use clock::FrameClock;
pub use config::{CollisionMode, ConfigError, GameConfig, HolePolicy, TunnelMotion};

/// Game configuration constants (defaults for [`GameConfig`])
pub mod consts {
    /// Fixed simulation timestep. One tick is one display frame at 60 Hz.
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame gap fed to the clock (tab switches, breakpoints)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Tunnel dimensions
    pub const SEGMENT_LENGTH: f32 = 10.0;
    pub const NUM_SEGMENTS: usize = 5;
    pub const TUNNEL_WIDTH: f32 = 5.0;
    /// Segments at the spawn point that never get a hole. Zero restores
    /// fully independent rolls, where the spawn segment may be cut too.
    pub const SAFE_START_SEGMENTS: usize = 1;

    /// Holes
    pub const HOLE_PROBABILITY: f64 = 0.3;
    pub const HOLE_WIDTH_FRACTION: f32 = 1.0 / 3.0;
    pub const HOLE_LENGTH_FRACTION: f32 = 1.0 / 3.0;
    pub const HOLE_DETECTION_RADIUS: f32 = 1.0;
    /// Height above ground below which a player over a hole falls in
    pub const FALL_THRESHOLD: f32 = 0.5;

    /// Player motion (units per tick)
    pub const MOVE_SPEED: f32 = 0.1;
    pub const GRAVITY: f32 = -0.01;
    pub const JUMP_VELOCITY: f32 = 0.2;
    pub const GROUND_LEVEL: f32 = 1.0;
    pub const PLAYER_RADIUS: f32 = 0.5;

    /// Camera offsets from the player
    pub const FOLLOW_DISTANCE_Z: f32 = 5.0;
    pub const FOLLOW_HEIGHT_Y: f32 = 2.0;
}
