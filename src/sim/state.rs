//! Game state and core simulation types

use glam::Vec3;

use super::camera::Camera;
use super::pool::SegmentPool;
use crate::config::{ConfigError, GameConfig};

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Player is running
    Running,
    /// Player fell into a hole. Terminal: there is no restart path.
    GameOver,
}

/// Things that happened during the last tick (for logging and presentation)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jumped,
    Landed,
    /// Segment at this pool index was moved to the other end of the window
    SegmentRecycled { index: usize },
    /// Player fell through the hole of the segment at this pool index
    FellIntoHole { index: usize },
}

/// The player sphere
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Vec3,
    /// Units per tick, positive is up
    pub vertical_velocity: f32,
    pub is_jumping: bool,
}

impl Player {
    /// Spawn at the origin, standing on the ground
    pub fn new(ground_level: f32) -> Self {
        Self {
            position: Vec3::new(0.0, ground_level, 0.0),
            vertical_velocity: 0.0,
            is_jumping: false,
        }
    }

    /// Start a jump. Returns false (and changes nothing) if already airborne.
    pub fn try_jump(&mut self, jump_velocity: f32) -> bool {
        if self.is_jumping {
            return false;
        }
        self.is_jumping = true;
        self.vertical_velocity = jump_velocity;
        true
    }

    /// Advance one tick: forward travel plus the jump arc.
    ///
    /// Returns true on the tick the player lands.
    pub fn integrate(&mut self, config: &GameConfig) -> bool {
        self.position.z -= config.move_speed;

        if !self.is_jumping {
            return false;
        }

        self.position.y += self.vertical_velocity;
        self.vertical_velocity += config.gravity;

        if self.position.y <= config.ground_level {
            self.position.y = config.ground_level;
            self.vertical_velocity = 0.0;
            self.is_jumping = false;
            return true;
        }
        false
    }

    /// Height of the player above the ground plane
    pub fn height_above_ground(&self, ground_level: f32) -> f32 {
        self.position.y - ground_level
    }
}

/// A hole cut into a floor segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hole {
    /// Lateral offset of the hole center from the tunnel center line
    pub x_offset: f32,
    /// Extent along x
    pub width: f32,
    /// Extent along z
    pub length: f32,
}

/// One floor segment of the tunnel
#[derive(Debug, Clone, PartialEq)]
pub struct TunnelSegment {
    /// World z of the segment center
    pub z_position: f32,
    pub hole: Option<Hole>,
}

impl TunnelSegment {
    pub fn has_hole(&self) -> bool {
        self.hole.is_some()
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: GameConfig,
    pub player: Player,
    pub pool: SegmentPool,
    pub camera: Camera,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Distance run so far
    pub distance: f32,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new run. The config is validated here so that nothing
    /// downstream has to cope with a degenerate tunnel.
    pub fn new(seed: u64, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let player = Player::new(config.ground_level);
        let camera = Camera::following(&player, &config);
        let pool = SegmentPool::new(&config, seed);

        log::info!(
            "New run: seed={} segments={} holes={}",
            seed,
            pool.len(),
            pool.hole_count()
        );

        Ok(Self {
            seed,
            config,
            player,
            pool,
            camera,
            phase: GamePhase::Running,
            time_ticks: 0,
            distance: 0.0,
            events: Vec::new(),
        })
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Jump request from the input handler. Ignored while airborne or after
    /// game over.
    pub fn request_jump(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        let jumped = self.player.try_jump(self.config.jump_velocity);
        if jumped {
            log::trace!("Jump at z={:.2}", self.player.position.z);
            self.events.push(GameEvent::Jumped);
        }
        jumped
    }
}
