//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (pool index)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod camera;
pub mod collision;
pub mod pool;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use collision::{falls_into, hole_under_player};
pub use pool::SegmentPool;
pub use state::{GameEvent, GamePhase, GameState, Hole, Player, TunnelSegment};
pub use tick::{TickInput, tick};
