//! Demo mode: jump over holes without a human at the keyboard
//!
//! Looks at the nearest hole ahead and jumps on the first tick from which a
//! full jump arc stays above the fall threshold for the whole detection band.

use super::collision::within_hole_width;
use super::state::GameState;
use crate::config::{CollisionMode, GameConfig, TunnelMotion};

/// Should the player jump this tick?
pub fn wants_jump(state: &GameState) -> bool {
    let config = &state.config;
    if state.player.is_jumping || state.is_game_over() {
        return false;
    }
    // Scrolling tunnels never bring a hole closer
    if config.motion == TunnelMotion::Scrolling {
        return false;
    }

    let player = &state.player;
    let nearest_ahead = state
        .pool
        .segments()
        .iter()
        .filter_map(|segment| {
            let hole = segment.hole.as_ref()?;
            if config.collision == CollisionMode::Footprint && !within_hole_width(player, hole) {
                return None;
            }
            // Player travels toward -z
            let ahead = player.position.z - segment.z_position;
            (ahead > 0.0).then_some(ahead)
        })
        .min_by(|a, b| a.total_cmp(b));

    nearest_ahead.is_some_and(|ahead| jump_clears(ahead, config))
}

/// Longest arc the planner will simulate before giving up on a jump
const MAX_PLAN_TICKS: u32 = 10_000;

/// Simulate a jump started now against a hole `ahead` units in front.
///
/// The hole's detection band is widened by one tick of travel on each side
/// so float drift in the player's position cannot land it on the edge.
fn jump_clears(ahead: f32, config: &GameConfig) -> bool {
    let band = config.hole_detection_radius + config.move_speed;
    let mut height = 0.0_f32;
    let mut velocity = config.jump_velocity;
    let mut distance = ahead;

    for _ in 0..MAX_PLAN_TICKS {
        distance -= config.move_speed;
        height += velocity;
        velocity += config.gravity;

        if distance <= -band {
            return true;
        }
        if height <= 0.0 {
            // Landed short of the hole or inside its band
            return false;
        }
        if distance.abs() < band && height < config.fall_threshold {
            return false;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::{TickInput, tick};

    fn anchored() -> GameConfig {
        GameConfig {
            motion: TunnelMotion::Anchored,
            ..Default::default()
        }
    }

    #[test]
    fn test_jump_clears_close_hole() {
        assert!(jump_clears(2.0, &anchored()));
    }

    #[test]
    fn test_jump_too_early_lands_short() {
        assert!(!jump_clears(20.0, &anchored()));
    }

    #[test]
    fn test_jump_too_late_falls_in() {
        assert!(!jump_clears(0.5, &anchored()));
    }

    #[test]
    fn test_jump_keeps_clear_of_band_edge() {
        // Without a margin this arc comes down 1.05 past the hole center,
        // which drift can pull inside the detection radius.
        assert!(!jump_clears(2.85, &anchored()));
        assert!(jump_clears(2.7, &anchored()));
    }

    #[test]
    fn test_planner_terminates_with_feeble_gravity() {
        let config = GameConfig {
            gravity: -1e-9,
            ..anchored()
        };
        assert!(config.validate().is_ok());
        // Never comes down, so any hole ahead is cleared
        assert!(jump_clears(2.0, &config));

        let crawling = GameConfig {
            move_speed: 1e-9,
            ..config
        };
        assert!(!jump_clears(2.0, &crawling));
    }

    #[test]
    fn test_autopilot_survives_hole_every_segment() {
        let config = GameConfig {
            hole_probability: 1.0,
            ..anchored()
        };
        let mut state = GameState::new(5, config).unwrap();
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..3000 {
            tick(&mut state, &input);
        }
        assert!(!state.is_game_over(), "fell in at z={}", state.player.position.z);
    }

    #[test]
    fn test_autopilot_tick_returns_with_feeble_gravity() {
        let config = GameConfig {
            gravity: -1e-9,
            hole_probability: 1.0,
            ..anchored()
        };
        let mut state = GameState::new(5, config).unwrap();
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..100 {
            tick(&mut state, &input);
        }
        assert!(state.player.is_jumping);
    }

    #[test]
    fn test_no_jump_in_scrolling_tunnel() {
        let state = GameState::new(3, GameConfig::default()).unwrap();
        assert!(!wants_jump(&state));
    }
}
