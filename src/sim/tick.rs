//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::autopilot;
use super::camera::Camera;
use super::collision::hole_under_player;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump was requested since the last tick (space)
    pub jump: bool,
    /// Idle/demo mode - the autopilot decides when to jump
    pub autopilot: bool,
}

/// Advance the game state by one tick.
///
/// Order: input, player physics, segment scroll/recycle, hole check, camera.
/// After game over this is a no-op.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.events.clear();

    if input.jump || (input.autopilot && autopilot::wants_jump(state)) {
        state.request_jump();
    }

    state.time_ticks += 1;

    let config = &state.config;
    if state.player.integrate(config) {
        log::trace!("Landed at z={:.2}", state.player.position.z);
        state.events.push(GameEvent::Landed);
    }
    state.distance += config.move_speed;

    let camera = Camera::following(&state.player, config);

    for index in state.pool.advance(config, camera.position.z) {
        state.events.push(GameEvent::SegmentRecycled { index });
    }

    if let Some(index) = hole_under_player(&state.player, state.pool.segments(), config) {
        log::info!(
            "Fell into hole of segment {} at z={:.2} after {} ticks",
            index,
            state.player.position.z,
            state.time_ticks
        );
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::FellIntoHole { index });
    }

    state.camera = camera;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, TunnelMotion};
    use crate::sim::state::Hole;

    fn solid_config() -> GameConfig {
        GameConfig {
            hole_probability: 0.0,
            ..Default::default()
        }
    }

    fn jump() -> TickInput {
        TickInput {
            jump: true,
            ..Default::default()
        }
    }

    fn place_hole(state: &mut GameState, index: usize, z: f32) {
        let segment = &mut state.pool.segments_mut()[index];
        segment.z_position = z;
        segment.hole = Some(Hole {
            x_offset: 0.0,
            width: 1.0,
            length: 1.0,
        });
    }

    #[test]
    fn test_grounded_player_stays_on_ground() {
        let mut state = GameState::new(1, solid_config()).unwrap();
        for _ in 0..500 {
            tick(&mut state, &TickInput::default());
            assert_eq!(state.player.position.y, state.config.ground_level);
            assert!(!state.player.is_jumping);
        }
    }

    #[test]
    fn test_jump_rises_then_lands() {
        let mut state = GameState::new(1, solid_config()).unwrap();
        let ground = state.config.ground_level;

        tick(&mut state, &jump());
        assert!(state.player.is_jumping);
        assert!(state.player.position.y > ground);
        assert_eq!(state.events, vec![GameEvent::Jumped]);

        let mut landed = false;
        for _ in 0..200 {
            tick(&mut state, &TickInput::default());
            assert!(state.player.position.y >= ground);
            if state.events.contains(&GameEvent::Landed) {
                landed = true;
                break;
            }
        }
        assert!(landed);
        assert!(!state.player.is_jumping);
        assert_eq!(state.player.position.y, ground);
    }

    #[test]
    fn test_jump_while_airborne_is_ignored() {
        let mut state = GameState::new(1, solid_config()).unwrap();
        tick(&mut state, &jump());
        tick(&mut state, &TickInput::default());

        let velocity = state.player.vertical_velocity;
        assert!(!state.request_jump());
        assert_eq!(state.player.vertical_velocity, velocity);

        // Holding jump through the tick does not restart the arc
        tick(&mut state, &jump());
        assert!(!state.events.contains(&GameEvent::Jumped));
        assert!((state.player.vertical_velocity - (velocity + state.config.gravity)).abs() < 1e-6);
    }

    #[test]
    fn test_camera_follows_player() {
        let mut state = GameState::new(1, solid_config()).unwrap();
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        let p = state.player.position;
        assert!((state.camera.position.z - (p.z + 5.0)).abs() < 1e-5);
        assert!((state.camera.position.y - (p.y + 2.0)).abs() < 1e-5);
    }

    #[test]
    fn test_hole_at_player_ends_game() {
        let mut state = GameState::new(1, solid_config()).unwrap();
        // Segments scroll with the player, so put the hole where the
        // player will be after this tick.
        let z = -state.config.move_speed * 2.0;
        place_hole(&mut state, 1, z);

        tick(&mut state, &TickInput::default());
        assert!(state.is_game_over());
        assert!(state.events.contains(&GameEvent::FellIntoHole { index: 1 }));
    }

    #[test]
    fn test_airborne_player_crosses_hole() {
        let config = GameConfig {
            motion: TunnelMotion::Anchored,
            ..solid_config()
        };
        let mut state = GameState::new(1, config).unwrap();
        place_hole(&mut state, 1, -2.0);

        tick(&mut state, &jump());
        for _ in 0..60 {
            tick(&mut state, &TickInput::default());
        }
        assert!(!state.is_game_over());
        assert!(state.player.position.z < -3.0);
    }

    #[test]
    fn test_game_over_is_a_halt() {
        let mut state = GameState::new(1, solid_config()).unwrap();
        let z = -state.config.move_speed * 2.0;
        place_hole(&mut state, 1, z);
        tick(&mut state, &TickInput::default());
        assert!(state.is_game_over());

        let player = state.player.clone();
        let segments = state.pool.segments().to_vec();
        let ticks = state.time_ticks;
        for _ in 0..100 {
            tick(&mut state, &jump());
        }
        assert_eq!(state.player, player);
        assert_eq!(state.pool.segments(), segments.as_slice());
        assert_eq!(state.time_ticks, ticks);
        assert!(state.is_game_over());
    }

    #[test]
    fn test_determinism() {
        let config = GameConfig {
            motion: TunnelMotion::Anchored,
            ..Default::default()
        };
        let mut state1 = GameState::new(99999, config.clone()).unwrap();
        let mut state2 = GameState::new(99999, config).unwrap();

        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..2000 {
            tick(&mut state1, &input);
            tick(&mut state2, &input);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.player, state2.player);
        assert_eq!(state1.pool.segments(), state2.pool.segments());
        assert_eq!(state1.phase, state2.phase);
    }
}
