//! Player vs. hole detection
//!
//! Holes are tested by proximity along the travel axis, not by a true
//! footprint overlap. [`CollisionMode::Footprint`] adds the lateral test.

use super::state::{Hole, Player, TunnelSegment};
use crate::config::{CollisionMode, GameConfig};

/// Whether the player is laterally inside the hole's x extent
#[inline]
pub fn within_hole_width(player: &Player, hole: &Hole) -> bool {
    (player.position.x - hole.x_offset).abs() < hole.width / 2.0
}

/// Whether the player falls through this segment's hole on this tick
pub fn falls_into(player: &Player, segment: &TunnelSegment, config: &GameConfig) -> bool {
    let Some(hole) = &segment.hole else {
        return false;
    };

    let distance = (segment.z_position - player.position.z).abs();
    if distance >= config.hole_detection_radius {
        return false;
    }

    // Airborne players pass over the hole
    if player.height_above_ground(config.ground_level) >= config.fall_threshold {
        return false;
    }

    match config.collision {
        CollisionMode::AlongTrack => true,
        CollisionMode::Footprint => within_hole_width(player, hole),
    }
}

/// Index of the first segment whose hole swallows the player, if any
pub fn hole_under_player(
    player: &Player,
    segments: &[TunnelSegment],
    config: &GameConfig,
) -> Option<usize> {
    segments
        .iter()
        .position(|segment| falls_into(player, segment, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hole_at(z: f32, x_offset: f32) -> TunnelSegment {
        TunnelSegment {
            z_position: z,
            hole: Some(Hole {
                x_offset,
                width: 5.0 / 3.0,
                length: 10.0 / 3.0,
            }),
        }
    }

    fn player_at(z: f32, y: f32) -> Player {
        let mut player = Player::new(1.0);
        player.position.z = z;
        player.position.y = y;
        player
    }

    #[test]
    fn test_grounded_player_over_hole_falls() {
        let config = GameConfig::default();
        let segments = [hole_at(-20.0, 0.0)];
        assert_eq!(
            hole_under_player(&player_at(-20.5, 1.0), &segments, &config),
            Some(0)
        );
    }

    #[test]
    fn test_airborne_player_passes() {
        let config = GameConfig::default();
        let segments = [hole_at(-20.0, 0.0)];
        assert_eq!(
            hole_under_player(&player_at(-20.0, 1.5), &segments, &config),
            None
        );
        // Just below the threshold still falls
        assert_eq!(
            hole_under_player(&player_at(-20.0, 1.49), &segments, &config),
            Some(0)
        );
    }

    #[test]
    fn test_radius_is_exclusive() {
        let config = GameConfig::default();
        let segments = [hole_at(-20.0, 0.0)];
        assert_eq!(
            hole_under_player(&player_at(-21.0, 1.0), &segments, &config),
            None
        );
        assert_eq!(
            hole_under_player(&player_at(-20.99, 1.0), &segments, &config),
            Some(0)
        );
    }

    #[test]
    fn test_solid_segment_is_safe() {
        let config = GameConfig::default();
        let segments = [TunnelSegment {
            z_position: 0.0,
            hole: None,
        }];
        assert_eq!(
            hole_under_player(&player_at(0.0, 1.0), &segments, &config),
            None
        );
    }

    #[test]
    fn test_along_track_ignores_lateral_offset() {
        let config = GameConfig::default();
        let segments = [hole_at(-20.0, 1.6)];
        assert_eq!(
            hole_under_player(&player_at(-20.0, 1.0), &segments, &config),
            Some(0)
        );
    }

    #[test]
    fn test_footprint_respects_lateral_offset() {
        let config = GameConfig {
            collision: CollisionMode::Footprint,
            ..Default::default()
        };
        let offset = [hole_at(-20.0, 1.6)];
        assert_eq!(
            hole_under_player(&player_at(-20.0, 1.0), &offset, &config),
            None
        );
        let centered = [hole_at(-20.0, 0.5)];
        assert_eq!(
            hole_under_player(&player_at(-20.0, 1.0), &centered, &config),
            Some(0)
        );
    }

    #[test]
    fn test_picks_first_matching_segment() {
        let config = GameConfig::default();
        let segments = [hole_at(-40.0, 0.0), hole_at(-20.0, 0.0), hole_at(-20.5, 0.0)];
        assert_eq!(
            hole_under_player(&player_at(-20.2, 1.0), &segments, &config),
            Some(1)
        );
    }
}
