//! Chase camera

use glam::Vec3;

use super::state::Player;
use crate::config::GameConfig;

/// Camera placed behind and above the player. It has no state of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
}

impl Camera {
    pub fn following(player: &Player, config: &GameConfig) -> Self {
        Self {
            position: Vec3::new(
                player.position.x,
                player.position.y + config.follow_height_y,
                player.position.z + config.follow_distance_z,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follows_behind_and_above() {
        let config = GameConfig::default();
        let mut player = Player::new(config.ground_level);
        player.position = Vec3::new(0.0, 2.5, -40.0);

        let camera = Camera::following(&player, &config);
        assert_eq!(camera.position, Vec3::new(0.0, 4.5, -35.0));
    }
}
