//! Scene adapter: maps simulation state onto renderable instances
//!
//! The simulation knows nothing about meshes. This adapter owns the link
//! from each pool segment to its floor box and optional hole marker and
//! rebuilds the instance list every frame.

use glam::{Mat4, Quat, Vec3};

use super::vertex::{Instance, colors};
use crate::consts::PLAYER_RADIUS;
use crate::sim::{Camera, GameState};

/// Floor thickness and vertical placement
const FLOOR_THICKNESS: f32 = 0.1;
const FLOOR_Y: f32 = -0.5;
/// Hole markers sit just above the floor so they win the depth test
const HOLE_Y: f32 = -0.4;

/// Camera lens
pub const FOV_Y_DEGREES: f32 = 75.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshKind {
    Cube,
    Sphere,
}

/// One drawable object for this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderable {
    pub mesh: MeshKind,
    pub model: Mat4,
    pub color: [f32; 4],
}

impl Renderable {
    fn new(mesh: MeshKind, scale: Vec3, translation: Vec3, color: [f32; 4]) -> Self {
        Self {
            mesh,
            model: Mat4::from_scale_rotation_translation(scale, Quat::IDENTITY, translation),
            color,
        }
    }

    pub fn to_instance(&self) -> Instance {
        Instance {
            model: self.model.to_cols_array_2d(),
            color: self.color,
        }
    }
}

/// Render handles belonging to one pool segment (indices into the frame)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentHandles {
    pub floor: usize,
    pub hole: Option<usize>,
}

#[derive(Debug, Default)]
pub struct SceneAdapter {
    renderables: Vec<Renderable>,
    segment_handles: Vec<SegmentHandles>,
    player_handle: usize,
}

impl SceneAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the frame from the current game state
    pub fn sync(&mut self, state: &GameState) -> &[Renderable] {
        let config = &state.config;
        self.renderables.clear();
        self.segment_handles.clear();

        for segment in state.pool.segments() {
            let floor = self.push(Renderable::new(
                MeshKind::Cube,
                Vec3::new(config.tunnel_width, FLOOR_THICKNESS, config.segment_length),
                Vec3::new(0.0, FLOOR_Y, segment.z_position),
                colors::FLOOR,
            ));
            let hole = segment.hole.map(|hole| {
                self.push(Renderable::new(
                    MeshKind::Cube,
                    Vec3::new(hole.width, FLOOR_THICKNESS, hole.length),
                    Vec3::new(hole.x_offset, HOLE_Y, segment.z_position),
                    colors::HOLE,
                ))
            });
            self.segment_handles.push(SegmentHandles { floor, hole });
        }

        self.player_handle = self.push(Renderable::new(
            MeshKind::Sphere,
            Vec3::splat(PLAYER_RADIUS),
            state.player.position,
            colors::PLAYER,
        ));

        &self.renderables
    }

    fn push(&mut self, renderable: Renderable) -> usize {
        self.renderables.push(renderable);
        self.renderables.len() - 1
    }

    pub fn renderables(&self) -> &[Renderable] {
        &self.renderables
    }

    /// Handles for the segment at this pool index
    pub fn segment_handles(&self, index: usize) -> Option<SegmentHandles> {
        self.segment_handles.get(index).copied()
    }

    pub fn player(&self) -> Option<&Renderable> {
        self.renderables.get(self.player_handle)
    }

    /// Instances for one mesh, in frame order
    pub fn instances(&self, mesh: MeshKind) -> Vec<Instance> {
        self.renderables
            .iter()
            .filter(|r| r.mesh == mesh)
            .map(Renderable::to_instance)
            .collect()
    }
}

/// Combined view-projection for the chase camera looking down -Z
pub fn view_projection(camera: &Camera, aspect: f32) -> Mat4 {
    let view = Mat4::look_to_rh(camera.position, Vec3::NEG_Z, Vec3::Y);
    let proj = Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect.max(1e-3), Z_NEAR, Z_FAR);
    proj * view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{Hole, TunnelSegment};

    fn state_with_one_hole() -> GameState {
        let config = GameConfig {
            hole_probability: 0.0,
            ..Default::default()
        };
        let mut state = GameState::new(1, config).unwrap();
        state.pool.segments_mut()[2] = TunnelSegment {
            z_position: -20.0,
            hole: Some(Hole {
                x_offset: 1.0,
                width: 2.0,
                length: 3.0,
            }),
        };
        state
    }

    #[test]
    fn test_one_floor_per_segment_plus_hole_markers() {
        let state = state_with_one_hole();
        let mut scene = SceneAdapter::new();
        let frame = scene.sync(&state);

        // 5 floors + 1 hole + player
        assert_eq!(frame.len(), 7);
        assert_eq!(scene.instances(MeshKind::Cube).len(), 6);
        assert_eq!(scene.instances(MeshKind::Sphere).len(), 1);
    }

    #[test]
    fn test_segment_handles_point_at_segment_objects() {
        let state = state_with_one_hole();
        let mut scene = SceneAdapter::new();
        scene.sync(&state);

        let handles = scene.segment_handles(2).unwrap();
        let floor = scene.renderables()[handles.floor];
        assert_eq!(floor.color, colors::FLOOR);
        assert_eq!(floor.model.w_axis.z, -20.0);

        let hole = scene.renderables()[handles.hole.unwrap()];
        assert_eq!(hole.color, colors::HOLE);
        assert_eq!(hole.model.w_axis.x, 1.0);
        assert_eq!(hole.model.w_axis.y, HOLE_Y);

        assert_eq!(scene.segment_handles(0).unwrap().hole, None);
        assert_eq!(scene.segment_handles(99), None);
    }

    #[test]
    fn test_player_sphere_tracks_player() {
        let mut state = state_with_one_hole();
        state.player.position = Vec3::new(0.0, 2.0, -7.0);
        let mut scene = SceneAdapter::new();
        scene.sync(&state);

        let player = scene.player().unwrap();
        assert_eq!(player.mesh, MeshKind::Sphere);
        assert_eq!(player.model.w_axis.truncate(), Vec3::new(0.0, 2.0, -7.0));
    }

    #[test]
    fn test_sync_replaces_previous_frame() {
        let state = state_with_one_hole();
        let mut scene = SceneAdapter::new();
        scene.sync(&state);
        let len = scene.sync(&state).len();
        assert_eq!(len, 7);
    }

    #[test]
    fn test_player_is_in_front_of_camera() {
        let state = state_with_one_hole();
        let view_proj = view_projection(&state.camera, 16.0 / 9.0);
        let clip = view_proj * state.player.position.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(clip.w > 0.0);
        assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0);
        assert!((0.0..=1.0).contains(&ndc.z));
    }
}
