//! Tunnel segment pool
//!
//! A fixed ring of floor segments fakes an infinite tunnel: segments that
//! leave the window around the camera are moved to the other end instead of
//! being dropped and re-created.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Hole, TunnelSegment};
use crate::config::{GameConfig, HolePolicy, TunnelMotion};

#[derive(Debug, Clone)]
pub struct SegmentPool {
    segments: Vec<TunnelSegment>,
    rng: Pcg32,
}

impl SegmentPool {
    /// Lay out `num_segments` segments at `z = -i * segment_length`
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let segments = (0..config.num_segments)
            .map(|i| {
                let hole = if i < config.safe_start_segments {
                    None
                } else {
                    roll_hole(&mut rng, config)
                };
                TunnelSegment {
                    z_position: -(i as f32) * config.segment_length,
                    hole,
                }
            })
            .collect();

        Self { segments, rng }
    }

    /// Build a pool from explicit segments (tests, scripted layouts)
    pub fn from_segments(segments: Vec<TunnelSegment>, seed: u64) -> Self {
        Self {
            segments,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn segments(&self) -> &[TunnelSegment] {
        &self.segments
    }

    pub fn segments_mut(&mut self) -> &mut [TunnelSegment] {
        &mut self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn hole_count(&self) -> usize {
        self.segments.iter().filter(|s| s.has_hole()).count()
    }

    /// Move every segment one tick and recycle the ones that left the
    /// window. `camera_z` is the camera position for this tick.
    ///
    /// Returns the indices of recycled segments.
    pub fn advance(&mut self, config: &GameConfig, camera_z: f32) -> Vec<usize> {
        let window = config.window_length();
        let mut recycled = Vec::new();

        for (index, segment) in self.segments.iter_mut().enumerate() {
            let wrapped = match config.motion {
                TunnelMotion::Scrolling => {
                    segment.z_position -= config.move_speed;
                    if segment.z_position < camera_z - window {
                        segment.z_position += window;
                        true
                    } else {
                        false
                    }
                }
                TunnelMotion::Anchored => {
                    if segment.z_position > camera_z {
                        segment.z_position -= window;
                        true
                    } else {
                        false
                    }
                }
            };

            if wrapped {
                if config.hole_policy == HolePolicy::Reroll {
                    segment.hole = roll_hole(&mut self.rng, config);
                }
                log::debug!(
                    "Recycled segment {} to z={:.2} (hole: {})",
                    index,
                    segment.z_position,
                    segment.has_hole()
                );
                recycled.push(index);
            }
        }

        recycled
    }
}

/// Bernoulli draw for a hole; if one is cut, its lateral offset is uniform
/// over the positions that keep it inside the tunnel walls.
fn roll_hole(rng: &mut Pcg32, config: &GameConfig) -> Option<Hole> {
    if !rng.random_bool(config.hole_probability) {
        return None;
    }

    let width = config.hole_width();
    let max_offset = ((config.tunnel_width - width) / 2.0).max(0.0);
    let x_offset = if max_offset > 0.0 {
        rng.random_range(-max_offset..=max_offset)
    } else {
        0.0
    };

    Some(Hole {
        x_offset,
        width,
        length: config.hole_length(),
    })
}
