//! Mesh generation for 3D primitives
//!
//! All meshes are unindexed triangle lists centered on the origin.

use glam::Vec3;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Unit cube spanning -0.5..0.5 on every axis
pub fn cube() -> Vec<Vertex> {
    // (normal, four corners counter-clockwise seen from outside)
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        (
            [0.0, 0.0, 1.0],
            [
                [-0.5, -0.5, 0.5],
                [0.5, -0.5, 0.5],
                [0.5, 0.5, 0.5],
                [-0.5, 0.5, 0.5],
            ],
        ),
        (
            [0.0, 0.0, -1.0],
            [
                [0.5, -0.5, -0.5],
                [-0.5, -0.5, -0.5],
                [-0.5, 0.5, -0.5],
                [0.5, 0.5, -0.5],
            ],
        ),
        (
            [-1.0, 0.0, 0.0],
            [
                [-0.5, -0.5, -0.5],
                [-0.5, -0.5, 0.5],
                [-0.5, 0.5, 0.5],
                [-0.5, 0.5, -0.5],
            ],
        ),
        (
            [1.0, 0.0, 0.0],
            [
                [0.5, -0.5, 0.5],
                [0.5, -0.5, -0.5],
                [0.5, 0.5, -0.5],
                [0.5, 0.5, 0.5],
            ],
        ),
        (
            [0.0, 1.0, 0.0],
            [
                [-0.5, 0.5, 0.5],
                [0.5, 0.5, 0.5],
                [0.5, 0.5, -0.5],
                [-0.5, 0.5, -0.5],
            ],
        ),
        (
            [0.0, -1.0, 0.0],
            [
                [-0.5, -0.5, -0.5],
                [0.5, -0.5, -0.5],
                [0.5, -0.5, 0.5],
                [-0.5, -0.5, 0.5],
            ],
        ),
    ];

    let mut vertices = Vec::with_capacity(36);
    for (normal, [a, b, c, d]) in faces {
        // Two triangles per face
        for position in [a, b, c, a, c, d] {
            vertices.push(Vertex::new(position, normal));
        }
    }
    vertices
}

/// Unit-radius UV sphere
pub fn sphere(segments: u32, rings: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let rings = rings.max(2);

    let point = |ring: u32, segment: u32| -> Vec3 {
        let phi = ring as f32 / rings as f32 * PI;
        let theta = segment as f32 / segments as f32 * 2.0 * PI;
        Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin())
    };
    // On a unit sphere the normal is the position
    let vertex = |p: Vec3| Vertex::new(p.to_array(), p.to_array());

    let mut vertices = Vec::with_capacity((segments * rings * 6) as usize);

    for ring in 0..rings {
        for segment in 0..segments {
            let top1 = point(ring, segment);
            let top2 = point(ring, segment + 1);
            let bottom1 = point(ring + 1, segment);
            let bottom2 = point(ring + 1, segment + 1);

            // Two triangles per quad
            vertices.push(vertex(top1));
            vertices.push(vertex(top2));
            vertices.push(vertex(bottom1));

            vertices.push(vertex(top2));
            vertices.push(vertex(bottom2));
            vertices.push(vertex(bottom1));
        }
    }

    vertices
}
