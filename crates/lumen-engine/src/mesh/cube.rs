use glam::Vec3;

use super::builder::{MeshBuilder, Vertex};

/// Face origin plus the two edge directions; `s × t` is the outward normal.
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::new(-0.5, -0.5, 0.5), Vec3::X, Vec3::Y),      // +Z
    (Vec3::new(0.5, -0.5, -0.5), Vec3::NEG_X, Vec3::Y),  // -Z
    (Vec3::new(0.5, -0.5, 0.5), Vec3::NEG_Z, Vec3::Y),   // +X
    (Vec3::new(-0.5, -0.5, -0.5), Vec3::Z, Vec3::Y),     // -X
    (Vec3::new(-0.5, 0.5, 0.5), Vec3::X, Vec3::NEG_Z),   // +Y
    (Vec3::new(-0.5, -0.5, -0.5), Vec3::X, Vec3::Z),     // -Y
];

pub(super) fn cube(divisions: u32) -> Vec<f32> {
    let n = divisions as usize;
    let mut builder = MeshBuilder::with_vertex_capacity(6 * n * n * 6);
    let step = 1.0 / divisions as f32;

    for (origin, s, t) in FACES {
        let normal = s.cross(t);
        let corner = |i: u32, j: u32| {
            Vertex::new(origin + s * (i as f32 * step) + t * (j as f32 * step), normal)
        };
        for i in 0..divisions {
            for j in 0..divisions {
                builder.quad(corner(i, j), corner(i + 1, j), corner(i + 1, j + 1), corner(i, j + 1));
            }
        }
    }

    builder.finish()
}
