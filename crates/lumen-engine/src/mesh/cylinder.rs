use glam::Vec3;

use super::builder::{MeshBuilder, Vertex, cap, wedge_angle};

const RADIUS: f32 = 0.5;

/// Open tube of `stacks` rows closed by two disks of `stacks` rings each.
pub(super) fn cylinder(stacks: u32, wedges: u32) -> Vec<f32> {
    let side = 6 * wedges * stacks;
    let caps = 2 * 3 * wedges * (2 * stacks - 1);
    let mut builder = MeshBuilder::with_vertex_capacity((side + caps) as usize);

    let point = |wedge: u32, stack: u32| {
        let theta = wedge_angle(wedge, wedges);
        let y = -0.5 + stack as f32 / stacks as f32;
        let normal = Vec3::new(theta.sin(), 0.0, theta.cos());
        Vertex::new(Vec3::new(RADIUS * normal.x, y, RADIUS * normal.z), normal)
    };

    for wedge in 0..wedges {
        for stack in 0..stacks {
            builder.quad(
                point(wedge, stack),
                point(wedge + 1, stack),
                point(wedge + 1, stack + 1),
                point(wedge, stack + 1),
            );
        }
    }

    cap(&mut builder, 0.5, RADIUS, stacks, wedges, true);
    cap(&mut builder, -0.5, RADIUS, stacks, wedges, false);

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{FLOATS_PER_VERTEX, testing};

    #[test]
    fn vertex_count() {
        for (stacks, wedges) in [(1, 3), (3, 8), (5, 5)] {
            let data = cylinder(stacks, wedges);
            let expected = 6 * wedges * stacks + 6 * wedges * (2 * stacks - 1);
            assert_eq!(data.len(), expected as usize * FLOATS_PER_VERTEX, "{stacks}x{wedges}");
        }
    }

    #[test]
    fn winds_outward() {
        let data = cylinder(3, 10);
        testing::assert_outward_winding(&data);
        testing::assert_unit_bounds(&data);
    }

    #[test]
    fn caps_sit_on_the_ends() {
        for (p, n) in testing::vertices(&cylinder(2, 6)) {
            if n == Vec3::Y {
                assert_eq!(p.y, 0.5);
            } else if n == Vec3::NEG_Y {
                assert_eq!(p.y, -0.5);
            } else {
                assert!((p.x * p.x + p.z * p.z - RADIUS * RADIUS).abs() < 1e-5);
            }
        }
    }
}
