use glam::Vec3;

use super::builder::{MeshBuilder, Vertex, cap, wedge_angle};

const RADIUS: f32 = 0.5;

/// Slope normal at angle `theta`; the side rises 1 over a run of 0.5.
fn slope_normal(theta: f32) -> Vec3 {
    Vec3::new(theta.sin(), RADIUS, theta.cos()).normalize()
}

/// Cone with its base at `y = -0.5` and apex at `y = 0.5`.
pub(super) fn cone(stacks: u32, wedges: u32) -> Vec<f32> {
    let per_part = 3 * wedges * (2 * stacks - 1);
    let mut builder = MeshBuilder::with_vertex_capacity(2 * per_part as usize);

    let point = |wedge: u32, stack: u32| {
        let theta = wedge_angle(wedge, wedges);
        let v = stack as f32 / stacks as f32;
        let r = (1.0 - v) * RADIUS;
        Vertex::new(
            Vec3::new(r * theta.sin(), -0.5 + v, r * theta.cos()),
            slope_normal(theta),
        )
    };

    for wedge in 0..wedges {
        for stack in 0..stacks {
            let mut apex_side = point(wedge + 1, stack + 1);
            if stack + 1 == stacks {
                // Apex has no single normal; use the wedge's middle.
                let mid = (wedge_angle(wedge, wedges) + wedge_angle(wedge + 1, wedges)) * 0.5;
                let mid = if wedge + 1 == wedges {
                    mid + std::f32::consts::PI
                } else {
                    mid
                };
                apex_side.normal = slope_normal(mid);
            }
            builder.quad(
                point(wedge, stack),
                point(wedge + 1, stack),
                apex_side,
                point(wedge, stack + 1),
            );
        }
    }

    cap(&mut builder, -0.5, RADIUS, stacks, wedges, false);

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{FLOATS_PER_VERTEX, testing};

    #[test]
    fn vertex_count() {
        for (stacks, wedges) in [(1, 3), (4, 6), (5, 5)] {
            let data = cone(stacks, wedges);
            let expected = 6 * wedges * (2 * stacks - 1);
            assert_eq!(data.len(), expected as usize * FLOATS_PER_VERTEX, "{stacks}x{wedges}");
        }
    }

    #[test]
    fn winds_outward() {
        let data = cone(3, 8);
        testing::assert_outward_winding(&data);
        testing::assert_unit_bounds(&data);
    }

    #[test]
    fn apex_is_a_single_point() {
        let tips: Vec<_> = testing::vertices(&cone(2, 5))
            .into_iter()
            .filter(|(p, _)| p.y == 0.5)
            .collect();
        assert_eq!(tips.len(), 5);
        assert!(tips.iter().all(|(p, _)| p.x == 0.0 && p.z == 0.0));
    }
}
