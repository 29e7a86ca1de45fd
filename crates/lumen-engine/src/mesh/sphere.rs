use std::f32::consts::PI;

use glam::Vec3;

use super::builder::{MeshBuilder, Vertex, wedge_angle};

const RADIUS: f32 = 0.5;

/// UV sphere with `bands` latitude bands and `wedges` longitude wedges.
///
/// Pole rows emit one triangle per wedge, every other row two.
pub(super) fn sphere(bands: u32, wedges: u32) -> Vec<f32> {
    let mut builder = MeshBuilder::with_vertex_capacity(6 * (wedges * (bands - 1)) as usize);

    let point = |band: u32, wedge: u32| {
        let normal = if band == 0 {
            Vec3::Y
        } else if band == bands {
            Vec3::NEG_Y
        } else {
            let phi = PI * band as f32 / bands as f32;
            let theta = wedge_angle(wedge, wedges);
            Vec3::new(phi.sin() * theta.sin(), phi.cos(), phi.sin() * theta.cos())
        };
        Vertex::new(normal * RADIUS, normal)
    };

    for band in 0..bands {
        for wedge in 0..wedges {
            builder.quad(
                point(band, wedge),
                point(band + 1, wedge),
                point(band + 1, wedge + 1),
                point(band, wedge + 1),
            );
        }
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{FLOATS_PER_VERTEX, testing};

    #[test]
    fn vertex_count() {
        for (bands, wedges) in [(2, 3), (5, 5), (8, 12)] {
            let data = sphere(bands, wedges);
            let expected = 6 * wedges * (bands - 1);
            assert_eq!(data.len(), expected as usize * FLOATS_PER_VERTEX, "{bands}x{wedges}");
        }
    }

    #[test]
    fn winds_outward_within_radius() {
        let data = sphere(6, 9);
        testing::assert_outward_winding(&data);
        testing::assert_unit_bounds(&data);
        for (p, _) in testing::vertices(&data) {
            assert!((p.length() - RADIUS).abs() < 1e-5);
        }
    }

    #[test]
    fn normals_point_away_from_center() {
        for (p, n) in testing::vertices(&sphere(4, 6)) {
            assert!(p.normalize().abs_diff_eq(n, 1e-5), "{p:?} vs {n:?}");
        }
    }
}
