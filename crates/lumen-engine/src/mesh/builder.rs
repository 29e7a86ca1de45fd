use glam::Vec3;

use super::FLOATS_PER_VERTEX;

#[derive(Debug, Copy, Clone)]
pub(super) struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
}

impl Vertex {
    #[inline]
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }
}

/// Accumulates interleaved triangle data.
pub(super) struct MeshBuilder {
    data: Vec<f32>,
}

impl MeshBuilder {
    pub fn with_vertex_capacity(vertices: usize) -> Self {
        Self {
            data: Vec::with_capacity(vertices * FLOATS_PER_VERTEX),
        }
    }

    /// Pushes a triangle unless two of its corners coincide exactly.
    ///
    /// Pole and cap-center rows of the parametric shapes collapse one edge of
    /// their quads; those zero-area halves are dropped here.
    pub fn triangle(&mut self, a: Vertex, b: Vertex, c: Vertex) {
        if a.position == b.position || b.position == c.position || a.position == c.position {
            return;
        }
        for v in [a, b, c] {
            self.data.extend_from_slice(&v.position.to_array());
            self.data.extend_from_slice(&v.normal.to_array());
        }
    }

    /// Quad `a b c d` in counter-clockwise order, split along `a-c`.
    pub fn quad(&mut self, a: Vertex, b: Vertex, c: Vertex, d: Vertex) {
        self.triangle(a, b, c);
        self.triangle(a, c, d);
    }

    pub fn finish(self) -> Vec<f32> {
        self.data
    }
}

/// Disk at height `y` facing `+Y` (`up`) or `-Y`, split into `rings` rings
/// and `wedges` wedges.
pub(super) fn cap(builder: &mut MeshBuilder, y: f32, radius: f32, rings: u32, wedges: u32, up: bool) {
    let normal = if up { Vec3::Y } else { Vec3::NEG_Y };
    let point = |ring: u32, wedge: u32| {
        let rho = radius * ring as f32 / rings as f32;
        let theta = wedge_angle(wedge, wedges);
        Vertex::new(Vec3::new(rho * theta.sin(), y, rho * theta.cos()), normal)
    };

    for ring in 0..rings {
        for wedge in 0..wedges {
            if up {
                builder.quad(
                    point(ring, wedge),
                    point(ring + 1, wedge),
                    point(ring + 1, wedge + 1),
                    point(ring, wedge + 1),
                );
            } else {
                builder.quad(
                    point(ring, wedge),
                    point(ring, wedge + 1),
                    point(ring + 1, wedge + 1),
                    point(ring + 1, wedge),
                );
            }
        }
    }
}

/// Angle of wedge boundary `wedge`, wrapping so the seam is bit-identical.
#[inline]
pub(super) fn wedge_angle(wedge: u32, wedges: u32) -> f32 {
    std::f32::consts::TAU * (wedge % wedges) as f32 / wedges as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_collapsed_triangles() {
        let n = Vec3::Y;
        let mut b = MeshBuilder::with_vertex_capacity(6);
        let a = Vertex::new(Vec3::ZERO, n);
        b.quad(a, a, Vertex::new(Vec3::X, n), Vertex::new(Vec3::Z, n));
        assert_eq!(b.finish().len(), 3 * FLOATS_PER_VERTEX);
    }

    #[test]
    fn seam_wraps_to_zero() {
        assert_eq!(wedge_angle(7, 7), wedge_angle(0, 7));
    }
}
