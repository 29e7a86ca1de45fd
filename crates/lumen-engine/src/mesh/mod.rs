//! Procedural primitive meshes.
//!
//! Generators emit non-indexed triangle lists as flat `f32` sequences with
//! [`FLOATS_PER_VERTEX`] floats per vertex: position (xyz) then normal (xyz).
//! All shapes fit the unit box `[-0.5, 0.5]³`, wind counter-clockwise when
//! seen from outside, and carry smooth per-vertex normals.
//!
//! Output must be deterministic for identical parameters; the batch table
//! relies on it.

mod builder;
mod cone;
mod cube;
mod cylinder;
mod sphere;

use crate::scene::PrimitiveKind;

/// Interleaved layout: 3 position floats followed by 3 normal floats.
pub const FLOATS_PER_VERTEX: usize = 6;

/// Tessellation detail shared by all primitives.
///
/// Meaning per shape:
/// - cube: `param1` quads per face edge
/// - sphere: `param1` latitude bands, `param2` longitude wedges
/// - cylinder / cone: `param1` stacks (and cap rings), `param2` wedges
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TessellationParams {
    pub param1: u32,
    pub param2: u32,
}

impl TessellationParams {
    #[inline]
    pub const fn new(param1: u32, param2: u32) -> Self {
        Self { param1, param2 }
    }

    /// Raises each parameter to the smallest value `kind` can be built with.
    pub fn clamped_for(self, kind: PrimitiveKind) -> Self {
        let (min1, min2) = match kind {
            PrimitiveKind::Cube => (1, 1),
            PrimitiveKind::Sphere => (2, 3),
            PrimitiveKind::Cone | PrimitiveKind::Cylinder => (1, 3),
        };
        Self {
            param1: self.param1.max(min1),
            param2: self.param2.max(min2),
        }
    }
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            param1: 5,
            param2: 5,
        }
    }
}

/// Source of per-kind vertex data for the batched buffer.
pub trait MeshGenerator {
    /// Returns a flat triangle list with [`FLOATS_PER_VERTEX`] floats per vertex.
    fn generate(&self, kind: PrimitiveKind, params: TessellationParams) -> Vec<f32>;
}

/// Built-in generator for the four primitive kinds.
#[derive(Debug, Default, Copy, Clone)]
pub struct ProceduralMeshes;

impl MeshGenerator for ProceduralMeshes {
    fn generate(&self, kind: PrimitiveKind, params: TessellationParams) -> Vec<f32> {
        let p = params.clamped_for(kind);
        match kind {
            PrimitiveKind::Cone => cone::cone(p.param1, p.param2),
            PrimitiveKind::Sphere => sphere::sphere(p.param1, p.param2),
            PrimitiveKind::Cube => cube::cube(p.param1),
            PrimitiveKind::Cylinder => cylinder::cylinder(p.param1, p.param2),
        }
    }
}

/// Shared checks for the per-shape tests.
#[cfg(test)]
pub(crate) mod testing {
    use glam::Vec3;

    use super::FLOATS_PER_VERTEX;

    pub(crate) fn vertices(data: &[f32]) -> Vec<(Vec3, Vec3)> {
        assert_eq!(data.len() % FLOATS_PER_VERTEX, 0, "partial vertex in mesh data");
        data.chunks_exact(FLOATS_PER_VERTEX)
            .map(|v| (Vec3::new(v[0], v[1], v[2]), Vec3::new(v[3], v[4], v[5])))
            .collect()
    }

    /// Every triangle must face the way its vertex normals point.
    pub(crate) fn assert_outward_winding(data: &[f32]) {
        let verts = vertices(data);
        assert_eq!(verts.len() % 3, 0, "vertex count is not a whole number of triangles");

        for (t, tri) in verts.chunks_exact(3).enumerate() {
            let face = (tri[1].0 - tri[0].0).cross(tri[2].0 - tri[0].0);
            assert!(face.length() > 1e-9, "triangle {t} is degenerate: {tri:?}");
            let avg = tri[0].1 + tri[1].1 + tri[2].1;
            assert!(face.dot(avg) > 0.0, "triangle {t} winds against its normals: {tri:?}");
        }
    }

    pub(crate) fn assert_unit_bounds(data: &[f32]) {
        for (p, n) in vertices(data) {
            assert!(p.abs().max_element() <= 0.5 + 1e-5, "position {p:?} outside unit box");
            assert!((n.length() - 1.0).abs() < 1e-4, "normal {n:?} is not unit length");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_per_kind_minimums() {
        let low = TessellationParams::new(0, 0);
        assert_eq!(low.clamped_for(PrimitiveKind::Cube), TessellationParams::new(1, 1));
        assert_eq!(low.clamped_for(PrimitiveKind::Sphere), TessellationParams::new(2, 3));
        assert_eq!(low.clamped_for(PrimitiveKind::Cone), TessellationParams::new(1, 3));
        assert_eq!(low.clamped_for(PrimitiveKind::Cylinder), TessellationParams::new(1, 3));
    }

    #[test]
    fn generator_is_deterministic() {
        let params = TessellationParams::new(4, 7);
        for kind in PrimitiveKind::ALL {
            assert_eq!(
                ProceduralMeshes.generate(kind, params),
                ProceduralMeshes.generate(kind, params),
                "{}",
                kind.name()
            );
        }
    }

    #[test]
    fn every_kind_is_well_formed_at_minimum_detail() {
        for kind in PrimitiveKind::ALL {
            let data = ProceduralMeshes.generate(kind, TessellationParams::new(0, 0));
            assert!(!data.is_empty(), "{}", kind.name());
            testing::assert_outward_winding(&data);
            testing::assert_unit_bounds(&data);
        }
    }
}
