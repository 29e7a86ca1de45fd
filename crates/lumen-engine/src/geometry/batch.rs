use std::ops::Range;

use crate::mesh::{FLOATS_PER_VERTEX, MeshGenerator, TessellationParams};
use crate::scene::PrimitiveKind;

/// Vertex range of one primitive kind inside the shared buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PrimitiveBatch {
    pub kind: PrimitiveKind,
    /// First vertex (not float) of the kind.
    pub offset: u32,
    pub count: u32,
}

impl PrimitiveBatch {
    #[inline]
    pub fn range(&self) -> Range<u32> {
        self.offset..self.offset + self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Offset table for all four kinds, indexed by [`PrimitiveKind::index`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BatchTable {
    batches: [PrimitiveBatch; 4],
}

impl BatchTable {
    #[inline]
    pub fn get(&self, kind: PrimitiveKind) -> PrimitiveBatch {
        self.batches[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrimitiveBatch> {
        self.batches.iter()
    }

    pub fn total_vertices(&self) -> u32 {
        self.batches.iter().map(|b| b.count).sum()
    }
}

/// CPU side of the shared vertex buffer plus its offset table.
///
/// Built wholesale; there is no partial update. The table is derived from the
/// same pass that fills `vertices`, so the two never disagree.
#[derive(Debug, Clone)]
pub struct BatchedGeometry {
    vertices: Vec<f32>,
    table: BatchTable,
    params: TessellationParams,
}

impl BatchedGeometry {
    pub fn build(generator: &dyn MeshGenerator, params: TessellationParams) -> Self {
        let mut vertices = Vec::new();
        let mut batches = [PrimitiveBatch {
            kind: PrimitiveKind::Cone,
            offset: 0,
            count: 0,
        }; 4];

        for kind in PrimitiveKind::ALL {
            let mut data = generator.generate(kind, params);

            let remainder = data.len() % FLOATS_PER_VERTEX;
            if remainder != 0 {
                log::warn!(
                    "{} generator returned {} floats, dropping trailing {}",
                    kind.name(),
                    data.len(),
                    remainder
                );
                data.truncate(data.len() - remainder);
            }

            let offset = (vertices.len() / FLOATS_PER_VERTEX) as u32;
            let count = (data.len() / FLOATS_PER_VERTEX) as u32;
            vertices.extend_from_slice(&data);

            log::debug!("geometry batch {}: offset {offset}, count {count}", kind.name());
            batches[kind.index()] = PrimitiveBatch {
                kind,
                offset,
                count,
            };
        }

        Self {
            vertices,
            table: BatchTable { batches },
            params,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    #[inline]
    pub fn table(&self) -> &BatchTable {
        &self.table
    }

    #[inline]
    pub fn batch(&self, kind: PrimitiveKind) -> PrimitiveBatch {
        self.table.get(kind)
    }

    /// Tessellation the buffer was built with.
    #[inline]
    pub fn params(&self) -> TessellationParams {
        self.params
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        (self.vertices.len() / FLOATS_PER_VERTEX) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::ProceduralMeshes;

    /// Emits `sizes[kind]` floats of value `kind.index()`.
    struct FixedSizes([usize; 4]);

    impl MeshGenerator for FixedSizes {
        fn generate(&self, kind: PrimitiveKind, _: TessellationParams) -> Vec<f32> {
            vec![kind.index() as f32; self.0[kind.index()]]
        }
    }

    // ── layout ─────────────────────────────────────────────────────────────

    #[test]
    fn offsets_follow_fixed_kind_order() {
        let geo = BatchedGeometry::build(&FixedSizes([18, 36, 6, 12]), TessellationParams::default());
        let t = geo.table();
        assert_eq!(t.get(PrimitiveKind::Cone).range(), 0..3);
        assert_eq!(t.get(PrimitiveKind::Sphere).range(), 3..9);
        assert_eq!(t.get(PrimitiveKind::Cube).range(), 9..10);
        assert_eq!(t.get(PrimitiveKind::Cylinder).range(), 10..12);
        assert_eq!(geo.vertex_count(), 12);
    }

    #[test]
    fn batches_tile_the_buffer() {
        let geo = BatchedGeometry::build(&ProceduralMeshes, TessellationParams::new(4, 9));
        let mut next = 0;
        for batch in geo.table().iter() {
            assert_eq!(batch.offset, next, "{} leaves a gap", batch.kind.name());
            assert!(!batch.is_empty());
            next = batch.range().end;
        }
        assert_eq!(next, geo.vertex_count());
        assert_eq!(geo.table().total_vertices(), geo.vertex_count());
    }

    #[test]
    fn batch_slices_hold_their_kind() {
        let geo = BatchedGeometry::build(&FixedSizes([6, 12, 18, 24]), TessellationParams::default());
        for kind in PrimitiveKind::ALL {
            let r = geo.batch(kind).range();
            let floats = &geo.vertices()[r.start as usize * FLOATS_PER_VERTEX..r.end as usize * FLOATS_PER_VERTEX];
            assert!(floats.iter().all(|&f| f == kind.index() as f32), "{}", kind.name());
        }
    }

    // ── edge cases ─────────────────────────────────────────────────────────

    #[test]
    fn partial_vertices_are_truncated() {
        let geo = BatchedGeometry::build(&FixedSizes([7, 6, 0, 11]), TessellationParams::default());
        assert_eq!(geo.batch(PrimitiveKind::Cone).count, 1);
        assert_eq!(geo.batch(PrimitiveKind::Cube).range(), 2..2);
        assert_eq!(geo.batch(PrimitiveKind::Cylinder).range(), 2..3);
        assert_eq!(geo.vertices().len(), 3 * FLOATS_PER_VERTEX);
    }

    #[test]
    fn rebuild_is_idempotent() {
        let params = TessellationParams::new(3, 7);
        let a = BatchedGeometry::build(&ProceduralMeshes, params);
        let b = BatchedGeometry::build(&ProceduralMeshes, params);
        assert_eq!(a.table(), b.table());
        assert_eq!(a.vertices(), b.vertices());
        assert_eq!(a.params(), params);
    }
}
