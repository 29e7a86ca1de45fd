//! Batched geometry: every primitive kind in one shared vertex buffer.
//!
//! Kinds are concatenated in [`PrimitiveKind::ALL`] order. Each kind's slice is
//! described by a [`PrimitiveBatch`] (first vertex, vertex count) so a draw
//! call only needs the kind to find its range.

mod batch;

pub use batch::{BatchTable, BatchedGeometry, PrimitiveBatch};
