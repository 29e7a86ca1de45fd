/// Procedural primitive shapes that share the batched vertex buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Cone,
    Sphere,
    Cube,
    Cylinder,
}

impl PrimitiveKind {
    /// Buffer order. Offsets in the batch table are computed in this order.
    pub const ALL: [PrimitiveKind; 4] = [
        PrimitiveKind::Cone,
        PrimitiveKind::Sphere,
        PrimitiveKind::Cube,
        PrimitiveKind::Cylinder,
    ];

    /// Position of this kind in [`PrimitiveKind::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PrimitiveKind::Cone => 0,
            PrimitiveKind::Sphere => 1,
            PrimitiveKind::Cube => 2,
            PrimitiveKind::Cylinder => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Cone => "cone",
            PrimitiveKind::Sphere => "sphere",
            PrimitiveKind::Cube => "cube",
            PrimitiveKind::Cylinder => "cylinder",
        }
    }
}
