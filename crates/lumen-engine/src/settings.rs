//! User-adjustable render settings.

use crate::camera::ClipPlanes;
use crate::mesh::TessellationParams;

/// Settings the frame renderer reacts to.
///
/// Clip planes are read every frame. A tessellation change rebuilds the
/// batched geometry (see `FrameRenderer::apply_settings`).
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct RenderSettings {
    pub clip_planes: ClipPlanes,
    pub tessellation: TessellationParams,
}

impl RenderSettings {
    pub fn with_tessellation(mut self, param1: u32, param2: u32) -> Self {
        self.tessellation = TessellationParams::new(param1, param2);
        self
    }

    pub fn with_clip_planes(mut self, near: f32, far: f32) -> Self {
        self.clip_planes = ClipPlanes::new(near, far);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = RenderSettings::default();
        assert_eq!(s.clip_planes, ClipPlanes::new(0.1, 100.0));
        assert_eq!(s.tessellation, TessellationParams::new(5, 5));
    }

    #[test]
    fn builders_override_one_field() {
        let s = RenderSettings::default().with_tessellation(8, 12);
        assert_eq!(s.tessellation, TessellationParams::new(8, 12));
        assert_eq!(s.clip_planes, ClipPlanes::default());
    }
}
