use glam::Vec3;

use super::transform::aspect_ratio;

/// Abstract camera description as it comes out of a scene.
///
/// `look` does not need to be normalized and `up` does not need to be
/// orthogonal to it. They must not be parallel; the look-at basis is
/// undefined in that case and the scene loader is expected to reject such
/// cameras before they reach the renderer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraParameters {
    pub position: Vec3,
    pub look: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub height_angle: f32,
    pub focal_length: f32,
    /// Depth-of-field aperture. Carried through, never used by the rasterizer.
    pub aperture: f32,
}

impl CameraParameters {
    /// Camera at `position` looking at `target`.
    pub fn looking_at(position: Vec3, target: Vec3, up: Vec3, height_angle: f32) -> Self {
        Self {
            position,
            look: target - position,
            up,
            height_angle,
            focal_length: 0.0,
            aperture: 0.0,
        }
    }

    /// Returns `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.look.is_finite()
            && self.up.is_finite()
            && self.height_angle.is_finite()
            && self.focal_length.is_finite()
            && self.aperture.is_finite()
    }
}

impl Default for CameraParameters {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            look: Vec3::NEG_Z,
            up: Vec3::Y,
            height_angle: std::f32::consts::FRAC_PI_4,
            focal_length: 0.0,
            aperture: 0.0,
        }
    }
}

/// Near/far clip plane distances.
///
/// Invariant expected by the projection: `0 < near < far`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClipPlanes {
    pub near: f32,
    pub far: f32,
}

impl ClipPlanes {
    #[inline]
    pub const fn new(near: f32, far: f32) -> Self {
        Self { near, far }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.near > 0.0 && self.near < self.far && self.far.is_finite()
    }
}

impl Default for ClipPlanes {
    fn default() -> Self {
        Self { near: 0.1, far: 100.0 }
    }
}

/// Render target size in physical pixels (device pixel ratio already applied).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `true` when both dimensions are non-zero.
    #[inline]
    pub fn is_drawable(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Width over height. Height must be non-zero.
    #[inline]
    pub fn aspect_ratio(self) -> f32 {
        aspect_ratio(self.width, self.height)
    }
}

/// Full set of projection inputs for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewFrustum {
    pub near: f32,
    pub far: f32,
    pub aspect: f32,
}

impl ViewFrustum {
    #[inline]
    pub fn new(planes: ClipPlanes, screen: ScreenSize) -> Self {
        Self {
            near: planes.near,
            far: planes.far,
            aspect: screen.aspect_ratio(),
        }
    }
}
