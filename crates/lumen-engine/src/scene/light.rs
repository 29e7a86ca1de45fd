use glam::{Vec3, Vec4};

/// Light type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LightKind {
    Directional,
    Point,
    Spot,
}

impl LightKind {
    /// Integer tag the fragment shader switches on.
    ///
    /// Must stay bit-exact with `LIGHT_DIRECTIONAL`, `LIGHT_SPOT` and
    /// `LIGHT_POINT` in `phong.wgsl`.
    #[inline]
    pub const fn shader_tag(self) -> i32 {
        match self {
            LightKind::Directional => 0,
            LightKind::Spot => 1,
            LightKind::Point => 2,
        }
    }
}

/// Distance attenuation `1 / (constant + linear·d + quadratic·d²)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Attenuation {
    pub const NONE: Self = Self {
        constant: 1.0,
        linear: 0.0,
        quadratic: 0.0,
    };

    #[inline]
    pub const fn new(constant: f32, linear: f32, quadratic: f32) -> Self {
        Self {
            constant,
            linear,
            quadratic,
        }
    }

    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.constant, self.linear, self.quadratic)
    }
}

impl Default for Attenuation {
    fn default() -> Self {
        Self::NONE
    }
}

/// A scene light.
///
/// Position and direction are homogeneous world-space vectors; which of them
/// matters depends on `kind`. `angle` and `penumbra` (radians) are only read
/// for spot lights.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub position: Vec4,
    pub direction: Vec4,
    pub color: Vec4,
    pub attenuation: Attenuation,
    pub angle: f32,
    pub penumbra: f32,
}

impl Light {
    pub fn directional(direction: Vec3, color: Vec4) -> Self {
        Self {
            kind: LightKind::Directional,
            position: Vec4::W,
            direction: direction.extend(0.0),
            color,
            attenuation: Attenuation::NONE,
            angle: 0.0,
            penumbra: 0.0,
        }
    }

    pub fn point(position: Vec3, color: Vec4, attenuation: Attenuation) -> Self {
        Self {
            kind: LightKind::Point,
            position: position.extend(1.0),
            direction: Vec4::ZERO,
            color,
            attenuation,
            angle: 0.0,
            penumbra: 0.0,
        }
    }

    pub fn spot(
        position: Vec3,
        direction: Vec3,
        color: Vec4,
        attenuation: Attenuation,
        angle: f32,
        penumbra: f32,
    ) -> Self {
        Self {
            kind: LightKind::Spot,
            position: position.extend(1.0),
            direction: direction.extend(0.0),
            color,
            attenuation,
            angle,
            penumbra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_tags_are_stable() {
        assert_eq!(LightKind::Directional.shader_tag(), 0);
        assert_eq!(LightKind::Spot.shader_tag(), 1);
        assert_eq!(LightKind::Point.shader_tag(), 2);
    }

    #[test]
    fn constructors_set_homogeneous_w() {
        let d = Light::directional(Vec3::NEG_Y, Vec4::ONE);
        assert_eq!(d.direction.w, 0.0);

        let p = Light::point(Vec3::new(1.0, 2.0, 3.0), Vec4::ONE, Attenuation::NONE);
        assert_eq!(p.position, Vec4::new(1.0, 2.0, 3.0, 1.0));

        let s = Light::spot(Vec3::Y, Vec3::NEG_Y, Vec4::ONE, Attenuation::new(1.0, 0.1, 0.01), 0.5, 0.1);
        assert_eq!(s.kind, LightKind::Spot);
        assert_eq!(s.attenuation.to_vec3(), Vec3::new(1.0, 0.1, 0.01));
    }
}
