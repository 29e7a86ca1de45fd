use glam::{Mat4, Vec4};

use super::PrimitiveKind;

/// Phong material. Colors are RGBA reflectances in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Material {
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Vec4::new(0.1, 0.1, 0.1, 1.0),
            diffuse: Vec4::new(0.8, 0.8, 0.8, 1.0),
            specular: Vec4::ONE,
            shininess: 16.0,
        }
    }
}

/// Scene-wide reflectance weights applied to every material term.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlobalCoefficients {
    pub ka: f32,
    pub kd: f32,
    pub ks: f32,
}

impl Default for GlobalCoefficients {
    fn default() -> Self {
        Self {
            ka: 0.5,
            kd: 0.5,
            ks: 0.5,
        }
    }
}

impl GlobalCoefficients {
    /// Material colors pre-multiplied by `(ka, kd, ks)`.
    #[inline]
    pub fn weigh(&self, material: &Material) -> (Vec4, Vec4, Vec4) {
        (
            material.ambient * self.ka,
            material.diffuse * self.kd,
            material.specular * self.ks,
        )
    }
}

/// One drawable instance of a primitive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SceneObject {
    /// Object-to-world transform.
    pub transform: Mat4,
    pub primitive: PrimitiveKind,
    pub material: Material,
}

impl SceneObject {
    #[inline]
    pub fn new(primitive: PrimitiveKind, transform: Mat4, material: Material) -> Self {
        Self {
            transform,
            primitive,
            material,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weigh_scales_each_term_by_its_coefficient() {
        let material = Material {
            ambient: Vec4::new(1.0, 0.5, 0.25, 1.0),
            diffuse: Vec4::splat(1.0),
            specular: Vec4::splat(0.5),
            shininess: 10.0,
        };
        let k = GlobalCoefficients { ka: 0.5, kd: 0.25, ks: 2.0 };

        let (a, d, s) = k.weigh(&material);
        assert_eq!(a, Vec4::new(0.5, 0.25, 0.125, 0.5));
        assert_eq!(d, Vec4::splat(0.25));
        assert_eq!(s, Vec4::splat(1.0));
    }
}
