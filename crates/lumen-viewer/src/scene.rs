//! Fixed demo scene: one of each primitive under three kinds of light.

use std::f32::consts::{FRAC_PI_4, FRAC_PI_6};

use glam::{Mat4, Quat, Vec3, Vec4};
use lumen_engine::camera::CameraParameters;
use lumen_engine::scene::{
    Attenuation, GlobalCoefficients, Light, Material, PrimitiveKind, SceneError, SceneObject,
    SceneSnapshot,
};

fn material(r: f32, g: f32, b: f32, shininess: f32) -> Material {
    let diffuse = Vec4::new(r, g, b, 1.0);
    Material {
        ambient: diffuse * 0.3,
        diffuse,
        specular: Vec4::splat(0.8),
        shininess,
    }
}

pub fn demo_scene() -> Result<SceneSnapshot, SceneError> {
    let camera = CameraParameters::looking_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y, FRAC_PI_4);

    let lights = vec![
        Light::directional(Vec3::new(-0.5, -1.0, -0.7), Vec4::new(0.6, 0.6, 0.6, 1.0)),
        Light::point(
            Vec3::new(2.5, 2.0, 2.5),
            Vec4::new(0.9, 0.8, 0.7, 1.0),
            Attenuation::new(0.8, 0.05, 0.01),
        ),
        Light::spot(
            Vec3::new(-2.0, 3.0, 2.0),
            Vec3::new(0.6, -1.0, -0.6),
            Vec4::new(0.4, 0.5, 1.0, 1.0),
            Attenuation::new(1.0, 0.0, 0.02),
            FRAC_PI_6,
            FRAC_PI_6 / 3.0,
        ),
    ];

    let tilt = Quat::from_euler(glam::EulerRot::XYZ, 0.4, 0.6, 0.0);
    let place = |x: f32, y: f32| Mat4::from_rotation_translation(tilt, Vec3::new(x, y, 0.0));

    let objects = vec![
        SceneObject::new(PrimitiveKind::Cone, place(-1.2, 1.0), material(0.9, 0.3, 0.2, 12.0)),
        SceneObject::new(PrimitiveKind::Sphere, place(1.2, 1.0), material(0.2, 0.6, 0.9, 40.0)),
        SceneObject::new(PrimitiveKind::Cube, place(-1.2, -1.0), material(0.3, 0.8, 0.3, 8.0)),
        SceneObject::new(
            PrimitiveKind::Cylinder,
            place(1.2, -1.0) * Mat4::from_scale(Vec3::new(0.8, 1.2, 0.8)),
            material(0.9, 0.8, 0.2, 20.0),
        ),
    ];

    let globals = GlobalCoefficients {
        ka: 0.5,
        kd: 0.5,
        ks: 0.5,
    };

    SceneSnapshot::new(camera, globals, lights, objects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_scene_is_valid() {
        let scene = demo_scene().expect("demo scene within light capacity");
        assert_eq!(scene.lights().len(), 3);
        let kinds: Vec<_> = scene.objects().iter().map(|o| o.primitive).collect();
        assert_eq!(kinds, PrimitiveKind::ALL.to_vec());
    }
}
