use crate::camera::CameraParameters;

use super::{GlobalCoefficients, Light, SceneError, SceneObject};

/// Capacity of the light array in the shader (`array<Light, 8>`).
pub const MAX_LIGHTS: usize = 8;

/// Immutable per-frame scene input.
///
/// Construction validates the light count against [`MAX_LIGHTS`], so a
/// snapshot that exists always fits the shader's light array.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    camera: CameraParameters,
    globals: GlobalCoefficients,
    lights: Vec<Light>,
    objects: Vec<SceneObject>,
}

impl SceneSnapshot {
    pub fn new(
        camera: CameraParameters,
        globals: GlobalCoefficients,
        lights: Vec<Light>,
        objects: Vec<SceneObject>,
    ) -> Result<Self, SceneError> {
        if lights.len() > MAX_LIGHTS {
            return Err(SceneError::TooManyLights {
                count: lights.len(),
                max: MAX_LIGHTS,
            });
        }
        if !camera.is_finite() {
            return Err(SceneError::NonFiniteCamera);
        }

        Ok(Self {
            camera,
            globals,
            lights,
            objects,
        })
    }

    /// Snapshot with a camera and nothing else in it.
    pub fn empty(camera: CameraParameters) -> Self {
        Self {
            camera,
            globals: GlobalCoefficients::default(),
            lights: Vec::new(),
            objects: Vec::new(),
        }
    }

    #[inline]
    pub fn camera(&self) -> &CameraParameters {
        &self.camera
    }

    #[inline]
    pub fn globals(&self) -> &GlobalCoefficients {
        &self.globals
    }

    /// Lights in input order.
    #[inline]
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Objects in input (draw) order.
    #[inline]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    fn lights(n: usize) -> Vec<Light> {
        (0..n)
            .map(|i| Light::directional(Vec3::new(i as f32, -1.0, 0.0), Vec4::ONE))
            .collect()
    }

    #[test]
    fn accepts_lights_up_to_capacity() {
        let snap = SceneSnapshot::new(
            CameraParameters::default(),
            GlobalCoefficients::default(),
            lights(MAX_LIGHTS),
            Vec::new(),
        )
        .unwrap();
        assert_eq!(snap.lights().len(), MAX_LIGHTS);
    }

    #[test]
    fn rejects_lights_over_capacity() {
        let err = SceneSnapshot::new(
            CameraParameters::default(),
            GlobalCoefficients::default(),
            lights(MAX_LIGHTS + 1),
            Vec::new(),
        )
        .unwrap_err();
        assert_eq!(err, SceneError::TooManyLights { count: MAX_LIGHTS + 1, max: MAX_LIGHTS });
        assert!(err.to_string().contains("at most 8"));
    }

    #[test]
    fn rejects_non_finite_camera() {
        let camera = CameraParameters {
            position: Vec3::new(f32::NAN, 0.0, 0.0),
            ..CameraParameters::default()
        };
        let err = SceneSnapshot::new(camera, GlobalCoefficients::default(), Vec::new(), Vec::new());
        assert_eq!(err, Err(SceneError::NonFiniteCamera));
    }

    #[test]
    fn preserves_input_order() {
        let input = lights(3);
        let snap = SceneSnapshot::new(
            CameraParameters::default(),
            GlobalCoefficients::default(),
            input.clone(),
            Vec::new(),
        )
        .unwrap();
        assert_eq!(snap.lights(), input.as_slice());
    }
}
