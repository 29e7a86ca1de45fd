use crate::scene::MAX_LIGHTS;

use super::{GraphicsContext, UniformLocation, UniformValue};

/// Locations of one `lights[i]` element.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct LightSlots {
    pub kind: Option<UniformLocation>,
    pub position: Option<UniformLocation>,
    pub direction: Option<UniformLocation>,
    pub color: Option<UniformLocation>,
    pub function: Option<UniformLocation>,
    pub penumbra: Option<UniformLocation>,
    pub angle: Option<UniformLocation>,
}

/// Every uniform location the frame renderer writes, resolved once.
///
/// A name the program does not expose resolves to `None`; writes to it are
/// skipped every frame. Each such name is reported once, here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformTable {
    pub view: Option<UniformLocation>,
    pub projection: Option<UniformLocation>,
    pub camera_pos: Option<UniformLocation>,
    pub num_lights: Option<UniformLocation>,
    pub lights: [LightSlots; MAX_LIGHTS],

    pub model: Option<UniformLocation>,
    pub ambient: Option<UniformLocation>,
    pub diffuse: Option<UniformLocation>,
    pub specular: Option<UniformLocation>,
    pub shininess: Option<UniformLocation>,
}

impl UniformTable {
    pub fn resolve<G: GraphicsContext + ?Sized>(ctx: &G) -> Self {
        let mut missing = Vec::new();
        let mut find = |name: &str| {
            let loc = ctx.uniform_location(name);
            if loc.is_none() {
                missing.push(name.to_owned());
            }
            loc
        };

        let mut lights = [LightSlots::default(); MAX_LIGHTS];
        for (i, slots) in lights.iter_mut().enumerate() {
            *slots = LightSlots {
                kind: find(&format!("lights[{i}].type")),
                position: find(&format!("lights[{i}].position")),
                direction: find(&format!("lights[{i}].direction")),
                color: find(&format!("lights[{i}].lightColor")),
                function: find(&format!("lights[{i}].function")),
                penumbra: find(&format!("lights[{i}].penumbra")),
                angle: find(&format!("lights[{i}].angle")),
            };
        }

        let table = Self {
            view: find("view_matrix"),
            projection: find("projection_matrix"),
            camera_pos: find("camera_pos"),
            num_lights: find("num_lights"),
            lights,
            model: find("model_matrix"),
            ambient: find("ambient"),
            diffuse: find("diffuse"),
            specular: find("specular"),
            shininess: find("m_shininess"),
        };

        for name in &missing {
            log::warn!("uniform `{name}` not found in program; writes to it are skipped");
        }
        log::debug!("uniform table resolved ({} missing)", missing.len());

        table
    }
}

/// Writes `value` if the uniform exists.
#[inline]
pub(super) fn set<G: GraphicsContext + ?Sized>(
    ctx: &mut G,
    location: Option<UniformLocation>,
    value: UniformValue,
) {
    if let Some(location) = location {
        ctx.set_uniform(location, value);
    }
}
