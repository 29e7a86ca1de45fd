use crate::camera::{ClipPlanes, ScreenSize, ViewFrustum, eye_position, projection_matrix, view_matrix};
use crate::geometry::BatchedGeometry;
use crate::mesh::{MeshGenerator, TessellationParams};
use crate::scene::SceneSnapshot;
use crate::settings::RenderSettings;

use super::uniforms::{UniformTable, set};
use super::{GraphicsContext, UniformValue};

/// Counters for one rendered frame.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub lights: usize,
    pub draw_calls: usize,
    pub vertices: u64,
}

/// Records one frame of a [`SceneSnapshot`] into a [`GraphicsContext`].
///
/// Owns the batched geometry and the resolved uniform table. Objects are
/// drawn in input order, one draw per object, with no sorting or culling.
pub struct FrameRenderer {
    generator: Box<dyn MeshGenerator>,
    geometry: BatchedGeometry,
    uniforms: UniformTable,
}

impl FrameRenderer {
    /// Builds and uploads the geometry, then resolves uniform locations.
    pub fn new<G: GraphicsContext + ?Sized>(
        ctx: &mut G,
        generator: Box<dyn MeshGenerator>,
        tessellation: TessellationParams,
    ) -> Self {
        let geometry = BatchedGeometry::build(generator.as_ref(), tessellation);
        ctx.upload_vertices(geometry.vertices());
        let uniforms = UniformTable::resolve(ctx);

        Self {
            generator,
            geometry,
            uniforms,
        }
    }

    #[inline]
    pub fn geometry(&self) -> &BatchedGeometry {
        &self.geometry
    }

    /// Rebuilds and re-uploads the geometry if the tessellation changed.
    ///
    /// Returns `true` when a rebuild happened.
    pub fn apply_settings<G: GraphicsContext + ?Sized>(
        &mut self,
        ctx: &mut G,
        settings: &RenderSettings,
    ) -> bool {
        if settings.tessellation == self.geometry.params() {
            return false;
        }

        log::debug!(
            "tessellation changed {:?} -> {:?}; rebuilding geometry",
            self.geometry.params(),
            settings.tessellation
        );
        self.geometry = BatchedGeometry::build(self.generator.as_ref(), settings.tessellation);
        ctx.upload_vertices(self.geometry.vertices());
        true
    }

    /// Records `scene` as seen through `clip` on a `screen`-sized target.
    ///
    /// A zero-sized screen records nothing.
    pub fn render_frame<G: GraphicsContext + ?Sized>(
        &self,
        ctx: &mut G,
        scene: &SceneSnapshot,
        clip: ClipPlanes,
        screen: ScreenSize,
    ) -> FrameStats {
        let mut stats = FrameStats::default();
        if !screen.is_drawable() {
            return stats;
        }
        let u = &self.uniforms;

        ctx.clear();
        ctx.use_program();

        // ── camera ─────────────────────────────────────────────────────────
        let camera = scene.camera();
        let frustum = ViewFrustum::new(clip, screen);
        let view = view_matrix(camera);
        let projection = projection_matrix(camera, frustum.aspect, frustum.far, frustum.near);
        set(ctx, u.view, UniformValue::Mat4(view));
        set(ctx, u.projection, UniformValue::Mat4(projection));

        // ── lights ─────────────────────────────────────────────────────────
        let lights = scene.lights();
        set(ctx, u.num_lights, UniformValue::Int(lights.len() as i32));
        for (light, slots) in lights.iter().zip(u.lights.iter()) {
            set(ctx, slots.kind, UniformValue::Int(light.kind.shader_tag()));
            set(ctx, slots.position, UniformValue::Vec4(light.position));
            set(ctx, slots.direction, UniformValue::Vec4(light.direction));
            set(ctx, slots.color, UniformValue::Vec4(light.color));
            set(ctx, slots.function, UniformValue::Vec3(light.attenuation.to_vec3()));
            set(ctx, slots.penumbra, UniformValue::Float(light.penumbra));
            set(ctx, slots.angle, UniformValue::Float(light.angle));
        }
        stats.lights = lights.len();

        set(ctx, u.camera_pos, UniformValue::Vec4(eye_position(&view)));

        // ── objects ────────────────────────────────────────────────────────
        let globals = scene.globals();
        for object in scene.objects() {
            let (ambient, diffuse, specular) = globals.weigh(&object.material);
            set(ctx, u.model, UniformValue::Mat4(object.transform));
            set(ctx, u.ambient, UniformValue::Vec4(ambient));
            set(ctx, u.diffuse, UniformValue::Vec4(diffuse));
            set(ctx, u.specular, UniformValue::Vec4(specular));
            set(ctx, u.shininess, UniformValue::Float(object.material.shininess));

            let batch = self.geometry.batch(object.primitive);
            ctx.draw_arrays(batch.offset, batch.count);
            stats.draw_calls += 1;
            stats.vertices += u64::from(batch.count);
        }

        ctx.release_program();

        log::trace!(
            "frame: {} lights, {} draws, {} vertices",
            stats.lights,
            stats.draw_calls,
            stats.vertices
        );
        stats
    }
}
