mod scene;

use anyhow::Result;
use lumen_engine::core::{App, AppControl, FrameCtx};
use lumen_engine::device::{Gpu, GpuInit};
use lumen_engine::logging::{LoggingConfig, init_logging};
use lumen_engine::mesh::ProceduralMeshes;
use lumen_engine::render::{FrameRenderer, PhongPipeline};
use lumen_engine::scene::SceneSnapshot;
use lumen_engine::settings::RenderSettings;
use lumen_engine::window::{Runtime, RuntimeConfig};

/// Renders a fixed scene every frame.
///
/// GPU-side state is created on the first frame, when a render context exists.
struct Viewer {
    settings: RenderSettings,
    scene: SceneSnapshot,
    renderer: Option<(PhongPipeline, FrameRenderer)>,
    frames: u64,
}

impl App for Viewer {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let settings = self.settings;
        let scene = &self.scene;
        let slot = &mut self.renderer;
        let mut drawn = false;

        let control = ctx.render(|rctx, target| {
            let (pipeline, renderer) = slot.get_or_insert_with(|| {
                let mut pipeline = PhongPipeline::new(rctx);
                let renderer =
                    FrameRenderer::new(&mut pipeline, Box::new(ProceduralMeshes), settings.tessellation);
                (pipeline, renderer)
            });

            renderer.apply_settings(pipeline, &settings);
            renderer.render_frame(pipeline, scene, settings.clip_planes, rctx.screen);
            pipeline.encode(target);
            drawn = true;
        });

        if drawn {
            self.frames += 1;
            if self.frames == 1 {
                log::info!("first frame presented at {}x{}", ctx.screen().width, ctx.screen().height);
            }
        }
        control
    }

    fn on_exit(&mut self, _gpu: &Gpu<'_>) {
        if let Some((mut pipeline, _)) = self.renderer.take() {
            pipeline.release();
        }
        log::info!("rendered {} frames", self.frames);
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let scene = scene::demo_scene().inspect_err(|e| log::warn!("demo scene rejected: {e}"))?;

    let app = Viewer {
        settings: RenderSettings::default(),
        scene,
        renderer: None,
        frames: 0,
    };

    let config = RuntimeConfig {
        title: "lumen viewer".to_string(),
        ..RuntimeConfig::default()
    };

    Runtime::run(config, GpuInit::default(), app)
}
