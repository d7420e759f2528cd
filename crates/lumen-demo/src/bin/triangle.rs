//! Camera-less variant: one triangle drawn straight in clip space.

use anyhow::Result;

use lumen_engine::core::{App, AppControl, FrameCtx};
use lumen_engine::device::GpuInit;
use lumen_engine::logging::{init_logging, LoggingConfig};
use lumen_engine::render::{RenderCtx, Scene, ShaderLibrary};
use lumen_engine::shapes::Triangle;
use lumen_engine::window::{Runtime, RuntimeConfig};

struct TriangleDemo {
    shaders: ShaderLibrary,
    scene: Scene,
}

impl App for TriangleDemo {
    fn on_start(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        self.scene.push(Triangle::new(ctx, &self.shaders)?);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        let scene = &mut self.scene;
        ctx.render(|rctx, target| scene.render(rctx, target))?;
        Ok(AppControl::Continue)
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let app = TriangleDemo {
        shaders: ShaderLibrary::default(),
        scene: Scene::new(),
    };

    let config = RuntimeConfig {
        title: "lumen triangle".to_string(),
        ..Default::default()
    };

    Runtime::run(config, GpuInit::default(), app)
}
