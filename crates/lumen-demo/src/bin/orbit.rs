//! Camera variant: a vertex-colored quad tumbling about the X axis.

use anyhow::Result;

use lumen_engine::camera::Camera;
use lumen_engine::core::{App, AppControl, FrameCtx};
use lumen_engine::device::GpuInit;
use lumen_engine::logging::{init_logging, LoggingConfig};
use lumen_engine::render::{RenderCtx, ShaderLibrary};
use lumen_engine::shapes::Rectangle;
use lumen_engine::window::{Runtime, RuntimeConfig};

struct OrbitDemo {
    shaders: ShaderLibrary,
    camera: Option<Camera>,
}

impl App for OrbitDemo {
    fn on_start(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let mut camera = Camera::new(ctx.viewport);
        camera.scene_mut().push(Rectangle::new(ctx, &self.shaders)?);
        self.camera = Some(camera);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        let Some(camera) = self.camera.as_mut() else {
            return Ok(AppControl::Continue);
        };

        camera.update(ctx.time.elapsed);
        ctx.render(|rctx, target| camera.render(rctx, target))?;
        Ok(AppControl::Continue)
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let app = OrbitDemo {
        shaders: ShaderLibrary::default(),
        camera: None,
    };

    let config = RuntimeConfig {
        title: "lumen orbit".to_string(),
        ..Default::default()
    };

    Runtime::run(config, GpuInit::default(), app)
}
