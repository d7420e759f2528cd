use anyhow::{anyhow, Result};
use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;

/// Window handle plus size helpers.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Logical window size as a viewport.
    pub fn viewport(&self) -> Viewport {
        logical_viewport(self.window)
    }
}

pub(crate) fn logical_viewport(window: &Window) -> Viewport {
    let logical: winit::dpi::LogicalSize<f64> =
        window.inner_size().to_logical(window.scale_factor());
    Viewport::new(logical.width as f32, logical.height as f32)
}

/// Per-frame context passed to `App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback
/// - `'w` is the window borrow carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
    /// Rolling frame rate, as shown in the title bar.
    pub fps: f32,
    pub clear_color: Color,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Clears the frame to `clear_color`, calls `draw`, then presents.
    ///
    /// A recoverable surface error skips the frame; a fatal one is returned.
    pub fn render<F>(&mut self, draw: F) -> Result<()>
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let message = err.to_string();
                let action = self.gpu.handle_surface_error(err);
                return surface_outcome(action, &message);
            }
        };

        // Clear pass; dropped before the encoder is borrowed again.
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("lumen clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            self.window.viewport(),
        );

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        Ok(())
    }
}

/// Frame result for a surface error that was already handled as `action`.
pub(crate) fn surface_outcome(action: SurfaceErrorAction, message: &str) -> Result<()> {
    match action {
        SurfaceErrorAction::Fatal => Err(anyhow!("fatal surface error: {message}")),
        SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
            log::warn!("frame skipped: surface error ({action:?}): {message}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::SurfaceError;

    #[test]
    fn fatal_surface_error_is_returned() {
        let message = SurfaceError::OutOfMemory.to_string();
        let err = surface_outcome(SurfaceErrorAction::Fatal, &message).unwrap_err();
        assert!(err.to_string().starts_with("fatal surface error"));
    }

    #[test]
    fn recoverable_surface_errors_skip_the_frame() {
        let message = SurfaceError::Lost.to_string();
        assert!(surface_outcome(SurfaceErrorAction::Reconfigured, &message).is_ok());
        assert!(surface_outcome(SurfaceErrorAction::SkipFrame, &message).is_ok());
    }
}
