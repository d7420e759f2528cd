use anyhow::Result;

use crate::input::InputEvent;
use crate::render::RenderCtx;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by [`Runtime`](crate::window::Runtime).
pub trait App {
    /// Called once after the window and GPU context exist, before the first
    /// frame. GPU resources are created here. An error stops the runtime.
    fn on_start(&mut self, ctx: &RenderCtx<'_>) -> Result<()>;

    /// Called for each input event. Quit and Escape are handled by the
    /// runtime before this is called.
    fn on_input(&mut self, event: &InputEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per frame. An error stops the runtime and is returned
    /// from [`Runtime::run`](crate::window::Runtime::run).
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl>;
}
