use glam::Mat4;

use super::{MatrixSlot, RenderCtx, RenderTarget, ScalarSlot, Uniforms};

/// Something that owns its GPU resources and draws itself with one call.
///
/// Uniform setters only record values; they reach the GPU in `render`.
pub trait Drawable {
    fn name(&self) -> &str;

    fn uniforms_mut(&mut self) -> &mut Uniforms;

    fn set_matrix(&mut self, slot: MatrixSlot, value: Mat4) {
        self.uniforms_mut().set_matrix(slot, value);
    }

    fn set_scalar(&mut self, slot: ScalarSlot, value: f32) {
        self.uniforms_mut().set_scalar(slot, value);
    }

    fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>);
}
