use super::{Drawable, RenderCtx, RenderTarget};

/// Flat, append-only list of drawables rendered in insertion order.
#[derive(Default)]
pub struct Scene {
    items: Vec<Box<dyn Drawable>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, drawable: impl Drawable + 'static) {
        log::debug!("scene: added '{}' at {}", drawable.name(), self.items.len());
        self.items.push(Box::new(drawable));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut (dyn Drawable + 'static)> {
        self.items.iter_mut().map(|d| d.as_mut())
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        for item in self.iter_mut() {
            item.render(ctx, target);
        }
    }
}
