//! Test doubles shared by unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Mat4;

use crate::render::{Drawable, MatrixSlot, RenderCtx, RenderTarget, Uniforms};

pub(crate) type SlotLog = Rc<RefCell<Vec<(&'static str, MatrixSlot)>>>;

/// Drawable without GPU resources that records every matrix it is given.
pub(crate) struct Probe {
    pub name: &'static str,
    pub uniforms: Uniforms,
    pub log: SlotLog,
}

impl Probe {
    pub(crate) fn new(name: &'static str, log: &SlotLog) -> Self {
        Self {
            name,
            uniforms: Uniforms::new(),
            log: Rc::clone(log),
        }
    }
}

impl Drawable for Probe {
    fn name(&self) -> &str {
        self.name
    }

    fn uniforms_mut(&mut self) -> &mut Uniforms {
        &mut self.uniforms
    }

    fn set_matrix(&mut self, slot: MatrixSlot, value: Mat4) {
        self.log.borrow_mut().push((self.name, slot));
        self.uniforms.set_matrix(slot, value);
    }

    fn render(&mut self, _ctx: &RenderCtx<'_>, _target: &mut RenderTarget<'_>) {}
}
