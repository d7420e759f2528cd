use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Matrix uniforms every shader set may read.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MatrixSlot {
    Model,
    View,
    Projection,
}

/// Scalar uniforms every shader set may read.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ScalarSlot {
    /// Seconds since startup.
    Time,
}

/// GPU layout of the uniform block at `set = 0, binding = 0`.
///
/// Matches this GLSL (std140):
///
/// ```glsl
/// layout(set = 0, binding = 0) uniform Transform {
///     mat4 model;
///     mat4 view;
///     mat4 projection;
///     float time;
/// } u;
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct UniformBlock {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub time: f32,
    pub _pad: [f32; 3], // 16-byte alignment
}

impl UniformBlock {
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;
}

impl Default for UniformBlock {
    fn default() -> Self {
        let identity = Mat4::IDENTITY.to_cols_array_2d();
        Self {
            model: identity,
            view: identity,
            projection: identity,
            time: 0.0,
            _pad: [0.0; 3],
        }
    }
}

/// Host-side uniform values plus a pending-upload flag.
///
/// Starts pending so the first draw uploads the identity defaults.
#[derive(Debug, Clone)]
pub struct Uniforms {
    block: UniformBlock,
    pending: bool,
}

impl Uniforms {
    pub fn new() -> Self {
        Self {
            block: UniformBlock::default(),
            pending: true,
        }
    }

    pub fn set_matrix(&mut self, slot: MatrixSlot, value: Mat4) {
        let cols = value.to_cols_array_2d();
        let dst = match slot {
            MatrixSlot::Model => &mut self.block.model,
            MatrixSlot::View => &mut self.block.view,
            MatrixSlot::Projection => &mut self.block.projection,
        };
        if *dst != cols {
            *dst = cols;
            self.pending = true;
        }
    }

    pub fn set_scalar(&mut self, slot: ScalarSlot, value: f32) {
        let dst = match slot {
            ScalarSlot::Time => &mut self.block.time,
        };
        if *dst != value {
            *dst = value;
            self.pending = true;
        }
    }

    pub fn matrix(&self, slot: MatrixSlot) -> Mat4 {
        let cols = match slot {
            MatrixSlot::Model => &self.block.model,
            MatrixSlot::View => &self.block.view,
            MatrixSlot::Projection => &self.block.projection,
        };
        Mat4::from_cols_array_2d(cols)
    }

    pub fn scalar(&self, slot: ScalarSlot) -> f32 {
        match slot {
            ScalarSlot::Time => self.block.time,
        }
    }

    pub fn block(&self) -> &UniformBlock {
        &self.block
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Returns the block if it changed since the last call.
    pub fn take_pending(&mut self) -> Option<UniformBlock> {
        std::mem::take(&mut self.pending).then_some(self.block)
    }
}

impl Default for Uniforms {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_matches_std140_size() {
        // 3 * mat4 (64 bytes each) + float rounded up to vec4.
        assert_eq!(UniformBlock::SIZE, 208);
        assert_eq!(UniformBlock::SIZE % 16, 0);
    }

    #[test]
    fn first_take_uploads_identity() {
        let mut u = Uniforms::new();
        let block = u.take_pending().unwrap();
        assert_eq!(block.model, Mat4::IDENTITY.to_cols_array_2d());
        assert!(u.take_pending().is_none());
    }

    #[test]
    fn setting_a_new_value_marks_pending() {
        let mut u = Uniforms::new();
        u.take_pending();

        let m = Mat4::from_rotation_x(0.5);
        u.set_matrix(MatrixSlot::Model, m);
        assert!(u.is_pending());
        assert_eq!(u.matrix(MatrixSlot::Model), m);
        assert_eq!(u.take_pending().unwrap().model, m.to_cols_array_2d());
    }

    #[test]
    fn setting_same_value_is_not_pending() {
        let mut u = Uniforms::new();
        u.set_matrix(MatrixSlot::View, Mat4::IDENTITY);
        u.set_scalar(ScalarSlot::Time, 0.0);
        u.take_pending();

        u.set_matrix(MatrixSlot::View, Mat4::IDENTITY);
        u.set_scalar(ScalarSlot::Time, 0.0);
        assert!(!u.is_pending());

        u.set_scalar(ScalarSlot::Time, 1.5);
        assert_eq!(u.scalar(ScalarSlot::Time), 1.5);
        assert!(u.is_pending());
    }

    #[test]
    fn slots_do_not_alias() {
        let mut u = Uniforms::new();
        u.set_matrix(MatrixSlot::Projection, Mat4::from_scale(glam::Vec3::splat(2.0)));
        assert_eq!(u.matrix(MatrixSlot::Model), Mat4::IDENTITY);
        assert_eq!(u.matrix(MatrixSlot::View), Mat4::IDENTITY);
    }
}
