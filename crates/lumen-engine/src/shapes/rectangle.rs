use anyhow::Result;
use bytemuck::{Pod, Zeroable};

use crate::render::{
    Drawable, Mesh, RenderCtx, RenderTarget, ShaderLibrary, ShaderProgram, Uniforms, Vertex,
};

/// Shader set used by [`Rectangle`].
pub const RECTANGLE_SHADER: &str = "rectangle";

/// Interleaved position (`vec2`, location 0) + color (`vec3`, location 1).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub pos: [f32; 2],
    pub color: [f32; 3],
}

impl Vertex for ColorVertex {
    const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x3  // color
    ];
}

/// Strip order: bottom-left, bottom-right, top-left, top-right.
pub const RECTANGLE_VERTICES: [ColorVertex; 4] = [
    ColorVertex { pos: [-0.5, -0.5], color: [1.0, 0.0, 0.0] },
    ColorVertex { pos: [0.5, -0.5], color: [0.0, 1.0, 0.0] },
    ColorVertex { pos: [-0.5, 0.5], color: [0.0, 0.0, 1.0] },
    ColorVertex { pos: [0.5, 0.5], color: [1.0, 1.0, 1.0] },
];

/// A vertex-colored unit quad drawn as a triangle strip.
///
/// Its shader reads the model/view/projection slots, so it is meant to be
/// placed in a [`Camera`](crate::camera::Camera) scene.
pub struct Rectangle {
    mesh: Mesh,
}

impl Rectangle {
    pub fn new(ctx: &RenderCtx<'_>, shaders: &ShaderLibrary) -> Result<Self> {
        let sources = shaders.load(RECTANGLE_SHADER)?;
        let program = ShaderProgram::compile(ctx.device, &sources);
        let mesh = Mesh::new(
            ctx,
            "rectangle",
            &program,
            &RECTANGLE_VERTICES,
            wgpu::PrimitiveTopology::TriangleStrip,
        );
        Ok(Self { mesh })
    }
}

impl Drawable for Rectangle {
    fn name(&self) -> &str {
        self.mesh.label()
    }

    fn uniforms_mut(&mut self) -> &mut Uniforms {
        self.mesh.uniforms_mut()
    }

    fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.mesh.draw(ctx, target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_bytes_match_literal() {
        #[rustfmt::skip]
        let expected: [f32; 20] = [
            -0.5, -0.5, 1.0, 0.0, 0.0,
             0.5, -0.5, 0.0, 1.0, 0.0,
            -0.5,  0.5, 0.0, 0.0, 1.0,
             0.5,  0.5, 1.0, 1.0, 1.0,
        ];
        let bytes: &[u8] = bytemuck::cast_slice(&RECTANGLE_VERTICES);
        assert_eq!(bytes, bytemuck::cast_slice::<f32, u8>(&expected));
        assert_eq!(bytes.len(), 4 * 5 * 4);
    }

    #[test]
    fn layout_interleaves_position_and_color() {
        let layout = ColorVertex::layout();
        assert_eq!(layout.array_stride, 20);

        let attrs = layout.attributes;
        assert_eq!(attrs.len(), 2);
        assert_eq!((attrs[0].offset, attrs[0].format), (0, wgpu::VertexFormat::Float32x2));
        assert_eq!((attrs[1].offset, attrs[1].format), (8, wgpu::VertexFormat::Float32x3));
        assert_eq!(attrs[1].shader_location, 1);
    }
}
