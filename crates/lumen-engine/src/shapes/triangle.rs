use anyhow::Result;
use bytemuck::{Pod, Zeroable};

use crate::render::{
    Drawable, Mesh, RenderCtx, RenderTarget, ShaderLibrary, ShaderProgram, Uniforms, Vertex,
};

/// Shader set used by [`Triangle`].
pub const TRIANGLE_SHADER: &str = "triangle";

/// Position-only vertex (`vec2` at location 0).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PositionVertex {
    pub pos: [f32; 2],
}

impl Vertex for PositionVertex {
    const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &wgpu::vertex_attr_array![0 => Float32x2];
}

pub const TRIANGLE_VERTICES: [PositionVertex; 3] = [
    PositionVertex { pos: [-0.5, -0.5] },
    PositionVertex { pos: [0.5, -0.5] },
    PositionVertex { pos: [0.0, 0.5] },
];

/// A single triangle in clip space, drawn as a triangle list.
pub struct Triangle {
    mesh: Mesh,
}

impl Triangle {
    pub fn new(ctx: &RenderCtx<'_>, shaders: &ShaderLibrary) -> Result<Self> {
        let sources = shaders.load(TRIANGLE_SHADER)?;
        let program = ShaderProgram::compile(ctx.device, &sources);
        let mesh = Mesh::new(
            ctx,
            "triangle",
            &program,
            &TRIANGLE_VERTICES,
            wgpu::PrimitiveTopology::TriangleList,
        );
        Ok(Self { mesh })
    }
}

impl Drawable for Triangle {
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
