use bytemuck::Pod;

/// Interleaved vertex type uploaded as-is into a vertex buffer.
pub trait Vertex: Pod {
    /// Attribute layout; shader locations follow declaration order.
    const ATTRIBUTES: &'static [wgpu::VertexAttribute];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: Self::ATTRIBUTES,
        }
    }
}
