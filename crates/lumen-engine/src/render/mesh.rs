use wgpu::util::DeviceExt;

use super::{RenderCtx, RenderTarget, ShaderProgram, UniformBlock, Uniforms, Vertex};

/// One vertex buffer, one pipeline for one shader program, one uniform block.
///
/// The vertex buffer is uploaded at construction and never written again.
/// `draw` uploads the uniform block if it changed, then records exactly one
/// non-indexed draw call covering every vertex.
pub struct Mesh {
    label: String,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    uniforms: Uniforms,
}

impl Mesh {
    pub fn new<V: Vertex>(
        ctx: &RenderCtx<'_>,
        label: &str,
        program: &ShaderProgram,
        vertices: &[V],
        topology: wgpu::PrimitiveTopology,
    ) -> Self {
        let vertex_buffer = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("lumen {label} vbo")),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let uniform_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("lumen {label} ubo")),
            size: UniformBlock::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some(&format!("lumen {label} bgl")),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(UniformBlock::SIZE),
                        },
                        count: None,
                    }],
                });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("lumen {label} bind group")),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some(&format!("lumen {label} pipeline layout")),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("lumen {label} pipeline")),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: program.vertex(),
                entry_point: Some(ShaderProgram::ENTRY_POINT),
                compilation_options: Default::default(),
                buffers: &[V::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: program.fragment(),
                entry_point: Some(ShaderProgram::ENTRY_POINT),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // The orbit demo shows both faces of the quad as it rotates.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!(
            "mesh '{label}': {} vertices, {:?}, shader '{}'",
            vertices.len(),
            topology,
            program.name()
        );

        Self {
            label: label.to_string(),
            pipeline,
            vertex_buffer,
            vertex_count: vertices.len() as u32,
            uniform_buffer,
            bind_group,
            uniforms: Uniforms::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn uniforms(&self) -> &Uniforms {
        &self.uniforms
    }

    pub fn uniforms_mut(&mut self) -> &mut Uniforms {
        &mut self.uniforms
    }

    /// Uploads pending uniforms and records the draw call into `target`.
    pub fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        if let Some(block) = self.uniforms.take_pending() {
            ctx.queue
                .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&block));
        }

        let label = format!("lumen {} pass", self.label);
        let mut rpass = target.load_pass(&label);

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.draw(0..self.vertex_count, 0..1);

        log::trace!("mesh '{}': drew {} vertices", self.label, self.vertex_count);
    }
}
