//! UI Render Pass
//!
//! Handles rendering of 2D UI elements on top of the scene.
//! No depth testing, uses alpha blending.

use super::mesh::{Mesh, Vertex};
use super::render_pass::{DynamicBuffer, FrameContext, RenderContext, RenderPass, RenderPassPriority};
use super::shaders::UI_SHADER;

pub struct UiRenderPass {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: DynamicBuffer,
    index_buffer: DynamicBuffer,
    index_count: u32,
}

impl UiRenderPass {
    pub fn new(ctx: &RenderContext) -> Self {
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("UI Shader"),
            source: wgpu::ShaderSource::Wgsl(UI_SHADER.into()),
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("UI Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("UI Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let vertex_buffer = DynamicBuffer::new(
            ctx.device,
            "UI Vertex Buffer",
            wgpu::BufferUsages::VERTEX,
            256 * 1024,
        );
        let index_buffer = DynamicBuffer::new(
            ctx.device,
            "UI Index Buffer",
            wgpu::BufferUsages::INDEX,
            64 * 1024,
        );

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            index_count: 0,
        }
    }

    /// Upload this frame's overlay geometry (already in NDC).
    pub fn prepare(&mut self, ctx: &RenderContext, mesh: &Mesh) {
        self.vertex_buffer
            .write(ctx.device, ctx.queue, bytemuck::cast_slice(&mesh.vertices));
        self.index_buffer
            .write(ctx.device, ctx.queue, bytemuck::cast_slice(&mesh.indices));
        self.index_count = mesh.indices.len() as u32;
    }
}

impl RenderPass for UiRenderPass {
    fn name(&self) -> &'static str {
        "UI"
    }

    fn priority(&self) -> RenderPassPriority {
        RenderPassPriority::UI
    }

    fn render(&self, _ctx: &RenderContext, frame: &mut FrameContext) {
        if self.index_count == 0 {
            return;
        }

        let mut render_pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("UI Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: frame.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load, // Preserve previous passes
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice());
        render_pass.set_index_buffer(self.index_buffer.slice(), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
