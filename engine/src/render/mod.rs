//! Render Module
//!
//! A deliberately small forward renderer: one depth-tested pass for the
//! world mesh and one alpha-blended overlay pass for the HUD. Both draw the
//! same 40-byte [`Vertex`] and rebuild their buffers every frame.

mod error;
pub mod gpu_context;
pub mod mesh;
pub mod mesh_pass;
pub mod render_pass;
pub mod shaders;
pub mod ui_pass;

use std::sync::Arc;

use glam::Mat4;
use winit::window::Window;

pub use error::RenderError;
pub use gpu_context::{GpuContext, GpuContextConfig};
pub use mesh::{Mesh, Vertex};
pub use mesh_pass::{MeshRenderPass, MeshUniforms};
pub use render_pass::{DynamicBuffer, FrameContext, RenderContext, RenderPass, RenderPassPriority};
pub use shaders::{MESH_SHADER, UI_SHADER};
pub use ui_pass::UiRenderPass;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Everything a scene hands the renderer for one frame.
pub struct FrameInput<'a> {
    pub view_proj: Mat4,
    pub world: &'a Mesh,
    pub ui: &'a Mesh,
    pub clear_color: [f32; 4],
    pub ambient: f32,
}

pub struct Renderer {
    pub gpu: GpuContext,
    mesh_pass: MeshRenderPass,
    ui_pass: UiRenderPass,
}

impl Renderer {
    pub fn new(window: Arc<Window>, config: GpuContextConfig) -> Result<Self, RenderError> {
        let gpu = GpuContext::new(window, config)?;
        let ctx = RenderContext {
            device: &gpu.device,
            queue: &gpu.queue,
            surface_format: gpu.format(),
        };
        let mesh_pass = MeshRenderPass::new(&ctx);
        let ui_pass = UiRenderPass::new(&ctx);
        Ok(Self { gpu, mesh_pass, ui_pass })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Upload and draw one frame.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped;
    /// other surface errors are returned.
    pub fn render(&mut self, frame: &FrameInput) -> Result<(), RenderError> {
        let output = match self.gpu.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("Surface lost, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Surface timeout, skipping frame");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let color_view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let ctx = RenderContext {
            device: &self.gpu.device,
            queue: &self.gpu.queue,
            surface_format: self.gpu.format(),
        };
        let uniforms = MeshUniforms {
            view_proj: frame.view_proj.to_cols_array_2d(),
            ambient: frame.ambient,
            ..Default::default()
        };
        self.mesh_pass.prepare(&ctx, &uniforms, frame.world, frame.clear_color);
        self.ui_pass.prepare(&ctx, frame.ui);

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });
        {
            let mut frame_ctx = FrameContext {
                encoder: &mut encoder,
                color_view: &color_view,
                depth_view: &self.gpu.depth_view,
            };
            let mut passes: [&dyn RenderPass; 2] = [&self.ui_pass, &self.mesh_pass];
            passes.sort_by_key(|p| p.priority());
            for pass in passes {
                log::trace!("Recording {} pass", pass.name());
                pass.render(&ctx, &mut frame_ctx);
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}
