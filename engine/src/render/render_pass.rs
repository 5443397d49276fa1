//! Render Pass Abstraction
//!
//! Each pass owns its pipeline and buffers and records into a shared
//! command encoder. Passes run in priority order.

use wgpu::{CommandEncoder, Device, Queue, TextureView};

/// Render pass execution priority (lower = earlier)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RenderPassPriority {
    /// Main geometry pass
    Geometry = 100,
    /// UI overlay (always on top)
    UI = 400,
}

/// GPU context shared between render passes
pub struct RenderContext<'a> {
    pub device: &'a Device,
    pub queue: &'a Queue,
    pub surface_format: wgpu::TextureFormat,
}

/// Frame context for a single render frame
pub struct FrameContext<'a> {
    pub encoder: &'a mut CommandEncoder,
    pub color_view: &'a TextureView,
    pub depth_view: &'a TextureView,
}

pub trait RenderPass {
    /// Name for debugging
    fn name(&self) -> &'static str;

    fn priority(&self) -> RenderPassPriority;

    /// Record draw commands for this frame
    fn render(&self, ctx: &RenderContext, frame: &mut FrameContext);
}

/// GPU buffer that grows to fit whatever is uploaded into it.
pub struct DynamicBuffer {
    label: &'static str,
    usage: wgpu::BufferUsages,
    buffer: wgpu::Buffer,
    len: u64,
}

impl DynamicBuffer {
    pub fn new(device: &Device, label: &'static str, usage: wgpu::BufferUsages, capacity: u64) -> Self {
        let usage = usage | wgpu::BufferUsages::COPY_DST;
        Self {
            label,
            usage,
            buffer: Self::allocate(device, label, usage, capacity),
            len: 0,
        }
    }

    fn allocate(device: &Device, label: &'static str, usage: wgpu::BufferUsages, size: u64) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: size.max(wgpu::COPY_BUFFER_ALIGNMENT),
            usage,
            mapped_at_creation: false,
        })
    }

    /// Upload `bytes`, reallocating at the next power of two if needed.
    pub fn write(&mut self, device: &Device, queue: &Queue, bytes: &[u8]) {
        let size = bytes.len() as u64;
        if size > self.buffer.size() {
            let capacity = size.next_power_of_two();
            log::debug!("Growing {} to {} bytes", self.label, capacity);
            self.buffer = Self::allocate(device, self.label, self.usage, capacity);
        }
        if size > 0 {
            queue.write_buffer(&self.buffer, 0, bytes);
        }
        self.len = size;
    }

    pub fn slice(&self) -> wgpu::BufferSlice<'_> {
        self.buffer.slice(..self.len.max(1).min(self.buffer.size()))
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
