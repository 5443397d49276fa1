//! CPU-side mesh data shared by the world and UI passes.

use glam::Vec3;

/// Vertex for mesh rendering (position, normal, color)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

static_assertions::const_assert_eq!(std::mem::size_of::<Vertex>(), 40);

impl Vertex {
    /// Vertex buffer layout matching `shaders::MESH_SHADER` and `UI_SHADER`.
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Indexed triangle list.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Append another mesh, rebasing its indices.
    pub fn merge(&mut self, other: &Mesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    /// Combine several meshes into one.
    pub fn combine<'a>(meshes: impl IntoIterator<Item = &'a Mesh>) -> Mesh {
        let mut out = Mesh::new();
        for mesh in meshes {
            out.merge(mesh);
        }
        out
    }

    pub fn translate(&mut self, offset: Vec3) {
        for v in &mut self.vertices {
            v.position = (Vec3::from(v.position) + offset).to_array();
        }
    }

    pub fn translated(&self, offset: Vec3) -> Mesh {
        let mut out = self.clone();
        out.translate(offset);
        out
    }

    /// Add a screen-space quad given in NDC corners.
    pub fn add_quad(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: [f32; 4]) {
        let base = self.vertices.len() as u32;
        let normal = [0.0, 0.0, 1.0];

        self.vertices.push(Vertex { position: [x1, y1, 0.0], normal, color });
        self.vertices.push(Vertex { position: [x2, y1, 0.0], normal, color });
        self.vertices.push(Vertex { position: [x2, y2, 0.0], normal, color });
        self.vertices.push(Vertex { position: [x1, y2, 0.0], normal, color });

        self.indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Convert pixel coordinates (origin top-left) to NDC.
    pub fn screen_to_ndc(x: f32, y: f32, width: f32, height: f32) -> [f32; 2] {
        [(x / width) * 2.0 - 1.0, 1.0 - (y / height) * 2.0]
    }
}
