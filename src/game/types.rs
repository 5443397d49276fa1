//! Shared Types Module
//!
//! Primitive mesh generators and the colour palette used by both scenes.

use glam::Vec3;

pub use crate::render::{Mesh, Vertex};

pub const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const BROWN: [f32; 4] = [0.255, 0.157, 0.098, 1.0];
pub const GRAY: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const BRICK_RED: [f32; 4] = [0.62, 0.25, 0.18, 1.0];
pub const FLOOR_GRAY: [f32; 4] = [0.45, 0.45, 0.42, 1.0];
pub const IRON: [f32; 4] = [0.18, 0.18, 0.2, 1.0];

/// Axis-aligned box
pub fn generate_box(center: Vec3, half_extents: Vec3, color: [f32; 4]) -> Mesh {
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    let (hx, hy, hz) = (half_extents.x, half_extents.y, half_extents.z);

    let corners = [
        Vec3::new(-hx, -hy, -hz),
        Vec3::new(hx, -hy, -hz),
        Vec3::new(hx, hy, -hz),
        Vec3::new(-hx, hy, -hz),
        Vec3::new(-hx, -hy, hz),
        Vec3::new(hx, -hy, hz),
        Vec3::new(hx, hy, hz),
        Vec3::new(-hx, hy, hz),
    ];

    let faces = [
        ([1, 0, 3, 2], Vec3::NEG_Z),
        ([4, 5, 6, 7], Vec3::Z),
        ([0, 4, 7, 3], Vec3::NEG_X),
        ([5, 1, 2, 6], Vec3::X),
        ([7, 6, 2, 3], Vec3::Y),
        ([0, 1, 5, 4], Vec3::NEG_Y),
    ];

    for (face, normal) in &faces {
        let base = vertices.len() as u32;
        for &i in face {
            vertices.push(Vertex {
                position: (center + corners[i]).to_array(),
                normal: normal.to_array(),
                color,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh { vertices, indices }
}

/// UV sphere
pub fn generate_sphere(center: Vec3, radius: f32, color: [f32; 4], segments: u32) -> Mesh {
    let segments = segments.max(3);
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for lat in 0..=segments {
        let theta = (lat as f32) * std::f32::consts::PI / (segments as f32);
        let (sin_theta, cos_theta) = theta.sin_cos();

        for lon in 0..=segments {
            let phi = (lon as f32) * std::f32::consts::TAU / (segments as f32);
            let (sin_phi, cos_phi) = phi.sin_cos();

            let n = Vec3::new(sin_theta * cos_phi, cos_theta, sin_theta * sin_phi);
            vertices.push(Vertex {
                position: (center + n * radius).to_array(),
                normal: n.to_array(),
                color,
            });
        }
    }

    for lat in 0..segments {
        for lon in 0..segments {
            let first = lat * (segments + 1) + lon;
            let second = first + segments + 1;
            indices.extend_from_slice(&[first, second, first + 1, second, second + 1, first + 1]);
        }
    }

    Mesh { vertices, indices }
}

/// Orthonormal pair perpendicular to `axis`.
fn perpendicular_basis(axis: Vec3) -> (Vec3, Vec3) {
    let a = axis.any_orthonormal_vector();
    (a, axis.cross(a))
}

/// Closed cylinder centred at `center` with its axis along `axis`.
pub fn generate_cylinder(center: Vec3, axis: Vec3, radius: f32, height: f32, color: [f32; 4], segments: u32) -> Mesh {
    let segments = segments.max(3);
    let axis = axis.normalize_or(Vec3::Y);
    let (u, v) = perpendicular_basis(axis);
    let half = axis * (height * 0.5);

    let mut mesh = Mesh::new();
    let ring = |i: u32| {
        let a = (i as f32) * std::f32::consts::TAU / (segments as f32);
        u * a.cos() + v * a.sin()
    };

    // Side wall
    for i in 0..=segments {
        let n = ring(i);
        for end in [-half, half] {
            mesh.vertices.push(Vertex {
                position: (center + end + n * radius).to_array(),
                normal: n.to_array(),
                color,
            });
        }
    }
    for i in 0..segments {
        let b = i * 2;
        mesh.indices.extend_from_slice(&[b, b + 2, b + 1, b + 1, b + 2, b + 3]);
    }

    // Caps
    for (end, normal) in [(-half, -axis), (half, axis)] {
        let hub = mesh.vertices.len() as u32;
        mesh.vertices.push(Vertex {
            position: (center + end).to_array(),
            normal: normal.to_array(),
            color,
        });
        for i in 0..=segments {
            mesh.vertices.push(Vertex {
                position: (center + end + ring(i) * radius).to_array(),
                normal: normal.to_array(),
                color,
            });
        }
        for i in 0..segments {
            mesh.indices.extend_from_slice(&[hub, hub + 1 + i, hub + 2 + i]);
        }
    }

    mesh
}

/// Cone with its base disc centred at `base` and its tip `height` along
/// `direction`.
pub fn generate_cone(base: Vec3, direction: Vec3, radius: f32, height: f32, color: [f32; 4], segments: u32) -> Mesh {
    let segments = segments.max(3);
    let axis = direction.normalize_or(Vec3::Y);
    let (u, v) = perpendicular_basis(axis);
    let tip = base + axis * height;
    let slope = radius / height.max(f32::EPSILON);

    let mut mesh = Mesh::new();
    let ring = |i: u32| {
        let a = (i as f32) * std::f32::consts::TAU / (segments as f32);
        u * a.cos() + v * a.sin()
    };

    for i in 0..segments {
        let (r0, r1) = (ring(i), ring(i + 1));
        let normal = ((r0 + r1) * 0.5 + axis * slope).normalize();
        let b = mesh.vertices.len() as u32;
        for p in [base + r0 * radius, base + r1 * radius, tip] {
            mesh.vertices.push(Vertex {
                position: p.to_array(),
                normal: normal.to_array(),
                color,
            });
        }
        mesh.indices.extend_from_slice(&[b, b + 1, b + 2]);
    }

    let hub = mesh.vertices.len() as u32;
    mesh.vertices.push(Vertex {
        position: base.to_array(),
        normal: (-axis).to_array(),
        color,
    });
    for i in 0..=segments {
        mesh.vertices.push(Vertex {
            position: (base + ring(i) * radius).to_array(),
            normal: (-axis).to_array(),
            color,
        });
    }
    for i in 0..segments {
        mesh.indices.extend_from_slice(&[hub, hub + 2 + i, hub + 1 + i]);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(mesh: &Mesh) -> (Vec3, Vec3) {
        mesh.vertices.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(lo, hi), v| {
                let p = Vec3::from(v.position);
                (lo.min(p), hi.max(p))
            },
        )
    }

    #[test]
    fn test_box_bounds_and_counts() {
        let mesh = generate_box(Vec3::new(0.0, 5.0, -5.0), Vec3::new(10.0, 1.0, 1.0), BLUE);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        let (lo, hi) = bounds(&mesh);
        assert_eq!(lo, Vec3::new(-10.0, 4.0, -6.0));
        assert_eq!(hi, Vec3::new(10.0, 6.0, -4.0));
    }

    #[test]
    fn test_vertical_cylinder_spans_height() {
        let mesh = generate_cylinder(Vec3::new(0.0, 2.5, -5.0), Vec3::Y, 0.2, 3.0, BROWN, 15);
        let (lo, hi) = bounds(&mesh);
        assert!((lo.y - 1.0).abs() < 1e-5);
        assert!((hi.y - 4.0).abs() < 1e-5);
        assert!(hi.x <= 0.2 + 1e-5);
    }

    #[test]
    fn test_cone_points_down() {
        let mesh = generate_cone(Vec3::new(0.0, 1.0, -5.0), Vec3::NEG_Y, 0.5, 0.5, GRAY, 32);
        let (lo, hi) = bounds(&mesh);
        assert!((lo.y - 0.5).abs() < 1e-5);
        assert!((hi.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_indices_in_range() {
        for mesh in [
            generate_sphere(Vec3::ZERO, 0.4, IRON, 12),
            generate_cylinder(Vec3::ZERO, Vec3::X, 1.0, 2.0, WHITE, 8),
            generate_cone(Vec3::ZERO, Vec3::Y, 1.0, 1.0, WHITE, 8),
        ] {
            let n = mesh.vertices.len() as u32;
            assert!(mesh.indices.iter().all(|&i| i < n));
            assert_eq!(mesh.indices.len() % 3, 0);
        }
    }
}
