//! Collision detection module
//!
//! Axis-aligned boxes and the handful of queries the brick range needs:
//! slab-method ray casts, swept spheres and sphere overlap.
//!
//! # Example
//!
//! ```ignore
//! use volley_engine::physics::collision::{Aabb, ray_aabb_intersect};
//! use glam::Vec3;
//!
//! let brick = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::new(0.48, 0.12, 0.24));
//! let origin = Vec3::new(0.0, 0.0, -5.0);
//! if let Some(t) = ray_aabb_intersect(origin, Vec3::Z, brick.min, brick.max) {
//!     let hit_point = origin + Vec3::Z * t;
//! }
//! ```

use glam::Vec3;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Grow the box by `amount` on every side (Minkowski sum with a cube).
    pub fn expanded(&self, amount: f32) -> Self {
        Self {
            min: self.min - Vec3::splat(amount),
            max: self.max + Vec3::splat(amount),
        }
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }
}

/// Result of sweeping a sphere along a segment into a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// Sphere centre at the moment of contact
    pub position: Vec3,
    /// Outward face normal of the box at the contact
    pub normal: Vec3,
    /// Fraction of the segment travelled before contact, in `[0, 1]`
    pub fraction: f32,
}

/// Performs ray-AABB (Axis-Aligned Bounding Box) intersection test using the slab method.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the intersection point (t >= 0).
///   When the ray starts inside the box this is the exit distance.
/// * `None` - No intersection or intersection is behind the ray origin
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    // Near-zero direction components become huge inverse values so the slab
    // for that axis either always or never contains the ray.
    let inv = |d: f32| {
        if d.abs() > 1e-10 {
            1.0 / d
        } else {
            f32::MAX * d.signum()
        }
    };
    let inv_dir = Vec3::new(inv(ray_dir.x), inv(ray_dir.y), inv(ray_dir.z));

    let t1 = (aabb_min - ray_origin) * inv_dir;
    let t2 = (aabb_max - ray_origin) * inv_dir;

    let t_min = t1.min(t2).max_element();
    let t_max = t1.max(t2).min_element();

    if t_max >= t_min && t_max >= 0.0 {
        if t_min >= 0.0 { Some(t_min) } else { Some(t_max) }
    } else {
        None
    }
}

/// Computes the outward normal of the AABB face closest to `point`.
pub fn aabb_surface_normal(point: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Vec3 {
    let center = (aabb_min + aabb_max) * 0.5;
    let half_extents = ((aabb_max - aabb_min) * 0.5).max(Vec3::splat(1e-6));
    let normalized = (point - center) / half_extents;
    let abs_normalized = normalized.abs();

    if abs_normalized.x >= abs_normalized.y && abs_normalized.x >= abs_normalized.z {
        Vec3::new(normalized.x.signum(), 0.0, 0.0)
    } else if abs_normalized.y >= abs_normalized.z {
        Vec3::new(0.0, normalized.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, normalized.z.signum())
    }
}

/// True when a sphere overlaps the box.
pub fn sphere_intersects_aabb(center: Vec3, radius: f32, aabb: &Aabb) -> bool {
    aabb.closest_point(center).distance_squared(center) <= radius * radius
}

/// Sweep a sphere from `start` to `end` against `aabb`.
///
/// The box is inflated by the radius and the centre path is ray cast against
/// it, so fast spheres cannot tunnel through thin boxes. Corners are treated
/// as square, which is conservative for the small bricks this is used on.
pub fn sweep_sphere_aabb(start: Vec3, end: Vec3, radius: f32, aabb: &Aabb) -> Option<SweepHit> {
    let inflated = aabb.expanded(radius);

    if inflated.contains_point(start) {
        if !sphere_intersects_aabb(start, radius, aabb) {
            return None;
        }
        return Some(SweepHit {
            position: start,
            normal: aabb_surface_normal(start, aabb.min, aabb.max),
            fraction: 0.0,
        });
    }

    let delta = end - start;
    let length = delta.length();
    if length <= f32::EPSILON {
        return None;
    }
    let dir = delta / length;

    let t = ray_aabb_intersect(start, dir, inflated.min, inflated.max)?;
    if t > length {
        return None;
    }

    let position = start + dir * t;
    Some(SweepHit {
        position,
        normal: aabb_surface_normal(position, inflated.min, inflated.max),
        fraction: t / length,
    })
}
