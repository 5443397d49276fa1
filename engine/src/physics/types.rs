//! Physics type re-exports from glam
//!
//! The vector type and constants shared by the physics modules.

pub use glam::Vec3;

/// Standard gravity (m/s²), pointing down the Y axis.
pub const GRAVITY: f32 = 9.81;
