//! Physics module
//!
//! Lightweight kinematics for the brick range: ballistic cannonballs and
//! box/sphere collision queries. There is no general rigid-body solver;
//! contact responses live in the game systems that use these primitives.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! # Submodules
//!
//! - [`types`] - `Vec3` re-export and `GRAVITY`
//! - [`ballistics`] - Projectile integration
//! - [`collision`] - AABB, ray and swept-sphere queries

pub mod ballistics;
pub mod collision;
pub mod types;

pub use ballistics::{BallisticsConfig, Projectile, ProjectileState};
pub use collision::{
    Aabb, SweepHit, aabb_surface_normal, ray_aabb_intersect, sphere_intersects_aabb,
    sweep_sphere_aabb,
};
pub use types::{GRAVITY, Vec3};
