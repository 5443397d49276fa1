//! Ballistics simulation for projectile trajectories
//!
//! Cannonballs fly under gravity with optional quadratic air drag. Contact
//! with the world is resolved by the caller; this module only integrates.
//!
//! # Example
//!
//! ```ignore
//! use volley_engine::physics::ballistics::{BallisticsConfig, Projectile};
//! use glam::Vec3;
//!
//! let config = BallisticsConfig::default();
//! let mut ball = Projectile::spawn(Vec3::new(0.0, 4.0, 12.0), Vec3::NEG_Z, 60.0, 1.0);
//! ball.integrate(&config, 1.0 / 60.0);
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A projectile being simulated through the air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    /// Current position in world space (meters)
    pub position: Vec3,
    /// Current velocity vector (meters/second)
    pub velocity: Vec3,
    /// Mass of the projectile (kilograms)
    pub mass: f32,
    /// Drag coefficient (dimensionless, 0.47 for a sphere)
    pub drag_coefficient: f32,
    /// Radius of the projectile (meters)
    pub radius: f32,
    /// Whether the projectile is still being simulated
    pub active: bool,
    /// Resting projectiles stay in the world but are no longer integrated
    pub resting: bool,
    /// Total distance traveled since spawn (meters)
    pub distance_traveled: f32,
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            mass: 1.0,
            drag_coefficient: 0.47,
            radius: 0.4,
            active: true,
            resting: false,
            distance_traveled: 0.0,
        }
    }
}

impl Projectile {
    /// Spawn a new projectile with the given initial conditions.
    ///
    /// `direction` is normalized here; a zero direction spawns a projectile
    /// at rest that simply drops.
    pub fn spawn(position: Vec3, direction: Vec3, speed: f32, mass: f32) -> Self {
        Self {
            position,
            velocity: direction.normalize_or_zero() * speed,
            mass: mass.max(0.001), // Prevent division by zero
            ..Self::default()
        }
    }

    /// Integrate the projectile's physics over a time step.
    ///
    /// Semi-implicit Euler: velocity first, then position with the new
    /// velocity. Drag is `0.5 * rho * Cd * A * |v|^2` against the motion.
    pub fn integrate(&mut self, config: &BallisticsConfig, dt: f32) -> ProjectileState {
        if !self.active {
            return ProjectileState::Expired;
        }
        if self.resting {
            return ProjectileState::Resting;
        }

        let speed = self.velocity.length();
        let drag_force = if speed > 0.001 && config.air_density > 0.0 {
            let area = std::f32::consts::PI * self.radius * self.radius;
            let drag_magnitude =
                0.5 * config.air_density * self.drag_coefficient * area * speed * speed;
            -self.velocity / speed * drag_magnitude
        } else {
            Vec3::ZERO
        };

        let acceleration = config.gravity + drag_force / self.mass;
        self.velocity += acceleration * dt;

        let displacement = self.velocity * dt;
        self.position += displacement;
        self.distance_traveled += displacement.length();

        if self.distance_traveled >= config.expired_distance || self.position.y < config.kill_height {
            self.active = false;
            return ProjectileState::Expired;
        }

        ProjectileState::Flying
    }

    /// Put the projectile to rest at `position`.
    pub fn come_to_rest(&mut self, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;
        self.resting = true;
    }
}

/// Configuration for the ballistics simulation environment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallisticsConfig {
    /// Gravity acceleration vector (m/s²)
    pub gravity: Vec3,
    /// Air density (kg/m³); zero disables drag
    pub air_density: f32,
    /// Distance after which a projectile is considered expired (meters)
    pub expired_distance: f32,
    /// Projectiles that fall below this height are expired
    pub kill_height: f32,
}

impl Default for BallisticsConfig {
    fn default() -> Self {
        Self::vacuum()
    }
}

impl BallisticsConfig {
    /// Earth gravity without air drag.
    pub fn vacuum() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.81, 0.0),
            air_density: 0.0,
            expired_distance: 1000.0,
            kill_height: -50.0,
        }
    }
}

/// The current state of a projectile in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ProjectileState {
    /// Projectile is still flying through the air
    #[default]
    Flying,
    /// Projectile lies on a surface and is no longer integrated
    Resting,
    /// Projectile has exceeded its range or left the world
    Expired,
}
