//! Camera Module
//!
//! Free-flying camera used by both scenes. This module is window-system
//! agnostic: it only deals with camera state and math.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Initial placement and movement tuning for a [`FlyCamera`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub look_at: Vec3,
    /// World units per second
    pub move_speed: f32,
    /// Radians per pixel of mouse movement
    pub look_sensitivity: f32,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            look_at: Vec3::ZERO,
            move_speed: 10.0,
            look_sensitivity: 0.003,
            fov_degrees: 45.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub move_speed: f32,
    pub look_sensitivity: f32,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

const PITCH_LIMIT_DEGREES: f32 = 89.0;

impl FlyCamera {
    pub fn from_config(config: &CameraConfig) -> Self {
        let mut camera = Self {
            position: config.position,
            yaw: 0.0,
            pitch: 0.0,
            move_speed: config.move_speed,
            look_sensitivity: config.look_sensitivity,
            fov: config.fov_degrees.to_radians(),
            near: 0.1,
            far: 1000.0,
        };
        camera.look_at(config.look_at);
        camera
    }

    /// Turn to face `target`. A target at the camera position is ignored.
    pub fn look_at(&mut self, target: Vec3) {
        let dir = (target - self.position).normalize_or_zero();
        if dir == Vec3::ZERO {
            return;
        }
        self.yaw = dir.x.atan2(-dir.z);
        let limit = PITCH_LIMIT_DEGREES.to_radians();
        self.pitch = dir.y.clamp(-1.0, 1.0).asin().clamp(-limit, limit);
    }

    /// Unit view direction.
    pub fn direction(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.direction().cross(Vec3::Y).normalize()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.direction(), Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect.max(1e-3), self.near, self.far)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    pub fn handle_mouse_look(&mut self, delta_x: f32, delta_y: f32) {
        self.yaw += delta_x * self.look_sensitivity;
        self.pitch -= delta_y * self.look_sensitivity;
        let limit = PITCH_LIMIT_DEGREES.to_radians();
        self.pitch = self.pitch.clamp(-limit, limit);
    }

    /// Move along the view direction. `axes` is (right, up, forward) intent
    /// in -1..=1; up is world-up.
    pub fn update_movement(&mut self, axes: Vec3, delta_time: f32) {
        let step = self.move_speed * delta_time;
        self.position += self.right() * axes.x * step;
        self.position.y += axes.y * step;
        self.position += self.direction() * axes.z * step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_looks_down_negative_z() {
        let camera = FlyCamera::default();
        let dir = camera.direction();
        assert_relative_eq!(dir.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(dir.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(dir.z, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_look_at_points_toward_target() {
        let config = CameraConfig {
            position: Vec3::new(0.0, 4.0, 12.0),
            look_at: Vec3::new(2.0, 2.0, 0.0),
            ..Default::default()
        };
        let camera = FlyCamera::from_config(&config);
        let expected = (config.look_at - config.position).normalize();
        let dir = camera.direction();
        assert_relative_eq!(dir.x, expected.x, epsilon = 1e-4);
        assert_relative_eq!(dir.y, expected.y, epsilon = 1e-4);
        assert_relative_eq!(dir.z, expected.z, epsilon = 1e-4);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = FlyCamera::default();
        camera.handle_mouse_look(0.0, -100_000.0);
        assert!(camera.pitch <= PITCH_LIMIT_DEGREES.to_radians() + 1e-6);
    }

    #[test]
    fn test_movement_scales_with_dt() {
        let mut camera = FlyCamera::default();
        camera.move_speed = 10.0;
        camera.update_movement(Vec3::new(0.0, 0.0, 1.0), 0.5);
        assert_relative_eq!(camera.position.z, 5.0, epsilon = 1e-4);

        camera.update_movement(Vec3::new(0.0, 1.0, 0.0), 0.1);
        assert_relative_eq!(camera.position.y, 1.0, epsilon = 1e-4);
    }
}
