//! Cannonball lifecycle management system.
//!
//! Owns the active cannonballs and their ballistics config, providing
//! fire / update / iterate operations with zero GPU coupling. Collision with
//! the walls is resolved by the caller from the returned per-ball updates.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::physics::ballistics::{BallisticsConfig, Projectile, ProjectileState};

use super::brick_system::Floor;

/// Cannonball properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CannonballConfig {
    pub radius: f32,
    pub mass: f32,
    /// Muzzle speed along the view direction (m/s)
    pub speed: f32,
    /// Oldest balls are removed beyond this
    pub max_active: usize,
}

impl Default for CannonballConfig {
    fn default() -> Self {
        Self {
            radius: 0.4,
            mass: 1.0,
            speed: 60.0,
            max_active: 64,
        }
    }
}

/// Per-ball data returned by [`ProjectileSystem::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileUpdate {
    /// Index into the ball list (valid until the next mutation)
    pub index: usize,
    /// Position before this step's integration
    pub prev_pos: Vec3,
    /// Position after this step's integration
    pub new_pos: Vec3,
    pub state: ProjectileState,
}

pub struct ProjectileSystem {
    /// Oldest first
    projectiles: Vec<Projectile>,
    ballistics: BallisticsConfig,
    cannonball: CannonballConfig,
}

impl ProjectileSystem {
    pub fn new(ballistics: BallisticsConfig, cannonball: CannonballConfig) -> Self {
        Self {
            projectiles: Vec::new(),
            ballistics,
            cannonball,
        }
    }

    /// Launch a cannonball from `position` along `direction`.
    ///
    /// Returns `true` if an old ball had to be dropped to make room.
    pub fn fire(&mut self, position: Vec3, direction: Vec3) -> bool {
        let mut ball = Projectile::spawn(position, direction, self.cannonball.speed, self.cannonball.mass);
        ball.radius = self.cannonball.radius;

        let mut evicted = false;
        while self.projectiles.len() >= self.cannonball.max_active.max(1) {
            self.projectiles.remove(0);
            evicted = true;
        }
        self.projectiles.push(ball);
        evicted
    }

    /// Integrate every ball and settle the ones that reached the floor.
    ///
    /// Expired balls are removed after the updates are collected, so the
    /// returned indices refer to the list as it was during integration.
    pub fn update(&mut self, delta: f32, floor: &Floor) -> Vec<ProjectileUpdate> {
        let mut updates = Vec::with_capacity(self.projectiles.len());

        for (index, ball) in self.projectiles.iter_mut().enumerate() {
            let prev_pos = ball.position;
            let mut state = ball.integrate(&self.ballistics, delta);

            let rest_y = floor.top() + ball.radius;
            if state == ProjectileState::Flying && ball.position.y <= rest_y && floor.covers(ball.position) && prev_pos.y >= rest_y - ball.radius {
                ball.come_to_rest(Vec3::new(ball.position.x, rest_y, ball.position.z));
                state = ProjectileState::Resting;
            }

            updates.push(ProjectileUpdate {
                index,
                prev_pos,
                new_pos: ball.position,
                state,
            });
        }

        updates
    }

    /// Drop expired balls.
    pub fn remove_expired(&mut self) -> usize {
        let before = self.projectiles.len();
        self.projectiles.retain(|ball| ball.active);
        before - self.projectiles.len()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Projectile> {
        self.projectiles.get_mut(index)
    }

    pub fn active_count(&self) -> usize {
        self.projectiles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter()
    }

    pub fn cannonball(&self) -> &CannonballConfig {
        &self.cannonball
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn system(max_active: usize) -> ProjectileSystem {
        ProjectileSystem::new(
            BallisticsConfig::vacuum(),
            CannonballConfig {
                max_active,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_fire_uses_muzzle_speed() {
        let mut balls = system(64);
        balls.fire(Vec3::new(0.0, 4.0, 12.0), Vec3::new(0.0, 0.0, -2.0));
        let ball = balls.iter().next().unwrap();
        assert_relative_eq!(ball.velocity.length(), 60.0, epsilon = 1e-3);
        assert_eq!(ball.radius, 0.4);
        assert_eq!(ball.mass, 1.0);
    }

    #[test]
    fn test_oldest_ball_evicted() {
        let mut balls = system(2);
        assert!(!balls.fire(Vec3::new(1.0, 1.0, 0.0), Vec3::Z));
        assert!(!balls.fire(Vec3::new(2.0, 1.0, 0.0), Vec3::Z));
        assert!(balls.fire(Vec3::new(3.0, 1.0, 0.0), Vec3::Z));
        let xs: Vec<f32> = balls.iter().map(|b| b.position.x).collect();
        assert_eq!(xs, vec![2.0, 3.0]);
    }

    #[test]
    fn test_ball_rests_on_floor() {
        let mut balls = system(64);
        let floor = Floor::default();
        balls.fire(Vec3::new(0.0, 3.0, 0.0), Vec3::ZERO);
        for _ in 0..240 {
            balls.update(1.0 / 60.0, &floor);
        }
        let ball = balls.iter().next().unwrap();
        assert!(ball.resting);
        assert_relative_eq!(ball.position.y, 0.4, epsilon = 1e-5);
    }

    #[test]
    fn test_ball_off_floor_expires() {
        let mut balls = system(64);
        let floor = Floor::default();
        balls.fire(Vec3::new(0.0, 3.0, -20.0), Vec3::ZERO);
        for _ in 0..600 {
            balls.update(1.0 / 60.0, &floor);
        }
        assert_eq!(balls.remove_expired(), 1);
        assert_eq!(balls.active_count(), 0);
    }
}
