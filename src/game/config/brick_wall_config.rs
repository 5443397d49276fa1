use std::path::PathBuf;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::app::AppConfig;
use crate::audio::SpatialConfig;
use crate::camera::CameraConfig;
use crate::config::Validate;
use crate::game::systems::{CannonballConfig, Floor, WallLayout};
use crate::physics::BallisticsConfig;

use super::BindingOverride;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    /// Played once per shot, ignoring listener position
    pub gun_sound: PathBuf,
    pub gun_volume: f32,
    /// Looped at `music_position`, attenuated by listener distance
    pub music: PathBuf,
    pub music_volume: f32,
    pub music_position: Vec3,
    pub spatial: SpatialConfig,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            gun_sound: PathBuf::from("assets/Sound/Effects/Gun.wav"),
            gun_volume: 2.0,
            music: PathBuf::from("assets/Sounds/Action_Movie.wav"),
            music_volume: 3.0,
            music_position: Vec3::ZERO,
            spatial: SpatialConfig::default(),
        }
    }
}

/// Settings for the brick-wall cannon range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickWallConfig {
    pub app: AppConfig,
    pub camera: CameraConfig,
    pub layout: WallLayout,
    /// z of each wall's centre plane
    pub wall_z: Vec<f32>,
    pub floor: Floor,
    pub cannonball: CannonballConfig,
    pub ballistics: BallisticsConfig,
    pub audio: AudioConfig,
    pub hud_color: [f32; 4],
    pub bindings: Vec<BindingOverride>,
}

impl Default for BrickWallConfig {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            camera: CameraConfig {
                position: Vec3::new(0.0, 4.0, 12.0),
                look_at: Vec3::new(2.0, 2.0, 0.0),
                move_speed: 10.0,
                ..CameraConfig::default()
            },
            layout: WallLayout::default(),
            wall_z: vec![4.0, 1.0, -2.0],
            floor: Floor::default(),
            cannonball: CannonballConfig::default(),
            ballistics: BallisticsConfig::vacuum(),
            audio: AudioConfig::default(),
            hud_color: [0.0, 0.0, 1.0, 1.0],
            bindings: Vec::new(),
        }
    }
}

fn positive(name: &str, value: f32) -> Result<(), String> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(format!("{} must be positive, got {}", name, value))
    }
}

impl Validate for BrickWallConfig {
    fn validate(&self) -> Result<(), String> {
        positive("layout.brick_mass", self.layout.brick_mass)?;
        let half = self.layout.brick_half_extents;
        positive("layout.brick_half_extents", half.min_element())?;
        positive("cannonball.radius", self.cannonball.radius)?;
        positive("cannonball.mass", self.cannonball.mass)
    }
}
