//! Distance attenuation for positional sounds.

use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpatialConfig {
    /// Beyond this the sound is inaudible
    pub max_distance: f32,
    /// Within this there is no falloff
    pub reference_distance: f32,
    /// 1.0 = linear, 2.0 = quadratic
    pub falloff_exponent: f32,
}

impl Default for SpatialConfig {
    fn default() -> Self {
        Self {
            max_distance: 100.0,
            reference_distance: 10.0,
            falloff_exponent: 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpatialAudio {
    config: SpatialConfig,
    listener_position: Vec3,
}

impl SpatialAudio {
    pub fn new(config: SpatialConfig) -> Self {
        Self {
            config,
            listener_position: Vec3::ZERO,
        }
    }

    pub fn set_listener_position(&mut self, position: Vec3) {
        self.listener_position = position;
    }

    pub fn listener_position(&self) -> Vec3 {
        self.listener_position
    }

    /// Gain factor in 0..=1 for a sound at `sound_position`.
    pub fn calculate_attenuation(&self, sound_position: Vec3) -> f32 {
        let distance = sound_position.distance(self.listener_position);

        if distance > self.config.max_distance {
            return 0.0;
        }
        if distance <= self.config.reference_distance {
            return 1.0;
        }

        let span = (self.config.max_distance - self.config.reference_distance).max(f32::EPSILON);
        let normalized = (distance - self.config.reference_distance) / span;
        (1.0 - normalized.powf(self.config.falloff_exponent)).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_attenuation_at_reference_distance() {
        let spatial = SpatialAudio::new(SpatialConfig::default());
        assert_eq!(spatial.calculate_attenuation(Vec3::new(10.0, 0.0, 0.0)), 1.0);
    }

    #[test]
    fn test_attenuation_beyond_max_distance() {
        let spatial = SpatialAudio::new(SpatialConfig::default());
        assert_eq!(spatial.calculate_attenuation(Vec3::new(0.0, 0.0, 200.0)), 0.0);
    }

    #[test]
    fn test_linear_falloff_follows_listener() {
        let mut spatial = SpatialAudio::new(SpatialConfig::default());
        spatial.set_listener_position(Vec3::new(0.0, 0.0, 55.0));
        assert_relative_eq!(spatial.calculate_attenuation(Vec3::ZERO), 0.5, epsilon = 1e-5);
    }
}
