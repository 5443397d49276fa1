use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::app::AppConfig;
use crate::camera::CameraConfig;
use crate::config::Validate;
use crate::game::arrow::ArrowMotion;

use super::BindingOverride;

/// Settings for the ships-and-arrow scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowsConfig {
    pub app: AppConfig,
    pub camera: CameraConfig,
    pub motion: ArrowMotion,
    pub bindings: Vec<BindingOverride>,
}

impl Default for ArrowsConfig {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            camera: CameraConfig {
                position: Vec3::new(0.0, 0.0, 10.0),
                look_at: Vec3::ZERO,
                ..CameraConfig::default()
            },
            motion: ArrowMotion::default(),
            bindings: Vec::new(),
        }
    }
}

impl Validate for ArrowsConfig {
    fn validate(&self) -> Result<(), String> {
        match self.motion {
            ArrowMotion::PerFrame { step } if !(step.is_finite() && step > 0.0) => {
                Err(format!("motion step must be positive, got {}", step))
            }
            ArrowMotion::TimeScaled { rate } if !(rate.is_finite() && rate > 0.0) => {
                Err(format!("motion rate must be positive, got {}", rate))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::from_json_str;

    #[test]
    fn test_default_is_valid() {
        assert!(ArrowsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_motion() {
        let config: ArrowsConfig = from_json_str(r#"{ "motion": { "mode": "per_frame", "step": 0.0 } }"#).unwrap();
        assert!(config.validate().is_err());
        let config: ArrowsConfig = from_json_str(r#"{ "motion": { "mode": "time_scaled", "rate": -1.0 } }"#).unwrap();
        assert!(config.validate().is_err());
    }
}
