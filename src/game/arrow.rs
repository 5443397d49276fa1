//! Arrow Flight Controller
//!
//! Two-state machine for the arrow in the ships scene. Fire starts the
//! arrow moving down, reset puts it back at the origin, and every frame
//! while firing the arrow drops until it reaches [`STOP_THRESHOLD`]. At the
//! threshold it stays put but keeps reporting `firing == true`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Lowest y the arrow reaches (top face of the red ship, relative to the
/// arrow pivot)
pub const STOP_THRESHOLD: f32 = -4.7;

/// Distance moved per frame in the default motion mode
pub const STEP: f32 = 0.01;

/// How far the arrow moves on each `on_frame_update`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ArrowMotion {
    /// Fixed distance per frame, ignoring elapsed time.
    PerFrame { step: f32 },
    /// `elapsed * rate` per frame, clamped at the threshold.
    TimeScaled { rate: f32 },
}

impl Default for ArrowMotion {
    fn default() -> Self {
        ArrowMotion::PerFrame { step: STEP }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightState {
    Idle,
    Firing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowState {
    /// Only `y` is ever changed
    pub position: Vec3,
    pub firing: bool,
}

impl Default for ArrowState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            firing: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArrowFlightController {
    state: ArrowState,
    motion: ArrowMotion,
}

impl Default for ArrowFlightController {
    fn default() -> Self {
        Self::new()
    }
}

impl ArrowFlightController {
    pub fn new() -> Self {
        Self::with_motion(ArrowMotion::default())
    }

    pub fn with_motion(motion: ArrowMotion) -> Self {
        Self {
            state: ArrowState::default(),
            motion,
        }
    }

    /// Start the arrow moving. Firing again while already firing changes
    /// nothing.
    pub fn on_fire_event(&mut self) {
        self.state.firing = true;
        log::info!("FIRED!");
    }

    /// Stop and return to the origin, whatever the current state.
    pub fn on_reset_event(&mut self) {
        self.state.firing = false;
        self.state.position = Vec3::ZERO;
        log::info!("Arrow reloaded");
    }

    /// Advance one frame.
    ///
    /// Returns the arrow's y after the update while firing, `None` when idle.
    pub fn on_frame_update(&mut self, elapsed: f32) -> Option<f32> {
        if !self.state.firing {
            return None;
        }

        let y = self.state.position.y;
        if y > STOP_THRESHOLD {
            self.state.position.y = match self.motion {
                ArrowMotion::PerFrame { step } => y - step,
                ArrowMotion::TimeScaled { rate } => (y - elapsed.max(0.0) * rate).max(STOP_THRESHOLD),
            };
        }

        let y = self.state.position.y;
        log::info!("arrow y loc: {}", y);
        Some(y)
    }

    pub fn state(&self) -> &ArrowState {
        &self.state
    }

    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    pub fn is_firing(&self) -> bool {
        self.state.firing
    }

    pub fn flight_state(&self) -> FlightState {
        if self.state.firing {
            FlightState::Firing
        } else {
            FlightState::Idle
        }
    }

    /// Firing but no longer moving.
    pub fn has_landed(&self) -> bool {
        self.state.firing && self.state.position.y <= STOP_THRESHOLD
    }

    pub fn motion(&self) -> ArrowMotion {
        self.motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_starts_idle_at_origin() {
        let arrow = ArrowFlightController::new();
        assert_eq!(arrow.position(), Vec3::ZERO);
        assert_eq!(arrow.flight_state(), FlightState::Idle);
    }

    #[test]
    fn test_idle_update_does_nothing() {
        let mut arrow = ArrowFlightController::new();
        assert_eq!(arrow.on_frame_update(0.016), None);
        assert_eq!(arrow.position(), Vec3::ZERO);
    }

    #[test]
    fn test_fire_is_idempotent() {
        let mut arrow = ArrowFlightController::new();
        arrow.on_fire_event();
        arrow.on_frame_update(0.016);
        let y = arrow.position().y;
        arrow.on_fire_event();
        assert!(arrow.is_firing());
        assert_eq!(arrow.position().y, y);
    }

    #[test]
    fn test_step_ignores_elapsed() {
        let mut arrow = ArrowFlightController::new();
        arrow.on_fire_event();
        arrow.on_frame_update(0.001);
        let a = arrow.position().y;
        arrow.on_frame_update(10.0);
        let b = arrow.position().y;
        assert_eq!(a, -STEP);
        assert_eq!(b, a - STEP);
    }

    #[test]
    fn test_time_scaled_motion_clamps() {
        let mut arrow = ArrowFlightController::with_motion(ArrowMotion::TimeScaled { rate: 1.0 });
        arrow.on_fire_event();
        assert_relative_eq!(arrow.on_frame_update(0.5).unwrap(), -0.5);
        arrow.on_frame_update(100.0);
        assert_eq!(arrow.position().y, STOP_THRESHOLD);
        assert!(arrow.has_landed());
    }

    #[test]
    fn test_motion_serde_tagged() {
        let motion: ArrowMotion = serde_json::from_str(r#"{ "mode": "time_scaled", "rate": 0.6 }"#).unwrap();
        assert_eq!(motion, ArrowMotion::TimeScaled { rate: 0.6 });
        let json = serde_json::to_string(&ArrowMotion::default()).unwrap();
        assert!(json.contains("per_frame"));
    }
}
