//! Game Module
//!
//! Scene logic built on top of the engine: the arrow flight controller,
//! the brick walls and cannonballs, HUD text and per-scene config.

pub mod arrow;
pub mod config;
pub mod events;
pub mod input;
pub mod scenes;
pub mod shot_counter;
pub mod systems;
pub mod types;
pub mod ui;

pub use arrow::{ArrowFlightController, ArrowMotion, ArrowState, FlightState, STEP, STOP_THRESHOLD};
pub use config::{ArrowsConfig, BrickWallConfig};
pub use events::{EventQueue, SceneEvent};
pub use scenes::{ArrowsScene, BrickWallScene};
pub use shot_counter::ShotCounter;
