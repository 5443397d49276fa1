//! Config Module
//!
//! Per-scene settings, loadable from JSON. Every struct uses
//! `#[serde(default)]`, so a file only lists what it changes.

pub mod arrows_config;
pub mod brick_wall_config;

use serde::{Deserialize, Serialize};

use crate::input::{InputAction, Trigger};

pub use arrows_config::ArrowsConfig;
pub use brick_wall_config::{AudioConfig, BrickWallConfig};

/// Rebind one action, e.g. `{ "trigger": { "Key": "F" }, "action": "Fire" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingOverride {
    pub trigger: Trigger,
    pub action: InputAction,
}
