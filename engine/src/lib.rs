//! Volley Engine Library
//!
//! A small wgpu/winit shell for two instructional scenes: an arrow dropped
//! between two ships, and a cannon range of brick walls.
//!
//! # Modules
//!
//! - [`app`] - Window, event loop and the [`app::Scene`] trait
//! - [`render`] - Mesh and UI passes on wgpu
//! - [`input`] - Platform-agnostic key/mouse bindings to named actions
//! - [`camera`] - Free-flying camera
//! - [`audio`] - rodio playback with distance attenuation
//! - [`physics`] - Ballistics and collision queries
//! - [`config`] - JSON config loading
//! - [`game`] - The scenes themselves
//!
//! # Example
//!
//! ```ignore
//! use volley_engine::app::{run_scene, AppConfig};
//! use volley_engine::game::scenes::ArrowsScene;
//!
//! let scene = ArrowsScene::new(Default::default());
//! run_scene(scene, AppConfig::default())?;
//! ```

pub mod app;
pub mod audio;
pub mod camera;
pub mod config;
pub mod input;
pub mod physics;
pub mod render;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use app::{AppConfig, AppError, Scene, SceneControl, run_scene};
pub use camera::{CameraConfig, FlyCamera};
pub use input::{ActionEdge, InputAction, InputState, KeyBindings, KeyCode, MouseButton, Trigger};
pub use render::{Mesh, Vertex};
