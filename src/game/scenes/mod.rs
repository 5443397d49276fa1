//! Scene Module
//!
//! The two playable scenes, each implementing [`crate::app::Scene`].

pub mod arrows_scene;
pub mod brick_wall_scene;

pub use arrows_scene::{ArrowsScene, arrow_mesh, ship_meshes};
pub use brick_wall_scene::BrickWallScene;
