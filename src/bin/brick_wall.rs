//! Brick Wall - cannon range
//!
//! Run with: `cargo run --bin brick_wall [config.json]`
//!
//! Controls:
//! - Left click (on release): Fire a cannonball where you look
//! - WASD / Q / Z: Fly the camera
//! - Mouse right-drag: Look around
//! - ESC: Exit

use std::path::PathBuf;

use volley_engine::AppError;
use volley_engine::app::run_scene;
use volley_engine::config::load_or_default;
use volley_engine::game::config::BrickWallConfig;
use volley_engine::game::scenes::BrickWallScene;

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args().nth(1).map(PathBuf::from);
    let config: BrickWallConfig = load_or_default(path.as_deref())?;

    let app = config.app;
    run_scene(BrickWallScene::new(config), app)
}
