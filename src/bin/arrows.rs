//! Arrows - a falling arrow between two ships
//!
//! Run with: `cargo run --bin arrows [config.json]`
//!
//! Controls:
//! - Space (on release): Fire the arrow
//! - R (on release): Reload
//! - WASD / Q / Z: Fly the camera
//! - Mouse right-drag: Look around
//! - ESC: Exit

use std::path::PathBuf;

use volley_engine::AppError;
use volley_engine::app::run_scene;
use volley_engine::config::load_or_default;
use volley_engine::game::config::ArrowsConfig;
use volley_engine::game::scenes::ArrowsScene;

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args().nth(1).map(PathBuf::from);
    let config: ArrowsConfig = load_or_default(path.as_deref())?;
    log::info!("Arrow motion: {:?}", config.motion);

    let app = config.app;
    run_scene(ArrowsScene::new(config), app)
}
