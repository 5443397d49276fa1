//! Brick Wall Tests - Walls, Cannonballs and the Shot Counter
//!
//! Runs the cannon range headless (silent audio) and checks wall layout,
//! hits, support cascades and settling.

use approx::assert_relative_eq;
use glam::Vec3;
use volley_engine::audio::AudioSystem;
use volley_engine::camera::CameraConfig;
use volley_engine::game::config::BrickWallConfig;
use volley_engine::game::events::SceneEvent;
use volley_engine::game::scenes::BrickWallScene;
use volley_engine::game::systems::{BrickState, BrickSystem, Floor, WallLayout};
use volley_engine::input::{ActionEdge, InputAction};
use volley_engine::{FlyCamera, Scene};

const DT: f32 = 1.0 / 60.0;

fn silent_scene() -> BrickWallScene {
    BrickWallScene::with_audio(BrickWallConfig::default(), AudioSystem::silent())
}

/// Camera level with row 4 of the front wall, looking straight down -Z.
fn aimed_camera() -> FlyCamera {
    FlyCamera::from_config(&CameraConfig {
        position: Vec3::new(0.12, 1.2, 12.0),
        look_at: Vec3::new(0.12, 1.2, 0.0),
        ..CameraConfig::default()
    })
}

fn run(scene: &mut BrickWallScene, camera: &FlyCamera, frames: usize) {
    for _ in 0..frames {
        scene.update(DT, camera);
    }
}

// ============================================================================
// Layout Tests
// ============================================================================

#[test]
fn test_default_range_layout() {
    let scene = silent_scene();
    let bricks = scene.bricks().bricks();
    assert_eq!(bricks.len(), 3 * 15 * 6);
    assert_eq!(scene.bricks().standing_count(), 270);
    assert_relative_eq!(scene.bricks().floor().top(), 0.0);

    let lowest = bricks.iter().map(|b| b.center.y - b.half_extents.y).fold(f32::MAX, f32::min);
    assert_relative_eq!(lowest, 0.0, epsilon = 1e-5);

    for (wall, z) in [4.0, 1.0, -2.0].into_iter().enumerate() {
        assert!(bricks.iter().filter(|b| b.wall == wall).all(|b| b.center.z == z));
    }
}

#[test]
fn test_rows_are_staggered() {
    let system = BrickSystem::new(&WallLayout::default(), &[0.0], Floor::default());
    let first = |row| system.find(0, row, 0).map(|i| system.bricks()[i].center.x);
    assert_eq!(first(0), Some(0.12));
    assert_eq!(first(1), Some(-0.12));
    assert_eq!(first(2), Some(0.12));
}

// ============================================================================
// Shooting Tests
// ============================================================================

#[test]
fn test_shot_counter_counts_every_shot() {
    let mut scene = silent_scene();
    let camera = aimed_camera();
    for n in 1..=7u32 {
        scene.handle_action(ActionEdge::Pressed(InputAction::Shoot), &camera);
        scene.handle_action(ActionEdge::Released(InputAction::Shoot), &camera);
        scene.update(DT, &camera);
        assert_eq!(scene.shots().count(), n);
    }
    assert_eq!(scene.shots().hud_text(), "SHOTS FIRED: 7\n(left click to fire)");
}

#[test]
fn test_cannonball_knocks_brick_loose() {
    let mut scene = silent_scene();
    let camera = aimed_camera();
    scene.push_event(SceneEvent::Shoot);

    run(&mut scene, &camera, 30);

    assert!(scene.bricks().standing_count() < 270);
    let hit = scene
        .bricks()
        .bricks()
        .iter()
        .any(|b| b.wall == 0 && !matches!(b.state, BrickState::Standing));
    assert!(hit, "front wall should have lost a brick");
    assert_eq!(scene.shots().count(), 1);
}

#[test]
fn test_range_settles_after_shots() {
    let mut scene = silent_scene();
    let camera = aimed_camera();
    for _ in 0..3 {
        scene.push_event(SceneEvent::Shoot);
        run(&mut scene, &camera, 20);
    }
    run(&mut scene, &camera, 600);

    assert!(scene.bricks().is_settled());
    let floor_top = scene.bricks().floor().top();
    for brick in scene.bricks().bricks() {
        assert!(brick.center.y - brick.half_extents.y >= floor_top - 1e-3);
    }
}

#[test]
fn test_ball_rests_on_floor() {
    let mut scene = silent_scene();
    let camera = FlyCamera::from_config(&CameraConfig {
        position: Vec3::new(8.0, 3.0, 0.0),
        look_at: Vec3::new(8.0, 0.0, 0.0),
        ..CameraConfig::default()
    });
    scene.push_event(SceneEvent::Shoot);
    run(&mut scene, &camera, 60);

    let ball = scene.balls().iter().next().expect("ball should remain on the floor");
    assert!(ball.resting);
    assert_relative_eq!(ball.position.y, ball.radius, epsilon = 1e-4);
}

// ============================================================================
// Support Cascade Tests
// ============================================================================

#[test]
fn test_cascade_drops_unsupported_edge_brick() {
    let mut system = BrickSystem::new(&WallLayout::default(), &[0.0], Floor::default());
    let Some(corner) = system.find(0, 0, 0) else {
        panic!("missing corner brick");
    };
    let dropped = system.knock_loose(corner, Vec3::ZERO);
    assert_eq!(dropped, 2);

    for _ in 0..600 {
        system.update(DT);
    }
    assert!(system.is_settled());
    assert_eq!(system.resting_count(), 2);
    for brick in system.bricks().iter().filter(|b| b.state == BrickState::Resting) {
        assert!(brick.center.y - brick.half_extents.y >= -1e-4);
    }
}

#[test]
fn test_knocking_loose_twice_is_a_no_op() {
    let mut system = BrickSystem::new(&WallLayout::default(), &[0.0], Floor::default());
    let Some(index) = system.find(0, 7, 3) else {
        panic!("missing brick");
    };
    assert!(system.knock_loose(index, Vec3::ZERO) >= 1);
    assert_eq!(system.knock_loose(index, Vec3::ZERO), 0);
}
