//! Input and Config Tests - Bindings, Release Semantics and JSON Settings
//!
//! Physical triggers go through `InputState` and the per-scene presets;
//! config files are partial JSON layered over defaults.

use glam::Vec3;
use volley_engine::config::{ConfigError, Validate, from_json_str, load_or_default, to_json_string};
use volley_engine::game::arrow::ArrowMotion;
use volley_engine::game::config::{ArrowsConfig, BindingOverride, BrickWallConfig};
use volley_engine::game::events::SceneEvent;
use volley_engine::game::input::{apply_overrides, arrows_bindings, brick_wall_bindings, scene_event};
use volley_engine::input::{ActionEdge, InputAction, InputState, KeyCode, MouseButton, Trigger};

// ============================================================================
// Binding Tests
// ============================================================================

#[test]
fn test_arrow_keys_fire_on_release() {
    let mut input = InputState::new(arrows_bindings());

    let press = input.handle_trigger(KeyCode::Space.into(), true);
    assert_eq!(press, Some(ActionEdge::Pressed(InputAction::Fire)));
    assert_eq!(press.and_then(scene_event), None);

    let release = input.handle_trigger(KeyCode::Space.into(), false);
    assert_eq!(release.and_then(scene_event), Some(SceneEvent::Fire));

    input.handle_trigger(KeyCode::R.into(), true);
    let release = input.handle_trigger(KeyCode::R.into(), false);
    assert_eq!(release.and_then(scene_event), Some(SceneEvent::Reset));
}

#[test]
fn test_left_click_shoots_on_release() {
    let mut input = InputState::new(brick_wall_bindings());
    let press = input.handle_trigger(MouseButton::Left.into(), true);
    assert_eq!(press.and_then(scene_event), None);
    assert!(input.mouse.is_pressed(MouseButton::Left));

    let release = input.handle_trigger(MouseButton::Left.into(), false);
    assert_eq!(release.and_then(scene_event), Some(SceneEvent::Shoot));
}

#[test]
fn test_scene_keys_do_not_leak_between_scenes() {
    let mut wall = InputState::new(brick_wall_bindings());
    assert_eq!(wall.handle_trigger(KeyCode::Space.into(), false), None);

    let mut arrows = InputState::new(arrows_bindings());
    assert_eq!(arrows.handle_trigger(MouseButton::Left.into(), false), None);
}

#[test]
fn test_movement_is_held_not_evented() {
    let mut input = InputState::new(arrows_bindings());
    let edge = input.handle_trigger(KeyCode::Q.into(), true);
    assert_eq!(edge.and_then(scene_event), None);
    assert_eq!(input.movement_axes(), Vec3::new(0.0, 1.0, 0.0));

    let edge = input.handle_trigger(KeyCode::Q.into(), false);
    assert_eq!(edge.and_then(scene_event), None);
    assert_eq!(input.movement_axes(), Vec3::ZERO);
}

#[test]
fn test_override_moves_fire_to_mouse() {
    let mut bindings = arrows_bindings();
    apply_overrides(
        &mut bindings,
        &[BindingOverride {
            trigger: Trigger::Mouse(MouseButton::Left),
            action: InputAction::Fire,
        }],
    );
    assert_eq!(bindings.get_action(KeyCode::Space), None);
    assert_eq!(bindings.get_action(MouseButton::Left), Some(InputAction::Fire));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_empty_json_is_default() {
    let arrows: ArrowsConfig = from_json_str("{}").unwrap();
    assert_eq!(arrows, ArrowsConfig::default());

    let wall: BrickWallConfig = from_json_str("{}").unwrap();
    assert_eq!(wall, BrickWallConfig::default());
}

#[test]
fn test_partial_brick_wall_config() {
    let json = r#"{
        "wall_z": [0.0],
        "layout": { "rows": 4 },
        "cannonball": { "speed": 25.0 },
        "audio": { "enabled": false }
    }"#;
    let config: BrickWallConfig = from_json_str(json).unwrap();

    assert_eq!(config.wall_z, vec![0.0]);
    assert_eq!(config.layout.rows, 4);
    assert_eq!(config.layout.bricks_per_row, 6);
    assert_eq!(config.cannonball.speed, 25.0);
    assert_eq!(config.cannonball.radius, 0.4);
    assert!(!config.audio.enabled);
    assert_eq!(config.audio.gun_volume, 2.0);
    assert_eq!(config.camera.position, Vec3::new(0.0, 4.0, 12.0));
}

#[test]
fn test_arrows_config_with_time_scaled_motion_and_override() {
    let json = r#"{
        "motion": { "mode": "time_scaled", "rate": 0.6 },
        "bindings": [ { "trigger": { "Key": "F" }, "action": "Fire" } ]
    }"#;
    let config: ArrowsConfig = from_json_str(json).unwrap();
    assert_eq!(config.motion, ArrowMotion::TimeScaled { rate: 0.6 });
    assert_eq!(config.bindings.len(), 1);
    assert_eq!(config.bindings[0].trigger, Trigger::Key(KeyCode::F));
}

#[test]
fn test_config_survives_json() {
    let mut config = BrickWallConfig::default();
    config.wall_z = vec![3.0, -3.0];
    config.hud_color = [1.0, 1.0, 0.0, 1.0];

    let json = to_json_string(&config).unwrap();
    let back: BrickWallConfig = from_json_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_unknown_action_is_rejected() {
    let json = r#"{ "bindings": [ { "trigger": { "Key": "F" }, "action": "Teleport" } ] }"#;
    assert!(from_json_str::<ArrowsConfig>(json).is_err());
}

#[test]
fn test_massless_brick_config_is_rejected_on_load() {
    let path = std::env::temp_dir().join(format!("volley-massless-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "layout": { "brick_mass": 0.0 } }"#).unwrap();

    let err = load_or_default::<BrickWallConfig>(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
    assert!(err.to_string().contains("brick_mass"));
    let _ = std::fs::remove_file(path);

    assert!(BrickWallConfig::default().validate().is_ok());
}
