//! Ships and arrow.
//!
//! A blue ship floats above a red one. Space launches the arrow from the
//! blue ship toward the red one, R puts it back.

use glam::Vec3;

use crate::app::{Scene, SceneControl};
use crate::camera::{CameraConfig, FlyCamera};
use crate::game::arrow::ArrowFlightController;
use crate::game::config::ArrowsConfig;
use crate::game::events::{EventQueue, SceneEvent};
use crate::game::input::{apply_overrides, arrows_bindings, scene_event};
use crate::game::types::{
    BLUE, BROWN, GRAY, Mesh, RED, WHITE, generate_box, generate_cone, generate_cylinder,
};
use crate::game::ui::draw_top_left;
use crate::input::{ActionEdge, InputAction, KeyBindings, Trigger};

const SHIP_HALF_EXTENTS: Vec3 = Vec3::new(10.0, 1.0, 1.0);
const SHIP_Z: f32 = -5.0;
const SHAFT_RADIUS: f32 = 0.2;
const SHAFT_LENGTH: f32 = 3.0;
const TIP_RADIUS: f32 = 0.5;
const TIP_LENGTH: f32 = 0.5;
const SEGMENTS: u32 = 24;

/// Blue ship at y = 5, red ship at y = -5.
pub fn ship_meshes() -> Mesh {
    Mesh::combine(&[
        generate_box(Vec3::new(0.0, 5.0, SHIP_Z), SHIP_HALF_EXTENTS, BLUE),
        generate_box(Vec3::new(0.0, -5.0, SHIP_Z), SHIP_HALF_EXTENTS, RED),
    ])
}

/// Arrow geometry relative to its pivot: shaft from y = 1 to 4, head
/// pointing down from y = 1, fletching at the top.
pub fn arrow_mesh() -> Mesh {
    Mesh::combine(&[
        generate_cylinder(Vec3::new(0.0, 2.5, SHIP_Z), Vec3::Y, SHAFT_RADIUS, SHAFT_LENGTH, BROWN, SEGMENTS),
        generate_cone(Vec3::new(0.0, 1.0, SHIP_Z), Vec3::NEG_Y, TIP_RADIUS, TIP_LENGTH, GRAY, SEGMENTS),
        generate_cone(Vec3::new(0.0, 4.0, SHIP_Z), Vec3::NEG_Y, TIP_RADIUS, TIP_LENGTH, WHITE, SEGMENTS),
    ])
}

pub struct ArrowsScene {
    config: ArrowsConfig,
    arrow: ArrowFlightController,
    events: EventQueue,
    ships: Mesh,
    arrow_mesh: Mesh,
    help: String,
}

impl ArrowsScene {
    pub fn new(config: ArrowsConfig) -> Self {
        let arrow = ArrowFlightController::with_motion(config.motion);
        let help = help_text(&bindings_for(&config));
        Self {
            config,
            arrow,
            events: EventQueue::new(),
            ships: ship_meshes(),
            arrow_mesh: arrow_mesh(),
            help,
        }
    }

    pub fn arrow(&self) -> &ArrowFlightController {
        &self.arrow
    }

    /// Queue a scene event directly, bypassing input.
    pub fn push_event(&mut self, event: SceneEvent) {
        self.events.push(event);
    }
}

fn bindings_for(config: &ArrowsConfig) -> KeyBindings {
    let mut bindings = arrows_bindings();
    apply_overrides(&mut bindings, &config.bindings);
    bindings
}

fn help_text(bindings: &KeyBindings) -> String {
    let label = |action| match bindings.get_trigger(action) {
        Some(Trigger::Key(key)) => key.label().to_uppercase(),
        Some(Trigger::Mouse(button)) => format!("{:?} CLICK", button).to_uppercase(),
        None => "UNBOUND".to_string(),
    };
    format!("{}: FIRE  {}: RELOAD", label(InputAction::Fire), label(InputAction::Reload))
}

impl Scene for ArrowsScene {
    fn title(&self) -> String {
        "Arrows".to_string()
    }

    fn camera(&self) -> CameraConfig {
        self.config.camera
    }

    fn bindings(&self) -> KeyBindings {
        bindings_for(&self.config)
    }

    fn handle_action(&mut self, edge: ActionEdge, _camera: &FlyCamera) -> SceneControl {
        match scene_event(edge) {
            Some(SceneEvent::Exit) => SceneControl::Exit,
            Some(event) => {
                self.events.push(event);
                SceneControl::Continue
            }
            None => SceneControl::Continue,
        }
    }

    fn update(&mut self, dt: f32, _camera: &FlyCamera) {
        let events: Vec<_> = self.events.drain().collect();
        for event in events {
            match event {
                SceneEvent::Fire => self.arrow.on_fire_event(),
                SceneEvent::Reset => self.arrow.on_reset_event(),
                SceneEvent::Shoot | SceneEvent::Exit => {}
            }
        }
        self.arrow.on_frame_update(dt);
    }

    fn build_world_mesh(&self) -> Mesh {
        let mut mesh = self.ships.clone();
        mesh.merge(&self.arrow_mesh.translated(self.arrow.position()));
        mesh
    }

    fn build_ui_mesh(&self, width: f32, height: f32) -> Mesh {
        let mut mesh = Mesh::new();
        draw_top_left(&mut mesh, &self.help, 2.0, WHITE, width, height);
        mesh
    }

    fn ambient(&self) -> f32 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::BindingOverride;
    use crate::input::KeyCode;
    use approx::assert_relative_eq;

    fn camera(scene: &ArrowsScene) -> FlyCamera {
        FlyCamera::from_config(&scene.camera())
    }

    #[test]
    fn test_fire_on_release_moves_arrow() {
        let mut scene = ArrowsScene::new(ArrowsConfig::default());
        let cam = camera(&scene);

        scene.handle_action(ActionEdge::Pressed(InputAction::Fire), &cam);
        scene.update(0.016, &cam);
        assert!(!scene.arrow().is_firing());

        scene.handle_action(ActionEdge::Released(InputAction::Fire), &cam);
        scene.update(0.016, &cam);
        assert!(scene.arrow().is_firing());
        assert_relative_eq!(scene.arrow().position().y, -0.01, epsilon = 1e-6);
    }

    #[test]
    fn test_reload_returns_arrow() {
        let mut scene = ArrowsScene::new(ArrowsConfig::default());
        let cam = camera(&scene);
        scene.push_event(SceneEvent::Fire);
        for _ in 0..10 {
            scene.update(0.016, &cam);
        }
        scene.handle_action(ActionEdge::Released(InputAction::Reload), &cam);
        scene.update(0.016, &cam);
        assert!(!scene.arrow().is_firing());
        assert_eq!(scene.arrow().position(), Vec3::ZERO);
    }

    #[test]
    fn test_exit_action() {
        let mut scene = ArrowsScene::new(ArrowsConfig::default());
        let cam = camera(&scene);
        assert_eq!(scene.handle_action(ActionEdge::Released(InputAction::Exit), &cam), SceneControl::Exit);
    }

    #[test]
    fn test_world_mesh_follows_arrow() {
        let mut scene = ArrowsScene::new(ArrowsConfig::default());
        let cam = camera(&scene);
        let lowest = |mesh: &Mesh| mesh.vertices.iter().map(|v| v.position[1]).fold(f32::MAX, f32::min);

        let ships_only = ship_meshes();
        let before = scene.build_world_mesh();
        assert_eq!(before.vertices.len(), ships_only.vertices.len() + arrow_mesh().vertices.len());
        let tip_before = lowest(&Mesh { vertices: before.vertices[ships_only.vertices.len()..].to_vec(), indices: Vec::new() });

        scene.push_event(SceneEvent::Fire);
        for _ in 0..100 {
            scene.update(0.016, &cam);
        }
        let after = scene.build_world_mesh();
        let tip_after = lowest(&Mesh { vertices: after.vertices[ships_only.vertices.len()..].to_vec(), indices: Vec::new() });
        assert_relative_eq!(tip_before - tip_after, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_arrow_head_points_down_from_pivot() {
        let tip = arrow_mesh().vertices.iter().map(|v| v.position[1]).fold(f32::MAX, f32::min);
        assert_relative_eq!(tip, 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_help_text_tracks_overrides() {
        let mut config = ArrowsConfig::default();
        config.bindings.push(BindingOverride {
            trigger: KeyCode::F.into(),
            action: InputAction::Fire,
        });
        let scene = ArrowsScene::new(config);
        assert!(scene.help.starts_with("F: FIRE"));
    }
}
