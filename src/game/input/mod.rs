//! Input Module
//!
//! Per-scene binding presets and the translation from action edges to
//! scene events. Discrete actions fire on release.

use crate::input::{ActionEdge, InputAction, KeyBindings, KeyCode, MouseButton};

use super::config::BindingOverride;
use super::events::SceneEvent;

/// Fly camera + Space = Fire, R = Reload.
pub fn arrows_bindings() -> KeyBindings {
    let mut bindings = KeyBindings::fly_camera();
    bindings.bind(KeyCode::Space, InputAction::Fire);
    bindings.bind(KeyCode::R, InputAction::Reload);
    bindings
}

/// Fly camera + left click = Shoot.
pub fn brick_wall_bindings() -> KeyBindings {
    let mut bindings = KeyBindings::fly_camera();
    bindings.bind(MouseButton::Left, InputAction::Shoot);
    bindings
}

/// Apply config overrides on top of a preset.
pub fn apply_overrides(bindings: &mut KeyBindings, overrides: &[BindingOverride]) {
    for o in overrides {
        bindings.bind(o.trigger, o.action);
    }
}

/// Scene event for a discrete action edge. Presses and held actions
/// produce nothing.
pub fn scene_event(edge: ActionEdge) -> Option<SceneEvent> {
    let ActionEdge::Released(action) = edge else {
        return None;
    };
    match action {
        InputAction::Fire => Some(SceneEvent::Fire),
        InputAction::Reload => Some(SceneEvent::Reset),
        InputAction::Shoot => Some(SceneEvent::Shoot),
        InputAction::Exit => Some(SceneEvent::Exit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Trigger;

    #[test]
    fn test_presets() {
        let arrows = arrows_bindings();
        assert_eq!(arrows.get_action(KeyCode::Space), Some(InputAction::Fire));
        assert_eq!(arrows.get_action(KeyCode::R), Some(InputAction::Reload));
        assert_eq!(arrows.get_action(MouseButton::Left), None);

        let wall = brick_wall_bindings();
        assert_eq!(wall.get_action(MouseButton::Left), Some(InputAction::Shoot));
        assert_eq!(wall.get_action(KeyCode::Space), None);
    }

    #[test]
    fn test_release_only() {
        assert_eq!(scene_event(ActionEdge::Pressed(InputAction::Fire)), None);
        assert_eq!(scene_event(ActionEdge::Released(InputAction::Fire)), Some(SceneEvent::Fire));
        assert_eq!(scene_event(ActionEdge::Released(InputAction::Reload)), Some(SceneEvent::Reset));
        assert_eq!(scene_event(ActionEdge::Released(InputAction::MoveForward)), None);
    }

    #[test]
    fn test_overrides() {
        let mut bindings = arrows_bindings();
        let overrides = [BindingOverride {
            trigger: Trigger::Key(KeyCode::F),
            action: InputAction::Fire,
        }];
        apply_overrides(&mut bindings, &overrides);
        assert_eq!(bindings.get_action(KeyCode::F), Some(InputAction::Fire));
        assert_eq!(bindings.get_action(KeyCode::Space), None);
    }
}
