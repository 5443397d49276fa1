//! Input Bindings Module
//!
//! Maps physical triggers (keys and mouse buttons) to logical actions so
//! scenes only ever see named actions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{KeyCode, MouseButton};

/// A physical input that can be bound to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    Key(KeyCode),
    Mouse(MouseButton),
}

impl From<KeyCode> for Trigger {
    fn from(key: KeyCode) -> Self {
        Trigger::Key(key)
    }
}

impl From<MouseButton> for Trigger {
    fn from(button: MouseButton) -> Self {
        Trigger::Mouse(button)
    }
}

/// Logical input actions that can be bound to physical triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Launch the arrow (default: Space)
    Fire,
    /// Put the arrow back on the ship (default: R)
    Reload,
    /// Fire a cannonball (default: left mouse button)
    Shoot,
    /// Fly camera forward (default: W)
    MoveForward,
    /// Fly camera backward (default: S)
    MoveBack,
    /// Fly camera left (default: A)
    MoveLeft,
    /// Fly camera right (default: D)
    MoveRight,
    /// Fly camera up (default: Q)
    MoveUp,
    /// Fly camera down (default: Z)
    MoveDown,
    /// Quit the scene (default: Escape)
    Exit,
}

impl InputAction {
    /// Held actions are polled every frame; the rest are discrete events.
    pub fn is_held(&self) -> bool {
        matches!(
            self,
            InputAction::MoveForward
                | InputAction::MoveBack
                | InputAction::MoveLeft
                | InputAction::MoveRight
                | InputAction::MoveUp
                | InputAction::MoveDown
        )
    }
}

/// Maps physical triggers to logical actions, supporting remapping.
#[derive(Debug, Clone, Default)]
pub struct KeyBindings {
    trigger_to_action: HashMap<Trigger, InputAction>,
    action_to_trigger: HashMap<InputAction, Trigger>,
}

impl KeyBindings {
    /// Bindings with nothing bound.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fly-camera movement and Escape to quit.
    ///
    /// - W/S/A/D = forward/back/left/right
    /// - Q/Z = up/down
    /// - Escape = Exit
    pub fn fly_camera() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(KeyCode::W, InputAction::MoveForward);
        bindings.bind(KeyCode::S, InputAction::MoveBack);
        bindings.bind(KeyCode::A, InputAction::MoveLeft);
        bindings.bind(KeyCode::D, InputAction::MoveRight);
        bindings.bind(KeyCode::Q, InputAction::MoveUp);
        bindings.bind(KeyCode::Z, InputAction::MoveDown);
        bindings.bind(KeyCode::Escape, InputAction::Exit);
        bindings
    }

    /// Bind a trigger to an action.
    ///
    /// Any previous binding of either the trigger or the action is removed.
    pub fn bind(&mut self, trigger: impl Into<Trigger>, action: InputAction) {
        let trigger = trigger.into();
        if let Some(old_action) = self.trigger_to_action.remove(&trigger) {
            self.action_to_trigger.remove(&old_action);
        }
        if let Some(old_trigger) = self.action_to_trigger.remove(&action) {
            self.trigger_to_action.remove(&old_trigger);
        }
        self.trigger_to_action.insert(trigger, action);
        self.action_to_trigger.insert(action, trigger);
    }

    pub fn unbind_trigger(&mut self, trigger: impl Into<Trigger>) {
        if let Some(action) = self.trigger_to_action.remove(&trigger.into()) {
            self.action_to_trigger.remove(&action);
        }
    }

    pub fn unbind_action(&mut self, action: InputAction) {
        if let Some(trigger) = self.action_to_trigger.remove(&action) {
            self.trigger_to_action.remove(&trigger);
        }
    }

    pub fn get_action(&self, trigger: impl Into<Trigger>) -> Option<InputAction> {
        self.trigger_to_action.get(&trigger.into()).copied()
    }

    pub fn get_trigger(&self, action: InputAction) -> Option<Trigger> {
        self.action_to_trigger.get(&action).copied()
    }

    pub fn len(&self) -> usize {
        self.trigger_to_action.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trigger_to_action.is_empty()
    }

    /// All current bindings as trigger-action pairs.
    pub fn all_bindings(&self) -> impl Iterator<Item = (Trigger, InputAction)> + '_ {
        self.trigger_to_action.iter().map(|(&t, &a)| (t, a))
    }
}
