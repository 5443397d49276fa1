//! Input Module
//!
//! Platform-agnostic input handling. Physical triggers go through
//! [`KeyBindings`] and come out as press/release edges of named actions;
//! held actions are also tracked so the camera can poll them each frame.
//!
//! # Example
//!
//! ```rust,ignore
//! use volley_engine::input::{ActionEdge, InputAction, InputState, KeyBindings, KeyCode};
//!
//! let mut bindings = KeyBindings::fly_camera();
//! bindings.bind(KeyCode::Space, InputAction::Fire);
//! let mut input = InputState::new(bindings);
//!
//! input.handle_trigger(KeyCode::Space.into(), true);
//! if let Some(ActionEdge::Released(InputAction::Fire)) = input.handle_trigger(KeyCode::Space.into(), false) {
//!     // fire on release
//! }
//! ```

pub mod bindings;
pub mod keyboard;
pub mod mouse;

use std::collections::HashSet;

use glam::Vec3;

pub use bindings::{InputAction, KeyBindings, Trigger};
pub use keyboard::KeyCode;
pub use mouse::{MouseButton, MouseState, Position};

/// A change in an action's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionEdge {
    Pressed(InputAction),
    Released(InputAction),
}

impl ActionEdge {
    pub fn action(&self) -> InputAction {
        match self {
            ActionEdge::Pressed(a) | ActionEdge::Released(a) => *a,
        }
    }
}

/// Combined binding table, held-action set and mouse state.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub bindings: KeyBindings,
    pub mouse: MouseState,
    held: HashSet<InputAction>,
}

impl InputState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            mouse: MouseState::new(),
            held: HashSet::new(),
        }
    }

    /// Feed a physical press or release.
    ///
    /// Key repeat (a press while already held) produces no edge. A release
    /// is always reported, even if the press happened before the window had
    /// focus.
    pub fn handle_trigger(&mut self, trigger: Trigger, pressed: bool) -> Option<ActionEdge> {
        if let Trigger::Mouse(button) = trigger {
            self.mouse.set_button(button, pressed);
        }

        let action = self.bindings.get_action(trigger)?;
        if pressed {
            self.held.insert(action).then_some(ActionEdge::Pressed(action))
        } else {
            self.held.remove(&action);
            Some(ActionEdge::Released(action))
        }
    }

    pub fn is_held(&self, action: InputAction) -> bool {
        self.held.contains(&action)
    }

    /// Fly-camera intent as (right, up, forward), each in -1..=1.
    pub fn movement_axes(&self) -> Vec3 {
        let axis = |pos: InputAction, neg: InputAction| -> f32 {
            (self.is_held(pos) as i32 - self.is_held(neg) as i32) as f32
        };
        Vec3::new(
            axis(InputAction::MoveRight, InputAction::MoveLeft),
            axis(InputAction::MoveUp, InputAction::MoveDown),
            axis(InputAction::MoveForward, InputAction::MoveBack),
        )
    }

    /// Drop all held actions, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.held.clear();
        self.mouse.reset();
    }
}
