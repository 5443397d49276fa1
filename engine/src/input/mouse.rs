//! Mouse Input Module
//!
//! Button state, cursor position and accumulated look deltas.

use serde::{Deserialize, Serialize};

/// Mouse buttons the engine distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Map a winit button; back/forward/other buttons are not used.
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(MouseButton::Left),
            winit::event::MouseButton::Right => Some(MouseButton::Right),
            winit::event::MouseButton::Middle => Some(MouseButton::Middle),
            _ => None,
        }
    }
}

/// Cursor position in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Current mouse state.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    pub position: Option<Position>,
    pub left: bool,
    pub right: bool,
    pub middle: bool,
    /// Look delta accumulated since the last `take_delta`
    delta: (f64, f64),
}

impl MouseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left = pressed,
            MouseButton::Right => self.right = pressed,
            MouseButton::Middle => self.middle = pressed,
        }
    }

    pub fn is_pressed(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Right => self.right,
            MouseButton::Middle => self.middle,
        }
    }

    /// Record a cursor move; while the right button is held the movement is
    /// accumulated as a look delta.
    pub fn set_position(&mut self, x: f64, y: f64) {
        if let Some(prev) = self.position {
            if self.right {
                self.delta.0 += x - prev.x;
                self.delta.1 += y - prev.y;
            }
        }
        self.position = Some(Position { x, y });
    }

    /// Whether the user is dragging to look around.
    pub fn is_looking(&self) -> bool {
        self.right
    }

    /// Return and clear the accumulated look delta.
    pub fn take_delta(&mut self) -> (f64, f64) {
        std::mem::take(&mut self.delta)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
