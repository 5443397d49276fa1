//! Keyboard Input Module
//!
//! Generic key codes, decoupled from winit so bindings and scenes can be
//! tested without a window. [`KeyCode::from_winit`] is the only place the
//! two meet.

use serde::{Deserialize, Serialize};

/// Generic key codes, independent of the windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    Q,
    R,
    S,
    W,
    X,
    Z,

    // Modifiers and whitespace
    Space,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    Enter,
    Tab,
    Escape,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Function keys
    F1,
    F11,

    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Map a winit physical key code; anything unhandled becomes `Unknown`.
    pub fn from_winit(key: winit::keyboard::KeyCode) -> Self {
        use winit::keyboard::KeyCode as W;
        match key {
            W::KeyA => KeyCode::A,
            W::KeyB => KeyCode::B,
            W::KeyC => KeyCode::C,
            W::KeyD => KeyCode::D,
            W::KeyE => KeyCode::E,
            W::KeyF => KeyCode::F,
            W::KeyG => KeyCode::G,
            W::KeyQ => KeyCode::Q,
            W::KeyR => KeyCode::R,
            W::KeyS => KeyCode::S,
            W::KeyW => KeyCode::W,
            W::KeyX => KeyCode::X,
            W::KeyZ => KeyCode::Z,
            W::Space => KeyCode::Space,
            W::ShiftLeft => KeyCode::ShiftLeft,
            W::ShiftRight => KeyCode::ShiftRight,
            W::ControlLeft => KeyCode::ControlLeft,
            W::Enter => KeyCode::Enter,
            W::Tab => KeyCode::Tab,
            W::Escape => KeyCode::Escape,
            W::ArrowUp => KeyCode::ArrowUp,
            W::ArrowDown => KeyCode::ArrowDown,
            W::ArrowLeft => KeyCode::ArrowLeft,
            W::ArrowRight => KeyCode::ArrowRight,
            W::F1 => KeyCode::F1,
            W::F11 => KeyCode::F11,
            _ => KeyCode::Unknown,
        }
    }

    /// Short human-readable label, used in help text.
    pub fn label(&self) -> &'static str {
        match self {
            KeyCode::A => "A",
            KeyCode::B => "B",
            KeyCode::C => "C",
            KeyCode::D => "D",
            KeyCode::E => "E",
            KeyCode::F => "F",
            KeyCode::G => "G",
            KeyCode::Q => "Q",
            KeyCode::R => "R",
            KeyCode::S => "S",
            KeyCode::W => "W",
            KeyCode::X => "X",
            KeyCode::Z => "Z",
            KeyCode::Space => "Space",
            KeyCode::ShiftLeft => "Left Shift",
            KeyCode::ShiftRight => "Right Shift",
            KeyCode::ControlLeft => "Left Ctrl",
            KeyCode::Enter => "Enter",
            KeyCode::Tab => "Tab",
            KeyCode::Escape => "Esc",
            KeyCode::ArrowUp => "Up",
            KeyCode::ArrowDown => "Down",
            KeyCode::ArrowLeft => "Left",
            KeyCode::ArrowRight => "Right",
            KeyCode::F1 => "F1",
            KeyCode::F11 => "F11",
            KeyCode::Unknown => "?",
        }
    }
}
