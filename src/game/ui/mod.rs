//! UI Module
//!
//! Screen-space overlay built from the pixel font.

pub mod hud;
pub mod text;

pub use hud::{draw_crosshair, draw_top_left};
pub use text::{draw_text, get_char_bitmap, measure_text};
