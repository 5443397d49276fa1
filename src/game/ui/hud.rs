//! Heads-up display pieces: shot counter text and the crosshair.

use crate::render::Mesh;

use super::text::{draw_text, measure_text};

pub const HUD_MARGIN: f32 = 12.0;

/// Draw multi-line text anchored at the top-left corner of the screen.
pub fn draw_top_left(mesh: &mut Mesh, text: &str, scale: f32, color: [f32; 4], width: f32, height: f32) {
    draw_text(mesh, text, HUD_MARGIN, HUD_MARGIN, scale, color, width, height);
}

/// A "+" centred on the screen.
pub fn draw_crosshair(mesh: &mut Mesh, scale: f32, color: [f32; 4], width: f32, height: f32) {
    let (w, h) = measure_text("+", scale);
    let x = (width - w) * 0.5;
    let y = (height - h) * 0.5;
    draw_text(mesh, "+", x, y, scale, color, width, height);
}
