//! Text Rendering
//!
//! 5x7 pixel font drawn as one quad per lit pixel, directly in NDC.

use crate::render::Mesh;

/// Glyph cell width in font pixels, including one column of spacing
const GLYPH_ADVANCE: f32 = 6.0;
/// Line height in font pixels, including spacing
const LINE_ADVANCE: f32 = 9.0;

/// Rows of a glyph, top to bottom; bit 4 is the leftmost column.
pub fn get_char_bitmap(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0E],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x06, 0x08, 0x10, 0x1F],
        '3' => [0x0E, 0x11, 0x01, 0x06, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x0E, 0x10, 0x1E, 0x11, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x01, 0x0E],
        ' ' => [0x00; 7],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04],
        ':' => [0x00, 0x04, 0x04, 0x00, 0x04, 0x04, 0x00],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '+' => [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00],
        '(' => [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02],
        ')' => [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08],
        '/' => [0x01, 0x01, 0x02, 0x04, 0x08, 0x10, 0x10],
        _ => [0x1F; 7], // Unknown = filled box
    }
}

/// Pixel size of `text` at `scale`: (widest line, all lines).
pub fn measure_text(text: &str, scale: f32) -> (f32, f32) {
    let lines = text.lines().count().max(1);
    let widest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let width = (widest as f32 * GLYPH_ADVANCE - 1.0).max(0.0) * scale;
    let height = ((lines as f32 - 1.0) * LINE_ADVANCE + 7.0) * scale;
    (width, height)
}

/// Draw `text` with its top-left corner at pixel (`x`, `y`).
///
/// `\n` starts a new line. Returns the number of quads emitted.
pub fn draw_text(
    mesh: &mut Mesh,
    text: &str,
    x: f32,
    y: f32,
    scale: f32,
    color: [f32; 4],
    screen_width: f32,
    screen_height: f32,
) -> usize {
    let mut quads = 0;
    let to_ndc = |px: f32, py: f32| Mesh::screen_to_ndc(px, py, screen_width, screen_height);

    for (line_idx, line) in text.lines().enumerate() {
        let line_y = y + line_idx as f32 * LINE_ADVANCE * scale;
        for (char_idx, c) in line.chars().enumerate() {
            let char_x = x + char_idx as f32 * GLYPH_ADVANCE * scale;
            for (row, &bits) in get_char_bitmap(c).iter().enumerate() {
                for col in 0..5 {
                    if (bits >> (4 - col)) & 1 == 0 {
                        continue;
                    }
                    let px = char_x + col as f32 * scale;
                    let py = line_y + row as f32 * scale;
                    let [x1, y1] = to_ndc(px, py);
                    let [x2, y2] = to_ndc(px + scale, py + scale);
                    mesh.add_quad(x1, y1, x2, y2, color);
                    quads += 1;
                }
            }
        }
    }
    quads
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hud_characters_have_glyphs() {
        let unknown = get_char_bitmap('\u{1}');
        for c in "SHOTS FIRED: 0123456789\n(left click to fire)+".chars().filter(|c| *c != '\n') {
            assert_ne!(get_char_bitmap(c), unknown, "missing glyph for {:?}", c);
        }
    }

    #[test]
    fn test_space_draws_nothing() {
        let mut mesh = Mesh::new();
        assert_eq!(draw_text(&mut mesh, "   ", 0.0, 0.0, 2.0, [1.0; 4], 800.0, 600.0), 0);
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_newline_moves_down() {
        let mut one = Mesh::new();
        draw_text(&mut one, "+", 0.0, 0.0, 1.0, [1.0; 4], 100.0, 100.0);
        let mut two = Mesh::new();
        draw_text(&mut two, " \n+", 0.0, 0.0, 1.0, [1.0; 4], 100.0, 100.0);
        assert_eq!(one.vertices.len(), two.vertices.len());
        // Second line starts lower on screen, i.e. smaller NDC y
        assert!(two.vertices[0].position[1] < one.vertices[0].position[1]);
        assert_eq!(two.vertices[0].position[0], one.vertices[0].position[0]);
    }

    #[test]
    fn test_measure_text() {
        assert_eq!(measure_text("+", 2.0), (10.0, 14.0));
        assert_eq!(measure_text("AB\nC", 1.0), (11.0, 16.0));
    }
}
