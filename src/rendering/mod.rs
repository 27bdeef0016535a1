use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::Rgb;

fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
}

/// Draw every live cell of the current generation over a black background
pub fn draw_grid(state: &GameState) {
    clear_background(BLACK);
    for rect in state.draw_list() {
        draw_rectangle(rect.x, rect.y, rect.size, rect.size, to_color(rect.color));
    }
}

/// Lines shown by the about screen
pub const ABOUT_LINES: &[&str] = &[
    "Conway's Game of Life screen saver",
    "",
    "Run modes:",
    "  window       Resizable window (default)",
    "  fullscreen   Full screen",
    "  about        This screen",
    "",
    "Controls:",
    "  Left mouse   Paint live cells",
    "  Right mouse  Erase cells",
    "  Space        Pause / resume",
    "  R            Reseed randomly",
    "  C            Clear",
    "  Esc          Exit",
    "",
    "Press Esc, Enter or click to close.",
];

/// Draw the about screen text
pub fn draw_about() {
    clear_background(Color::from_rgba(20, 20, 20, 255));
    for (i, line) in ABOUT_LINES.iter().enumerate() {
        let color = if i == 0 { Color::from_rgba(0, 170, 255, 255) } else { LIGHTGRAY };
        draw_text(line, 24.0, 40.0 + i as f32 * 24.0, 24.0, color);
    }
}
