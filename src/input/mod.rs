use macroquad::prelude::*;

use crate::application::{Brush, GameState};

/// Brush selected by the held mouse buttons, left wins over right
pub fn current_brush() -> Option<Brush> {
    if is_mouse_button_down(MouseButton::Left) {
        Some(Brush::Paint)
    } else if is_mouse_button_down(MouseButton::Right) {
        Some(Brush::Erase)
    } else {
        None
    }
}

/// Handle mouse painting on the grid while a button is held
pub fn handle_mouse_paint(state: &mut GameState, mouse_pos: (f32, f32)) {
    if let Some(brush) = current_brush() {
        state.paint(mouse_pos.0, mouse_pos.1, brush);
    }
}

/// Resize the grid when the canvas changed since the last frame
pub fn handle_resize(state: &mut GameState, last_canvas: &mut (f32, f32)) {
    let canvas = (screen_width(), screen_height());
    if canvas != *last_canvas {
        state.resize_to_canvas(canvas.0, canvas.1);
        *last_canvas = canvas;
    }
}

/// Escape is the only key that exits
pub fn exit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 3] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::randomize),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Any dismissal gesture for the about screen
pub fn dismiss_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
        || is_key_pressed(KeyCode::Enter)
        || is_mouse_button_pressed(MouseButton::Left)
}
