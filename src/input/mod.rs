use macroquad::prelude::*;
use crate::application::{CellEdit, GameState, GridLayout};
use crate::domain::CellState;
use crate::ui::{Button, ButtonAction};

/// Which edit, if any, a mouse press over a cell in `current` state asks for.
/// Only edits that would change the cell are produced.
pub fn paint_edit(row: usize, col: usize, current: CellState, left: bool, right: bool) -> Option<CellEdit> {
    match (current, left, right) {
        (CellState::Dead, true, _) => Some(CellEdit::SetAlive { row, col }),
        (CellState::Alive, false, true) => Some(CellEdit::SetDead { row, col }),
        _ => None,
    }
}

/// Queue edits for the cell under the mouse. Left revives, right kills.
pub fn handle_mouse_paint(state: &mut GameState, layout: &GridLayout, mouse_pos: (f32, f32)) {
    let Some((row, col)) = layout.screen_to_cell(mouse_pos.0, mouse_pos.1) else {
        return;
    };

    let edit = paint_edit(
        row,
        col,
        state.grid.state(row, col),
        is_mouse_button_down(MouseButton::Left),
        is_mouse_button_down(MouseButton::Right),
    );
    if let Some(edit) = edit {
        // Holding the button over a cell would queue it every frame
        if !state.edits.contains(&edit) {
            state.edits.push(edit);
        }
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(mut state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::N, GameState::request_step),
        (KeyCode::P, GameState::toggle_parallel),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    if is_key_pressed(KeyCode::C) {
        state.edits.push(CellEdit::Clear);
    }
    if is_key_pressed(KeyCode::R) {
        state.edits.push(CellEdit::Randomize);
    }

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Apply a button's action to the state
pub fn apply_button(mut state: GameState, action: ButtonAction) -> GameState {
    match action {
        ButtonAction::StartPause => state.toggle_running(),
        ButtonAction::Step => state.request_step(),
        ButtonAction::Clear => {
            state.edits.push(CellEdit::Clear);
            state
        }
        ButtonAction::Randomize => {
            state.edits.push(CellEdit::Randomize);
            state
        }
    }
}

/// Process button clicks functionally
pub fn process_button_clicks(state: GameState, buttons: &[Button], mouse_pos: (f32, f32)) -> GameState {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .fold(state, |s, btn| apply_button(s, btn.action))
}
