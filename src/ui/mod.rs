mod button;

pub use button::{Button, ButtonAction};

use macroquad::prelude::{Rect, screen_height, screen_width};
use crate::application::GameState;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const WINDOW_WIDTH: i32 = 1180;
pub const WINDOW_HEIGHT: i32 = 900;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Panel buttons, labelled for the current state
pub fn create_buttons(state: &GameState) -> Vec<Button> {
    let px = panel_x();
    let slot = |index: usize| Rect::new(px, 20.0 + index as f32 * 50.0, PANEL_WIDTH, BUTTON_HEIGHT);
    vec![
        Button::new(
            ButtonAction::StartPause,
            slot(0),
            if state.is_running { "Pause" } else { "Start" },
        ),
        Button::new(ButtonAction::Step, slot(1), "Step"),
        Button::new(ButtonAction::Clear, slot(2), "Clear"),
        Button::new(ButtonAction::Randomize, slot(3), "Random"),
    ]
}
