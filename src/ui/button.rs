use macroquad::prelude::*;

const IDLE_COLOR: Color = Color::new(0.27, 0.51, 0.71, 1.0);
const HOVER_COLOR: Color = Color::new(0.39, 0.58, 0.93, 1.0);

/// What a panel button does when clicked
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonAction {
    StartPause,
    Step,
    Clear,
    Randomize,
}

/// Clickable panel button
#[derive(Clone)]
pub struct Button {
    pub action: ButtonAction,
    rect: Rect,
    text: String,
}

impl Button {
    pub fn new(action: ButtonAction, rect: Rect, text: impl Into<String>) -> Self {
        Self {
            action,
            rect,
            text: text.into(),
        }
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) { HOVER_COLOR } else { IDLE_COLOR };
        let Rect { x, y, w, h } = self.rect;

        draw_rectangle(x, y, w, h, color);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let text_size = measure_text(&self.text, None, 20, 1.0);
        draw_text(
            &self.text,
            x + (w - text_size.width) / 2.0,
            y + (h + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
