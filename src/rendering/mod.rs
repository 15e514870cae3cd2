use macroquad::prelude::*;
use crate::domain::{Cell, CellObserver, CellState, Grid};
use crate::application::{GameState, GridLayout};
use crate::ui::{Button, panel_x, PANEL_WIDTH};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const DEAD_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// How far each tick of age pushes a live cell toward white
pub const AGE_LIGHTEN_STEP: f32 = 0.1;

/// Blend a color toward white by `amount` (0 = unchanged, 1 = white)
fn lightened(color: Color, amount: f32) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    Color::new(
        color.r + (1.0 - color.r) * amount,
        color.g + (1.0 - color.g) * amount,
        color.b + (1.0 - color.b) * amount,
        color.a,
    )
}

/// Dead cells are black, live cells green that pales with age
pub fn cell_color(cell: &Cell) -> Color {
    match cell.state() {
        CellState::Alive => lightened(ALIVE_COLOR, cell.age() as f32 * AGE_LIGHTEN_STEP),
        CellState::Dead => DEAD_COLOR,
    }
}

/// Per-cell color cache.
///
/// Fed through [`CellObserver`], so colors are only recomputed for cells the
/// grid reports as changed.
pub struct CellColors {
    cols: usize,
    colors: Vec<Color>,
}

impl CellColors {
    /// Build a cache matching the grid's current states
    pub fn new(grid: &Grid) -> Self {
        let (_, cols) = grid.dimensions();
        Self {
            cols,
            colors: grid.iter_cells().map(cell_color).collect(),
        }
    }

    pub fn color(&self, row: usize, col: usize) -> Color {
        self.colors[row * self.cols + col]
    }
}

impl CellObserver for CellColors {
    fn on_state_changed(&mut self, cell: &Cell) {
        self.colors[cell.row() * self.cols + cell.col()] = cell_color(cell);
    }
}

/// Draw every cell from the color cache
pub fn draw_grid(colors: &CellColors, layout: &GridLayout) {
    let size = layout.cell_size;
    let draw_grid_lines = size >= 4.0;

    for row in 0..layout.rows {
        for col in 0..layout.cols {
            let (x, y) = layout.cell_to_screen(row, col);
            draw_rectangle(x, y, size, size, colors.color(row, col));
            if draw_grid_lines {
                draw_rectangle_lines(x, y, size, size, 1.0, GRID_LINE_COLOR);
            }
        }
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255)
    );
}

/// Draw the control panel with buttons and status
pub fn draw_controls(state: &GameState, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();

    let controls = [
        ("Controls:", 250.0, 14.0, WHITE),
        ("LMB: Revive", 265.0, 12.0, GRAY),
        ("RMB: Kill", 278.0, 12.0, GRAY),
        ("Space: Start/Pause", 291.0, 12.0, GRAY),
        ("N: Step  C: Clear", 304.0, 12.0, GRAY),
        ("R: Random  P: Parallel", 317.0, 12.0, GRAY),
        ("Up/Down: Speed", 330.0, 12.0, GRAY),
    ];
    controls.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    let (rows, cols) = state.grid.dimensions();
    let info = [
        (format!("Grid: {rows}x{cols}"), 370.0),
        (format!("Alive: {}", state.grid.live_count()), 385.0),
        (format!("Evolve: {:.1}ms", state.last_evolution_time_ms), 400.0),
        (format!("Rules: {}", if state.parallel { "parallel" } else { "serial" }), 415.0),
        (format!("FPS: {}", get_fps()), 430.0),
    ];
    info.iter().for_each(|(text, y)| {
        draw_text(text, px, *y, 13.0, Color::from_rgba(150, 150, 150, 255));
    });

    let status_color = if state.is_running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };
    let labels = [
        ("Speed:".to_owned(), 630.0, 16.0, WHITE),
        (format!("{:.0} gen/s", state.updates_per_second), 650.0, 14.0, LIGHTGRAY),
        ("Generation:".to_owned(), 680.0, 16.0, WHITE),
        (state.generation.to_string(), 700.0, 20.0, ALIVE_COLOR),
        ("Status:".to_owned(), 735.0, 16.0, WHITE),
        ((if state.is_running { "Running" } else { "Paused" }).to_owned(), 755.0, 16.0, status_color),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NullObserver, PatternName};

    #[test]
    fn test_dead_is_black() {
        assert_eq!(cell_color(&Cell::new(0, 0)), DEAD_COLOR);
    }

    #[test]
    fn test_age_lightens_live_cells() {
        let mut cell = Cell::new(0, 0);
        cell.set_alive_now();
        assert_eq!(cell_color(&cell), ALIVE_COLOR);

        for _ in 0..5 {
            cell.increment_age();
        }
        let color = cell_color(&cell);
        assert!((color.r - 0.5).abs() < 1e-6);
        assert!((color.g - 1.0).abs() < 1e-6);

        for _ in 0..20 {
            cell.increment_age();
        }
        assert_eq!(cell_color(&cell), Color::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_cache_follows_grid_notifications() {
        let mut grid = Grid::new(5, 5);
        let mut colors = CellColors::new(&grid);
        grid.place(PatternName::Blinker, 1, 2, &mut colors);
        assert_eq!(colors.color(2, 2), ALIVE_COLOR);

        grid.tick(&mut colors);
        assert_eq!(colors.color(1, 2), DEAD_COLOR);
        assert_eq!(colors.color(2, 1), ALIVE_COLOR);
        assert_eq!(colors.color(2, 2), lightened(ALIVE_COLOR, AGE_LIGHTEN_STEP));
    }

    #[test]
    fn test_cache_starts_from_grid() {
        let mut grid = Grid::new(3, 3);
        grid.set_alive(1, 1, &mut NullObserver);
        let colors = CellColors::new(&grid);
        assert_eq!(colors.color(1, 1), ALIVE_COLOR);
        assert_eq!(colors.color(0, 0), DEAD_COLOR);
    }
}
