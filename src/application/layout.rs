/// Cells across the width of the grid area
pub const COLUMNS_ACROSS: usize = 100;

/// GridLayout maps between screen pixels and grid cells.
/// Derived once from the viewport at startup, since the grid never resizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub cell_size: f32,
    pub rows: usize,
    pub cols: usize,
}

impl GridLayout {
    /// Fit [`COLUMNS_ACROSS`] columns into `width`; rows fill whatever of
    /// `height` whole cells cover.
    pub fn from_viewport(width: f32, height: f32) -> Self {
        let cell_size = width / COLUMNS_ACROSS as f32;
        let rows = (height / cell_size).floor() as usize;
        let cols = (width / cell_size).floor() as usize;
        Self { cell_size, rows, cols }
    }

    /// Convert screen coordinates to (row, col), `None` outside the grid
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> Option<(usize, usize)> {
        if screen_x < 0.0 || screen_y < 0.0 {
            return None;
        }
        let row = (screen_y / self.cell_size) as usize;
        let col = (screen_x / self.cell_size) as usize;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// Top-left screen corner of a cell
    pub fn cell_to_screen(&self, row: usize, col: usize) -> (f32, f32) {
        (col as f32 * self.cell_size, row as f32 * self.cell_size)
    }

    /// Pixel size of the whole grid
    pub fn extent(&self) -> (f32, f32) {
        (self.cols as f32 * self.cell_size, self.rows as f32 * self.cell_size)
    }
}
