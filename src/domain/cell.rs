/// The two states a cell can be in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    /// Check if the state is alive
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    pub const fn toggle(self) -> Self {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }

    /// Pure function to compute the next state based on Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (CellState::Alive, 2 | 3) => CellState::Alive,
            (CellState::Dead, 3) => CellState::Alive,
            _ => CellState::Dead,
        }
    }
}

/// One grid location.
///
/// `state` is what the renderer shows. `next_state` is written by the rule
/// pass and only becomes visible on [`Cell::commit`], which is what lets the
/// grid evaluate every cell against the same snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    state: CellState,
    next_state: CellState,
    age: u32,
    row: usize,
    col: usize,
}

impl Cell {
    /// A dead cell with age 0 at the given position
    pub const fn new(row: usize, col: usize) -> Self {
        Self {
            state: CellState::Dead,
            next_state: CellState::Dead,
            age: 0,
            row,
            col,
        }
    }

    pub const fn state(&self) -> CellState {
        self.state
    }

    pub const fn next_state(&self) -> CellState {
        self.next_state
    }

    /// Number of ticks this cell has survived while alive
    pub const fn age(&self) -> u32 {
        self.age
    }

    pub const fn row(&self) -> usize {
        self.row
    }

    pub const fn col(&self) -> usize {
        self.col
    }

    pub const fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    pub fn set_next_alive(&mut self) {
        self.next_state = CellState::Alive;
    }

    pub fn set_next_dead(&mut self) {
        self.next_state = CellState::Dead;
    }

    /// Make the cell alive immediately, bypassing the pending state
    pub fn set_alive_now(&mut self) {
        self.state = CellState::Alive;
    }

    /// Make the cell dead immediately, bypassing the pending state
    pub fn set_dead_now(&mut self) {
        self.state = CellState::Dead;
    }

    /// Apply the pending state. Age is left alone.
    pub fn commit(&mut self) {
        self.state = self.next_state;
    }

    pub fn increment_age(&mut self) {
        self.age += 1;
    }

    pub fn reset_age(&mut self) {
        self.age = 0;
    }
}
