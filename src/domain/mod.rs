mod cell;
mod grid;
mod observer;
mod patterns;

pub use cell::{Cell, CellState};
pub use grid::Grid;
pub use observer::{CellObserver, NullObserver};
pub use patterns::{PatternError, PatternName};
