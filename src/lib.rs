// Domain layer - Core simulation
pub mod domain;

// Application layer - Timing, queued edits, screen geometry
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, CellObserver, CellState, Grid, NullObserver, PatternError, PatternName};
pub use application::{CellEdit, EditQueue, GameState, GridLayout};
pub use rendering::CellColors;
pub use ui::Button;
