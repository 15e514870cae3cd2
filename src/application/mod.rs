mod edits;
mod game_state;
mod layout;

pub use edits::{CellEdit, EditQueue, RANDOM_DENSITY};
pub use game_state::{DEFAULT_SEEDS, GameState, MAX_SPEED, MIN_SPEED};
pub use layout::{COLUMNS_ACROSS, GridLayout};
