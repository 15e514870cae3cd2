use super::Cell;

/// Receives a notification whenever a cell may have changed on screen.
///
/// The grid calls this once per cell at the end of every tick and once after
/// each immediate edit, passing the cell so the receiver can read its
/// position, state and age.
pub trait CellObserver {
    fn on_state_changed(&mut self, cell: &Cell);
}

/// Observer that ignores every notification
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl CellObserver for NullObserver {
    fn on_state_changed(&mut self, _cell: &Cell) {}
}

impl<F> CellObserver for F
where
    F: FnMut(&Cell),
{
    fn on_state_changed(&mut self, cell: &Cell) {
        self(cell)
    }
}
