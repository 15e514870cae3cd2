use std::collections::VecDeque;

use rand::Rng;

use crate::domain::{CellObserver, Grid};

/// Share of cells left alive by a randomize request
pub const RANDOM_DENSITY: f64 = 0.3;

/// A grid change requested by input, held until the next tick boundary
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellEdit {
    SetAlive { row: usize, col: usize },
    SetDead { row: usize, col: usize },
    Clear,
    Randomize,
}

/// FIFO of pending edits.
///
/// Input handlers only push. The queue is drained by `GameState::update`
/// before it decides whether to tick, so edits never land mid-tick.
#[derive(Clone, Debug, Default)]
pub struct EditQueue {
    pending: VecDeque<CellEdit>,
}

impl EditQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, edit: CellEdit) {
        self.pending.push_back(edit);
    }

    /// Whether this exact edit is already waiting
    pub fn contains(&self, edit: &CellEdit) -> bool {
        self.pending.contains(edit)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Apply every pending edit in order, returning how many were applied
    pub fn apply<R, O>(&mut self, grid: &mut Grid, rng: &mut R, observer: &mut O) -> usize
    where
        R: Rng,
        O: CellObserver + ?Sized,
    {
        let applied = self.pending.len();
        for edit in self.pending.drain(..) {
            match edit {
                CellEdit::SetAlive { row, col } => grid.set_alive(row, col, observer),
                CellEdit::SetDead { row, col } => grid.set_dead(row, col, observer),
                CellEdit::Clear => grid.clear(observer),
                CellEdit::Randomize => grid.randomize(rng, RANDOM_DENSITY, observer),
            }
        }
        applied
    }
}
