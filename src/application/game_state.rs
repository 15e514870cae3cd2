use std::time::Instant;

use log::{debug, info, warn};
use rand::Rng;

use super::EditQueue;
use crate::domain::{CellObserver, Grid, PatternName};

/// Patterns placed when the simulation starts, origin as (row, col)
pub const DEFAULT_SEEDS: &[(PatternName, usize, usize)] = &[
    (PatternName::RPentomino, 20, 12),
    (PatternName::RPentomino, 12, 22),
    (PatternName::RPentomino, 20, 38),
    (PatternName::Diehard, 80, 80),
    (PatternName::Acorn, 40, 40),
    (PatternName::Blinker, 10, 5),
    (PatternName::Block, 2, 2),
    (PatternName::Beehive, 12, 12),
];

pub const MIN_SPEED: f32 = 1.0;
pub const MAX_SPEED: f32 = 60.0;

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub grid: Grid,
    pub edits: EditQueue,
    pub is_running: bool,
    /// Run one tick on the next update even while paused
    pub step_requested: bool,
    /// Evaluate rules on the rayon pool
    pub parallel: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_evolution_time_ms: f32,
}

impl GameState {
    /// Create new game state with an empty grid of the given size
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            edits: EditQueue::new(),
            is_running: false,
            step_requested: false,
            parallel: false,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: 10.0,
            last_evolution_time_ms: 0.0,
        }
    }

    /// Place every seed that fits the grid, skipping the rest.
    /// Returns how many were placed.
    pub fn seed<O>(&mut self, seeds: &[(PatternName, usize, usize)], observer: &mut O) -> usize
    where
        O: CellObserver + ?Sized,
    {
        let (rows, cols) = self.grid.dimensions();
        let mut placed = 0;
        for &(pattern, row, col) in seeds {
            if pattern.fits(rows, cols, row, col) {
                self.grid.place(pattern, row, col, observer);
                placed += 1;
                info!("placed {pattern} at ({row}, {col})");
            } else {
                warn!("skipping {pattern} at ({row}, {col}): does not fit a {rows}x{cols} grid");
            }
        }
        placed
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        info!("simulation {}", if self.is_running { "started" } else { "paused" });
        self
    }

    /// Ask for a single tick while paused
    pub fn request_step(mut self) -> Self {
        self.step_requested = true;
        self
    }

    pub fn toggle_parallel(mut self) -> Self {
        self.parallel = !self.parallel;
        info!("parallel rule pass {}", if self.parallel { "on" } else { "off" });
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(MIN_SPEED, MAX_SPEED);
        self
    }

    /// Update simulation by one frame.
    ///
    /// Queued edits land first, then at most one tick runs if the timer
    /// interval has passed or a step was requested.
    pub fn update<R, O>(&mut self, delta_time: f32, rng: &mut R, observer: &mut O)
    where
        R: Rng,
        O: CellObserver + ?Sized,
    {
        if !self.edits.is_empty() {
            let applied = self.edits.apply(&mut self.grid, rng, observer);
            debug!("applied {applied} queued edits");
        }

        if self.step_requested {
            self.step_requested = false;
            self.advance(observer);
            return;
        }

        if !self.is_running {
            return;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.advance(observer);
            self.update_timer = 0.0;
        }
    }

    fn advance<O>(&mut self, observer: &mut O)
    where
        O: CellObserver + ?Sized,
    {
        let start = Instant::now();
        if self.parallel {
            self.grid.tick_parallel(observer);
        } else {
            self.grid.tick(observer);
        }
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        debug!(
            "generation {} ({} alive) in {:.2}ms",
            self.generation,
            self.grid.live_count(),
            self.last_evolution_time_ms
        );
    }
}
