use super::{Cell, CellObserver, CellState, PatternName};
use rand::Rng;
use rayon::prelude::*;

/// Moore neighborhood as (d_row, d_col)
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Outcome of the rule table for one cell
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Transition {
    next: CellState,
    survived: bool,
}

/// Grid owns a fixed-size 2D field of cells and advances it one tick at a
/// time. Rules are evaluated for every cell before any cell commits, so a
/// tick always reads one consistent snapshot.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Self {
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new(row, col)))
            .collect();
        Self { rows, cols, cells }
    }

    /// (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to a row-major index, panicking when out of bounds
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is outside the {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Cell at position. Out-of-bounds access panics.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[self.index(row, col)]
    }

    /// Cell at position, or `None` when outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        (row < self.rows && col < self.cols).then(|| &self.cells[row * self.cols + col])
    }

    pub fn state(&self, row: usize, col: usize) -> CellState {
        self.cell(row, col).state()
    }

    pub fn age(&self, row: usize, col: usize) -> u32 {
        self.cell(row, col).age()
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Make a cell alive right away and notify the observer
    pub fn set_alive<O>(&mut self, row: usize, col: usize, observer: &mut O)
    where
        O: CellObserver + ?Sized,
    {
        let idx = self.index(row, col);
        self.cells[idx].set_alive_now();
        observer.on_state_changed(&self.cells[idx]);
    }

    /// Make a cell dead right away and notify the observer
    pub fn set_dead<O>(&mut self, row: usize, col: usize, observer: &mut O)
    where
        O: CellObserver + ?Sized,
    {
        let idx = self.index(row, col);
        self.cells[idx].set_dead_now();
        observer.on_state_changed(&self.cells[idx]);
    }

    /// Set every cell of a seed pattern alive, origin at (`row`, `col`).
    /// Bounds are the caller's job: see [`PatternName::fits`].
    pub fn place<O>(&mut self, pattern: PatternName, row: usize, col: usize, observer: &mut O)
    where
        O: CellObserver + ?Sized,
    {
        for (r, c) in pattern.cells_at(row, col) {
            self.set_alive(r, c, observer);
        }
    }

    /// Count live neighbors. Offsets past the edge are skipped, there is no wrapping.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.get(r, c)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Rule table for one cell, read against the current states only
    fn transition(&self, row: usize, col: usize) -> Transition {
        let current = self.cell(row, col).state();
        let next = current.evolve(self.count_live_neighbors(row, col));
        Transition {
            next,
            survived: current.is_alive() && next.is_alive(),
        }
    }

    fn apply_transition(cell: &mut Cell, transition: Transition) {
        match transition.next {
            CellState::Alive => cell.set_next_alive(),
            CellState::Dead => cell.set_next_dead(),
        }
        if transition.survived {
            cell.increment_age();
        }
    }

    /// Compute the pending state of one cell. Writes only `next_state` and
    /// `age`, never `state`.
    pub fn evaluate(&mut self, row: usize, col: usize) {
        let transition = self.transition(row, col);
        let idx = self.index(row, col);
        Self::apply_transition(&mut self.cells[idx], transition);
    }

    /// Advance one generation.
    ///
    /// Phase 1 evaluates every cell. Phase 2 starts only after that and
    /// commits each cell, notifying the observer once per cell.
    pub fn tick<O>(&mut self, observer: &mut O)
    where
        O: CellObserver + ?Sized,
    {
        for row in 0..self.rows {
            for col in 0..self.cols {
                self.evaluate(row, col);
            }
        }
        self.commit_all(observer);
    }

    /// Same as [`Grid::tick`], with the phase 1 rule pass spread over the
    /// rayon pool
    pub fn tick_parallel<O>(&mut self, observer: &mut O)
    where
        O: CellObserver + ?Sized,
    {
        let cols = self.cols;
        let transitions: Vec<Transition> = (0..self.cells.len())
            .into_par_iter()
            .map(|idx| self.transition(idx / cols, idx % cols))
            .collect();

        self.cells
            .iter_mut()
            .zip(transitions)
            .for_each(|(cell, transition)| Self::apply_transition(cell, transition));
        self.commit_all(observer);
    }

    fn commit_all<O>(&mut self, observer: &mut O)
    where
        O: CellObserver + ?Sized,
    {
        for cell in &mut self.cells {
            cell.commit();
            observer.on_state_changed(cell);
        }
    }

    /// Kill every cell and reset ages
    pub fn clear<O>(&mut self, observer: &mut O)
    where
        O: CellObserver + ?Sized,
    {
        for cell in &mut self.cells {
            cell.set_dead_now();
            cell.set_next_dead();
            cell.reset_age();
            observer.on_state_changed(cell);
        }
    }

    /// Fill the grid at random, each cell alive with probability `density`.
    /// Ages are reset.
    pub fn randomize<R, O>(&mut self, rng: &mut R, density: f64, observer: &mut O)
    where
        R: Rng,
        O: CellObserver + ?Sized,
    {
        for cell in &mut self.cells {
            if rng.random_bool(density) {
                cell.set_alive_now();
            } else {
                cell.set_dead_now();
            }
            cell.reset_age();
            observer.on_state_changed(cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NullObserver;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter_cells()
            .filter(|cell| cell.is_alive())
            .map(|cell| (cell.row(), cell.col()))
            .collect()
    }

    fn grid_with(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for &(r, c) in alive {
            grid.set_alive(r, c, &mut NullObserver);
        }
        grid
    }

    /// Next states computed straight from a copied snapshot
    fn reference_step(snapshot: &[bool], rows: usize, cols: usize) -> Vec<bool> {
        let alive = |r: isize, c: isize| {
            r >= 0
                && c >= 0
                && (r as usize) < rows
                && (c as usize) < cols
                && snapshot[r as usize * cols + c as usize]
        };
        (0..rows * cols)
            .map(|idx| {
                let (r, c) = ((idx / cols) as isize, (idx % cols) as isize);
                let mut n = 0;
                for dr in -1..=1 {
                    for dc in -1..=1 {
                        if (dr, dc) != (0, 0) && alive(r + dr, c + dc) {
                            n += 1;
                        }
                    }
                }
                matches!((snapshot[idx], n), (true, 2 | 3) | (false, 3))
            })
            .collect()
    }

    #[test]
    fn test_new_grid_is_dead_and_positioned() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.dimensions(), (3, 4));
        assert_eq!(grid.live_count(), 0);
        for cell in grid.iter_cells() {
            assert_eq!(grid.cell(cell.row(), cell.col()), cell);
            assert_eq!(cell.age(), 0);
        }
        assert_eq!(grid.iter_cells().count(), 12);
    }

    #[test]
    #[should_panic(expected = "outside the 3x4 grid")]
    fn test_out_of_bounds_panics() {
        let grid = Grid::new(3, 4);
        grid.state(3, 0);
    }

    #[test]
    fn test_get_is_checked() {
        let grid = Grid::new(3, 4);
        assert!(grid.get(2, 3).is_some());
        assert!(grid.get(2, 4).is_none());
        assert!(grid.get(3, 0).is_none());
    }

    #[test]
    fn test_corner_neighbors_do_not_wrap() {
        // Alive cells on the far edges would be corner neighbors on a torus
        let grid = grid_with(4, 4, &[(3, 3), (0, 3), (3, 0), (1, 1)]);
        assert_eq!(grid.count_live_neighbors(0, 0), 1);

        let full = grid_with(3, 3, &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        assert_eq!(full.count_live_neighbors(0, 0), 3);
        assert_eq!(full.count_live_neighbors(0, 1), 5);
        assert_eq!(full.count_live_neighbors(1, 1), 8);
    }

    #[test]
    fn test_evaluate_only_touches_pending_state() {
        let mut grid = grid_with(3, 3, &[(1, 0), (1, 1), (1, 2)]);
        grid.evaluate(0, 1);
        grid.evaluate(1, 0);

        assert_eq!(grid.state(0, 1), CellState::Dead);
        assert_eq!(grid.cell(0, 1).next_state(), CellState::Alive);
        assert_eq!(grid.state(1, 0), CellState::Alive);
        assert_eq!(grid.cell(1, 0).next_state(), CellState::Dead);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut grid = Grid::new(6, 6);
        grid.place(PatternName::Block, 2, 2, &mut NullObserver);
        let expected = vec![(2, 2), (2, 3), (3, 2), (3, 3)];

        for _ in 0..10 {
            grid.tick(&mut NullObserver);
            assert_eq!(alive_cells(&grid), expected);
        }
    }

    #[test]
    fn test_beehive_is_still_life() {
        let mut grid = Grid::new(7, 7);
        grid.place(PatternName::Beehive, 2, 3, &mut NullObserver);
        let before = alive_cells(&grid);
        grid.tick(&mut NullObserver);
        grid.tick(&mut NullObserver);
        assert_eq!(alive_cells(&grid), before);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut grid = Grid::new(5, 5);
        grid.place(PatternName::Blinker, 1, 2, &mut NullObserver);
        let vertical = vec![(1, 2), (2, 2), (3, 2)];
        let horizontal = vec![(2, 1), (2, 2), (2, 3)];
        assert_eq!(alive_cells(&grid), vertical);

        grid.tick(&mut NullObserver);
        assert_eq!(alive_cells(&grid), horizontal);
        grid.tick(&mut NullObserver);
        assert_eq!(alive_cells(&grid), vertical);
    }

    #[test]
    fn test_blinker_against_edge_does_not_wrap() {
        // Pressed against the top row, the horizontal phase would need row -1
        let mut grid = Grid::new(3, 5);
        grid.set_alive(0, 1, &mut NullObserver);
        grid.set_alive(0, 2, &mut NullObserver);
        grid.set_alive(0, 3, &mut NullObserver);

        grid.tick(&mut NullObserver);
        assert_eq!(alive_cells(&grid), vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn test_tick_matches_snapshot_reference() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(17, 23);
        grid.randomize(&mut rng, 0.35, &mut NullObserver);

        for _ in 0..5 {
            let snapshot: Vec<bool> = grid.iter_cells().map(|cell| cell.is_alive()).collect();
            let expected = reference_step(&snapshot, 17, 23);
            grid.tick(&mut NullObserver);
            let actual: Vec<bool> = grid.iter_cells().map(|cell| cell.is_alive()).collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_parallel_tick_matches_serial() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut serial = Grid::new(30, 40);
        serial.randomize(&mut rng, 0.3, &mut NullObserver);
        let mut parallel = serial.clone();

        for _ in 0..8 {
            serial.tick(&mut NullObserver);
            parallel.tick_parallel(&mut NullObserver);
        }
        assert_eq!(serial.cells, parallel.cells);
    }

    #[test]
    fn test_survivors_age_by_one() {
        let mut grid = Grid::new(6, 6);
        grid.place(PatternName::Block, 1, 1, &mut NullObserver);

        grid.tick(&mut NullObserver);
        assert_eq!(grid.age(1, 1), 1);
        grid.tick(&mut NullObserver);
        grid.tick(&mut NullObserver);
        assert!(alive_cells(&grid).iter().all(|&(r, c)| grid.age(r, c) == 3));
        assert_eq!(grid.age(0, 0), 0);
    }

    #[test]
    fn test_birth_and_death_leave_age_alone() {
        let mut grid = Grid::new(5, 5);
        grid.place(PatternName::Blinker, 1, 2, &mut NullObserver);

        // Center survives, ends die, sides are born
        grid.tick(&mut NullObserver);
        assert_eq!(grid.age(2, 2), 1);
        assert_eq!(grid.age(1, 2), 0);
        assert_eq!(grid.age(2, 1), 0);

        // Reborn ends keep their previous age, dying sides keep theirs
        grid.tick(&mut NullObserver);
        assert_eq!(grid.age(2, 2), 2);
        assert_eq!(grid.age(1, 2), 0);
        assert_eq!(grid.age(2, 1), 0);
    }

    #[test]
    fn test_reborn_cell_keeps_stale_age() {
        let mut grid = Grid::new(6, 6);
        grid.place(PatternName::Block, 1, 1, &mut NullObserver);
        grid.tick(&mut NullObserver);
        grid.tick(&mut NullObserver);
        assert_eq!(grid.age(1, 1), 2);

        // Isolate (1, 1) so it dies, then rebuild a birth around it
        grid.set_dead(1, 2, &mut NullObserver);
        grid.set_dead(2, 1, &mut NullObserver);
        grid.set_dead(2, 2, &mut NullObserver);
        grid.tick(&mut NullObserver);
        assert_eq!(grid.state(1, 1), CellState::Dead);
        assert_eq!(grid.age(1, 1), 2);

        grid.set_alive(0, 0, &mut NullObserver);
        grid.set_alive(0, 2, &mut NullObserver);
        grid.set_alive(2, 1, &mut NullObserver);
        grid.tick(&mut NullObserver);
        assert_eq!(grid.state(1, 1), CellState::Alive);
        assert_eq!(grid.age(1, 1), 2);
    }

    #[test]
    fn test_manual_toggle_is_immediate_and_used_by_next_tick() {
        let mut grid = grid_with(5, 5, &[(2, 1), (2, 2)]);
        // Pending state still says "stay dead" for (2, 3)
        grid.evaluate(2, 3);
        assert_eq!(grid.cell(2, 3).next_state(), CellState::Dead);

        grid.set_alive(2, 3, &mut NullObserver);
        assert_eq!(grid.state(2, 3), CellState::Alive);

        grid.tick(&mut NullObserver);
        assert_eq!(alive_cells(&grid), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let mut grid = Grid::new(8, 8);
        for _ in 0..5 {
            grid.tick(&mut NullObserver);
            assert_eq!(grid.live_count(), 0);
        }
    }

    #[test]
    fn test_observer_called_once_per_cell_per_tick() {
        let mut grid = Grid::new(4, 5);
        grid.place(PatternName::Blinker, 0, 1, &mut NullObserver);

        let mut seen = Vec::new();
        grid.tick(&mut |cell: &Cell| seen.push((cell.row(), cell.col(), cell.state())));

        assert_eq!(seen.len(), 20);
        seen.sort_by_key(|&(r, c, _)| (r, c));
        seen.dedup_by_key(|&mut (r, c, _)| (r, c));
        assert_eq!(seen.len(), 20);
        assert!(seen.contains(&(1, 0, CellState::Alive)));
        assert!(seen.contains(&(0, 1, CellState::Dead)));
    }

    #[test]
    fn test_observer_sees_committed_states_only() {
        let mut grid = Grid::new(5, 5);
        grid.place(PatternName::Blinker, 1, 2, &mut NullObserver);
        grid.tick(&mut |cell: &Cell| assert_eq!(cell.state(), cell.next_state()));
    }

    #[test]
    fn test_manual_edits_notify_once() {
        let mut grid = Grid::new(3, 3);
        let mut count = 0;
        grid.set_alive(1, 1, &mut |_: &Cell| count += 1);
        grid.set_dead(1, 1, &mut |_: &Cell| count += 1);
        assert_eq!(count, 2);

        let mut placed = Vec::new();
        grid.place(PatternName::Block, 0, 0, &mut |cell: &Cell| placed.push((cell.row(), cell.col())));
        assert_eq!(placed, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    #[should_panic]
    fn test_place_out_of_bounds_panics() {
        let mut grid = Grid::new(5, 5);
        grid.place(PatternName::Diehard, 0, 0, &mut NullObserver);
    }

    #[test]
    fn test_clear_resets_state_and_age() {
        let mut grid = Grid::new(5, 5);
        grid.place(PatternName::Block, 1, 1, &mut NullObserver);
        grid.tick(&mut NullObserver);
        grid.clear(&mut NullObserver);

        assert_eq!(grid.live_count(), 0);
        assert!(grid.iter_cells().all(|cell| cell.age() == 0));
    }

    #[test]
    fn test_randomize_density_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(10, 10);

        grid.randomize(&mut rng, 1.0, &mut NullObserver);
        assert_eq!(grid.live_count(), 100);
        grid.randomize(&mut rng, 0.0, &mut NullObserver);
        assert_eq!(grid.live_count(), 0);
    }
}
