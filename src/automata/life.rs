//! Conway's Game of Life on a toroidal grid.

use super::error::{AutomataError, Result};
use super::wrap;
use crate::traits_and_structs::cell::Cell;

/// The eight Moore neighborhood offsets as `(d_row, d_col)`.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A fixed-size, row-major generation of Life cells. Both edges wrap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates an all-dead grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let size = rows
            .checked_mul(cols)
            .filter(|&size| size != 0)
            .ok_or(AutomataError::EmptyGrid { rows, cols })?;
        Ok(Self {
            cells: vec![Cell::DEAD; size],
            rows,
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over the grid one row slice at a time.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid_idx(row, col).map(|i| self.cells[i])
    }

    pub fn set(&mut self, row: isize, col: isize, alive: bool) -> Result<()> {
        let i = self.checked_idx(row, col)?;
        self.cells[i].set_alive(alive);
        Ok(())
    }

    /// Flips the cell at `(row, col)` and returns its new state. On a bad
    /// coordinate the grid is left untouched.
    pub fn toggle(&mut self, row: isize, col: isize) -> Result<Cell> {
        let i = self.checked_idx(row, col)?;
        self.cells[i].toggle();
        Ok(self.cells[i])
    }

    pub fn clear(&mut self) {
        for c in self.cells.iter_mut() {
            *c = Cell::default();
        }
    }

    /// Overwrites the grid in row-major order from `states`. Cells left over
    /// once `states` runs out become dead.
    pub fn fill_from<I: IntoIterator<Item = bool>>(&mut self, states: I) {
        let mut states = states.into_iter();
        for c in self.cells.iter_mut() {
            c.set_alive(states.next().unwrap_or(false));
        }
    }

    /// Paints a straight stroke from `(r0, c0)` towards `(r1, c1)`.
    ///
    /// The start is clamped into the grid and the stroke stops at the first
    /// point that falls outside it.
    pub fn set_line(&mut self, r0: isize, c0: isize, r1: isize, c1: isize, alive: bool) {
        let r0 = r0.clamp(0, self.rows as isize - 1);
        let c0 = c0.clamp(0, self.cols as isize - 1);
        for (c, r) in line_drawing::Bresenham::new((c0, r0), (c1, r1)) {
            if let Some(i) = self.grid_idx(r, c) {
                self.cells[i].set_alive(alive);
            } else {
                break;
            }
        }
    }

    /// Number of distinct live cells adjacent to `(row, col)`, wrapping at the
    /// edges.
    ///
    /// On a grid with an axis shorter than 3 several offsets land on the same
    /// cell, or on `(row, col)` itself. Each neighbouring cell is counted once
    /// and the cell never counts itself.
    ///
    /// Coordinates past the edge wrap onto the torus like every other index.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let (row, col) = (row % self.rows, col % self.cols);
        let mut seen = [(0, 0); 8];
        let mut n_seen = 0;
        let mut count = 0;
        for &(dr, dc) in NEIGHBOR_OFFSETS.iter() {
            let pos = (wrap(row, dr, self.rows), wrap(col, dc, self.cols));
            if pos == (row, col) || seen[..n_seen].contains(&pos) {
                continue;
            }
            seen[n_seen] = pos;
            n_seen += 1;
            count += self.cells[pos.0 * self.cols + pos.1].alive as u8;
        }
        count
    }

    /// Computes the next generation under B3/S23.
    pub fn step(&self) -> Grid {
        let mut next = Vec::with_capacity(self.cells.len());
        for row in 0..self.rows {
            for col in 0..self.cols {
                let neibs = self.count_live_neighbors(row, col);
                let alive = if self.cells[row * self.cols + col].alive {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                next.push(Cell::new(alive));
            }
        }
        Grid {
            cells: next,
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn grid_idx<I: TryInto<usize>>(&self, row: I, col: I) -> Option<usize> {
        if let (Ok(row), Ok(col)) = (row.try_into(), col.try_into()) {
            if row < self.rows && col < self.cols {
                Some(col + row * self.cols)
            } else {
                None
            }
        } else {
            None
        }
    }

    fn checked_idx(&self, row: isize, col: isize) -> Result<usize> {
        self.grid_idx(row, col).ok_or(AutomataError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid_with(rows: usize, cols: usize, live: &[(isize, isize)]) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        for &(r, c) in live {
            grid.set(r, c, true).unwrap();
        }
        grid
    }

    fn all_live(rows: usize, cols: usize) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        for r in 0..rows as isize {
            for c in 0..cols as isize {
                grid.set(r, c, true).unwrap();
            }
        }
        grid
    }

    #[test]
    fn test_new_grid() {
        let grid = Grid::new(4, 6).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 6);
        assert_eq!(grid.cells().len(), 24);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.iter_rows().count(), 4);

        assert_eq!(Grid::new(0, 5), Err(AutomataError::EmptyGrid { rows: 0, cols: 5 }));
        assert!(Grid::new(5, 0).unwrap_err().is_validation());
    }

    #[test]
    fn test_blinker() {
        let horizontal = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let gen1 = horizontal.step();
        assert_eq!(gen1, vertical);
        assert_eq!(gen1.step(), horizontal);
    }

    #[test]
    fn test_blinker_across_edge() {
        let horizontal = grid_with(5, 5, &[(0, 4), (0, 0), (0, 1)]);
        let vertical = grid_with(5, 5, &[(4, 0), (0, 0), (1, 0)]);
        assert_eq!(horizontal.step(), vertical);
    }

    #[test]
    fn test_block() {
        let block = grid_with(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(block.step(), block);
    }

    #[test]
    fn test_glider_wraps_around() {
        let glider = grid_with(8, 8, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        let mut grid = glider.step().step().step().step();
        assert_eq!(
            grid,
            grid_with(8, 8, &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)])
        );
        for _ in 4..32 {
            grid = grid.step();
        }
        assert_eq!(grid, glider);
    }

    #[test]
    fn test_step_leaves_input_alone() {
        let grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let before = grid.clone();
        let a = grid.step();
        let b = grid.step();
        assert_eq!(a, b);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_count_neighbors_edges() {
        let grid = grid_with(4, 4, &[(0, 0)]);
        assert_eq!(grid.count_live_neighbors(3, 3), 1);
        assert_eq!(grid.count_live_neighbors(0, 3), 1);
        assert_eq!(grid.count_live_neighbors(3, 0), 1);
        assert_eq!(grid.count_live_neighbors(0, 0), 0);
        assert_eq!(grid.count_live_neighbors(2, 2), 0);
    }

    #[test]
    fn test_count_neighbors_small_grids() {
        assert_eq!(all_live(1, 1).count_live_neighbors(0, 0), 0);
        assert_eq!(all_live(2, 2).count_live_neighbors(0, 0), 3);
        assert_eq!(all_live(1, 3).count_live_neighbors(0, 1), 2);
        assert_eq!(all_live(2, 3).count_live_neighbors(1, 1), 5);
    }

    #[test]
    fn test_count_neighbors_wraps_coordinates() {
        let lone = all_live(1, 1);
        assert_eq!(lone.count_live_neighbors(5, 0), 0);
        assert_eq!(lone.count_live_neighbors(0, 7), 0);

        let grid = grid_with(4, 4, &[(0, 0), (0, 1)]);
        assert_eq!(grid.count_live_neighbors(4, 4), grid.count_live_neighbors(0, 0));
        assert_eq!(grid.count_live_neighbors(4, 4), 1);
        assert_eq!(grid.count_live_neighbors(7, 5), grid.count_live_neighbors(3, 1));
    }

    #[test]
    fn test_fill_from() {
        let mut grid = all_live(2, 3);
        grid.fill_from(vec![true, false, true]);
        assert_eq!(grid, grid_with(2, 3, &[(0, 0), (0, 2)]));

        grid.fill_from(std::iter::repeat(true));
        assert_eq!(grid, all_live(2, 3));
    }

    #[test]
    fn test_toggle_out_of_bounds() {
        let mut grid = grid_with(3, 4, &[(1, 1)]);
        let before = grid.clone();
        for &(r, c) in &[(-1, 0), (0, -1), (3, 0), (0, 4), (isize::MAX, 0)] {
            assert_eq!(
                grid.toggle(r, c),
                Err(AutomataError::OutOfBounds {
                    row: r,
                    col: c,
                    rows: 3,
                    cols: 4
                })
            );
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn test_set_line() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_line(0, 0, 4, 4, true);
        assert_eq!(grid.population(), 5);
        for i in 0..5 {
            assert_eq!(grid.get(i, i), Some(Cell::ALIVE));
        }

        // Stops at the edge instead of wrapping.
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_line(2, 3, 2, 9, true);
        assert_eq!(grid.population(), 2);

        grid.clear();
        assert_eq!(grid.population(), 0);
    }

    proptest! {
        #[test]
        fn test_toggle_involution(
            rows in 1..12usize,
            cols in 1..12usize,
            live in proptest::collection::vec((0..12isize, 0..12isize), 0..20),
            r in 0..12isize,
            c in 0..12isize,
        ) {
            let mut grid = Grid::new(rows, cols).unwrap();
            for (lr, lc) in live {
                let _ = grid.set(lr, lc, true);
            }
            let before = grid.clone();
            let first = grid.toggle(r, c);
            let second = grid.toggle(r, c);
            prop_assert_eq!(first.is_ok(), second.is_ok());
            if let (Ok(a), Ok(b)) = (first, second) {
                prop_assert_ne!(a, b);
            }
            prop_assert_eq!(grid, before);
        }

        #[test]
        fn test_uniform_neighbor_counts(rows in 3..10usize, cols in 3..10usize) {
            let dead = Grid::new(rows, cols).unwrap();
            let live = all_live(rows, cols);
            for r in 0..rows {
                for c in 0..cols {
                    prop_assert_eq!(dead.count_live_neighbors(r, c), 0);
                    prop_assert_eq!(live.count_live_neighbors(r, c), 8);
                }
            }
        }

        #[test]
        fn test_step_is_deterministic(
            live in proptest::collection::vec((0..6isize, 0..7isize), 0..30),
        ) {
            let mut grid = Grid::new(6, 7).unwrap();
            for (r, c) in live {
                grid.set(r, c, true).unwrap();
            }
            let next = grid.step();
            prop_assert_eq!(next.rows(), 6);
            prop_assert_eq!(next.cols(), 7);
            prop_assert_eq!(next, grid.step());
        }
    }
}
