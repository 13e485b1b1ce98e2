use std::error::Error;

use log::debug;

use super::{run_automata, RunSettings};
use crate::auxiliary::config::{
    CELL_SIZE, DARK, GRID_COLS, GRID_ROWS, INITIAL_FILL, LIFE_TICKS_PER_SECOND, LIGHT,
};
use crate::auxiliary::draw::{fill_cell, pixel_to_cell};
use crate::auxiliary::randomizer::coin_flips;
use pixel_automata::{CellAutomata, Grid};

pub fn run_life() -> Result<(), Box<dyn Error>> {
    let grid = Grid::new(GRID_ROWS, GRID_COLS)?;
    run_automata(
        Life::new(grid),
        RunSettings {
            ticks_per_second: LIFE_TICKS_PER_SECOND,
            start_paused: true,
        },
    )?;
    Ok(())
}

#[derive(Clone, Debug)]
pub struct Life {
    grid: Grid,
    generation: usize,
}

impl Life {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
        }
    }

    #[cfg(test)]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl CellAutomata for Life {
    fn update(&mut self) -> bool {
        self.grid = self.grid.step();
        self.generation += 1;
        true
    }

    fn generation(&self) -> usize {
        self.generation
    }

    fn draw(&self, screen: &mut [u8]) {
        for (row, cells) in self.grid.iter_rows().enumerate() {
            for (col, c) in cells.iter().enumerate() {
                fill_cell(screen, row, col, if c.alive { LIGHT } else { DARK });
            }
        }
    }

    fn toggle(&mut self, x: isize, y: isize) -> Option<bool> {
        let (row, col) = match pixel_to_cell(x, y) {
            Some(cell) => cell,
            None => {
                debug!("click at ({}, {}) is off the grid", x, y);
                return None;
            }
        };
        match self.grid.toggle(row as isize, col as isize) {
            Ok(cell) => Some(cell.alive),
            Err(e) => {
                debug!("{}", e);
                None
            }
        }
    }

    fn set_line(&mut self, x0: isize, y0: isize, x1: isize, y1: isize, alive: bool) {
        let size = CELL_SIZE as isize;
        self.grid.set_line(
            y0.div_euclid(size),
            x0.div_euclid(size),
            y1.div_euclid(size),
            x1.div_euclid(size),
            alive,
        );
    }

    fn randomize(&mut self) {
        self.grid.fill_from(coin_flips(INITIAL_FILL));
        self.generation = 0;
    }

    fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    fn describe(&self) -> String {
        "Conway's Game of Life".to_owned()
    }
}
