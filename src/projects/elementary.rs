use std::error::Error;

use log::debug;

use super::{run_automata, RunSettings};
use crate::auxiliary::config::{
    BACKGROUND, DARK, ELEMENTARY_TICKS_PER_SECOND, GRID_COLS, GRID_ROWS, INITIAL_FILL, LIGHT,
};
use crate::auxiliary::draw::{fill_cell, pixel_to_cell};
use crate::auxiliary::randomizer::coin_flips;
use pixel_automata::automata::elementary::step;
use pixel_automata::{Cell, CellAutomata, Row, RuleTable};

pub fn run_elementary(table: RuleTable) -> Result<(), Box<dyn Error>> {
    run_automata(
        Elementary::new(table, GRID_COLS, GRID_ROWS),
        RunSettings {
            ticks_per_second: ELEMENTARY_TICKS_PER_SECOND,
            start_paused: false,
        },
    )?;
    Ok(())
}

/// A 1D automaton drawn as a spacetime diagram: generation `n` is screen row
/// `n`, and the animation stops when the screen is full.
#[derive(Clone, Debug)]
pub struct Elementary {
    table: RuleTable,
    history: Vec<Row>,
    height: usize,
}

impl Elementary {
    pub fn new(table: RuleTable, width: usize, height: usize) -> Self {
        assert!(width != 0 && height != 0);
        Self {
            table,
            history: vec![Row::single_seed(width)],
            height,
        }
    }

    #[cfg(test)]
    pub fn generations(&self) -> &[Row] {
        &self.history
    }

    fn restart_from(&mut self, seed: Row) {
        self.history.clear();
        self.history.push(seed);
    }

    fn seed(&self) -> &Row {
        &self.history[0]
    }
}

impl CellAutomata for Elementary {
    fn update(&mut self) -> bool {
        if self.history.len() >= self.height {
            return false;
        }
        let next = match self.history.last() {
            Some(last) => step(last, &self.table),
            None => return false,
        };
        self.history.push(next);
        true
    }

    fn generation(&self) -> usize {
        self.history.len() - 1
    }

    fn draw(&self, screen: &mut [u8]) {
        for y in 0..self.height {
            match self.history.get(y) {
                Some(row) => {
                    for (x, c) in row.iter().enumerate() {
                        fill_cell(screen, y, x, if c.alive { DARK } else { LIGHT });
                    }
                }
                None => {
                    for x in 0..self.seed().len() {
                        fill_cell(screen, y, x, BACKGROUND);
                    }
                }
            }
        }
    }

    /// Only the seed row can be edited; doing so recomputes from scratch.
    fn toggle(&mut self, x: isize, y: isize) -> Option<bool> {
        let (row, col) = pixel_to_cell(x, y)?;
        if row != 0 {
            return None;
        }
        let mut seed = self.seed().clone();
        let cell = seed.toggle(col as isize).ok()?;
        debug!("seed cell {} is now {}", col, u8::from(cell));
        self.restart_from(seed);
        Some(cell.alive)
    }

    fn randomize(&mut self) {
        let width = self.seed().len();
        let cells: Vec<Cell> = coin_flips(INITIAL_FILL).take(width).map(Cell::new).collect();
        self.restart_from(Row::from_cells(cells));
    }

    fn clear(&mut self) {
        let width = self.seed().len();
        self.restart_from(Row::single_seed(width));
    }

    fn describe(&self) -> String {
        format!("Rule {}", self.table.code().value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auxiliary::config::CELL_SIZE;
    use pixel_automata::decode_rule;

    #[test]
    fn test_fills_screen_then_stops() {
        let mut automata = Elementary::new(decode_rule(90).unwrap(), 9, 4);
        let mut ticks = 0;
        while automata.update() {
            ticks += 1;
        }
        assert_eq!(ticks, 3);
        assert_eq!(automata.generations().len(), 4);
        assert_eq!(automata.generation(), 3);
        assert!(!automata.update());

        let bits: Vec<u8> = automata.generations()[2].iter().map(u8::from).collect();
        assert_eq!(bits, vec![0, 0, 1, 0, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_toggle_edits_seed_only() {
        let mut automata = Elementary::new(decode_rule(30).unwrap(), 8, 5);
        automata.update();
        assert_eq!(automata.toggle(0, 0), Some(true));
        assert_eq!(automata.generations().len(), 1);
        assert_eq!(automata.generations()[0].population(), 2);

        assert_eq!(automata.toggle(0, CELL_SIZE as isize), None);
        assert_eq!(automata.toggle(-1, 0), None);
        // Column past the automaton's width but still on screen.
        assert_eq!(automata.toggle(20 * CELL_SIZE as isize, 0), None);
    }

    #[test]
    fn test_clear_restores_single_seed() {
        let mut automata = Elementary::new(decode_rule(110).unwrap(), 8, 5);
        automata.randomize();
        automata.update();
        automata.clear();
        assert_eq!(automata.generations(), &[Row::single_seed(8)]);
        assert_eq!(automata.describe(), "Rule 110");
    }
}
