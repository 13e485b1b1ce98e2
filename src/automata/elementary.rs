//! One-dimensional elementary cellular automata.
//!
//! A rule code in `0..=255` is decoded into a [`RuleTable`] with one output per
//! three-cell neighborhood. Bit 7 of the code answers `(1, 1, 1)` and bit 0
//! answers `(0, 0, 0)`, the usual Wolfram numbering. A [`Row`] wraps around at
//! both ends.

use std::str::FromStr;

use super::error::{AutomataError, Result};
use super::wrap;
use crate::traits_and_structs::cell::Cell;

/// A validated rule code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleCode(u8);

impl RuleCode {
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for RuleCode {
    type Error = AutomataError;

    fn try_from(code: i64) -> Result<Self> {
        u8::try_from(code)
            .map(RuleCode)
            .map_err(|_| AutomataError::RuleOutOfRange(code))
    }
}

impl FromStr for RuleCode {
    type Err = AutomataError;

    /// Parses the text typed by the user: one to three decimal digits.
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.trim();
        if digits.is_empty() || digits.len() > 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AutomataError::InvalidRuleText(s.to_owned()));
        }
        let code: i64 = digits
            .parse()
            .map_err(|_| AutomataError::InvalidRuleText(s.to_owned()))?;
        RuleCode::try_from(code)
    }
}

/// Next-state lookup for each of the eight neighborhoods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleTable {
    code: RuleCode,
    /// Indexed by `left << 2 | center << 1 | right`.
    outputs: [Cell; 8],
}

impl RuleTable {
    pub fn new(code: RuleCode) -> Self {
        let mut outputs = [Cell::DEAD; 8];
        for (bit, out) in outputs.iter_mut().enumerate() {
            *out = Cell::new((code.0 >> bit) & 1 == 1);
        }
        Self { code, outputs }
    }

    pub fn code(&self) -> RuleCode {
        self.code
    }

    #[inline]
    pub fn next(&self, left: Cell, center: Cell, right: Cell) -> Cell {
        let idx = (left.alive as usize) << 2 | (center.alive as usize) << 1 | right.alive as usize;
        self.outputs[idx]
    }

    /// Outputs listed from `(1, 1, 1)` down to `(0, 0, 0)`, i.e. the code's
    /// binary digits in reading order.
    pub fn outputs(&self) -> [Cell; 8] {
        let mut ordered = self.outputs;
        ordered.reverse();
        ordered
    }
}

/// Decodes `code` into a table, rejecting anything outside `0..=255`.
pub fn decode_rule(code: i64) -> Result<RuleTable> {
    RuleCode::try_from(code).map(RuleTable::new)
}

/// A single generation of a 1D automaton. Its length never changes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn new_empty(len: usize) -> Self {
        Self {
            cells: vec![Cell::DEAD; len],
        }
    }

    /// All dead except the middle cell.
    pub fn single_seed(len: usize) -> Self {
        let mut row = Self::new_empty(len);
        if let Some(c) = row.cells.get_mut(len / 2) {
            c.set_alive(true);
        }
        row
    }

    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<Cell> {
        self.cells.get(i).copied()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }

    pub fn set(&mut self, i: isize, alive: bool) -> Result<()> {
        let idx = self.checked_index(i)?;
        self.cells[idx].set_alive(alive);
        Ok(())
    }

    /// Flips cell `i` and returns its new state.
    pub fn toggle(&mut self, i: isize) -> Result<Cell> {
        let idx = self.checked_index(i)?;
        self.cells[idx].toggle();
        Ok(self.cells[idx])
    }

    fn checked_index(&self, i: isize) -> Result<usize> {
        usize::try_from(i)
            .ok()
            .filter(|&idx| idx < self.cells.len())
            .ok_or(AutomataError::OutOfBounds {
                row: 0,
                col: i,
                rows: 1,
                cols: self.cells.len(),
            })
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Self::from_cells(cells)
    }
}

/// Computes the next generation of `row` under `table`.
pub fn step(row: &Row, table: &RuleTable) -> Row {
    let len = row.len();
    let cells = (0..len)
        .map(|i| {
            let left = row.cells[wrap(i, -1, len)];
            let right = row.cells[wrap(i, 1, len)];
            table.next(left, row.cells[i], right)
        })
        .collect();
    Row { cells }
}
