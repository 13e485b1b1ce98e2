/// A single binary cell. Its numeric view is always 0 or 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub alive: bool,
}

impl Cell {
    pub const DEAD: Cell = Cell { alive: false };
    pub const ALIVE: Cell = Cell { alive: true };

    pub fn new(alive: bool) -> Self {
        Self { alive }
    }

    #[must_use]
    pub fn next_state(mut self, alive: bool) -> Self {
        self.alive = alive;
        self
    }

    pub fn set_alive(&mut self, alive: bool) {
        *self = self.next_state(alive);
    }

    pub fn toggle(&mut self) {
        self.alive = !self.alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Self::new(alive)
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell.alive as u8
    }
}
