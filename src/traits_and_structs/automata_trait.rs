/// What a driver needs from an automaton to animate it in a window.
///
/// Coordinates are screen pixels; implementors map them to cells and ignore
/// anything that falls outside their area.
pub trait CellAutomata {
    /// Advances one tick. Returns `false` once there is nothing left to do.
    fn update(&mut self) -> bool;
    /// Number of generations computed since the last reset.
    fn generation(&self) -> usize;
    /// Paints the current state into an RGBA frame.
    fn draw(&self, screen: &mut [u8]);
    /// Flips the cell under `(x, y)` and returns whether it is now alive.
    fn toggle(&mut self, x: isize, y: isize) -> Option<bool>;
    /// Automata without freehand drawing ignore strokes.
    fn set_line(&mut self, _x0: isize, _y0: isize, _x1: isize, _y1: isize, _alive: bool) {}
    fn randomize(&mut self);
    fn clear(&mut self);
    fn describe(&self) -> String;
}
