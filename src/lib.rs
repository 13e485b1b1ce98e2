//! Stepping engines for two classic cellular automata: elementary 1D rules
//! addressed by their Wolfram code, and Conway's Game of Life on a torus.
//!
//! The interactive front end lives in the `pixel_automata` binary; this
//! library has no windowing or logging dependencies of its own.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod automata;
pub mod traits_and_structs;

pub use automata::{decode_rule, AutomataError, Grid, Row, RuleCode, RuleTable};
pub use traits_and_structs::automata_trait::CellAutomata;
pub use traits_and_structs::cell::Cell;
