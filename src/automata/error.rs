use thiserror::Error;

/// Result type returned by fallible engine routines.
pub type Result<T> = std::result::Result<T, AutomataError>;

/// Error returned by the automaton engines.
///
/// `RuleOutOfRange`, `InvalidRuleText` and `EmptyGrid` reject bad input
/// values; `OutOfBounds` rejects a coordinate outside the grid.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum AutomataError {
    #[error("rule code {0} is outside 0..=255")]
    RuleOutOfRange(i64),
    #[error("invalid rule code {0:?}: expected 1 to 3 decimal digits")]
    InvalidRuleText(String),
    #[error("grid dimensions must be nonzero, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: isize,
        col: isize,
        rows: usize,
        cols: usize,
    },
}

impl AutomataError {
    /// Whether this error rejected an input value (as opposed to a coordinate).
    pub fn is_validation(&self) -> bool {
        !matches!(self, AutomataError::OutOfBounds { .. })
    }
}
