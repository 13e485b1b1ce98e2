//! The two stepping engines.
//!
//! Both engines are pure: a step reads one generation and returns a freshly
//! allocated next generation. Nothing here holds state between calls, logs,
//! or touches the screen; the drivers in the binary crate own all of that.

pub mod elementary;
pub mod error;
pub mod life;

pub use elementary::{decode_rule, Row, RuleCode, RuleTable};
pub use error::{AutomataError, Result};
pub use life::Grid;

/// Toroidal index arithmetic: `index + offset` wrapped into `0..size`.
///
/// `size` must be nonzero. Negative offsets wrap from the far end.
#[inline]
pub fn wrap(index: usize, offset: isize, size: usize) -> usize {
    debug_assert!(size != 0);
    let size = size as isize;
    (((index as isize + offset) % size + size) % size) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(0, -1, 5), 4);
        assert_eq!(wrap(4, 1, 5), 0);
        assert_eq!(wrap(2, 0, 5), 2);
        assert_eq!(wrap(2, -1, 5), 1);
        assert_eq!(wrap(0, -1, 1), 0);
        assert_eq!(wrap(0, 1, 1), 0);
        assert_eq!(wrap(1, 1, 2), 0);
    }
}
