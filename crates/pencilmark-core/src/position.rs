//! Board position (x, y) coordinate type.

use std::fmt::{self, Display};

/// A cell coordinate on the 9x9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Positions are validated at construction; every existing
/// `Position` refers to a real cell, so grid lookups never need a bounds
/// check of their own. Passing an out-of-range coordinate is a programmer
/// error and panics.
///
/// # Examples
///
/// ```
/// use pencilmark_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 2);
/// assert_eq!(pos.index(), 22); // row-major: 2 * 9 + 4
/// assert_eq!(pos.box_index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a position from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "position out of range");
        Self { x, y }
    }

    /// Creates a position from a row-major cell index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 81, "cell index out of range");
        Self::new(index % 9, index / 9)
    }

    /// Creates a position from a box index and a cell index within the box.
    ///
    /// Box `i` is the 3x3 block with row origin `3 * (i / 3)` and column
    /// origin `3 * (i % 3)`; cells within the box are numbered 0-8 in
    /// row-major sub-order.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell_index` is not in the range 0-8.
    #[must_use]
    pub const fn from_box(box_index: u8, cell_index: u8) -> Self {
        assert!(box_index < 9 && cell_index < 9, "box coordinate out of range");
        let y = 3 * (box_index / 3) + cell_index / 3;
        let x = 3 * (box_index % 3) + cell_index % 3;
        Self::new(x, y)
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.y * 9 + self.x
    }

    /// Returns the index of the 3x3 box containing this position.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        3 * (self.y / 3) + self.x / 3
    }

    /// Returns an iterator over all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Self::from_index)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_row_major_index() {
        assert_eq!(Position::new(0, 0).index(), 0);
        assert_eq!(Position::new(8, 0).index(), 8);
        assert_eq!(Position::new(0, 1).index(), 9);
        assert_eq!(Position::new(8, 8).index(), 80);
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(8, 0).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(0, 8).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_from_box_mapping() {
        // Box 4 (center) starts at row 3, column 3, row-major sub-order
        assert_eq!(Position::from_box(4, 0), Position::new(3, 3));
        assert_eq!(Position::from_box(4, 2), Position::new(5, 3));
        assert_eq!(Position::from_box(4, 8), Position::new(5, 5));
        // Box 5 starts at row 3, column 6
        assert_eq!(Position::from_box(5, 0), Position::new(6, 3));
    }

    #[test]
    fn test_all_is_row_major() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), 81);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[1], Position::new(1, 0));
        assert_eq!(all[9], Position::new(0, 1));
        assert_eq!(all[80], Position::new(8, 8));
    }

    #[test]
    #[should_panic(expected = "position out of range")]
    fn test_new_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }

    proptest! {
        #[test]
        fn prop_box_round_trip(box_index in 0u8..9, cell_index in 0u8..9) {
            let pos = Position::from_box(box_index, cell_index);
            prop_assert_eq!(pos.box_index(), box_index);
        }

        #[test]
        fn prop_index_round_trip(index in 0u8..81) {
            prop_assert_eq!(Position::from_index(index).index(), index);
        }
    }
}
