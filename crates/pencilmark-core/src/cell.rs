//! A single grid cell: committed digit or possibility set.

use crate::{Digit, DigitSet};

/// One of the 81 grid positions.
///
/// A cell either holds a committed digit or a set of still-possible
/// digits. The two states are mutually exclusive: committing a value
/// discards the undecided-state bookkeeping, so a committed cell always
/// has an empty possibility set.
///
/// # Examples
///
/// ```
/// use pencilmark_core::{Cell, Digit, DigitSet};
///
/// let mut cell = Cell::undecided();
/// assert_eq!(cell.possibilities(), DigitSet::FULL);
///
/// cell.remove_possibilities(DigitSet::from_iter([Digit::D1, Digit::D2]));
/// assert_eq!(cell.possibilities().len(), 7);
///
/// cell.commit(Digit::D5);
/// assert_eq!(cell.digit(), Some(Digit::D5));
/// assert!(cell.possibilities().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    committed: Option<Digit>,
    possible: DigitSet,
}

impl Cell {
    /// Creates an undecided cell with all nine digits possible.
    #[must_use]
    pub const fn undecided() -> Self {
        Self {
            committed: None,
            possible: DigitSet::FULL,
        }
    }

    /// Creates a cell pre-committed to `digit` (a given of the puzzle).
    #[must_use]
    pub const fn committed(digit: Digit) -> Self {
        Self {
            committed: Some(digit),
            possible: DigitSet::EMPTY,
        }
    }

    /// Returns the committed digit, or `None` while undecided.
    #[must_use]
    pub const fn digit(&self) -> Option<Digit> {
        self.committed
    }

    /// Returns `true` if the cell holds a committed digit.
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        self.committed.is_some()
    }

    /// Returns the current possibility set.
    ///
    /// Empty for committed cells.
    #[must_use]
    pub const fn possibilities(&self) -> DigitSet {
        self.possible
    }

    /// Returns the sole possible digit, if the possibility set has
    /// narrowed to exactly one member.
    #[must_use]
    pub fn single_possibility(&self) -> Option<Digit> {
        self.possible.as_single()
    }

    /// Commits the cell to `digit`, clearing the possibility set.
    pub const fn commit(&mut self, digit: Digit) {
        self.committed = Some(digit);
        self.possible = DigitSet::EMPTY;
    }

    /// Removes `digits` from the possibility set.
    ///
    /// Callers only invoke this on undecided cells; for a committed cell
    /// the set is already empty and this is a no-op.
    pub const fn remove_possibilities(&mut self, digits: DigitSet) {
        self.possible.remove_all(digits);
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::undecided()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undecided_starts_full() {
        let cell = Cell::undecided();
        assert_eq!(cell.digit(), None);
        assert!(!cell.is_committed());
        assert_eq!(cell.possibilities(), DigitSet::FULL);
        assert_eq!(cell.single_possibility(), None);
    }

    #[test]
    fn test_committed_constructor_clears_possibilities() {
        let cell = Cell::committed(Digit::D7);
        assert_eq!(cell.digit(), Some(Digit::D7));
        assert!(cell.possibilities().is_empty());
    }

    #[test]
    fn test_commit_clears_possibilities() {
        let mut cell = Cell::undecided();
        cell.commit(Digit::D3);
        assert_eq!(cell.digit(), Some(Digit::D3));
        assert!(cell.possibilities().is_empty());
    }

    #[test]
    fn test_single_possibility() {
        let mut cell = Cell::undecided();
        let mut all_but_four = DigitSet::FULL;
        all_but_four.remove(Digit::D4);
        cell.remove_possibilities(all_but_four);
        assert_eq!(cell.single_possibility(), Some(Digit::D4));
    }

    #[test]
    fn test_remove_on_committed_is_noop() {
        let mut cell = Cell::committed(Digit::D1);
        cell.remove_possibilities(DigitSet::FULL);
        assert_eq!(cell.digit(), Some(Digit::D1));
        assert!(cell.possibilities().is_empty());
    }
}
