//! A possibility set of sudoku digits.
//!
//! This module provides [`DigitSet`], a 9-bit set tracking which digits
//! could still occupy a cell. Bits 0-8 of the backing `u16` represent
//! digits 1-9 respectively, giving cheap storage and fast set operations.
//!
//! # Examples
//!
//! ```
//! use pencilmark_core::{Digit, DigitSet};
//!
//! // An undecided cell starts with every digit possible
//! let mut possible = DigitSet::FULL;
//!
//! // Pruning removes digits committed elsewhere in a house
//! possible.remove(Digit::D5);
//! possible.remove(Digit::D7);
//!
//! assert_eq!(possible.len(), 7);
//! assert!(!possible.contains(Digit::D5));
//! assert!(possible.contains(Digit::D1));
//! ```

use std::{
    fmt,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::Digit;

/// A set of sudoku digits, represented as a bitset.
///
/// A forced single is a set whose [`as_single`](Self::as_single) returns
/// `Some`; an over-constrained cell is one whose set [`is_empty`](Self::is_empty).
///
/// # Set Operations
///
/// ```
/// use pencilmark_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// assert_eq!(a | b, DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4]));
/// assert_eq!(a & b, DigitSet::from_iter([Digit::D2, Digit::D3]));
/// assert_eq!(a.difference(b), DigitSet::from_iter([Digit::D1]));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

const MASK: u16 = 0b1_1111_1111;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: MASK };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Inserts a digit into the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.bits |= 1 << digit.index();
    }

    /// Removes a digit from the set. Removal is idempotent.
    pub const fn remove(&mut self, digit: Digit) {
        self.bits &= !(1 << digit.index());
    }

    /// Removes every digit of `other` from the set.
    pub const fn remove_all(&mut self, other: Self) {
        self.bits &= !other.bits;
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & (1 << digit.index()) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the sole member if the set has exactly one digit.
    ///
    /// This is the forced-single test: a cell whose possibility set
    /// answers `Some` here can be committed to that digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use pencilmark_core::{Digit, DigitSet};
    ///
    /// assert_eq!(DigitSet::from_iter([Digit::D4]).as_single(), Some(Digit::D4));
    /// assert_eq!(DigitSet::EMPTY.as_single(), None);
    /// assert_eq!(DigitSet::FULL.as_single(), None);
    /// ```
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.bits.count_ones() == 1 {
            #[expect(clippy::cast_possible_truncation, reason = "trailing_zeros of a 9-bit value")]
            let index = self.bits.trailing_zeros() as u8;
            Some(Digit::from_index(index))
        } else {
            None
        }
    }

    /// Returns `true` if every digit of `self` is also in `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns an iterator over the digits in the set, in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        Digit::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
