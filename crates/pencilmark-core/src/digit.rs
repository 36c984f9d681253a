//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A sudoku digit in the range 1-9.
///
/// This enum provides type-safe representation of sudoku digits, preventing
/// invalid values at compile time. The external alphabet is the character
/// sequence `"123456789"`; internally every digit also has an index 0-8
/// into that alphabet, which is what [`DigitSet`](crate::DigitSet) and
/// other containers operate on.
///
/// # Examples
///
/// ```
/// use pencilmark_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.index(), 4);
/// assert_eq!(digit.as_char(), '5');
///
/// // Parse from the puzzle alphabet
/// assert_eq!(Digit::from_char('7'), Some(Digit::D7));
/// assert_eq!(Digit::from_char('0'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 0,
    /// The digit 2.
    D2 = 1,
    /// The digit 3.
    D3 = 2,
    /// The digit 4.
    D4 = 3,
    /// The digit 5.
    D5 = 4,
    /// The digit 6.
    D6 = 5,
    /// The digit 7.
    D7 = 6,
    /// The digit 8.
    D8 = 7,
    /// The digit 9.
    D9 = 8,
}

impl Digit {
    /// Array containing all digits from 1 to 9, in alphabet order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from its alphabet index (0-8).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 9, "digit index out of range");
        Self::ALL[index as usize]
    }

    /// Returns this digit's index into the alphabet (0-8).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Parses a digit from its alphabet character (`'1'`-`'9'`).
    ///
    /// Returns `None` for any other character, including the unknown-cell
    /// marker `'x'`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pencilmark_core::Digit;
    ///
    /// assert_eq!(Digit::from_char('1'), Some(Digit::D1));
    /// assert_eq!(Digit::from_char('9'), Some(Digit::D9));
    /// assert_eq!(Digit::from_char('x'), None);
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|digit| digit.as_char() == c)
    }

    /// Returns this digit's alphabet character (`'1'`-`'9'`).
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'1' + self.index()) as char
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, digit) in (0..).zip(Digit::ALL) {
            assert_eq!(digit.index(), i);
            assert_eq!(Digit::from_index(i), digit);
        }
    }

    #[test]
    fn test_char_round_trip() {
        for (c, digit) in "123456789".chars().zip(Digit::ALL) {
            assert_eq!(digit.as_char(), c);
            assert_eq!(Digit::from_char(c), Some(digit));
        }
    }

    #[test]
    fn test_from_char_rejects_non_alphabet() {
        for c in ['0', 'x', ' ', 'a'] {
            assert_eq!(Digit::from_char(c), None);
        }
    }

    #[test]
    #[should_panic(expected = "digit index out of range")]
    fn test_from_index_rejects_nine() {
        let _ = Digit::from_index(9);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Digit::D1), "1");
        assert_eq!(format!("{}", Digit::D9), "9");
    }
}
