//! The 9x9 grid: cell storage, text parsing, and rendering.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{Cell, Digit, House, Position};

/// The character marking an unknown cell in puzzle text.
pub const UNKNOWN_CHAR: char = 'x';

/// Error parsing puzzle text into a [`Grid`].
///
/// All input validation happens at construction time; once parsing
/// succeeds the solve phase can no longer encounter malformed input.
/// Line numbers and columns are 1-based to match editor diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// The input did not contain exactly 9 puzzle lines.
    #[display("expected 9 puzzle lines, found {found}")]
    LineCount {
        /// Number of non-blank lines found.
        found: usize,
    },
    /// A line did not contain exactly 9 characters after trimming.
    #[display("line {line_number} has {length} characters, expected 9: {line:?}")]
    LineLength {
        /// 1-based line number within the puzzle.
        line_number: usize,
        /// Character count of the offending line.
        length: usize,
        /// The offending line, trimmed.
        line: String,
    },
    /// A character was neither a digit `1`-`9` nor the unknown marker `x`.
    #[display("invalid character {character:?} at line {line_number}, column {column}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// 1-based line number within the puzzle.
        line_number: usize,
        /// 1-based column within the line.
        column: usize,
    },
}

/// A 9x9 sudoku grid.
///
/// The grid exclusively owns its 81 [`Cell`]s, stored row-major. Cells are
/// mutated in place over the life of a solve; they are never replaced.
/// Row, column, and box views all resolve to positions into this one
/// storage, so a mutation made through any view is visible through every
/// other view that overlaps it.
///
/// # Examples
///
/// ```
/// use pencilmark_core::{Digit, Grid, Position};
///
/// let grid: Grid = "\
/// 1234x6789
/// xxxxxxxxx
/// xxxxxxxxx
/// xxxxxxxxx
/// xxxxxxxxx
/// xxxxxxxxx
/// xxxxxxxxx
/// xxxxxxxxx
/// xxxxxxxxx"
///     .parse()?;
///
/// assert_eq!(grid.cell(Position::new(0, 0)).digit(), Some(Digit::D1));
/// assert_eq!(grid.cell(Position::new(4, 0)).digit(), None);
/// assert!(!grid.is_solved());
/// # Ok::<(), pencilmark_core::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Box<[Cell; 81]>,
}

impl Grid {
    /// Creates a grid with every cell undecided (all 9 digits possible).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: Box::new(std::array::from_fn(|_| Cell::undecided())),
        }
    }

    /// Returns a shared reference to the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[usize::from(pos.index())]
    }

    /// Returns a mutable reference to the cell at `pos`.
    #[must_use]
    pub fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.cells[usize::from(pos.index())]
    }

    /// Returns references to the 9 cells of `house`, in house order.
    ///
    /// The same accessor serves rows, columns, and boxes; the returned
    /// references alias the grid's own storage, never copies.
    #[must_use]
    pub fn house(&self, house: House) -> [&Cell; 9] {
        house.positions().map(|pos| self.cell(pos))
    }

    /// Returns references to the 9 cells of row `y`, left to right.
    #[must_use]
    pub fn row(&self, y: u8) -> [&Cell; 9] {
        self.house(House::Row { y })
    }

    /// Returns references to the 9 cells of column `x`, top to bottom.
    #[must_use]
    pub fn column(&self, x: u8) -> [&Cell; 9] {
        self.house(House::Column { x })
    }

    /// Returns references to the 9 cells of box `index`, in row-major
    /// sub-order.
    #[must_use]
    pub fn box_cells(&self, index: u8) -> [&Cell; 9] {
        self.house(House::Box { index })
    }

    /// Returns an iterator over all 81 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Returns `true` iff every cell holds a committed digit.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Cell::is_committed)
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    /// Parses puzzle text: 9 lines of 9 characters, digits `1`-`9` for
    /// pre-filled cells and `x` for unknown cells.
    ///
    /// Each line is trimmed before validation; fully blank lines are
    /// ignored, so indented string literals and trailing newlines parse
    /// cleanly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != 9 {
            return Err(ParseError::LineCount { found: lines.len() });
        }

        let mut grid = Self::empty();
        for (y, line) in (0u8..).zip(&lines) {
            let length = line.chars().count();
            if length != 9 {
                return Err(ParseError::LineLength {
                    line_number: usize::from(y) + 1,
                    length,
                    line: (*line).to_owned(),
                });
            }
            for (x, c) in (0u8..).zip(line.chars()) {
                let cell = if c == UNKNOWN_CHAR {
                    Cell::undecided()
                } else if let Some(digit) = Digit::from_char(c) {
                    Cell::committed(digit)
                } else {
                    return Err(ParseError::InvalidCharacter {
                        character: c,
                        line_number: usize::from(y) + 1,
                        column: usize::from(x) + 1,
                    });
                };
                *grid.cell_mut(Position::new(x, y)) = cell;
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    /// Renders the grid as 9 newline-joined lines of 9 characters, with
    /// no trailing newline. Committed cells emit their digit character,
    /// undecided cells the unknown marker `x`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..9 {
                match self.cell(Position::new(x, y)).digit() {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "{UNKNOWN_CHAR}")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::DigitSet;

    use super::*;

    const PUZZLE: &str = "
        53xx7xxxx
        6xx195xxx
        x98xxxx6x
        8xxx6xxx3
        4xx8x3xx1
        7xxx2xxx6
        x6xxxx28x
        xxx419xx5
        xxxx8xx79
    ";

    #[test]
    fn test_parse_mixed_cells() {
        let grid: Grid = PUZZLE.parse().unwrap();
        assert_eq!(grid.cell(Position::new(0, 0)).digit(), Some(Digit::D5));
        assert_eq!(grid.cell(Position::new(1, 0)).digit(), Some(Digit::D3));
        let unknown = grid.cell(Position::new(2, 0));
        assert_eq!(unknown.digit(), None);
        assert_eq!(unknown.possibilities(), DigitSet::FULL);
    }

    #[test]
    fn test_parse_rejects_wrong_line_count() {
        let eight_lines = "xxxxxxxxx\n".repeat(8);
        assert_eq!(
            eight_lines.parse::<Grid>(),
            Err(ParseError::LineCount { found: 8 })
        );
        let ten_lines = "xxxxxxxxx\n".repeat(10);
        assert_eq!(
            ten_lines.parse::<Grid>(),
            Err(ParseError::LineCount { found: 10 })
        );
    }

    #[test]
    fn test_parse_rejects_wrong_line_length() {
        let mut lines = vec!["xxxxxxxxx"; 9];
        lines[3] = "xxxx";
        let err = lines.join("\n").parse::<Grid>().unwrap_err();
        assert_eq!(
            err,
            ParseError::LineLength {
                line_number: 4,
                length: 4,
                line: "xxxx".to_owned(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_invalid_character() {
        let mut lines = vec!["xxxxxxxxx"; 9];
        lines[0] = "xx0xxxxxx";
        let err = lines.join("\n").parse::<Grid>().unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidCharacter {
                character: '0',
                line_number: 1,
                column: 3,
            }
        );
    }

    #[test]
    fn test_parse_trims_lines() {
        let padded = "  53xx7xxxx  \n".to_owned() + &"xxxxxxxxx\n".repeat(8);
        let grid: Grid = padded.parse().unwrap();
        assert_eq!(grid.cell(Position::new(0, 0)).digit(), Some(Digit::D5));
    }

    #[test]
    fn test_render_round_trip() {
        let grid: Grid = PUZZLE.parse().unwrap();
        let rendered = grid.to_string();
        assert!(!rendered.ends_with('\n'));
        assert_eq!(rendered.lines().count(), 9);
        assert_eq!(rendered.lines().next(), Some("53xx7xxxx"));
        assert_eq!(rendered.parse::<Grid>().unwrap(), grid);
    }

    #[test]
    fn test_house_views_alias_storage() {
        let mut grid = Grid::empty();
        grid.cell_mut(Position::new(4, 2)).commit(Digit::D8);

        // The same commit is visible through the row, column, and box views
        assert_eq!(grid.row(2)[4].digit(), Some(Digit::D8));
        assert_eq!(grid.column(4)[2].digit(), Some(Digit::D8));
        assert_eq!(grid.box_cells(1)[7].digit(), Some(Digit::D8));
    }

    #[test]
    fn test_is_solved() {
        assert!(!Grid::empty().is_solved());

        let solved = "
            534678912
            672195348
            198342567
            859761423
            426853791
            713924856
            961537284
            287419635
            345286179
        ";
        let grid: Grid = solved.parse().unwrap();
        assert!(grid.is_solved());
    }

    #[test]
    fn test_error_display_carries_diagnostics() {
        let err = ParseError::InvalidCharacter {
            character: '?',
            line_number: 2,
            column: 7,
        };
        assert_eq!(
            err.to_string(),
            "invalid character '?' at line 2, column 7"
        );
    }
}
