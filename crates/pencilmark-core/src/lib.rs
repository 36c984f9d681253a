//! Core data structures for the pencilmark sudoku solver.
//!
//! This crate provides the grid data model that the propagation engine in
//! `pencilmark-solver` operates on:
//!
//! - [`Digit`]: type-safe sudoku digits 1-9 over the alphabet `"123456789"`
//! - [`DigitSet`]: the per-cell possibility set
//! - [`Position`]: validated (x, y) board coordinates
//! - [`House`]: uniform row/column/box views
//! - [`Cell`]: a committed digit or a possibility set
//! - [`Grid`]: exclusive owner of the 81 cells, with text parsing and
//!   rendering
//!
//! # Examples
//!
//! ```
//! use pencilmark_core::{Digit, DigitSet, Grid, House, Position};
//!
//! let mut grid = Grid::empty();
//! grid.cell_mut(Position::new(0, 0)).commit(Digit::D5);
//!
//! // Collect the digits committed in the first row
//! let committed: DigitSet = grid
//!     .house(House::Row { y: 0 })
//!     .iter()
//!     .filter_map(|cell| cell.digit())
//!     .collect();
//! assert!(committed.contains(Digit::D5));
//! ```

pub use self::{
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, ParseError, UNKNOWN_CHAR},
    house::House,
    position::Position,
};

mod cell;
mod digit;
mod digit_set;
mod grid;
mod house;
mod position;
