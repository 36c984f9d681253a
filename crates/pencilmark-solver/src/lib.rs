//! Constraint-propagation engine for the pencilmark sudoku solver.
//!
//! The engine repeatedly prunes per-cell possibility sets against the
//! digits already committed in each row, column, and box, and commits any
//! cell whose possibility set narrows to a single digit, until the grid is
//! solved or a fixed point is reached. See [`Propagator`].

pub use self::{error::*, propagator::*};

mod error;
mod propagator;
