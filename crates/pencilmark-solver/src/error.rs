use derive_more::{Display, Error};
use pencilmark_core::Position;

/// Error raised while solving.
///
/// Unsolved-but-stuck is not an error; it is reported through the solved
/// flag of [`Propagator::solve`](crate::Propagator::solve). The only
/// failure the solve phase can produce is a contradiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolverError {
    /// An undecided cell has no remaining possibilities: the digits
    /// committed in its row, column, and box exclude all nine. The input
    /// puzzle has no consistent solution under the digits already
    /// committed, so propagation aborts rather than guessing.
    #[display("cell {position} has no remaining possibilities")]
    Contradiction {
        /// The over-constrained cell.
        position: Position,
    },
}
