use pencilmark_core::{DigitSet, Grid, House, Position};

use crate::SolverError;

/// Statistics collected during a solve.
///
/// # Examples
///
/// ```
/// use pencilmark_core::Grid;
/// use pencilmark_solver::Propagator;
///
/// let mut grid = Grid::empty();
/// let (solved, stats) = Propagator::new().solve(&mut grid)?;
/// assert!(!solved); // nothing to propagate from on an empty grid
/// assert!(!stats.has_progress());
/// # Ok::<(), pencilmark_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    commits: usize,
    passes: usize,
}

impl SolveStats {
    /// Returns the number of cells committed during the solve.
    #[must_use]
    pub fn commits(&self) -> usize {
        self.commits
    }

    /// Returns the number of commit passes run during the solve.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Returns `true` if at least one cell was committed.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.commits > 0
    }
}

/// Drives a [`Grid`] toward a solved state via constraint propagation.
///
/// The propagator alternates two phases until a fixed point:
///
/// 1. **prune** - for every row, column, and box, remove the digits
///    already committed in that house from the possibility sets of its
///    undecided cells;
/// 2. **commit** - commit every cell whose possibility set has narrowed
///    to exactly one digit (a forced single).
///
/// Each commit strictly reduces the number of undecided cells, so a solve
/// terminates after at most 81 commits. Puzzles that pure elimination
/// cannot finish stop at the fixed point with the solved flag `false`;
/// that is a result state, not an error.
///
/// # Examples
///
/// ```
/// use pencilmark_core::Grid;
/// use pencilmark_solver::Propagator;
///
/// let mut grid: Grid = "
///     53xx7xxxx
///     6xx195xxx
///     x98xxxx6x
///     8xxx6xxx3
///     4xx8x3xx1
///     7xxx2xxx6
///     x6xxxx28x
///     xxx419xx5
///     xxxx8xx79
/// "
/// .parse()
/// .unwrap();
///
/// let (solved, stats) = Propagator::new().solve(&mut grid)?;
/// assert!(solved);
/// assert_eq!(stats.commits(), 51); // the 51 cells that started unknown
/// # Ok::<(), pencilmark_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Propagator;

impl Propagator {
    /// Creates a new propagator.
    #[must_use]
    pub const fn new() -> Self {
        Propagator
    }

    /// Prunes the possibility sets of the undecided cells in one house.
    ///
    /// Collects the set of digits committed among the 9 cells, then
    /// removes that set from every undecided cell of the house. Committed
    /// cells are never touched, and no cell is committed here.
    pub fn prune(&self, grid: &mut Grid, house: House) {
        let mut committed = DigitSet::EMPTY;
        for pos in house.positions() {
            if let Some(digit) = grid.cell(pos).digit() {
                committed.insert(digit);
            }
        }
        for pos in house.positions() {
            let cell = grid.cell_mut(pos);
            if !cell.is_committed() {
                cell.remove_possibilities(committed);
            }
        }
    }

    /// Runs [`prune`](Self::prune) once for every row, column, and box
    /// (27 houses) in a single pass.
    ///
    /// The order of the 27 houses does not affect the result: pruning
    /// only removes digits already excluded by committed values, and
    /// removal is idempotent and commutative across houses.
    pub fn propagate_all(&self, grid: &mut Grid) {
        for house in House::ALL {
            self.prune(grid, house);
        }
    }

    /// Commits every forced single, returning whether at least one cell
    /// was committed.
    ///
    /// Scans all 81 cells in row-major order for an undecided cell whose
    /// possibility set has exactly one member. On finding one, commits it,
    /// re-runs [`propagate_all`](Self::propagate_all) (a new commitment
    /// can shrink other cells' possibility sets anywhere in the grid), and
    /// restarts the scan from the beginning so no newly forced cell is
    /// missed regardless of scan order. Repeats until a full scan finds no
    /// forced single.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if the scan encounters an
    /// undecided cell with zero remaining possibilities.
    pub fn commit_singles(&self, grid: &mut Grid) -> Result<bool, SolverError> {
        Ok(self.commit_singles_counted(grid)? > 0)
    }

    fn commit_singles_counted(&self, grid: &mut Grid) -> Result<usize, SolverError> {
        let mut commits = 0;
        'scan: loop {
            for pos in Position::all() {
                let cell = grid.cell(pos);
                if cell.is_committed() {
                    continue;
                }
                let possible = cell.possibilities();
                if possible.is_empty() {
                    return Err(SolverError::Contradiction { position: pos });
                }
                if let Some(digit) = possible.as_single() {
                    grid.cell_mut(pos).commit(digit);
                    self.propagate_all(grid);
                    commits += 1;
                    continue 'scan;
                }
            }
            break;
        }
        Ok(commits)
    }

    /// Solves the grid as far as pure elimination allows.
    ///
    /// Runs [`propagate_all`](Self::propagate_all) once to establish the
    /// initial possibility sets, then runs commit passes until a pass
    /// makes no progress or the grid is solved. Returns the solved flag
    /// and the collected [`SolveStats`].
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if an undecided cell runs
    /// out of possibilities, meaning the input has no consistent solution
    /// under the digits already committed.
    pub fn solve(&self, grid: &mut Grid) -> Result<(bool, SolveStats), SolverError> {
        let mut stats = SolveStats::default();
        self.propagate_all(grid);
        while !grid.is_solved() {
            let commits = self.commit_singles_counted(grid)?;
            stats.passes += 1;
            stats.commits += commits;
            if commits == 0 {
                break;
            }
        }
        Ok((grid.is_solved(), stats))
    }
}
