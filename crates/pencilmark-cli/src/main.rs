//! Pencilmark command-line solver.
//!
//! Reads a 9x9 puzzle file (digits `1`-`9` for pre-filled cells, `x` for
//! unknown cells, nine lines of nine characters), solves it by constraint
//! propagation, and prints the resulting grid to stdout. Set `RUST_LOG`
//! to see solving statistics.

use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use derive_more::{Display, Error, From};
use pencilmark_core::{Grid, ParseError};
use pencilmark_solver::{Propagator, SolverError};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the puzzle file.
    puzzle: PathBuf,
}

/// Everything that can go wrong before or during a solve.
///
/// I/O failures are kept distinct from malformed puzzle text and from
/// contradictions found while solving.
#[derive(Debug, Display, Error, From)]
enum CliError {
    /// The puzzle file could not be read.
    #[display("failed to read puzzle file: {_0}")]
    Io(io::Error),
    /// The puzzle text is malformed.
    #[display("invalid puzzle: {_0}")]
    Parse(ParseError),
    /// The puzzle has no consistent solution.
    #[display("contradictory puzzle: {_0}")]
    Solver(SolverError),
}

fn run(args: &Args) -> Result<bool, CliError> {
    let text = fs::read_to_string(&args.puzzle)?;
    let mut grid: Grid = text.parse()?;

    let (solved, stats) = Propagator::new().solve(&mut grid)?;
    log::info!(
        "committed {} cells in {} passes",
        stats.commits(),
        stats.passes()
    );

    println!("{grid}");
    if !solved {
        log::warn!("puzzle not solved by propagation alone; undecided cells left as 'x'");
    }
    Ok(solved)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
