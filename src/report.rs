//! Line-oriented text output for successors and solution paths.

use crate::error::PuzzleError;
use crate::heuristic::manhattan_distance;
use crate::puzzle::State;
use crate::search::{solve, Solution};
use crate::successors::successors;
use std::io::Write;
use tracing::instrument;

/// Writes `<state> h=<h>` for each successor of `state`, in sorted order.
#[instrument(skip(out), fields(state = %state))]
pub fn print_succ<W: Write>(state: &State, out: &mut W) -> Result<(), PuzzleError> {
    for next in successors(state) {
        writeln!(out, "{} h={}", next, manhattan_distance(&next))?;
    }
    Ok(())
}

/// Writes `<state> h=<h> moves: <g>` for each step of the path.
pub fn write_solution<W: Write>(solution: &Solution, out: &mut W) -> Result<(), PuzzleError> {
    for step in solution.steps() {
        writeln!(out, "{} h={} moves: {}", step.state, step.h, step.g)?;
    }
    Ok(())
}

/// Solves `state` and writes the path. Nothing is written if the search
/// fails.
pub fn print_solve<W: Write>(state: &State, out: &mut W) -> Result<Solution, PuzzleError> {
    let solution = solve(state)?;
    write_solution(&solution, out)?;
    Ok(solution)
}
