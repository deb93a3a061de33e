//! Optimal solver for the 3x3 sliding tile puzzle.
//!
//! [`solve`] runs A* with the Manhattan-distance heuristic from any start
//! state to [`GOAL`]; [`report`] renders successors and solution paths in
//! the line format the command-line tool prints.

mod error;
mod heuristic;
mod puzzle;
pub mod report;
mod search;
mod successors;

pub use error::PuzzleError;
pub use heuristic::manhattan_distance;
pub use puzzle::{Move, State, CELLS, GOAL, SIDE};
pub use search::{solve, Solution, Step};
pub use successors::successors;
