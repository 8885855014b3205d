//! Sudoku as a search problem for the engines in [`crate::search`].

mod generator;
mod grid;
mod heuristics;
mod problem;
mod validate;

pub use generator::generate_random_grid;
pub use grid::{parse_puzzles, Grid, ParseGridError, CLASSIC_BLOCK};
pub use heuristics::{EmptyCells, SudokuHeuristicName};
pub use problem::{Placement, SudokuProblem};
pub use validate::{check_solution, SolutionError};
