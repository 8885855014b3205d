use crate::sudoku::Grid;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolutionError {
    #[error("solution has size {solution} but the puzzle has size {puzzle}")]
    SizeMismatch { puzzle: usize, solution: usize },
    #[error("solution is incomplete or breaks a row, column or block rule")]
    NotSolved,
    #[error("solution changes the given {given} at cell ({row}, {col})")]
    GivenChanged { row: usize, col: usize, given: u8 },
}

/// Check that `solution` is a solved grid that keeps every given of
/// `puzzle`.
pub fn check_solution(puzzle: &Grid, solution: &Grid) -> Result<(), SolutionError> {
    if puzzle.size() != solution.size() {
        return Err(SolutionError::SizeMismatch {
            puzzle: puzzle.size(),
            solution: solution.size(),
        });
    }
    if !solution.is_solved() {
        return Err(SolutionError::NotSolved);
    }

    let size = puzzle.size();
    let changed = puzzle
        .cells()
        .iter()
        .zip(solution.cells())
        .position(|(&given, &value)| given != 0 && given != value);
    match changed {
        Some(index) => Err(SolutionError::GivenChanged {
            row: index / size,
            col: index % size,
            given: puzzle.cells()[index],
        }),
        None => Ok(()),
    }
}
