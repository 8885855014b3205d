use crate::search::SearchProblem;
use crate::sudoku::Grid;
use std::fmt::{self, Display, Formatter};

/// Writing `value` into the empty cell at (`row`, `col`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub value: u8,
}

impl Display for Placement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(r{}c{} = {})", self.row + 1, self.col + 1, self.value)
    }
}

/// Sudoku as a state space: a state is a partially filled grid and every
/// action fills one empty cell with a value that breaks no rule.
///
/// Only the first empty cell in row-major order is branched on. Every
/// solution fills that cell eventually, so nothing is lost, and the branching
/// factor drops from `empty cells × values` to at most `values`.
#[derive(Debug, Clone)]
pub struct SudokuProblem {
    puzzle: Grid,
}

impl SudokuProblem {
    pub fn new(puzzle: Grid) -> Self {
        Self { puzzle }
    }

    pub fn puzzle(&self) -> &Grid {
        &self.puzzle
    }
}

impl SearchProblem for SudokuProblem {
    type State = Grid;
    type Action = Placement;
    type Key = Grid;

    fn initial_state(&self) -> Grid {
        self.puzzle.clone()
    }

    fn actions(&self, state: &Grid) -> Vec<Placement> {
        let Some((row, col)) = state.first_empty() else {
            return vec![];
        };
        (1..=state.size() as u8)
            .filter(|&value| state.is_valid(row, col, value))
            .map(|value| Placement { row, col, value })
            .collect()
    }

    fn apply(&self, state: &Grid, action: &Placement) -> Grid {
        state.with_value(action.row, action.col, action.value)
    }

    fn is_goal(&self, state: &Grid) -> bool {
        state.is_solved()
    }

    fn canonical_key(&self, state: &Grid) -> Grid {
        state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{search, validate_path, SearchResult, ZeroHeuristic};
    use crate::sudoku::EmptyCells;
    use crate::test_utils::*;

    fn classic() -> SudokuProblem {
        SudokuProblem::new(CLASSIC_PUZZLE.parse().unwrap())
    }

    #[test]
    fn only_first_empty_cell_is_branched_on() {
        let problem = classic();
        let actions = problem.actions(&problem.initial_state());
        assert_eq!(
            actions,
            vec![
                Placement { row: 0, col: 2, value: 1 },
                Placement { row: 0, col: 2, value: 2 },
                Placement { row: 0, col: 2, value: 4 },
            ]
        );
    }

    #[test]
    fn apply_does_not_touch_the_input() {
        let problem = classic();
        let state = problem.initial_state();
        let next = problem.apply(&state, &Placement { row: 0, col: 2, value: 4 });
        assert_eq!(state, problem.initial_state());
        assert_eq!(next.get(0, 2), 4);
        assert_ne!(problem.canonical_key(&state), problem.canonical_key(&next));
    }

    #[test]
    fn full_grid_has_no_actions() {
        let problem = SudokuProblem::new(CLASSIC_SOLUTION.parse().unwrap());
        assert!(problem.actions(&problem.initial_state()).is_empty());
        assert!(problem.is_goal(&problem.initial_state()));
    }

    #[test]
    fn solves_classic_puzzle() {
        let problem = classic();
        let (result, metrics) = search(&problem, &mut EmptyCells::new(), 500_000, false);

        let path = result.path().expect("the puzzle has a solution");
        assert_eq!(result.steps(), Some(51));
        assert_eq!(path.last().map(Grid::to_line), Some(CLASSIC_SOLUTION.to_string()));
        assert!(validate_path(&problem, path).is_ok());
        assert!(metrics.nodes_expanded <= metrics.nodes_generated);
    }

    #[test]
    fn solves_nearly_full_puzzle_with_blind_heuristic() {
        let problem = SudokuProblem::new(NEARLY_SOLVED_PUZZLE.parse().unwrap());
        let (result, metrics) = search(&problem, &mut ZeroHeuristic::new(), 1_000, false);

        assert_eq!(result.steps(), Some(3));
        assert_eq!(metrics.nodes_expanded, 4);
    }

    #[test]
    fn contradictory_puzzle_is_unsolvable() {
        let problem = SudokuProblem::new(DEAD_END_PUZZLE.parse().unwrap());
        let (result, metrics) = search(&problem, &mut EmptyCells::new(), 1_000, false);

        assert_eq!(result, SearchResult::ProvablyUnsolvable);
        assert_eq!(metrics.nodes_expanded, 1);
    }

    #[test]
    fn placement_is_printed_one_based() {
        let placement = Placement { row: 0, col: 2, value: 4 };
        assert_eq!(placement.to_string(), "(r1c3 = 4)");
    }
}
