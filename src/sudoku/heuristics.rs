use crate::search::{Heuristic, HeuristicValue, ZeroHeuristic};
use crate::sudoku::Grid;

/// Number of empty cells. Every action fills exactly one cell at unit cost,
/// so on solvable states this is the exact remaining cost, which makes it
/// both admissible and consistent.
#[derive(Clone, Debug, Default)]
pub struct EmptyCells {}

impl EmptyCells {
    pub fn new() -> Self {
        EmptyCells {}
    }
}

impl Heuristic<Grid> for EmptyCells {
    fn evaluate(&mut self, state: &Grid) -> HeuristicValue {
        (state.empty_cells() as f64).into()
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
pub enum SudokuHeuristicName {
    #[default]
    #[clap(help = "Count the empty cells.")]
    EmptyCells,
    #[clap(name = "zero", help = "The zero heuristic, turns A* into uniform-cost search.")]
    ZeroHeuristic,
}

impl SudokuHeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic<Grid>> {
        match self {
            SudokuHeuristicName::EmptyCells => Box::new(EmptyCells::new()),
            SudokuHeuristicName::ZeroHeuristic => Box::new(ZeroHeuristic::new()),
        }
    }
}
