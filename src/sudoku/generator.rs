//! Random puzzles: fill a grid completely, then blank random cells.

use crate::sudoku::Grid;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Generate a puzzle with `block² × block²` cells of which `num_clues` are
/// given. `num_clues` is clamped to the number of cells. The puzzle always
/// has at least one solution but is not guaranteed to have only one.
pub fn generate_random_grid<R: Rng + ?Sized>(rng: &mut R, block: usize, num_clues: usize) -> Grid {
    let mut grid = Grid::empty(block);
    let filled = fill_grid(&mut grid, rng);
    debug_assert!(filled, "an empty grid can always be completed");

    let size = grid.size();
    let mut cells: Vec<(usize, usize)> = (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .collect();
    cells.shuffle(rng);
    let num_blanks = (size * size).saturating_sub(num_clues);
    for &(row, col) in &cells[..num_blanks] {
        grid.set(row, col, 0);
    }
    debug!(num_clues = size * size - num_blanks, "generated puzzle");
    grid
}

/// Randomised backtracking over the first empty cell.
fn fill_grid<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> bool {
    let Some((row, col)) = grid.first_empty() else {
        return true;
    };
    let mut values: Vec<u8> = (1..=grid.size() as u8).collect();
    values.shuffle(rng);
    for value in values {
        if grid.is_valid(row, col, value) {
            grid.set(row, col, value);
            if fill_grid(grid, rng) {
                return true;
            }
            grid.set(row, col, 0);
        }
    }
    false
}
