//! Square Sudoku grids of `block² × block²` cells.

use itertools::Itertools;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Block width of the classic 9 × 9 puzzle.
pub const CLASSIC_BLOCK: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseGridError {
    #[error("a grid line must have 16 or 81 cells, found {0}")]
    WrongLength(usize),
    #[error("invalid character {character:?} at cell {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("value {value} at cell {position} does not fit a grid of size {size}")]
    ValueOutOfRange {
        value: u8,
        position: usize,
        size: usize,
    },
}

/// A Sudoku grid in row-major order, `0` marks an empty cell. Grids are
/// immutable values: [`Grid::with_value`] returns a modified copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    block: usize,
    cells: Vec<u8>,
}

impl Grid {
    pub fn empty(block: usize) -> Self {
        let size = block * block;
        Self {
            block,
            cells: vec![0; size * size],
        }
    }

    pub fn from_cells(block: usize, cells: Vec<u8>) -> Result<Self, ParseGridError> {
        let size = block * block;
        if cells.len() != size * size {
            return Err(ParseGridError::WrongLength(cells.len()));
        }
        if let Some((position, &value)) = cells
            .iter()
            .enumerate()
            .find(|&(_, &value)| value as usize > size)
        {
            return Err(ParseGridError::ValueOutOfRange {
                value,
                position,
                size,
            });
        }
        Ok(Self { block, cells })
    }

    #[inline(always)]
    pub fn block(&self) -> usize {
        self.block
    }

    /// Number of rows, columns and values.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.block * self.block
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.size() + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: u8) {
        let size = self.size();
        self.cells[row * size + col] = value;
    }

    pub fn with_value(&self, row: usize, col: usize, value: u8) -> Self {
        let mut grid = self.clone();
        grid.set(row, col, value);
        grid
    }

    fn row(&self, row: usize) -> impl Iterator<Item = u8> + '_ {
        let size = self.size();
        self.cells[row * size..(row + 1) * size].iter().copied()
    }

    fn column(&self, col: usize) -> impl Iterator<Item = u8> + '_ {
        (0..self.size()).map(move |row| self.get(row, col))
    }

    fn block_cells(&self, row: usize, col: usize) -> impl Iterator<Item = u8> + '_ {
        let start_row = row - row % self.block;
        let start_col = col - col % self.block;
        (start_row..start_row + self.block)
            .cartesian_product(start_col..start_col + self.block)
            .map(move |(r, c)| self.get(r, c))
    }

    /// Whether `value` can be placed at (`row`, `col`) without repeating a
    /// value in the row, column or block.
    pub fn is_valid(&self, row: usize, col: usize, value: u8) -> bool {
        !self.row(row).contains(&value)
            && !self.column(col).contains(&value)
            && !self.block_cells(row, col).contains(&value)
    }

    /// First empty cell in row-major order.
    pub fn first_empty(&self) -> Option<(usize, usize)> {
        let size = self.size();
        self.cells
            .iter()
            .position(|&value| value == 0)
            .map(|index| (index / size, index % size))
    }

    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|&&value| value == 0).count()
    }

    pub fn is_complete(&self) -> bool {
        self.empty_cells() == 0
    }

    /// Complete and no row, column or block holds a value twice.
    pub fn is_solved(&self) -> bool {
        if !self.is_complete() {
            return false;
        }
        let size = self.size();
        (0..size).all(|row| self.row(row).all_unique())
            && (0..size).all(|col| self.column(col).all_unique())
            && (0..size)
                .step_by(self.block)
                .cartesian_product((0..size).step_by(self.block))
                .all(|(row, col)| self.block_cells(row, col).all_unique())
    }

    /// Compact single-line form, `.` for empty cells.
    pub fn to_line(&self) -> String {
        self.cells
            .iter()
            .map(|&value| cell_char(value))
            .collect()
    }
}

fn cell_char(value: u8) -> char {
    match value {
        0 => '.',
        value => char::from(b'0' + value),
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let length = line.chars().count();
        let block = match length {
            16 => 2,
            81 => CLASSIC_BLOCK,
            _ => return Err(ParseGridError::WrongLength(length)),
        };

        let cells = line
            .chars()
            .enumerate()
            .map(|(position, character)| match character {
                '.' => Ok(0),
                '0'..='9' => Ok(character as u8 - b'0'),
                _ => Err(ParseGridError::InvalidCharacter {
                    character,
                    position,
                }),
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Grid::from_cells(block, cells)
    }
}

impl Display for Grid {
    /// Blocks are separated by `|` within a row and by a line of dashes
    /// between block rows.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size();
        let separator = (0..self.block)
            .map(|_| vec!["-"; self.block].join(" "))
            .join(" + ");
        for row in 0..size {
            if row % self.block == 0 && row != 0 {
                writeln!(f, "{}", separator)?;
            }
            let line = self
                .row(row)
                .map(cell_char)
                .chunks(self.block)
                .into_iter()
                .map(|mut chunk| chunk.join(" "))
                .join(" | ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Collect every puzzle of a puzzle collection. A puzzle is a line that,
/// once trimmed, consists of exactly 81 digits or dots; every other line is
/// ignored.
pub fn parse_puzzles(text: &str) -> Vec<Grid> {
    text.lines()
        .map(str::trim)
        .filter(|line| {
            line.len() == 81 && line.chars().all(|c| c.is_ascii_digit() || c == '.')
        })
        .filter_map(|line| line.parse().ok())
        .collect()
}
