// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements the solving engine for classic 9x9 Sudoku puzzles.
//! It supports the following key features:
//!
//! * Parsing and printing puzzles given as 81-character codes
//! * Checking the legality of individual digits as well as entire grids
//! * Logical deduction using unique-candidate fill, naked-pair elimination,
//! and naked singles
//! * Solving every puzzle through a backtracking search that interleaves the
//! deductions, with optional progress observation and an abort hook
//! * Sequential batch solving with per-puzzle timing
//!
//! # Parsing and printing puzzles
//!
//! A puzzle code is a string of exactly 81 characters, one per cell, read
//! left-to-right and then top-to-bottom. The digits `'1'` to `'9'` denote
//! givens, while `'.'` and `'0'` denote empty cells. See [Puzzle::parse] for
//! details.
//!
//! ```
//! use sudoku_engine::Puzzle;
//!
//! let puzzle = Puzzle::parse(
//!     "53..7....\
//!      6..195...\
//!      .98....6.\
//!      8...6...3\
//!      4..8.3..1\
//!      7...2...6\
//!      .6....28.\
//!      ...419..5\
//!      ....8..79").unwrap();
//! println!("{}", puzzle.grid());
//! ```
//!
//! # Checking legality
//!
//! The [rules] module implements the classic rules: no digit may repeat
//! within a row, column, or 3x3 box. Manual edits go through [Puzzle::edit],
//! which enforces the rules and the immutability of givens and reports the
//! outcome as a tagged [EditOutcome].
//!
//! ```
//! use sudoku_engine::{EditOutcome, Puzzle};
//!
//! let mut puzzle = Puzzle::parse(
//!     "53..7....\
//!      6..195...\
//!      .98....6.\
//!      8...6...3\
//!      4..8.3..1\
//!      7...2...6\
//!      .6....28.\
//!      ...419..5\
//!      ....8..79").unwrap();
//!
//! // A 3 in the top-left corner would duplicate the 3 in row 0.
//! let outcome = puzzle.edit(2, 0, Some(3)).unwrap();
//! assert_eq!(EditOutcome::RejectedIllegal(3), outcome);
//! assert_eq!(None, puzzle.grid().get_cell(2, 0).unwrap());
//!
//! // A 4 is fine.
//! assert_eq!(EditOutcome::Accepted(4), puzzle.edit(2, 0, Some(4)).unwrap());
//! ```
//!
//! # Solving puzzles
//!
//! The [Solver](solver::Solver) first applies the deduction engine to a
//! fixed point and then falls back to a backtracking search, re-applying
//! deduction after every tentative placement. It finds a solution whenever
//! one exists and reports [Outcome::Unsolvable](solver::Outcome::Unsolvable)
//! otherwise.
//!
//! ```
//! use sudoku_engine::Puzzle;
//! use sudoku_engine::solver::{Outcome, Solver};
//!
//! let mut puzzle = Puzzle::parse(
//!     "53..7....\
//!      6..195...\
//!      .98....6.\
//!      8...6...3\
//!      4..8.3..1\
//!      7...2...6\
//!      .6....28.\
//!      ...419..5\
//!      ....8..79").unwrap();
//!
//! assert_eq!(Outcome::Solved, Solver::new().solve(&mut puzzle));
//! assert!(puzzle.grid().is_full());
//! ```

pub mod batch;
pub mod candidates;
pub mod error;
pub mod rules;
pub mod solver;
pub mod util;

#[cfg(test)]
mod fix_tests;

use error::{
    SudokuError,
    SudokuParseError,
    SudokuParseResult,
    SudokuResult
};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of rows and columns of the grid.
pub const SIZE: usize = 9;

/// The number of rows and columns of one 3x3 box of the grid.
pub const BLOCK_SIZE: usize = 3;

/// The total number of cells of the grid.
pub const CELL_COUNT: usize = SIZE * SIZE;

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

/// A 9x9 Sudoku grid, composed of 81 cells in row-major order, each of which
/// may or may not be occupied by a digit from 1 to 9. The grid is divided
/// into 9 rows, 9 columns, and 9 non-overlapping 3x3 boxes, each of which
/// must contain every digit exactly once in a complete solution.
///
/// `SudokuGrid` implements `Display`, printing the grid with box-drawing
/// characters, and serializes as its 81-character code (see
/// [SudokuGrid::parse]).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct SudokuGrid {
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.cells[index(x, y)]), ' ', '║', true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line().as_str())?;
            }
            else {
                f.write_str(thin_separator_line().as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())
    }
}

impl SudokuGrid {

    /// Creates a new, empty grid in which every cell can hold any digit.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: vec![None; CELL_COUNT]
        }
    }

    /// Parses an 81-character code encoding a grid. The characters are
    /// assigned to cells left-to-right, top-to-bottom, where each row is
    /// completed before the next one is started. The digits `'1'` to `'9'`
    /// denote a filled cell, while `'.'` and `'0'` denote an empty one.
    ///
    /// As an example, the code
    /// `"..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3.."`
    /// parses to a partially filled grid whose first row reads `3` in the
    /// third and `2` and `6` in the fifth and seventh cells.
    ///
    /// No state is constructed before the entire code has been validated, so
    /// a failed parse cannot leave a partially loaded grid behind.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let chars: Vec<char> = code.chars().collect();

        if chars.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongLength(chars.len()));
        }

        let mut cells = Vec::with_capacity(CELL_COUNT);

        for &c in chars.iter() {
            match c {
                '.' | '0' => cells.push(None),
                '1'..='9' => cells.push(Some(c as usize - '0' as usize)),
                _ => return Err(SudokuParseError::InvalidCharacter(c))
            }
        }

        Ok(SudokuGrid {
            cells
        })
    }

    /// Converts the grid into an 81-character code in a way that is
    /// consistent with [SudokuGrid::parse]. Empty cells are rendered as
    /// `'.'`. A grid converted to a code and parsed again will not change.
    ///
    /// ```
    /// use sudoku_engine::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    /// grid.set_cell(4, 0, 7).unwrap();
    ///
    /// let code = grid.to_code();
    /// assert_eq!(grid, SudokuGrid::parse(code.as_str()).unwrap());
    /// ```
    pub fn to_code(&self) -> String {
        self.cells.iter()
            .map(|&cell| match cell {
                Some(n) => (b'0' + n as u8) as char,
                None => '.'
            })
            .collect()
    }

    fn verified_index(column: usize, row: usize) -> SudokuResult<usize> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(index(column, row))
        }
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        Ok(self.cells[SudokuGrid::verified_index(column, row)?])
    }

    /// Indicates whether the cell at the specified position has the given
    /// digit. This will return `false` if there is a different digit in that
    /// cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The digit to check for. If it is *not* in the range
    /// `[1, 9]`, `false` will always be returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        Ok(self.get_cell(column, row)? == Some(number))
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The digit to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        let index = SudokuGrid::verified_index(column, row)?;

        if number < 1 || number > SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a digit, that digit is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[0, 9[`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        let index = SudokuGrid::verified_index(column, row)?;
        self.cells[index] = None;
        Ok(())
    }

    /// Assigns the content of another grid to this one, i.e., changes the
    /// cells in this grid to the state in `other`.
    pub fn assign(&mut self, other: &SudokuGrid) {
        self.cells.copy_from_slice(&other.cells);
    }

    /// Counts the number of filled cells in this grid.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// digit.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// digit.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Option<usize>] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Option<usize>] {
        &mut self.cells
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        grid.to_code()
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = SudokuParseError;

    fn try_from(code: String) -> SudokuParseResult<SudokuGrid> {
        SudokuGrid::parse(code.as_str())
    }
}

/// An enumeration of the possible outcomes of a manual cell edit through
/// [Puzzle::edit]. The caller decides how to present each variant; the core
/// only guarantees that the grid never reflects an illegal digit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EditOutcome {

    /// The digit was legal and has been written to the cell.
    Accepted(usize),

    /// The digit would duplicate a value in the cell's row, column, or box.
    /// It has *not* been written; the wrapped value is provided so a caller
    /// may display the attempt, e.g. as a rejection marker.
    RejectedIllegal(usize),

    /// The cell has been cleared.
    Cleared
}

/// A Sudoku puzzle: a [SudokuGrid] together with an immutability mask which
/// marks the cells that were filled when the puzzle was loaded. Those givens
/// are fixed and can never be altered through the editing interface; the
/// solver only ever writes empty cells.
///
/// `Puzzle` serializes as its 81-character code, with the givens being
/// re-derived from the filled cells on deserialization.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct Puzzle {
    grid: SudokuGrid,
    givens: Vec<bool>
}

impl Puzzle {

    /// Parses the code into a [SudokuGrid] using [SudokuGrid::parse] and
    /// marks every filled cell as a given. Loading yields an entirely fresh
    /// puzzle, so any previously loaded state is replaced wholesale or, if
    /// parsing fails, not at all.
    ///
    /// Note that it is *not* checked whether the givens are free of
    /// conflicts. It is perfectly legal to parse an unsolvable puzzle; the
    /// solver will report it as such.
    ///
    /// # Errors
    ///
    /// If the parsing fails. See [SudokuGrid::parse] for further
    /// information.
    pub fn parse(code: &str) -> SudokuParseResult<Puzzle> {
        Ok(Puzzle::from_grid(SudokuGrid::parse(code)?))
    }

    /// Creates a new puzzle from the given grid, marking every filled cell
    /// as a given.
    pub fn from_grid(grid: SudokuGrid) -> Puzzle {
        let givens = grid.cells().iter().map(|c| c.is_some()).collect();

        Puzzle {
            grid,
            givens
        }
    }

    /// Gets a reference to the grid of this puzzle.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Gets a mutable reference to the grid of this puzzle. Note that this
    /// bypasses the givens guard of [Puzzle::edit]; it is intended for the
    /// solver, which only ever writes empty cells.
    pub fn grid_mut(&mut self) -> &mut SudokuGrid {
        &mut self.grid
    }

    /// Converts this puzzle into an 81-character code in a way that is
    /// consistent with [Puzzle::parse].
    pub fn to_code(&self) -> String {
        self.grid.to_code()
    }

    /// Indicates whether the cell at the specified position is a given,
    /// i.e. was filled when the puzzle was loaded.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[0, 9[`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn is_given(&self, column: usize, row: usize) -> SudokuResult<bool> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.givens[index(column, row)])
        }
    }

    /// Applies a manual edit to the cell at the specified position. `entry`
    /// is the proposed digit, or `None` to clear the cell.
    ///
    /// A proposed digit is written only if it passes the legality check
    /// ([rules::check_number]); otherwise the grid is left untouched and
    /// [EditOutcome::RejectedIllegal] is returned so the caller can decide
    /// how to present the rejection.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the range `[0, 9[`.
    /// * `SudokuError::ImmutableCell` If the cell is a given.
    /// * `SudokuError::InvalidNumber` If a digit outside the range `[1, 9]`
    /// is proposed.
    pub fn edit(&mut self, column: usize, row: usize, entry: Option<usize>)
            -> SudokuResult<EditOutcome> {
        if self.is_given(column, row)? {
            return Err(SudokuError::ImmutableCell);
        }

        match entry {
            None => {
                self.grid.clear_cell(column, row)?;
                Ok(EditOutcome::Cleared)
            },
            Some(number) => {
                if number < 1 || number > SIZE {
                    return Err(SudokuError::InvalidNumber);
                }

                if rules::check_number(&self.grid, column, row, number) {
                    self.grid.set_cell(column, row, number)?;
                    Ok(EditOutcome::Accepted(number))
                }
                else {
                    Ok(EditOutcome::RejectedIllegal(number))
                }
            }
        }
    }
}

impl From<Puzzle> for String {
    fn from(puzzle: Puzzle) -> String {
        puzzle.to_code()
    }
}

impl TryFrom<String> for Puzzle {
    type Error = SudokuParseError;

    fn try_from(code: String) -> SudokuParseResult<Puzzle> {
        Puzzle::parse(code.as_str())
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.grid.fmt(f)
    }
}
