//! This module implements the classic Sudoku rules: every digit appears at
//! most once per row, column, and 3x3 box. [check_number] decides whether a
//! single digit may be placed at a position, [check] verifies an entire
//! grid, and [groups] enumerates the 27 units the rules range over.

use crate::{BLOCK_SIZE, SIZE, SudokuGrid};
use crate::util::DigitSet;

/// A group of cells which must not contain repeated digits, given as
/// `(column, row)` coordinate pairs. The classic rules know 27 groups: 9
/// rows, 9 columns, and 9 boxes.
pub type Group = Vec<(usize, usize)>;

/// Enumerates all 27 groups of the classic rules: first the rows top to
/// bottom, then the columns left to right, then the boxes left-to-right,
/// top-to-bottom.
pub fn groups() -> Vec<Group> {
    let mut groups = Vec::with_capacity(3 * SIZE);

    for row in 0..SIZE {
        groups.push((0..SIZE).map(|column| (column, row)).collect());
    }

    for column in 0..SIZE {
        groups.push((0..SIZE).map(|row| (column, row)).collect());
    }

    for block_y in 0..BLOCK_SIZE {
        for block_x in 0..BLOCK_SIZE {
            let base_x = block_x * BLOCK_SIZE;
            let base_y = block_y * BLOCK_SIZE;
            let mut block = Vec::with_capacity(SIZE);

            for y in base_y..(base_y + BLOCK_SIZE) {
                for x in base_x..(base_x + BLOCK_SIZE) {
                    block.push((x, y));
                }
            }

            groups.push(block);
        }
    }

    groups
}

fn row_contains(grid: &SudokuGrid, row: usize, number: usize) -> bool {
    (0..SIZE).any(|x| grid.cells()[crate::index(x, row)] == Some(number))
}

fn column_contains(grid: &SudokuGrid, column: usize, number: usize) -> bool {
    (0..SIZE).any(|y| grid.cells()[crate::index(column, y)] == Some(number))
}

fn block_contains(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool {
    let base_x = column - column % BLOCK_SIZE;
    let base_y = row - row % BLOCK_SIZE;

    (base_y..(base_y + BLOCK_SIZE)).any(|y|
        (base_x..(base_x + BLOCK_SIZE)).any(|x|
            grid.cells()[crate::index(x, y)] == Some(number)))
}

/// Indicates whether placing `number` in the cell at the specified position
/// would be legal, i.e. whether no cell in the same row, column, or box
/// already contains that digit. The scan includes the target cell itself, so
/// re-asserting a digit that is already present at the position is reported
/// as illegal.
///
/// The grid is not modified; this is a pure query. Coordinates are assumed
/// to be in the range `[0, 9[`.
pub fn check_number(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool {
    !row_contains(grid, row, number) &&
        !column_contains(grid, column, number) &&
        !block_contains(grid, column, row, number)
}

/// Indicates whether the given grid obeys the classic rules, i.e. no group
/// contains a repeated digit. Empty cells are always acceptable, so any
/// grid without duplicates passes, complete or not.
pub fn check(grid: &SudokuGrid) -> bool {
    for group in groups() {
        let mut seen = DigitSet::new();

        for (column, row) in group {
            if let Some(number) = grid.cells()[crate::index(column, row)] {
                if !seen.insert(number) {
                    return false;
                }
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {

    use super::*;

    fn example_grid() -> SudokuGrid {
        SudokuGrid::parse(
            "53..7....\
             6..195...\
             .98....6.\
             8...6...3\
             4..8.3..1\
             7...2...6\
             .6....28.\
             ...419..5\
             ....8..79").unwrap()
    }

    #[test]
    fn groups_cover_every_cell_thrice() {
        let groups = groups();
        let mut counts = [[0usize; SIZE]; SIZE];

        assert_eq!(27, groups.len());

        for group in groups {
            assert_eq!(SIZE, group.len());

            for (column, row) in group {
                counts[row][column] += 1;
            }
        }

        assert!(counts.iter().all(|row| row.iter().all(|&c| c == 3)));
    }

    #[test]
    fn check_number_detects_row_conflict() {
        let grid = example_grid();

        // Row 0 contains a 7 in column 4.
        assert!(!check_number(&grid, 8, 0, 7));
    }

    #[test]
    fn check_number_detects_column_conflict() {
        let grid = example_grid();

        // Column 0 contains a 4 in row 4.
        assert!(!check_number(&grid, 0, 0, 4));
    }

    #[test]
    fn check_number_detects_block_conflict() {
        let grid = example_grid();

        // The top-left box contains a 9 at (1, 2).
        assert!(!check_number(&grid, 2, 0, 9));
    }

    #[test]
    fn check_number_accepts_legal_digit() {
        let grid = example_grid();

        // (2, 0) is 4 in the unique solution.
        assert!(check_number(&grid, 2, 0, 4));
    }

    #[test]
    fn check_number_includes_target_cell() {
        let grid = example_grid();

        // (0, 0) already holds a 5, so asserting 5 there is a conflict.
        assert!(!check_number(&grid, 0, 0, 5));
    }

    #[test]
    fn check_accepts_valid_grid() {
        assert!(check(&example_grid()));
        assert!(check(&SudokuGrid::new()));
    }

    #[test]
    fn check_detects_duplicate_in_row() {
        let mut grid = example_grid();
        grid.set_cell(8, 0, 5).unwrap();

        assert!(!check(&grid));
    }

    #[test]
    fn check_detects_duplicate_in_block() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(0, 0, 6).unwrap();
        grid.set_cell(2, 2, 6).unwrap();

        assert!(!check(&grid));
    }
}
