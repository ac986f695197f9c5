//! This module implements the candidate table which backs the deduction
//! techniques: for every empty cell, the set of digits which could legally
//! be placed there given the current grid state.

use crate::{CELL_COUNT, SIZE, SudokuGrid, rules};
use crate::util::DigitSet;

/// The per-cell candidate table of a grid. For every empty cell it holds
/// the [DigitSet] of digits whose placement would pass
/// [rules::check_number]; for every filled cell it holds the empty set, as
/// a filled cell is not a candidate for anything.
///
/// A table is derived from a grid snapshot and does not track it
/// automatically. Deduction may shrink individual sets below what a fresh
/// derivation would yield; [Candidates::recompute] discards all such
/// refinement and re-derives from the grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidates {
    sets: Vec<DigitSet>
}

fn derive_cell(grid: &SudokuGrid, column: usize, row: usize) -> DigitSet {
    if grid.cells()[crate::index(column, row)].is_some() {
        return DigitSet::new();
    }

    let mut set = DigitSet::new();

    for number in 1..=SIZE {
        if rules::check_number(grid, column, row, number) {
            set.insert(number);
        }
    }

    set
}

impl Candidates {

    /// Derives the candidate table of the given grid.
    pub fn of(grid: &SudokuGrid) -> Candidates {
        let mut candidates = Candidates {
            sets: vec![DigitSet::new(); CELL_COUNT]
        };
        candidates.recompute(grid);
        candidates
    }

    /// Re-derives every cell's candidate set from the given grid,
    /// discarding any refinement deduction may have applied. Deriving twice
    /// from the same grid yields the same table.
    pub fn recompute(&mut self, grid: &SudokuGrid) {
        for row in 0..SIZE {
            for column in 0..SIZE {
                self.sets[crate::index(column, row)] =
                    derive_cell(grid, column, row);
            }
        }
    }

    /// Gets the candidate set of the cell at the specified position.
    /// Coordinates are assumed to be in the range `[0, 9[`.
    pub fn get(&self, column: usize, row: usize) -> DigitSet {
        self.sets[crate::index(column, row)]
    }

    /// Gets a mutable reference to the candidate set of the cell at the
    /// specified position, allowing deduction to refine it in place.
    /// Coordinates are assumed to be in the range `[0, 9[`.
    pub fn get_mut(&mut self, column: usize, row: usize) -> &mut DigitSet {
        &mut self.sets[crate::index(column, row)]
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::digits;

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
    fn filled_cell_has_no_candidates() {
        let grid = example_grid();
        let candidates = Candidates::of(&grid);

        assert!(candidates.get(0, 0).is_empty());
        assert!(candidates.get(4, 0).is_empty());
    }

    #[test]
    fn empty_cell_candidates_match_legality() {
        let grid = example_grid();
        let candidates = Candidates::of(&grid);

        // (2, 0) excludes 5, 3, and 7 (row), 9 and 6 (box), and 8 (column
        // and box).
        assert_eq!(digits!(1, 2, 4), candidates.get(2, 0));
    }

    #[test]
    fn empty_grid_cells_allow_every_digit() {
        let candidates = Candidates::of(&SudokuGrid::new());

        assert_eq!(DigitSet::all(), candidates.get(4, 4));
        assert_eq!(DigitSet::all(), candidates.get(0, 8));
    }

    #[test]
    fn recompute_is_idempotent() {
        let grid = example_grid();
        let mut candidates = Candidates::of(&grid);
        let reference = candidates.clone();

        candidates.recompute(&grid);
        assert_eq!(reference, candidates);
    }

    #[test]
    fn recompute_discards_refinement() {
        let grid = example_grid();
        let mut candidates = Candidates::of(&grid);
        let reference = candidates.clone();

        candidates.get_mut(2, 0).remove(1);
        assert_ne!(reference, candidates);

        candidates.recompute(&grid);
        assert_eq!(reference, candidates);
    }

    #[test]
    fn recompute_tracks_placements() {
        let mut grid = example_grid();
        let mut candidates = Candidates::of(&grid);

        assert!(candidates.get(2, 0).contains(4));
        assert!(candidates.get(5, 0).contains(4));

        grid.set_cell(2, 0, 4).unwrap();
        candidates.recompute(&grid);

        assert!(candidates.get(2, 0).is_empty());
        // The 4 is now excluded from (5, 0) in the same row.
        assert!(!candidates.get(5, 0).contains(4));
    }
}
