//! This module contains the solver, which finds a solution to any solvable
//! puzzle. It first applies the deduction techniques of the
//! [strategy](crate::solver::strategy) module to a fixed point and then
//! runs a backtracking search over the remaining empty cells, re-applying
//! deduction after every tentative placement. Since the search is
//! exhaustive, a puzzle is reported as unsolvable only if it truly has no
//! solution.

pub mod strategy;

use crate::{Puzzle, SIZE, SudokuGrid, rules};
use crate::solver::strategy::{DeductionEngine, SolveState};

/// A single observable step of a solving run. Observers registered with
/// [Solver::solve_with_observer] receive one `Step` per grid change, in
/// order, which allows a caller to animate or trace the run without the
/// solver knowing anything about presentation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {

    /// The cell at the given position was filled with the given digit,
    /// either by deduction or as a tentative guess of the search.
    Fill {
        /// The column (x-coordinate) of the filled cell.
        column: usize,

        /// The row (y-coordinate) of the filled cell.
        row: usize,

        /// The digit that was written.
        number: usize
    },

    /// The cell at the given position was cleared while retracting a failed
    /// branch of the search.
    Backtrack {
        /// The column (x-coordinate) of the cleared cell.
        column: usize,

        /// The row (y-coordinate) of the cleared cell.
        row: usize
    }
}

/// An enumeration of the ways a solving run can end.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {

    /// A solution was found; the grid is full and obeys the rules.
    Solved,

    /// The puzzle has no solution. This covers both conflicting givens and
    /// grids whose search space is exhausted without success.
    Unsolvable,

    /// The abort check installed with [Solver::set_abort_check] requested
    /// termination before the search finished.
    Aborted
}

fn find_empty(grid: &SudokuGrid) -> Option<(usize, usize)> {
    for row in 0..SIZE {
        for column in 0..SIZE {
            if grid.cells()[crate::index(column, row)].is_none() {
                return Some((column, row));
            }
        }
    }

    None
}

/// Solves Sudoku puzzles by interleaving deduction with a backtracking
/// search.
///
/// The solver holds no per-run state, so one instance can solve any number
/// of puzzles. An optional abort check, polled at every search node, allows
/// the caller to bound the run externally, e.g. by wall-clock time.
///
/// On [Outcome::Solved] the puzzle's grid holds the complete solution. On
/// [Outcome::Unsolvable] and [Outcome::Aborted] the grid may retain fills
/// deduced before the search gave up; only the givens are guaranteed to be
/// unchanged.
pub struct Solver {
    engine: DeductionEngine,
    abort_check: Option<Box<dyn Fn() -> bool>>
}

impl Solver {

    /// Creates a new solver with all deduction techniques and no abort
    /// check.
    pub fn new() -> Solver {
        Solver {
            engine: DeductionEngine::new(),
            abort_check: None
        }
    }

    /// Installs an abort check. It is polled at every node of the search;
    /// once it returns `true`, the run ends with [Outcome::Aborted].
    pub fn set_abort_check(&mut self,
            abort_check: impl Fn() -> bool + 'static) {
        self.abort_check = Some(Box::new(abort_check));
    }

    fn aborted(&self) -> bool {
        match &self.abort_check {
            Some(abort_check) => abort_check(),
            None => false
        }
    }

    fn solve_brute(&self, state: &mut SolveState<'_>) -> Outcome {
        if self.aborted() {
            return Outcome::Aborted;
        }

        let (column, row) = match find_empty(state.grid()) {
            Some(cell) => cell,
            None => return Outcome::Solved
        };

        // The candidate set may be stale refinement from before a sibling
        // branch; the live legality check is the authoritative gate.
        let options = state.candidates().get(column, row);

        for number in options.iter() {
            if !rules::check_number(state.grid(), column, row, number) {
                continue;
            }

            let mark = state.mark();
            state.place(column, row, number);
            self.engine.saturate(state);

            match self.solve_brute(state) {
                Outcome::Unsolvable => state.undo_to(mark),
                outcome => return outcome
            }
        }

        Outcome::Unsolvable
    }

    fn run(&self, state: &mut SolveState<'_>) -> Outcome {
        self.engine.saturate(state);
        self.solve_brute(state)
    }

    /// Solves the given puzzle in place. If the givens already conflict,
    /// [Outcome::Unsolvable] is returned without touching the grid; the
    /// search only detects dead ends among *empty* cells, so conflicts
    /// among filled ones must be rejected up front.
    pub fn solve(&self, puzzle: &mut Puzzle) -> Outcome {
        if !rules::check(puzzle.grid()) {
            log::warn!("puzzle rejected: givens violate the rules");
            return Outcome::Unsolvable;
        }

        let mut state = SolveState::new(puzzle.grid_mut());
        self.run(&mut state)
    }

    /// Like [Solver::solve], but invokes `observer` with a [Step] for every
    /// grid change of the run.
    pub fn solve_with_observer(&self, puzzle: &mut Puzzle,
            observer: &mut dyn FnMut(Step)) -> Outcome {
        if !rules::check(puzzle.grid()) {
            log::warn!("puzzle rejected: givens violate the rules");
            return Outcome::Unsolvable;
        }

        let mut state =
            SolveState::with_observer(puzzle.grid_mut(), observer);
        self.run(&mut state)
    }
}

impl Default for Solver {
    fn default() -> Solver {
        Solver::new()
    }
}
