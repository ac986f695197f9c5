//! This module implements the deduction techniques which the solver applies
//! between guesses, together with the shared state they operate on.
//!
//! A [SolveState] bundles the grid with its [Candidates] table, the change
//! trail used for backtracking, and an optional progress observer. The
//! techniques implement the [Strategy] trait: each inspects the state and
//! either fills cells or refines candidate sets, reporting whether it made
//! progress. The [DeductionEngine] runs all techniques to a fixed point.
//!
//! Candidate refinement is shared: an elimination made by one technique is
//! visible to the next, until a placement triggers a re-derivation from the
//! grid. All refinement is sound, so re-deriving can only widen sets back to
//! what pure legality allows.

use crate::{SIZE, SudokuGrid, rules};
use crate::candidates::Candidates;
use crate::rules::Group;
use crate::solver::Step;
use crate::util::DigitSet;

/// The shared working state of a solving run: the grid, its candidate
/// table, and a trail of every cell the run has filled.
///
/// All placements go through [SolveState::place], which records the cell on
/// the trail and re-derives the candidate table. [SolveState::undo_to]
/// rewinds the trail to an earlier [SolveState::mark], clearing every cell
/// filled since, which is how the backtracking search retracts a guess
/// *together with* all deductions that built on it.
pub struct SolveState<'a> {
    grid: &'a mut SudokuGrid,
    candidates: Candidates,
    trail: Vec<(usize, usize)>,
    observer: Option<&'a mut dyn FnMut(Step)>
}

impl<'a> SolveState<'a> {

    /// Creates a new solve state wrapping the given grid, deriving its
    /// candidate table.
    pub fn new(grid: &'a mut SudokuGrid) -> SolveState<'a> {
        let candidates = Candidates::of(grid);

        SolveState {
            grid,
            candidates,
            trail: Vec::new(),
            observer: None
        }
    }

    /// Like [SolveState::new], but additionally registers an observer which
    /// is invoked with a [Step] for every placement and every backtracked
    /// cell.
    pub fn with_observer(grid: &'a mut SudokuGrid,
            observer: &'a mut dyn FnMut(Step)) -> SolveState<'a> {
        let mut state = SolveState::new(grid);
        state.observer = Some(observer);
        state
    }

    /// Gets a reference to the wrapped grid.
    pub fn grid(&self) -> &SudokuGrid {
        self.grid
    }

    /// Gets a reference to the candidate table.
    pub fn candidates(&self) -> &Candidates {
        &self.candidates
    }

    /// Gets a mutable reference to the candidate table, allowing techniques
    /// to refine it.
    pub fn candidates_mut(&mut self) -> &mut Candidates {
        &mut self.candidates
    }

    fn emit(&mut self, step: Step) {
        if let Some(observer) = self.observer.as_mut() {
            observer(step);
        }
    }

    /// Fills the cell at the specified position with the given digit,
    /// records the cell on the trail, notifies the observer, and re-derives
    /// the candidate table.
    ///
    /// # Panics
    ///
    /// If the cell is not empty or the digit fails the legality check. Both
    /// techniques and the search only place digits drawn from candidate
    /// sets, so a violation indicates an inconsistency bug; panicking is
    /// preferred over writing an illegal grid.
    pub fn place(&mut self, column: usize, row: usize, number: usize) {
        assert!(self.grid.cells()[crate::index(column, row)].is_none(),
            "attempted to fill occupied cell ({}, {})", column, row);
        assert!(rules::check_number(self.grid, column, row, number),
            "attempted to fill cell ({}, {}) with illegal digit {}",
            column, row, number);

        self.grid.cells_mut()[crate::index(column, row)] = Some(number);
        self.trail.push((column, row));
        self.emit(Step::Fill { column, row, number });
        self.candidates.recompute(self.grid);
    }

    /// Gets a checkpoint of the trail. Passing it to [SolveState::undo_to]
    /// later clears every cell filled after this call.
    pub fn mark(&self) -> usize {
        self.trail.len()
    }

    /// Rewinds the trail to the given checkpoint, clearing every cell
    /// filled since in reverse order, notifying the observer for each, and
    /// re-deriving the candidate table.
    pub fn undo_to(&mut self, mark: usize) {
        let undone = self.trail.split_off(mark);

        if undone.is_empty() {
            return;
        }

        for (column, row) in undone.into_iter().rev() {
            self.grid.cells_mut()[crate::index(column, row)] = None;
            self.emit(Step::Backtrack { column, row });
        }

        self.candidates.recompute(self.grid);
    }
}

/// A deduction technique which makes some progress on a [SolveState]
/// whenever it can. Progress is either filling cells whose digit is forced
/// or refining candidate sets.
pub trait Strategy {

    /// Applies this technique to the given state. Returns `true` if and
    /// only if the state changed, i.e. a cell was filled or a candidate was
    /// eliminated.
    fn apply(&self, state: &mut SolveState<'_>) -> bool;
}

/// A [Strategy] which fills a cell whenever it is the only cell of a group
/// that has some digit among its candidates. Since every group must contain
/// every digit in a complete solution, that digit is forced.
///
/// Groups are scanned rows first, then columns, then boxes. The tally for a
/// group is taken before any of its fills, so a cell may have been filled
/// by an earlier forced digit in the meantime; such stale entries are
/// skipped.
pub struct UniqueCandidateStrategy;

impl Strategy for UniqueCandidateStrategy {
    fn apply(&self, state: &mut SolveState<'_>) -> bool {
        let mut changed = false;

        for group in rules::groups() {
            let mut counts = [0usize; SIZE + 1];
            let mut cells = [(0usize, 0usize); SIZE + 1];

            for &(column, row) in group.iter() {
                for number in state.candidates().get(column, row).iter() {
                    counts[number] += 1;
                    cells[number] = (column, row);
                }
            }

            for number in 1..=SIZE {
                if counts[number] != 1 {
                    continue;
                }

                let (column, row) = cells[number];

                if state.grid().cells()[crate::index(column, row)]
                        .is_none() {
                    state.place(column, row, number);
                    changed = true;
                }
            }
        }

        changed
    }
}

fn find_naked_pair(state: &SolveState<'_>, group: &Group)
        -> Option<(DigitSet, (usize, usize), (usize, usize))> {
    let mut seen: Vec<(DigitSet, (usize, usize))> = Vec::new();

    for &(column, row) in group.iter() {
        let options = state.candidates().get(column, row);

        if options.len() != 2 {
            continue;
        }

        if let Some(&(_, first)) =
                seen.iter().find(|&&(set, _)| set == options) {
            return Some((options, first, (column, row)));
        }

        seen.push((options, (column, row)));
    }

    None
}

/// A [Strategy] which searches every group for a *naked pair*: two cells
/// whose candidate sets are the same two digits. Those digits must occupy
/// those two cells in some order, so they are eliminated from the
/// candidates of every other cell of the group.
///
/// At most one pair is exploited per group per application; re-applying
/// picks up further pairs. This technique never fills a cell, it only
/// refines candidate sets, so its progress feeds the fill techniques that
/// run after it.
pub struct NakedPairStrategy;

impl Strategy for NakedPairStrategy {
    fn apply(&self, state: &mut SolveState<'_>) -> bool {
        let mut changed = false;

        for group in rules::groups() {
            let (pair, first, second) =
                match find_naked_pair(state, &group) {
                    Some(found) => found,
                    None => continue
                };

            for &(column, row) in group.iter() {
                if (column, row) == first || (column, row) == second {
                    continue;
                }

                if state.grid().cells()[crate::index(column, row)]
                        .is_some() {
                    continue;
                }

                let options = state.candidates_mut().get_mut(column, row);
                let before = *options;
                *options -= pair;

                if *options != before {
                    changed = true;
                }
            }
        }

        changed
    }
}

/// A [Strategy] which fills every cell that has exactly one candidate left.
/// Such a *naked single* is forced, as any other digit would break the
/// rules.
pub struct NakedSingleStrategy;

impl Strategy for NakedSingleStrategy {
    fn apply(&self, state: &mut SolveState<'_>) -> bool {
        let mut changed = false;

        for row in 0..SIZE {
            for column in 0..SIZE {
                let options = state.candidates().get(column, row);

                if options.len() != 1 {
                    continue;
                }

                if let Some(number) = options.iter().next() {
                    state.place(column, row, number);
                    changed = true;
                }
            }
        }

        changed
    }
}

/// Combines the deduction techniques and runs them to a fixed point. One
/// round consists of naked-pair elimination followed by the fill
/// techniques, where naked singles are only consulted if the
/// unique-candidate fill made no progress. Rounds repeat until neither fill
/// technique changes the grid.
pub struct DeductionEngine {
    naked_pair: NakedPairStrategy,
    unique_candidate: UniqueCandidateStrategy,
    naked_single: NakedSingleStrategy
}

impl DeductionEngine {

    /// Creates a new deduction engine with all techniques.
    pub fn new() -> DeductionEngine {
        DeductionEngine {
            naked_pair: NakedPairStrategy,
            unique_candidate: UniqueCandidateStrategy,
            naked_single: NakedSingleStrategy
        }
    }

    /// Applies the techniques to the given state until a full round makes
    /// no further progress. Elimination progress on its own does not extend
    /// the loop; only filled cells do, as elimination without a subsequent
    /// fill cannot enable new deductions.
    pub fn saturate(&self, state: &mut SolveState<'_>) {
        loop {
            self.naked_pair.apply(state);

            let changed = self.unique_candidate.apply(state) ||
                self.naked_single.apply(state);

            if !changed {
                break;
            }
        }
    }
}

impl Default for DeductionEngine {
    fn default() -> DeductionEngine {
        DeductionEngine::new()
    }
}
