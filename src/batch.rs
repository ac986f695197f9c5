//! This module implements the batch entrypoint: solving a sequence of
//! puzzle codes one after another, recording the outcome and wall-clock
//! time of each. Aggregation, grouping, and display of the reports are the
//! caller's concern; this module only produces them, emitting one log
//! record per puzzle through the [log] facade.

use crate::{Puzzle, SudokuGrid};
use crate::error::SudokuParseError;
use crate::solver::{Outcome, Solver};

use std::time::{Duration, Instant};

/// The result of processing one code of a batch.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BatchOutcome {

    /// The puzzle was solved; the full solution grid is attached.
    Solved(SudokuGrid),

    /// The puzzle has no solution.
    Unsolvable,

    /// The solver's abort check ended the run early.
    Aborted,

    /// The code could not be parsed, so no solving was attempted.
    Rejected(SudokuParseError)
}

/// The report for one code of a batch: its [BatchOutcome] together with the
/// wall-clock time spent on it, including parsing.
#[derive(Clone, Debug)]
pub struct PuzzleReport {

    /// What became of the puzzle.
    pub outcome: BatchOutcome,

    /// The wall-clock time spent parsing and solving it.
    pub elapsed: Duration
}

fn process(code: &str, solver: &Solver) -> BatchOutcome {
    let mut puzzle = match Puzzle::parse(code) {
        Ok(puzzle) => puzzle,
        Err(error) => return BatchOutcome::Rejected(error)
    };

    match solver.solve(&mut puzzle) {
        Outcome::Solved => BatchOutcome::Solved(puzzle.grid().clone()),
        Outcome::Unsolvable => BatchOutcome::Unsolvable,
        Outcome::Aborted => BatchOutcome::Aborted
    }
}

/// Processes the given codes strictly sequentially, in order, with the
/// given solver. Each code is parsed and solved independently; a code that
/// fails to parse or to solve does not stop the batch. Returns one
/// [PuzzleReport] per code, in input order.
pub fn run<I, S>(codes: I, solver: &Solver) -> Vec<PuzzleReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>
{
    let mut reports = Vec::new();

    for (index, code) in codes.into_iter().enumerate() {
        let start = Instant::now();
        let outcome = process(code.as_ref(), solver);
        let elapsed = start.elapsed();

        match &outcome {
            BatchOutcome::Solved(_) =>
                log::info!("puzzle {} solved in {:?}", index + 1, elapsed),
            BatchOutcome::Unsolvable =>
                log::info!("puzzle {} has no solution ({:?})", index + 1,
                    elapsed),
            BatchOutcome::Aborted =>
                log::info!("puzzle {} aborted after {:?}", index + 1,
                    elapsed),
            BatchOutcome::Rejected(error) =>
                log::warn!("puzzle {} rejected: {}", index + 1, error)
        }

        reports.push(PuzzleReport {
            outcome,
            elapsed
        });
    }

    reports
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::rules;

    const EXAMPLE: &str =
        "53..7....\
         6..195...\
         .98....6.\
         8...6...3\
         4..8.3..1\
         7...2...6\
         .6....28.\
         ...419..5\
         ....8..79";

    #[test]
    fn reports_follow_input_order() {
        let conflict = format!("55{}", ".".repeat(79));
        let codes = [EXAMPLE, conflict.as_str(), "not a code"];
        let solver = Solver::new();

        let reports = run(codes.iter(), &solver);

        assert_eq!(3, reports.len());

        match &reports[0].outcome {
            BatchOutcome::Solved(grid) => {
                assert!(grid.is_full());
                assert!(rules::check(grid));
            },
            outcome => panic!("expected solved, got {:?}", outcome)
        }

        assert_eq!(BatchOutcome::Unsolvable, reports[1].outcome);
        assert_eq!(
            BatchOutcome::Rejected(SudokuParseError::WrongLength(10)),
            reports[2].outcome);
    }

    #[test]
    fn failed_code_does_not_stop_the_batch() {
        let codes = ["garbage", EXAMPLE];
        let reports = run(codes.iter(), &Solver::new());

        assert!(matches!(reports[0].outcome, BatchOutcome::Rejected(_)));
        assert!(matches!(reports[1].outcome, BatchOutcome::Solved(_)));
    }

    #[test]
    fn aborted_solver_yields_aborted_reports() {
        let mut solver = Solver::new();
        solver.set_abort_check(|| true);

        // Deduction alone does not finish this one.
        let hard =
            "4.....8.5\
             .3.......\
             ...7.....\
             .2.....6.\
             ....8.4..\
             ....1....\
             ...6.3.7.\
             5..2.....\
             1.4......";
        let reports = run([hard].iter(), &solver);

        assert_eq!(BatchOutcome::Aborted, reports[0].outcome);
    }
}
