use crate::{Puzzle, SudokuGrid};
use crate::rules;
use crate::solver::{Outcome, Solver};

fn solve(code: &str) -> (Outcome, Puzzle) {
    let mut puzzle = Puzzle::parse(code).unwrap();
    let outcome = Solver::new().solve(&mut puzzle);
    (outcome, puzzle)
}

fn assert_solves(code: &str) {
    let (outcome, puzzle) = solve(code);

    assert_eq!(Outcome::Solved, outcome);
    assert!(puzzle.grid().is_full());
    assert!(rules::check(puzzle.grid()));
}

#[test]
fn classic_puzzle_has_expected_solution() {
    let (outcome, puzzle) = solve(
        "53..7....\
         6..195...\
         .98....6.\
         8...6...3\
         4..8.3..1\
         7...2...6\
         .6....28.\
         ...419..5\
         ....8..79");
    let expected = SudokuGrid::parse(
        "534678912\
         672195348\
         198342567\
         859761423\
         426853791\
         713924856\
         961537284\
         287419635\
         345286179").unwrap();

    assert_eq!(Outcome::Solved, outcome);
    assert_eq!(expected, *puzzle.grid());
}

#[test]
fn empty_code_solves_to_some_valid_grid() {
    let code = ".".repeat(81);
    let (outcome, puzzle) = solve(code.as_str());

    assert_eq!(Outcome::Solved, outcome);
    assert!(puzzle.grid().is_full());
    assert!(rules::check(puzzle.grid()));
}

#[test]
fn duplicate_givens_in_a_row_are_unsolvable() {
    let code = format!("55{}", ".".repeat(79));
    let (outcome, puzzle) = solve(code.as_str());

    assert_eq!(Outcome::Unsolvable, outcome);
    assert!(!puzzle.grid().is_full());
}

#[test]
fn duplicate_givens_in_a_block_are_unsolvable() {
    // Two 7s in the top-left box, on different rows and columns.
    let mut grid = SudokuGrid::new();
    grid.set_cell(0, 0, 7).unwrap();
    grid.set_cell(1, 1, 7).unwrap();
    let mut puzzle = Puzzle::from_grid(grid);

    assert_eq!(Outcome::Unsolvable, Solver::new().solve(&mut puzzle));
}

#[test]
fn first_batch_puzzle() {
    assert_solves(
        "001020300403000520005060007008007005030286040100900600900030100\
         072000408006050900");
}

#[test]
fn second_batch_puzzle() {
    assert_solves(
        "012003000400050306030074000300700089000102000620005004000430060\
         908010002000600570");
}

#[test]
fn sparse_batch_puzzle() {
    assert_solves(
        "000000001002003004560070003010200800009050600003004010100090052\
         800100300700000000");
}

#[test]
fn batch_puzzle_with_dense_bottom() {
    assert_solves(
        "006300000740801056000026040060000000300100500100008700608000420\
         402087010010050003");
}

#[test]
fn batch_puzzle_with_sparse_columns() {
    assert_solves(
        "000001200300040000050006007004800030001000800070009400800500010\
         000070006009200000");
}
