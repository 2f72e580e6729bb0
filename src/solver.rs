//! This module contains the logic for solving Sudoku.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [BacktrackingSolver](struct.BacktrackingSolver.html), which performs an
//! exhaustive depth-first search with chronological backtracking.

use crate::{Sudoku, SudokuGrid};
use crate::constraint::Constraint;

/// An enumeration of the two outcomes of a solve attempt. Unsolvability is
/// an ordinary result, not an error: the solver reports it after it has
/// exhausted every possible placement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the Sudoku is not solvable at all.
    Impossible,

    /// Indicates that a solution was found, whose grid is wrapped in this
    /// instance. If multiple solutions exist, this is the one reached first
    /// by the fixed search order (row-major cell scan, ascending digits).
    Solved(SudokuGrid)
}

/// A trait for structs which have the ability to solve Sudoku, that is, to
/// find an assignment for all empty cells which satisfies the puzzle's
/// constraint, or to determine that no such assignment exists.
pub trait Solver {

    /// Solves, or attempts to solve, the provided Sudoku. The input is not
    /// modified; the found solution, if any, is wrapped in the returned
    /// [Solution].
    fn solve(&self, sudoku: &Sudoku<impl Constraint + Clone>) -> Solution;
}

/// A [Solver](trait.Solver.html) which solves Sudoku by recursively testing
/// all valid numbers for each empty cell. This means two things:
///
/// * Its worst-case runtime is exponential, i.e. it may be very slow if the
/// Sudoku has many missing digits.
/// * It finds a solution whenever one exists, for any (correctly
/// implemented) constraint.
///
/// The search is deterministic: empty cells are visited in row-major order
/// and candidate digits are tried in ascending order, so repeated runs on
/// the same input always yield the same solution.
pub struct BacktrackingSolver;

impl BacktrackingSolver {

    /// Solves the given Sudoku in place, that is, fills its grid with a
    /// complete assignment satisfying its constraint if one exists. Returns
    /// `true` if a solution was found and left in the grid.
    ///
    /// Every tentative placement is removed again when the branch below it
    /// fails, so if `false` is returned, the grid is left exactly in the
    /// state it was passed in.
    pub fn solve_in_place<C>(sudoku: &mut Sudoku<C>) -> bool
    where
        C: Constraint + Clone
    {
        let (column, row) = match sudoku.grid().first_empty() {
            Some(position) => position,
            None => return true
        };
        let size = sudoku.grid().size();

        for number in 1..=size {
            if sudoku.is_valid_number(column, row, number).unwrap() {
                sudoku.grid_mut().set_cell(column, row, number).unwrap();

                if BacktrackingSolver::solve_in_place(sudoku) {
                    return true;
                }

                sudoku.grid_mut().clear_cell(column, row).unwrap();
            }
        }

        false
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, sudoku: &Sudoku<impl Constraint + Clone>) -> Solution {
        let mut clone = sudoku.clone();

        if BacktrackingSolver::solve_in_place(&mut clone) {
            Solution::Solved(clone.grid().clone())
        }
        else {
            Solution::Impossible
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::constraint::{DefaultConstraint, RowConstraint};

    fn assert_solves_correctly(size: usize, puzzle: &str, solution: &str) {
        let sudoku = Sudoku::parse(size, puzzle, DefaultConstraint).unwrap();
        let found_solution = BacktrackingSolver.solve(&sudoku);

        if let Solution::Solved(grid) = found_solution {
            let expected_grid = SudokuGrid::parse(size, solution).unwrap();
            assert_eq!(expected_grid, grid, "Solver gave wrong grid.");
            assert!(sudoku.is_valid_solution(&grid).unwrap());
        }
        else {
            panic!("Solvable sudoku marked as impossible.");
        }
    }

    #[test]
    fn backtracking_solves_4x4_sudoku() {
        let puzzle = "
            0 1 3 2
            0 0 0 0
            0 4 0 1
            0 0 0 0";
        let solution = "
            4 1 3 2
            3 2 4 1
            2 4 1 3
            1 3 2 4";

        assert_solves_correctly(4, puzzle, solution);
    }

    // The classic example is taken from the World Puzzle Federation Sudoku
    // Grand Prix, GP 2020 Round 8 (Puzzle 2):
    // https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound8.pdf

    const CLASSIC_PUZZLE: &str = "
        0 0 0 0 8 1 0 0 0
        0 0 2 0 0 7 8 0 0
        0 5 3 0 0 0 1 7 0
        3 7 0 0 0 0 0 0 0
        6 0 0 0 0 0 0 0 3
        0 0 0 0 0 0 0 2 4
        0 6 9 0 0 0 2 3 0
        0 0 5 9 0 0 4 0 0
        0 0 0 6 5 0 0 0 0";

    const CLASSIC_SOLUTION: &str = "
        7 4 6 2 8 1 3 5 9
        9 1 2 5 3 7 8 4 6
        8 5 3 4 9 6 1 7 2
        3 7 4 1 2 5 6 9 8
        6 2 8 7 4 9 5 1 3
        5 9 1 3 6 8 7 2 4
        1 6 9 8 7 4 2 3 5
        2 8 5 9 1 3 4 6 7
        4 3 7 6 5 2 9 8 1";

    #[test]
    fn backtracking_solves_classic_sudoku() {
        assert_solves_correctly(9, CLASSIC_PUZZLE, CLASSIC_SOLUTION);
    }

    #[test]
    fn full_valid_grid_succeeds_immediately() {
        let mut sudoku =
            Sudoku::parse(9, CLASSIC_SOLUTION, DefaultConstraint).unwrap();
        let before = sudoku.grid().clone();

        assert!(BacktrackingSolver::solve_in_place(&mut sudoku));
        assert_eq!(&before, sudoku.grid());

        let solution = BacktrackingSolver.solve(&sudoku);
        assert_eq!(Solution::Solved(before), solution);
    }

    #[test]
    fn duplicate_clues_in_row_unsolvable_4x4() {
        let sudoku = Sudoku::parse(4, "
            3 3 0 0
            0 0 0 0
            0 0 0 0
            0 0 0 0", DefaultConstraint).unwrap();

        assert_eq!(Solution::Impossible, BacktrackingSolver.solve(&sudoku));
    }

    #[test]
    fn duplicate_clues_in_row_unsolvable_9x9() {
        // CLASSIC_SOLUTION with the first row replaced by two 5s and seven
        // empty cells; every other row still needs its own 5, which can no
        // longer be placed anywhere.
        let sudoku = Sudoku::parse(9, "
            5 5 0 0 0 0 0 0 0
            9 1 2 5 3 7 8 4 6
            8 5 3 4 9 6 1 7 2
            3 7 4 1 2 5 6 9 8
            6 2 8 7 4 9 5 1 3
            5 9 1 3 6 8 7 2 4
            1 6 9 8 7 4 2 3 5
            2 8 5 9 1 3 4 6 7
            4 3 7 6 5 2 9 8 1", DefaultConstraint).unwrap();

        assert_eq!(Solution::Impossible, BacktrackingSolver.solve(&sudoku));
    }

    #[test]
    fn failed_search_leaves_grid_unchanged() {
        let mut sudoku = Sudoku::parse(4, "
            3 3 0 0
            0 0 0 0
            0 0 0 0
            0 0 0 0", DefaultConstraint).unwrap();
        let before = sudoku.grid().clone();

        assert!(!BacktrackingSolver::solve_in_place(&mut sudoku));
        assert_eq!(&before, sudoku.grid());

        // Failure is final: a second attempt on the same grid fails again.
        assert!(!BacktrackingSolver::solve_in_place(&mut sudoku));
        assert_eq!(&before, sudoku.grid());
    }

    #[test]
    fn search_order_is_deterministic() {
        let empty = Sudoku::new_empty(4, DefaultConstraint).unwrap();

        // With row-major cell order and ascending digits, the empty grid
        // always resolves to the lexicographically first solution.
        let expected = SudokuGrid::parse(4, "
            1 2 3 4
            3 4 1 2
            2 1 4 3
            4 3 2 1").unwrap();

        assert_eq!(Solution::Solved(expected.clone()),
            BacktrackingSolver.solve(&empty));
        assert_eq!(Solution::Solved(expected),
            BacktrackingSolver.solve(&empty));
    }

    #[test]
    fn solve_in_place_fills_grid() {
        let mut sudoku = Sudoku::parse(4, "
            0 1 3 2
            0 0 0 0
            0 4 0 1
            0 0 0 0", DefaultConstraint).unwrap();

        assert!(BacktrackingSolver::solve_in_place(&mut sudoku));
        assert!(sudoku.grid().is_full());

        let expected = SudokuGrid::parse(4, "
            4 1 3 2
            3 2 4 1
            2 4 1 3
            1 3 2 4").unwrap();

        assert_eq!(&expected, sudoku.grid());
    }

    #[test]
    fn solver_respects_custom_constraint() {
        // With only the row rule, every row independently resolves to the
        // ascending sequence.
        let sudoku = Sudoku::new_empty(4, RowConstraint).unwrap();
        let expected = SudokuGrid::parse(4, "
            1 2 3 4
            1 2 3 4
            1 2 3 4
            1 2 3 4").unwrap();

        assert_eq!(Solution::Solved(expected),
            BacktrackingSolver.solve(&sudoku));
    }
}
