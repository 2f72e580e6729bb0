//! This module defines the constraints which can be applied to Sudoku grids,
//! thus specifying the rules of the puzzle.
//!
//! Besides the definition of the [Constraint] trait, this module contains
//! the primitive constraints for standard Sudoku rules: [RowConstraint],
//! [ColumnConstraint], and [BoxConstraint], as well as their conjunction
//! [DefaultConstraint], which is the rule set the solver normally runs
//! under.
//!
//! # Custom constraints
//!
//! Implementors of [Constraint] only need to provide
//! [Constraint::check_number], which verifies a proposed number for a
//! specified cell. [Constraint::check_cell] and [Constraint::check] are
//! implemented by default based on it. As an example, a constraint which
//! forbids duplicates on the main diagonal can be written like this:
//!
//! ```
//! use sudoku_backtrack::SudokuGrid;
//! use sudoku_backtrack::constraint::Constraint;
//!
//! #[derive(Clone)]
//! struct MainDiagonalConstraint;
//!
//! impl Constraint for MainDiagonalConstraint {
//!     fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
//!             number: usize) -> bool {
//!         // Cells off the diagonal cannot interact with this constraint.
//!         if column == row {
//!             let size = grid.size();
//!
//!             for i in 0..size {
//!                 if i != column &&
//!                         grid.has_number(i, i, number).unwrap() {
//!                     return false;
//!                 }
//!             }
//!         }
//!
//!         true
//!     }
//! }
//! ```
//!
//! Deriving `Clone` is important, since a Sudoku can be cloned (the solver
//! does so to search without touching the original) and that requires its
//! constraint to be cloneable as well.

use crate::SudokuGrid;

use serde::{Deserialize, Serialize};

fn default_check<C>(this: &C, grid: &SudokuGrid) -> bool
where
    C: Constraint + ?Sized
{
    let size = grid.size();

    for row in 0..size {
        for column in 0..size {
            if !this.check_cell(grid, column, row) {
                return false;
            }
        }
    }

    true
}

fn default_check_cell<C>(this: &C, grid: &SudokuGrid, column: usize,
    row: usize) -> bool
where
    C: Constraint + ?Sized
{
    if let Some(number) = grid.get_cell(column, row).unwrap() {
        this.check_number(grid, column, row, number)
    }
    else {
        true
    }
}

/// A constraint defines some property on a Sudoku grid. These are
/// essentially the rules of the Sudoku. In the standard game these are "no
/// duplicates in a row" ([RowConstraint]), "no duplicates in a column"
/// ([ColumnConstraint]), and "no duplicates in a box" ([BoxConstraint]).
///
/// Implementors of this trait only need to provide the `check_number`
/// associated function, which verifies a proposed number for a specified
/// cell. `check_cell` and `check` are implemented by default based on it.
pub trait Constraint {

    /// Checks whether the given [SudokuGrid] matches this constraint, that
    /// is, every cell matches this constraint. By default, this runs
    /// `check_cell` on every cell of the grid.
    fn check(&self, grid: &SudokuGrid) -> bool {
        default_check(self, grid)
    }

    /// Checks whether the cell at the given position in the [SudokuGrid]
    /// fulfills the constraint. This is the same as calling `check_number`
    /// with the same coordinates and the number which is actually filled in
    /// that cell. If the cell is empty, this function always returns `true`.
    fn check_cell(&self, grid: &SudokuGrid, column: usize, row: usize)
            -> bool {
        default_check_cell(self, grid, column, row)
    }

    /// Checks whether the given `number` would fit into the cell specified
    /// by `column` and `row` into the `grid` without violating this
    /// constraint. The content of the target cell itself is ignored, so the
    /// check gives the same answer whether the candidate has already been
    /// tentatively placed or not.
    ///
    /// This function does *not* have to check whether `number` is actually a
    /// valid number for this grid (i.e. in the interval `[1, size]`). If you
    /// require this guarantee, use
    /// [Sudoku::is_valid_number](crate::Sudoku::is_valid_number) instead.
    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool;
}

/// A [Constraint] that there are no duplicates in each row.
#[derive(Clone, Deserialize, Serialize)]
pub struct RowConstraint;

impl Constraint for RowConstraint {
    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            number: usize) -> bool {
        let size = grid.size();

        for other_column in 0..size {
            if other_column != column &&
                    grid.has_number(other_column, row, number).unwrap() {
                return false;
            }
        }

        true
    }
}

/// A [Constraint] that there are no duplicates in each column.
#[derive(Clone, Deserialize, Serialize)]
pub struct ColumnConstraint;

impl Constraint for ColumnConstraint {
    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            number: usize) -> bool {
        let size = grid.size();

        for other_row in 0..size {
            if other_row != row &&
                    grid.has_number(column, other_row, number).unwrap() {
                return false;
            }
        }

        true
    }
}

/// A [Constraint] that there are no duplicates in each box, i.e. each
/// aligned sub-grid of `box_size` by `box_size` cells.
#[derive(Clone, Deserialize, Serialize)]
pub struct BoxConstraint;

impl Constraint for BoxConstraint {
    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            number: usize) -> bool {
        let box_size = grid.box_size();
        let box_column = (column / box_size) * box_size;
        let box_row = (row / box_size) * box_size;

        for other_row in box_row..(box_row + box_size) {
            for other_column in box_column..(box_column + box_size) {
                // Only the target cell itself is exempt; box-mates that
                // merely share its row or column still count.
                if other_column == column && other_row == row {
                    continue;
                }

                if grid.has_number(other_column, other_row, number)
                        .unwrap() {
                    return false;
                }
            }
        }

        true
    }
}

/// The default Sudoku [Constraint] which is a logical conjunction of
/// [RowConstraint], [ColumnConstraint], and [BoxConstraint].
#[derive(Clone, Deserialize, Serialize)]
pub struct DefaultConstraint;

impl Constraint for DefaultConstraint {
    fn check(&self, grid: &SudokuGrid) -> bool {
        RowConstraint.check(grid) &&
        ColumnConstraint.check(grid) &&
        BoxConstraint.check(grid)
    }

    fn check_cell(&self, grid: &SudokuGrid, column: usize, row: usize)
            -> bool {
        RowConstraint.check_cell(grid, column, row) &&
        ColumnConstraint.check_cell(grid, column, row) &&
        BoxConstraint.check_cell(grid, column, row)
    }

    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            number: usize) -> bool {
        RowConstraint.check_number(grid, column, row, number) &&
        ColumnConstraint.check_number(grid, column, row, number) &&
        BoxConstraint.check_number(grid, column, row, number)
    }
}
