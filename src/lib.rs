// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements a straightforward Sudoku solver based on exhaustive
//! backtracking search. It supports the following key features:
//!
//! * Loading boards from text input and printing them in the usual grid
//! layout
//! * Checking the validity of boards and candidate digits according to the
//! standard row/column/box uniqueness rules
//! * Solving boards of any perfect-square size by depth-first search with
//! chronological backtracking
//!
//! The grid size is a runtime parameter, not a compile-time constant. Any
//! positive perfect square works; in this introduction we will mostly be
//! using 4x4 grids due to their simpler nature. These are divided in 4 2x2
//! boxes, each of which must contain the digits 1 to 4, just like each row
//! and column.
//!
//! # Loading and printing boards
//!
//! Boards are read as whitespace-separated integers in row-major order,
//! where 0 denotes an empty cell. See [SudokuGrid::read_from] for the exact
//! format. An example of loading and displaying a board is provided below.
//!
//! ```
//! use sudoku_backtrack::SudokuGrid;
//!
//! let grid = SudokuGrid::parse(4, "
//!     0 1 3 2
//!     0 0 0 0
//!     0 4 0 1
//!     0 0 0 0").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking validity
//!
//! A [Sudoku] pairs the numbers (stored in a [SudokuGrid]) with a constraint
//! which specifies the rules. For the classic row/column/box rules,
//! [DefaultConstraint](constraint::DefaultConstraint) is used. Individual
//! candidate digits can be checked before they are placed.
//!
//! ```
//! use sudoku_backtrack::Sudoku;
//! use sudoku_backtrack::constraint::DefaultConstraint;
//!
//! let sudoku = Sudoku::parse(4, "
//!     0 1 3 2
//!     0 0 0 0
//!     0 4 0 1
//!     0 0 0 0", DefaultConstraint).unwrap();
//!
//! // 1 already appears in the second column.
//! assert!(!sudoku.is_valid_number(1, 1, 1).unwrap());
//! assert!(sudoku.is_valid_number(1, 1, 2).unwrap());
//! ```
//!
//! # Solving boards
//!
//! The [Solver](solver::Solver) trait describes structs that can search for
//! a solution, with [BacktrackingSolver](solver::BacktrackingSolver) as the
//! provided implementation. Since cells are visited in row-major order and
//! digits are tried in ascending order, the solution found for a given input
//! is always the same.
//!
//! ```
//! use sudoku_backtrack::{Sudoku, SudokuGrid};
//! use sudoku_backtrack::constraint::DefaultConstraint;
//! use sudoku_backtrack::solver::{BacktrackingSolver, Solution, Solver};
//!
//! let sudoku = Sudoku::parse(4, "
//!     0 1 3 2
//!     0 0 0 0
//!     0 4 0 1
//!     0 0 0 0", DefaultConstraint).unwrap();
//! let expected = SudokuGrid::parse(4, "
//!     4 1 3 2
//!     3 2 4 1
//!     2 4 1 3
//!     1 3 2 4").unwrap();
//!
//! assert_eq!(Solution::Solved(expected), BacktrackingSolver.solve(&sudoku));
//! ```
//!
//! An unsolvable board is not an error, it is the other ordinary outcome:
//! the solver returns [Solution::Impossible](solver::Solution::Impossible)
//! once it has exhausted every possibility.

pub mod constraint;
pub mod error;
pub mod solver;

use constraint::Constraint;
use error::{InputError, InputResult, SudokuError, SudokuResult};

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};
use std::io::BufRead;

/// A Sudoku grid is a square matrix of cells that is organized into
/// non-overlapping square boxes. The box dimension is the square root of the
/// grid size, so a 9x9 grid consists of 9 3x3 boxes. Each cell may or may
/// not be occupied by a number in the range `[1, size]`.
///
/// The grid prints in the common text layout, with a vertical bar between
/// box-columns and a horizontal rule between box-rows, where empty cells are
/// written as 0:
///
/// ```text
/// 0 1 | 3 2
/// 0 0 | 0 0
/// - - - - -
/// 0 4 | 0 1
/// 0 0 | 0 0
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "GridData", try_from = "GridData")]
pub struct SudokuGrid {
    size: usize,
    box_size: usize,
    cells: Vec<Option<usize>>
}

/// The raw serialized form of a [SudokuGrid]. Deserialization goes through
/// this mirror so that a grid whose cell vector does not match its size, or
/// which contains out-of-range numbers, is rejected.
#[derive(Clone, Deserialize, Serialize)]
struct GridData {
    size: usize,
    cells: Vec<Option<usize>>
}

impl From<SudokuGrid> for GridData {
    fn from(grid: SudokuGrid) -> GridData {
        GridData {
            size: grid.size,
            cells: grid.cells
        }
    }
}

impl TryFrom<GridData> for SudokuGrid {
    type Error = SudokuError;

    fn try_from(data: GridData) -> SudokuResult<SudokuGrid> {
        let mut grid = SudokuGrid::new(data.size)?;

        if data.cells.len() != data.size * data.size {
            return Err(SudokuError::InvalidDimensions);
        }

        for cell in &data.cells {
            if let Some(number) = cell {
                if *number == 0 || *number > data.size {
                    return Err(SudokuError::InvalidNumber);
                }
            }
        }

        grid.cells = data.cells;
        Ok(grid)
    }
}

pub(crate) fn index(column: usize, row: usize, size: usize) -> usize {
    row * size + column
}

fn box_size_of(size: usize) -> Option<usize> {
    (1..=size).find(|box_size| box_size * box_size == size)
}

fn cell_width(size: usize) -> usize {
    let mut width = 1;
    let mut rest = size;

    while rest >= 10 {
        rest /= 10;
        width += 1;
    }

    width
}

fn separator_row(grid: &SudokuGrid) -> String {
    let width = cell_width(grid.size());
    let segments = grid.size() + grid.box_size() - 1;
    vec!["-".repeat(width); segments].join(" ")
}

fn content_row(grid: &SudokuGrid, row: usize) -> String {
    let size = grid.size();
    let width = cell_width(size);
    let mut segments = Vec::new();

    for column in 0..size {
        if column % grid.box_size() == 0 && column != 0 {
            segments.push(format!("{:>width$}", "|", width = width));
        }

        let number = grid.get_cell(column, row).unwrap().unwrap_or(0);
        segments.push(format!("{:>width$}", number, width = width));
    }

    segments.join(" ")
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let separator_row = separator_row(self);

        for row in 0..self.size() {
            if row != 0 {
                f.write_str("\n")?;

                if row % self.box_size == 0 {
                    f.write_str(separator_row.as_str())?;
                    f.write_str("\n")?;
                }
            }

            f.write_str(content_row(self, row).as_str())?;
        }

        Ok(())
    }
}

impl SudokuGrid {

    /// Creates a new, empty Sudoku grid with the given size, i.e. number of
    /// rows and columns.
    ///
    /// # Arguments
    ///
    /// * `size`: The total width and height of the grid. Must be a positive
    /// perfect square, since the boxes of the grid are `sqrt(size)` cells
    /// wide and tall. For an ordinary Sudoku grid, this is 9.
    ///
    /// # Errors
    ///
    /// If `size` is zero or not a perfect square. In that case,
    /// `SudokuError::InvalidDimensions` is returned.
    pub fn new(size: usize) -> SudokuResult<SudokuGrid> {
        let box_size = box_size_of(size)
            .ok_or(SudokuError::InvalidDimensions)?;

        Ok(SudokuGrid {
            size,
            box_size,
            cells: vec![None; size * size]
        })
    }

    /// Reads a grid of the given size from an input stream. The input must
    /// contain `size * size` whitespace-separated integers in row-major
    /// order, that is, each row is completed before the next one is started.
    /// Every value must lie in the range `[0, size]`, where 0 denotes an
    /// empty cell. Anything on the stream after the last cell value is
    /// ignored.
    ///
    /// An example 4x4 board would be provided as:
    ///
    /// ```text
    /// 0 1 3 2
    /// 0 0 0 0
    /// 0 4 0 1
    /// 0 0 0 0
    /// ```
    ///
    /// Loading aborts at the first offending value, so no partially garbage
    /// grid is ever returned.
    ///
    /// # Errors
    ///
    /// Any specialization of [InputError] (see that documentation).
    pub fn read_from<R: BufRead>(size: usize, reader: R)
            -> InputResult<SudokuGrid> {
        let mut grid = SudokuGrid::new(size)
            .map_err(|_| InputError::InvalidDimensions)?;
        let expected = size * size;
        let mut filled = 0usize;

        'lines: for line in reader.lines() {
            let line = line?;

            for token in line.split_whitespace() {
                let value = token.parse::<i64>()?;

                if value < 0 || value as usize > size {
                    return Err(InputError::ValueOutOfRange {
                        value,
                        size
                    });
                }

                if value > 0 {
                    grid.cells[filled] = Some(value as usize);
                }

                filled += 1;

                if filled == expected {
                    break 'lines;
                }
            }
        }

        if filled < expected {
            return Err(InputError::MissingCells {
                expected,
                found: filled
            });
        }

        Ok(grid)
    }

    /// Parses a grid of the given size from a string containing
    /// `size * size` whitespace-separated integers in row-major order. This
    /// is a convenience wrapper around [SudokuGrid::read_from] with the same
    /// format and error behavior.
    pub fn parse(size: usize, code: &str) -> InputResult<SudokuGrid> {
        SudokuGrid::read_from(size, code.as_bytes())
    }

    /// Gets the total size of the grid on one axis (horizontally or
    /// vertically). Since a square grid is enforced at construction time,
    /// this is guaranteed to be valid for both axes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the width and height of one box of the grid, which is the square
    /// root of the grid size. This is also the number of boxes along each
    /// axis.
    pub fn box_size(&self) -> usize {
        self.box_size
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        if column >= self.size || row >= self.size {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row, self.size)])
        }
    }

    /// Indicates whether the cell at the specified position contains the
    /// given number. This is `false` if the cell holds a different number or
    /// is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, size[`.
    /// * `number`: The number to look for in the specified cell. If it is
    /// *not* in the range `[1, size]`, `false` will always be returned.
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
    /// number. If the cell was not empty, the old number is overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, size[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, size]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        if column >= self.size || row >= self.size {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > self.size {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row, self.size)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it is left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= self.size || row >= self.size {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row, self.size)] = None;
        Ok(())
    }

    /// Searches the grid for an unfilled cell in row-major order, that is,
    /// all columns of row 0 left to right, then all columns of row 1, and so
    /// on. Returns the position of the first empty cell as a
    /// `(column, row)` pair, or `None` if the grid is full. The scan order
    /// is fixed, which makes the cell chosen by the solver at every step
    /// deterministic.
    pub fn first_empty(&self) -> Option<(usize, usize)> {
        for row in 0..self.size {
            for column in 0..self.size {
                if self.cells[index(column, row, self.size)].is_none() {
                    return Some((column, row));
                }
            }
        }

        None
    }

    fn verify_dimensions(&self, other: &SudokuGrid) -> SudokuResult<()> {
        if self.size != other.size {
            Err(SudokuError::InvalidDimensions)
        }
        else {
            Ok(())
        }
    }

    /// Counts the number of clues given by this grid, that is, the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. Equivalent to [SudokuGrid::first_empty] returning `None`.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_none())
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be
    /// filled in `other` with the same number. If this condition is met,
    /// `true` is returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the sizes of this and the `other` grid are not the same. In that
    /// case, `SudokuError::InvalidDimensions` is returned.
    pub fn is_subset(&self, other: &SudokuGrid) -> SudokuResult<bool> {
        self.verify_dimensions(other)?;
        Ok(self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(number) => other_cell == &Some(*number),
                    None => true
                }
            }))
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some number
    /// must be filled in this one with the same number. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the sizes of this and the `other` grid are not the same. In that
    /// case, `SudokuError::InvalidDimensions` is returned.
    pub fn is_superset(&self, other: &SudokuGrid) -> SudokuResult<bool> {
        other.is_subset(self)
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<Option<usize>> {
        &self.cells
    }
}

/// A Sudoku represents a grid of numbers with an associated constraint. The
/// numbers may or may not fulfill the constraint, but there is a method to
/// check it.
///
/// There is no guarantee that the Sudoku is solvable; the
/// [solver](crate::solver) module determines that by exhaustive search.
#[derive(Clone)]
pub struct Sudoku<C: Constraint + Clone> {
    grid: SudokuGrid,
    constraint: C
}

impl<C: Constraint + Clone> Sudoku<C> {

    /// Creates a new Sudoku with the provided constraint and an empty grid
    /// of the given size.
    ///
    /// # Arguments
    ///
    /// * `size`: The total width and height of the grid. Must be a positive
    /// perfect square. For an ordinary Sudoku grid, this is 9.
    /// * `constraint`: The constraint which is checked by this Sudoku. Grid
    /// configurations which violate this constraint will be seen as invalid
    /// by [Sudoku::is_valid].
    ///
    /// # Errors
    ///
    /// If `size` is invalid (zero or not a perfect square).
    pub fn new_empty(size: usize, constraint: C) -> SudokuResult<Sudoku<C>> {
        Ok(Sudoku {
            grid: SudokuGrid::new(size)?,
            constraint
        })
    }

    /// Creates a new Sudoku with the provided constraint and a given grid,
    /// which may already contain some numbers. Note that it is *not* checked
    /// whether the given grid fulfills the constraint - it is perfectly
    /// legal to create an invalid Sudoku here.
    ///
    /// # Arguments
    ///
    /// * `grid`: The initial [SudokuGrid] which contains the numbers with
    /// which the Sudoku is filled.
    /// * `constraint`: The constraint which is checked by this Sudoku. Grid
    /// configurations which violate this constraint will be seen as invalid
    /// by [Sudoku::is_valid].
    pub fn new_with_grid(grid: SudokuGrid, constraint: C) -> Sudoku<C> {
        Sudoku {
            grid,
            constraint
        }
    }

    /// Reads the grid from an input stream using [SudokuGrid::read_from] and
    /// wraps the result in a Sudoku with the given constraint. Note that the
    /// loaded numbers are not required to fulfill the constraint; whether
    /// the board is solvable is decided by the solver, not the loader.
    ///
    /// # Errors
    ///
    /// If loading fails. See [SudokuGrid::read_from] for further
    /// information.
    pub fn read_from<R: BufRead>(size: usize, reader: R, constraint: C)
            -> InputResult<Sudoku<C>> {
        Ok(Sudoku::new_with_grid(
            SudokuGrid::read_from(size, reader)?, constraint))
    }

    /// Parses the code into a [SudokuGrid] using [SudokuGrid::parse] and
    /// wraps the result in a Sudoku with the given constraint.
    ///
    /// # Errors
    ///
    /// If the parsing fails. See [SudokuGrid::parse] for further
    /// information.
    pub fn parse(size: usize, code: &str, constraint: C)
            -> InputResult<Sudoku<C>> {
        Ok(Sudoku::new_with_grid(SudokuGrid::parse(size, code)?, constraint))
    }

    /// Gets a reference to the `SudokuGrid` of this Sudoku.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Gets a mutable reference to the `SudokuGrid` of this Sudoku.
    pub fn grid_mut(&mut self) -> &mut SudokuGrid {
        &mut self.grid
    }

    /// Gets a reference to the `Constraint` of this Sudoku.
    pub fn constraint(&self) -> &C {
        &self.constraint
    }

    /// Indicates whether the entire grid matches the constraint.
    pub fn is_valid(&self) -> bool {
        self.constraint.check(&self.grid)
    }

    /// Indicates whether the cell at the given location matches the
    /// constraint. That is, if the specified cell violates the constraint,
    /// `false` is returned, and `true` otherwise.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn is_valid_cell(&self, column: usize, row: usize)
            -> SudokuResult<bool> {
        if column >= self.grid.size() || row >= self.grid.size() {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.constraint.check_cell(&self.grid, column, row))
        }
    }

    /// Indicates whether the given number would be valid in the cell at the
    /// given location, checked against the rest of the grid excluding the
    /// target cell itself. That is, if the number violated the constraint,
    /// `false` is returned, and `true` otherwise.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, size[`.
    /// * `number`: The number to check whether it is valid in the given
    /// cell. Must be in the range `[1, size]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn is_valid_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if column >= self.grid.size() || row >= self.grid.size() {
            Err(SudokuError::OutOfBounds)
        }
        else if number == 0 || number > self.grid.size() {
            Err(SudokuError::InvalidNumber)
        }
        else {
            Ok(self.constraint.check_number(&self.grid, column, row, number))
        }
    }

    /// Indicates whether the given [SudokuGrid] is a valid solution to this
    /// puzzle. That is the case if all digits from this Sudoku can be found
    /// in the `solution`, it matches the constraint of this Sudoku, and it
    /// is full.
    ///
    /// # Errors
    ///
    /// If the sizes of this Sudoku's grid and the `solution` grid are not
    /// the same. In that case, `SudokuError::InvalidDimensions` is returned.
    pub fn is_valid_solution(&self, solution: &SudokuGrid)
            -> SudokuResult<bool> {
        Ok(self.grid.is_subset(solution)? &&
            self.constraint.check(solution) &&
            solution.is_full())
    }
}
