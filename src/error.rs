//! This module contains the error and result definitions used in this crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;
use std::num::ParseIntError;

/// Errors that can occur when constructing or manipulating grids in the
/// [root module](../index.html). Errors raised while loading a board from an
/// input stream are covered by [InputError](enum.InputError.html) instead.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the size specified for a created grid is invalid. This
    /// is the case if it is zero or not a perfect square, since the box
    /// dimension is the square root of the size.
    InvalidDimensions,

    /// Indicates that some number is invalid for the size of the grid in
    /// question. This is the case if it is less than 1 or greater than the
    /// size.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the grid in question. This is the case if they are greater than or
    /// equal to the size.
    OutOfBounds
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::InvalidDimensions =>
                write!(f, "grid size must be a positive perfect square"),
            SudokuError::InvalidNumber =>
                write!(f, "number must be between 1 and the grid size"),
            SudokuError::OutOfBounds =>
                write!(f, "cell coordinates lie outside the grid")
        }
    }
}

impl Error for SudokuError { }

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when loading a board from an
/// input stream. The loader aborts at the first violation, so the variant
/// always describes the earliest problem in the input.
#[derive(Debug)]
pub enum InputError {

    /// Indicates that reading from the underlying stream failed. The causing
    /// IO error is wrapped in this instance.
    Io(io::Error),

    /// Indicates that a token in the input could not be parsed as an integer
    /// at all.
    NumberFormat,

    /// Indicates that a cell value was parsed but lies outside the permitted
    /// range `[0, size]`, where 0 denotes an empty cell. Both the offending
    /// value and the grid size are recorded.
    ValueOutOfRange {

        /// The value that was read from the input.
        value: i64,

        /// The size of the grid being loaded.
        size: usize
    },

    /// Indicates that the input ended before all `size * size` cell values
    /// were read.
    MissingCells {

        /// The number of cell values required to fill the grid.
        expected: usize,

        /// The number of cell values actually found in the input.
        found: usize
    },

    /// Indicates that the configured grid size itself is unusable, i.e. zero
    /// or not a perfect square.
    InvalidDimensions
}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        InputError::Io(e)
    }
}

impl From<ParseIntError> for InputError {
    fn from(_: ParseIntError) -> Self {
        InputError::NumberFormat
    }
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io(e) =>
                write!(f, "failed to read board: {}", e),
            InputError::NumberFormat =>
                write!(f, "board contains a token that is not a number"),
            InputError::ValueOutOfRange { value, size } =>
                write!(f,
                    "numbers on the board are not within its size: {} is \
                    outside [0, {}]", value, size),
            InputError::MissingCells { expected, found } =>
                write!(f,
                    "board requires {} cell values, but only {} were \
                    provided", expected, found),
            InputError::InvalidDimensions =>
                write!(f, "grid size must be a positive perfect square")
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            _ => None
        }
    }
}

/// Syntactic sugar for `Result<V, InputError>`.
pub type InputResult<V> = Result<V, InputError>;
