//! This module contains some error and result definitions used in this crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not include errors that occur when
/// parsing a puzzle code, see [SudokuParseError](enum.SudokuParseError.html)
/// for that.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the 9x9 grid. This is the case if either is greater than or equal to
    /// 9.
    OutOfBounds,

    /// Indicates that some digit is invalid, that is, not in the range
    /// `[1, 9]`.
    InvalidNumber,

    /// Indicates that a write was attempted on a cell that holds one of the
    /// puzzle's givens. Given cells are fixed at load time and must never be
    /// altered.
    ImmutableCell
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::OutOfBounds =>
                f.write_str("cell coordinates outside the 9x9 grid"),
            SudokuError::InvalidNumber =>
                f.write_str("digit outside the range [1, 9]"),
            SudokuError::ImmutableCell =>
                f.write_str("cell holds a given and cannot be edited")
        }
    }
}

impl Error for SudokuError { }

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing an 81-character
/// puzzle code. All of them are detected before any state is constructed, so
/// a failed parse never leaves a partially loaded puzzle behind.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the code does not consist of exactly 81 characters
    /// (one per cell, left-to-right then top-to-bottom). The actual length
    /// is wrapped in this instance.
    WrongLength(usize),

    /// Indicates that the code contains a character other than the digits
    /// `'0'` to `'9'` and the placeholder `'.'`. The offending character is
    /// wrapped in this instance.
    InvalidCharacter(char)
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongLength(len) =>
                write!(f, "puzzle code has {} characters, expected 81", len),
            SudokuParseError::InvalidCharacter(c) =>
                write!(f, "invalid character {:?} in puzzle code", c)
        }
    }
}

impl Error for SudokuParseError { }

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;
