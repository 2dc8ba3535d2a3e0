use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MalformedInput {
    #[error("no rows in input")]
    Empty,
    #[error("first row has no columns")]
    EmptyRow,
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{found:?} at row {row}, column {column} is not a digit")]
    NotADigit {
        row: usize,
        column: usize,
        found: char,
    },
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ForestError {
    #[error("malformed input: {0}")]
    MalformedInput(#[from] MalformedInput),
    #[error("({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },
}

pub type Result<T> = std::result::Result<T, ForestError>;
