//! Error types
//!
//! Configuration problems are reported when a generator is built. Grid editing
//! problems belong to the input grid. Candidate generation itself never fails.

use thiserror::Error;

/// Rejected generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(
        "unsupported alphabet mode '{0}' (expected letters, letters-digits, digits or digits-operators)"
    )]
    UnsupportedAlphabetMode(String),
    #[error("unsupported duplicate handling '{0}' (expected global or per-occurrence)")]
    UnsupportedDuplicateHandling(String),
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,
    #[error("alphabet contains '{0}' more than once")]
    DuplicateSymbol(char),
    #[error("grid must have at least one {0}")]
    EmptyDimension(&'static str),
}

/// Rejected edit to an input grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {column}) is outside the {rows}x{columns} grid")]
    OutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
    #[error("'{0}' is not part of the configured alphabet")]
    UnsupportedCharacter(char),
    #[error("row has {actual} cells, expected {expected}")]
    RowLength { expected: usize, actual: usize },
    #[error("invalid feedback symbol '{0}' (use G/Y/- or ? for unset)")]
    InvalidFeedback(char),
    #[error("malformed row '{0}' (expected GUESS/FEEDBACK, e.g. CRANE/G-Y--)")]
    MalformedRow(String),
    #[error("every row of the grid is already filled")]
    Full,
}
