use thiserror::Error;

/// Errors raised by the profiling engine itself.
///
/// Command plumbing wraps these in `anyhow::Error` with file and row context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Column '{column}' not found in table")]
    InvalidColumnReference { column: String },

    #[error("Column '{column}' is declared more than once")]
    DuplicateColumn { column: String },

    #[error("Row {row} has {found} value(s) but the table declares {expected} column(s)")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Cannot render value in column '{column}' at row {row} as text: {reason}")]
    MalformedCellText {
        column: String,
        row: usize,
        reason: String,
    },

    #[error("Maximum sample count must be at least 1")]
    InvalidSampleLimit,
}
