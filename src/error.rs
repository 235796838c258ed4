use thiserror::Error;

/// Reasons a set of rows cannot become a [`LetterGrid`](crate::LetterGrid).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid must contain at least one row.")]
    Empty,

    #[error("Grid rows must contain at least one column.")]
    NoColumns,

    #[error("Row {row} has {found} column(s), expected {expected}.")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}
