use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("incompatible matrix orders: {left} and {right}")]
    IncompatibleSize { left: usize, right: usize },
    #[error("matrix is not invertible (no nonzero pivot in column {column})")]
    NonInvertible { column: usize },
    #[error("inverse entry at ({row}, {column}) does not fit the entry type")]
    EntryOverflow { row: usize, column: usize },
    #[error("row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("matrix must have at least one row")]
    Empty,
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
