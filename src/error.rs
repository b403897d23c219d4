use std::fmt;
use thiserror::Error;

use crate::utils::convergence::Trace;

// Unified error type for jacobi-dd

/// Which dimension of the input disagreed with the declared size `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Number of rows of A.
    MatrixRows,
    /// Number of columns of A.
    MatrixCols,
    /// Length of a single row when A is assembled from rows.
    Row(usize),
    /// Length of the right-hand side b.
    Rhs,
    /// Length of a caller-supplied solution vector x.
    Solution,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::MatrixRows => write!(f, "matrix row count"),
            Shape::MatrixCols => write!(f, "matrix column count"),
            Shape::Row(i) => write!(f, "length of row {}", i),
            Shape::Rhs => write!(f, "right-hand side length"),
            Shape::Solution => write!(f, "solution vector length"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError<T> {
    #[error("shape mismatch: {what} is {found}, expected {expected}")]
    ShapeMismatch {
        what: Shape,
        expected: usize,
        found: usize,
    },
    /// Carries the caller's request; also raised when a `max_iter` of 0 clamps it to nothing.
    #[error("iteration count must be at least 1 after clamping to max_iter (requested {0})")]
    InvalidIterationCount(usize),
    #[error("matrix is not diagonally dominant after rearrangement (row {row} violates)")]
    NonDiagonalizable { row: usize },
    #[error("singular pivot at row {row} in iteration {iteration}")]
    SingularPivot {
        row: usize,
        iteration: usize,
        /// Iterates completed before the failing pass.
        partial: Trace<T>,
    },
}

/// Fieldless discriminant of [`SolveError`], for branching and event logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ShapeMismatch,
    InvalidIterationCount,
    NonDiagonalizable,
    SingularPivot,
}

impl<T> SolveError<T> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SolveError::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            SolveError::InvalidIterationCount(_) => ErrorKind::InvalidIterationCount,
            SolveError::NonDiagonalizable { .. } => ErrorKind::NonDiagonalizable,
            SolveError::SingularPivot { .. } => ErrorKind::SingularPivot,
        }
    }

    /// Iterates computed before the failure, if the failure kind carries any.
    pub fn partial_trace(&self) -> Option<&Trace<T>> {
        match self {
            SolveError::SingularPivot { partial, .. } => Some(partial),
            _ => None,
        }
    }
}
