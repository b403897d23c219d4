//! Dense-matrix API on top of Faer.
//!
//! This module provides the `DenseMatrix` trait and its implementation for the `faer::Mat<T>` type,
//! enabling construction from row sequences (the shape callers usually hold after parsing) plus
//! row permutation for the rearrangement step.

use crate::error::{Shape, SolveError};
use faer::Mat;
use num_traits::Float;

/// Construction and row operations for dense square systems.
pub trait DenseMatrix<T>: Sized {
    /// Construct an `n × n` matrix from `n` rows of `n` entries each.
    ///
    /// Returns `ShapeMismatch` if the row count or any row length differs from `n`.
    fn from_rows<R: AsRef<[T]>>(n: usize, rows: &[R]) -> Result<Self, SolveError<T>>;

    /// New matrix whose row `i` is row `perm[i]` of `self`.
    fn permute_rows(&self, perm: &[usize]) -> Self;
}

impl<T: Float> DenseMatrix<T> for Mat<T> {
    fn from_rows<R: AsRef<[T]>>(n: usize, rows: &[R]) -> Result<Self, SolveError<T>> {
        if rows.len() != n {
            return Err(SolveError::ShapeMismatch {
                what: Shape::MatrixRows,
                expected: n,
                found: rows.len(),
            });
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.as_ref().len() != n) {
            return Err(SolveError::ShapeMismatch {
                what: Shape::Row(i),
                expected: n,
                found: row.as_ref().len(),
            });
        }
        Ok(Mat::from_fn(n, n, |i, j| rows[i].as_ref()[j]))
    }

    fn permute_rows(&self, perm: &[usize]) -> Self {
        assert_eq!(perm.len(), self.nrows(), "permutation length must match row count");
        Mat::from_fn(self.nrows(), self.ncols(), |i, j| self[(perm[i], j)])
    }
}

/// Apply the row permutation `perm` to a vector: `out[i] = v[perm[i]]`.
pub fn permute_vec<T: Copy>(v: &[T], perm: &[usize]) -> Vec<T> {
    perm.iter().map(|&k| v[k]).collect()
}
