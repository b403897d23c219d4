//! Row diagonal dominance: |A[i,i]| ≥ Σ_{j≠i} |A[i,j]| for every row.
//!
//! Weak dominance (ties allowed) is the precondition the solve pipeline checks before running
//! the Jacobi sweep. A 0×0 matrix is vacuously dominant.

use crate::core::traits::{MatShape, MatrixGet};
use num_traits::Float;

/// |A[r,c]| − Σ_{j≠c} |A[r,j]|: the margin row `r` would have if it sat on diagonal position `c`.
pub fn margin_at<M, T>(a: &M, r: usize, c: usize) -> T
where
    M: MatrixGet<T> + MatShape,
    T: Float,
{
    let off = (0..a.ncols())
        .filter(|&j| j != c)
        .fold(T::zero(), |acc, j| acc + a.get(r, j).abs());
    a.get(r, c).abs() - off
}

/// |A[i,i]| − Σ_{j≠i} |A[i,j]| for row `i`.
pub fn row_margin<M, T>(a: &M, i: usize) -> T
where
    M: MatrixGet<T> + MatShape,
    T: Float,
{
    margin_at(a, i, i)
}

/// Per-row dominance margins; a negative entry marks a violating row.
pub fn dominance_margins<M, T>(a: &M) -> Vec<T>
where
    M: MatrixGet<T> + MatShape,
    T: Float,
{
    (0..a.nrows()).map(|i| row_margin(a, i)).collect()
}

/// First row that is not weakly dominant, if any.
pub fn first_violation<M, T>(a: &M) -> Option<usize>
where
    M: MatrixGet<T> + MatShape,
    T: Float,
{
    (0..a.nrows()).find(|&i| row_margin(a, i) < T::zero())
}

/// `true` iff every row of `a` is weakly diagonally dominant.
pub fn check_dominance<M, T>(a: &M) -> bool
where
    M: MatrixGet<T> + MatShape,
    T: Float,
{
    first_violation(a).is_none()
}

/// Strict variant: |A[i,i]| > Σ_{j≠i} |A[i,j]| for every row.
pub fn is_strictly_dominant<M, T>(a: &M) -> bool
where
    M: MatrixGet<T> + MatShape,
    T: Float,
{
    (0..a.nrows()).all(|i| row_margin(a, i) > T::zero())
}
