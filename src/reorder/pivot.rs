//! Single forward pass of partial pivoting by absolute column value.
//!
//! For each diagonal position `i` in increasing order, the row among `i..n` with the largest
//! |A[k, i]| is swapped into row `i` (the same swap is applied to `b`). On ties the earliest row
//! wins. The pass runs once and is a heuristic: it can leave a matrix non-dominant even when some
//! row permutation would be dominant, and applying it twice need not equal applying it once.

use crate::matrix::{DenseMatrix, permute_vec};
use crate::reorder::{Reordered, RowReorder};
use faer::Mat;
use num_traits::Float;

/// Partial-pivoting reorder strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialPivot;

impl<T: Float> RowReorder<T> for PartialPivot {
    fn reorder(&self, a: &Mat<T>, b: &[T]) -> Option<Reordered<T>> {
        Some(rearrange_with_permutation(a, b))
    }
}

/// Row permutation chosen by the pivoting pass.
///
/// Swaps are tracked through `perm` instead of moving matrix rows, so `a` is only read.
pub fn pivot_permutation<T: Float>(a: &Mat<T>) -> Vec<usize> {
    let n = a.nrows();
    let mut perm: Vec<usize> = (0..n).collect();
    for i in 0..n {
        let mut max_row = i;
        for k in i..n {
            if a[(perm[k], i)].abs() > a[(perm[max_row], i)].abs() {
                max_row = k;
            }
        }
        if max_row != i {
            perm.swap(i, max_row);
        }
    }
    perm
}

/// Rearrange `a` and `b`, also returning the permutation applied.
pub fn rearrange_with_permutation<T: Float>(a: &Mat<T>, b: &[T]) -> Reordered<T> {
    let perm = pivot_permutation(a);
    log::trace!("partial pivoting permutation: {:?}", perm);
    Reordered {
        a: a.permute_rows(&perm),
        b: permute_vec(b, &perm),
        permutation: perm,
    }
}

/// Rearrange `a` and `b` by one partial-pivoting pass, returning new copies.
pub fn rearrange<T: Float>(a: &Mat<T>, b: &[T]) -> (Mat<T>, Vec<T>) {
    let r = rearrange_with_permutation(a, b);
    (r.a, r.b)
}
