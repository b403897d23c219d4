//! Row reordering toward diagonal dominance.
//!
//! This module defines the `RowReorder` trait and its two implementations: the single-pass
//! partial-pivoting heuristic used by default, and a bipartite-matching search over rows and
//! diagonal positions that finds a dominant ordering whenever one exists.

use faer::Mat;

/// A reordered system together with the permutation that produced it.
#[derive(Clone, Debug)]
pub struct Reordered<T> {
    pub a: Mat<T>,
    pub b: Vec<T>,
    /// Row `i` of `a` is row `permutation[i]` of the input matrix.
    pub permutation: Vec<usize>,
}

impl<T> Reordered<T> {
    /// `true` if no rows moved.
    pub fn is_identity(&self) -> bool {
        self.permutation.iter().enumerate().all(|(i, &p)| i == p)
    }
}

/// A strategy that permutes the rows of `A` (and entries of `b`) toward diagonal dominance.
///
/// Inputs are never modified; implementations return fresh copies.
pub trait RowReorder<T> {
    /// Returns `None` if the strategy gives up without producing a candidate ordering.
    fn reorder(&self, a: &Mat<T>, b: &[T]) -> Option<Reordered<T>>;
}

pub mod permute;
pub mod pivot;

pub use permute::{PermutationSearch, search_dominant_permutation};
pub use pivot::{PartialPivot, rearrange, rearrange_with_permutation};
