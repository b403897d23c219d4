//! Dominant row permutation search.
//!
//! Row `r` can sit on diagonal position `c` iff |A[r, c]| ≥ Σ_{j≠c} |A[r, j]|. A dominant
//! ordering is therefore a perfect matching between rows and diagonal positions in that
//! eligibility graph, found here with augmenting paths (Kuhn's algorithm, O(n³)). Candidate
//! rows for each position are tried largest |A[r, c]| first.
//!
//! Unlike [`crate::reorder::pivot`], this finds a dominant ordering whenever one exists.

use crate::matrix::{DenseMatrix, permute_vec};
use crate::reorder::{Reordered, RowReorder};
use crate::utils::dominance::margin_at;
use faer::Mat;
use num_traits::Float;

/// Matching-based reorder strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermutationSearch;

impl<T: Float> RowReorder<T> for PermutationSearch {
    fn reorder(&self, a: &Mat<T>, b: &[T]) -> Option<Reordered<T>> {
        search_dominant_permutation(a, b)
    }
}

/// Candidate rows for each diagonal position, largest |A[r, c]| first.
fn eligible_rows<T: Float>(a: &Mat<T>) -> Vec<Vec<usize>> {
    let n = a.nrows();
    (0..n)
        .map(|c| {
            // same fold as the dominance check, so a matched row passes it once moved
            let mut rows: Vec<usize> = (0..n).filter(|&r| margin_at(a, r, c) >= T::zero()).collect();
            // stable sort keeps lower row indices first among equal magnitudes
            rows.sort_by(|&p, &q| {
                a[(q, c)]
                    .abs()
                    .partial_cmp(&a[(p, c)].abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            rows
        })
        .collect()
}

fn augment(
    c: usize,
    candidates: &[Vec<usize>],
    visited: &mut [bool],
    row_to_col: &mut [Option<usize>],
) -> bool {
    for &r in &candidates[c] {
        if visited[r] {
            continue;
        }
        visited[r] = true;
        let free = match row_to_col[r] {
            None => true,
            Some(other) => augment(other, candidates, visited, row_to_col),
        };
        if free {
            row_to_col[r] = Some(c);
            return true;
        }
    }
    false
}

/// Row permutation making `a` weakly diagonally dominant, if one exists.
pub fn dominant_permutation<T: Float>(a: &Mat<T>) -> Option<Vec<usize>> {
    let n = a.nrows();
    let candidates = eligible_rows(a);
    let mut row_to_col: Vec<Option<usize>> = vec![None; n];
    for c in 0..n {
        let mut visited = vec![false; n];
        if !augment(c, &candidates, &mut visited, &mut row_to_col) {
            log::debug!("no dominant row permutation: diagonal position {} cannot be filled", c);
            return None;
        }
    }
    let mut perm = vec![0; n];
    for (r, c) in row_to_col.into_iter().enumerate() {
        // every column was matched, so every row is too
        if let Some(c) = c {
            perm[c] = r;
        }
    }
    Some(perm)
}

/// Reorder `a` and `b` into a dominant system, or `None` if no row order is dominant.
pub fn search_dominant_permutation<T: Float>(a: &Mat<T>, b: &[T]) -> Option<Reordered<T>> {
    let perm = dominant_permutation(a)?;
    Some(Reordered {
        a: a.permute_rows(&perm),
        b: permute_vec(b, &perm),
        permutation: perm,
    })
}
