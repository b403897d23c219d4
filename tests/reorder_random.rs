//! Randomised tests for row reordering.
//!
//! A strictly diagonally dominant matrix whose diagonal entries exceed 1 in magnitude, with
//! off-diagonal entries in [-1, 1], has exactly one row per column that can win partial
//! pivoting. Shuffling its rows and reordering must therefore restore the original order, and
//! the matching search must find a dominant ordering as well.

use approx::assert_abs_diff_eq;
use faer::Mat;
use jacobi_dd::{
    DenseMatrix, ReorderKind, SolveContext, SolveOptions, check_dominance, dominance_margins,
    is_strictly_dominant, permute_vec, rearrange_with_permutation, search_dominant_permutation,
};
use rand::Rng;
use rand::seq::SliceRandom;

/// Random strictly dominant `n × n` matrix and right-hand side.
fn random_dominant(n: usize) -> (Mat<f64>, Vec<f64>) {
    let mut rng = rand::thread_rng();
    let data: Vec<f64> = (0..n * n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let mut a = Mat::from_fn(n, n, |i, j| data[j * n + i]);
    for i in 0..n {
        let off: f64 = (0..n).filter(|&j| j != i).map(|j| a[(i, j)].abs()).sum();
        let sign = if rng.r#gen::<bool>() { 1.0 } else { -1.0 };
        a[(i, i)] = sign * (off + 1.0 + rng.gen_range(0.0..2.0));
    }
    let b: Vec<f64> = (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect();
    (a, b)
}

/// Rows of `a` shuffled; returns the shuffled system and the shuffle used.
fn shuffled(a: &Mat<f64>, b: &[f64]) -> (Mat<f64>, Vec<f64>, Vec<usize>) {
    let mut rng = rand::thread_rng();
    let mut perm: Vec<usize> = (0..b.len()).collect();
    perm.shuffle(&mut rng);
    (a.permute_rows(&perm), permute_vec(b, &perm), perm)
}

#[test]
fn pivoting_undoes_a_shuffle() {
    for n in [2, 3, 5, 8] {
        let (a, b) = random_dominant(n);
        assert!(is_strictly_dominant(&a));
        let (sa, sb, perm) = shuffled(&a, &b);
        let r = rearrange_with_permutation(&sa, &sb);
        assert!(check_dominance(&r.a));
        assert_eq!(r.b, b);
        // composing the shuffle with the recovered order gives the identity
        let composed: Vec<usize> = r.permutation.iter().map(|&k| perm[k]).collect();
        assert_eq!(composed, (0..n).collect::<Vec<_>>());
    }
}

#[test]
fn matching_search_finds_a_dominant_order() {
    for n in [1, 4, 7] {
        let (a, b) = random_dominant(n);
        let (sa, sb, _) = shuffled(&a, &b);
        let r = search_dominant_permutation(&sa, &sb).unwrap();
        assert!(check_dominance(&r.a));
        assert!(dominance_margins(&r.a).iter().all(|&m| m > 0.0));
    }
}

#[test]
fn shuffled_system_solves_like_the_original() {
    let n = 6;
    let (a, b) = random_dominant(n);
    let (sa, sb, _) = shuffled(&a, &b);
    for kind in [ReorderKind::Pivot, ReorderKind::Permutation] {
        let ctx = SolveContext::new(SolveOptions::new().with_reorder(kind));
        let direct = ctx.run(&a, &b, n, 50).result.unwrap();
        let via_shuffle = ctx.run(&sa, &sb, n, 50).result.unwrap();
        assert_eq!(direct.len(), via_shuffle.len());
        let (x, y) = (direct.last().unwrap(), via_shuffle.last().unwrap());
        for i in 0..n {
            assert_abs_diff_eq!(x[i], y[i], epsilon = 1e-10);
        }
    }
}

#[test]
fn rows_built_from_slices_match_random_matrix() {
    let (a, _) = random_dominant(4);
    let rows: Vec<Vec<f64>> = (0..4).map(|i| (0..4).map(|j| a[(i, j)]).collect()).collect();
    let rebuilt: Mat<f64> = DenseMatrix::from_rows(4, &rows).unwrap();
    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(rebuilt[(i, j)], a[(i, j)]);
        }
    }
}

/// All orderings of `0..3`.
const ORDERS_OF_THREE: [[usize; 3]; 6] =
    [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];

#[test]
fn matching_search_agrees_with_every_row_order() {
    // coarse values make exact and near ties between diagonal and off-diagonal sums common
    const ENTRIES: [f64; 7] = [0.1, 0.2, 0.3, 0.4, 0.6, 0.7, 1.1];
    let mut rng = rand::thread_rng();
    for _ in 0..20_000 {
        let a = Mat::from_fn(3, 3, |_, _| *ENTRIES.choose(&mut rng).unwrap());
        let b = [1.0, 2.0, 3.0];
        let any_dominant = ORDERS_OF_THREE
            .iter()
            .any(|perm| check_dominance(&a.permute_rows(perm)));
        match search_dominant_permutation(&a, &b) {
            Some(r) => assert!(check_dominance(&r.a), "non-dominant order {:?} for {:?}", r.permutation, a),
            None => assert!(!any_dominant, "missed a dominant order for {:?}", a),
        }
    }
}
