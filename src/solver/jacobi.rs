//! Jacobi iteration with a fixed iteration count.
//!
//! Each pass computes a fresh iterate from the previous one only:
//!
//! ```text
//! x_t[i] = (b[i] − Σ_{j≠i} A[i,j]·x_{t−1}[j]) / A[i,i]
//! ```
//!
//! starting from x₀ = 0. There is no convergence test: every requested pass runs (up to the
//! configured cap) and the whole sequence of iterates is returned. A diagonal entry with
//! |A[i,i]| ≤ `pivot_tol` stops the sweep with `SingularPivot` before the divide happens.
//!
//! # References
//! - Saad, Y. (2003). Iterative Methods for Sparse Linear Systems, §4.1. SIAM.

use crate::config::SolveOptions;
use crate::core::traits::{MatShape, MatVec, MatrixGet};
use crate::error::{Shape, SolveError};
use crate::solver::LinearSolver;
use crate::utils::convergence::{SolveStats, Trace};
use num_traits::Float;

#[derive(Debug, Clone)]
pub struct JacobiSolver<T> {
    pub opts: SolveOptions<T>,
}

impl<T: Float> Default for JacobiSolver<T> {
    fn default() -> Self {
        Self::new(SolveOptions::default())
    }
}

/// Check that `a` is `n × n` and `b` has length `n`.
pub fn validate_shape<M, T>(a: &M, b: &[T], n: usize) -> Result<(), SolveError<T>>
where
    M: MatShape,
{
    let checks = [
        (Shape::MatrixRows, a.nrows()),
        (Shape::MatrixCols, a.ncols()),
        (Shape::Rhs, b.len()),
    ];
    for (what, found) in checks {
        if found != n {
            return Err(SolveError::ShapeMismatch { what, expected: n, found });
        }
    }
    Ok(())
}

impl<T: Float> JacobiSolver<T> {
    pub fn new(opts: SolveOptions<T>) -> Self {
        Self { opts }
    }

    /// `min(requested, max_iter)`, rejecting a request of zero.
    pub fn effective_iterations(&self, requested: usize) -> Result<usize, SolveError<T>> {
        if requested < 1 {
            return Err(SolveError::InvalidIterationCount(requested));
        }
        let k = self.opts.clamp_iterations(requested);
        if k < 1 {
            log::warn!("max_iter is 0, no pass can run ({} requested)", requested);
            return Err(SolveError::InvalidIterationCount(requested));
        }
        if k < requested {
            log::debug!("clamping {} requested iterations to {}", requested, k);
        }
        Ok(k)
    }

    /// Run the sweep and return iterates x₁..x_k.
    pub fn iterate<M>(
        &self,
        a: &M,
        b: &[T],
        n: usize,
        requested: usize,
    ) -> Result<Trace<T>, SolveError<T>>
    where
        M: MatrixGet<T> + MatShape,
    {
        self.iterate_observed(a, b, n, requested, |_, _| {})
    }

    /// Like [`iterate`](Self::iterate), calling `on_iter(t, x_t)` after each completed pass.
    pub fn iterate_observed<M, F>(
        &self,
        a: &M,
        b: &[T],
        n: usize,
        requested: usize,
        mut on_iter: F,
    ) -> Result<Trace<T>, SolveError<T>>
    where
        M: MatrixGet<T> + MatShape,
        F: FnMut(usize, &[T]),
    {
        validate_shape(a, b, n)?;
        let k = self.effective_iterations(requested)?;
        log::debug!("jacobi: n = {}, iterations = {}", n, k);

        let tol = self.opts.pivot_tol.abs();
        let mut trace = Trace::with_capacity(k);
        let mut x_old = vec![T::zero(); n];
        for t in 1..=k {
            let mut x_new = vec![T::zero(); n];
            for i in 0..n {
                let aii = a.get(i, i);
                if aii.abs() <= tol {
                    log::warn!("singular pivot at row {} (|a_ii| <= {:?})", i, tol.to_f64());
                    return Err(SolveError::SingularPivot { row: i, iteration: t, partial: trace });
                }
                let mut s = T::zero();
                for j in 0..n {
                    if j != i {
                        s = s + a.get(i, j) * x_old[j];
                    }
                }
                x_new[i] = (b[i] - s) / aii;
            }
            on_iter(t, &x_new);
            log::trace!("jacobi iteration {} done", t);
            trace.push(x_new.clone());
            x_old = x_new;
        }
        Ok(trace)
    }
}

impl<M, T> LinearSolver<M, Vec<T>> for JacobiSolver<T>
where
    M: MatrixGet<T> + MatShape + MatVec<Vec<T>>,
    T: Float,
{
    type Error = SolveError<T>;
    type Scalar = T;

    /// Run `max_iter` passes and write x_k into `x`. The incoming value of `x` is ignored;
    /// the sweep always starts from zero.
    fn solve(&mut self, a: &M, b: &Vec<T>, x: &mut Vec<T>) -> Result<SolveStats<T>, SolveError<T>> {
        let n = b.len();
        if x.len() != n {
            return Err(SolveError::ShapeMismatch { what: Shape::Solution, expected: n, found: x.len() });
        }
        let requested = self.opts.max_iter;
        let trace = self.iterate(a, b, n, requested)?;
        if let Some(last) = trace.last() {
            x.copy_from_slice(last);
        }
        Ok(SolveStats::from_trace(a, b, &trace, requested))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::matrix::DenseMatrix;
    use approx::assert_abs_diff_eq;
    use faer::Mat;

    fn mat(rows: &[&[f64]]) -> Mat<f64> {
        DenseMatrix::from_rows(rows.len(), rows).unwrap()
    }

    #[test]
    fn first_two_iterates_are_synchronous() {
        let a = mat(&[&[10.0, -1.0], &[-1.0, 10.0]]);
        let trace = JacobiSolver::default().iterate(&a, &[6.0, 4.0], 2, 2).unwrap();
        let x1 = trace.iterate(1).unwrap();
        let x2 = trace.iterate(2).unwrap();
        assert_abs_diff_eq!(x1[0], 0.6, epsilon = 1e-15);
        assert_abs_diff_eq!(x1[1], 0.4, epsilon = 1e-15);
        // Gauss–Seidel would give x2[1] = (4 + 0.64) / 10
        assert_abs_diff_eq!(x2[0], 0.64, epsilon = 1e-15);
        assert_abs_diff_eq!(x2[1], 0.46, epsilon = 1e-15);
    }

    #[test]
    fn zero_diagonal_is_singular_not_nan() {
        let a = mat(&[&[0.0, 1.0], &[1.0, 0.0]]);
        let err = JacobiSolver::default().iterate(&a, &[1.0, 1.0], 2, 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SingularPivot);
        match err {
            SolveError::SingularPivot { row, iteration, partial } => {
                assert_eq!(row, 0);
                assert_eq!(iteration, 1);
                assert!(partial.is_empty());
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn near_zero_pivot_respects_tolerance() {
        let a = mat(&[&[1e-9, 0.0], &[0.0, 1.0]]);
        let strict = JacobiSolver::new(SolveOptions::new().with_pivot_tol(1e-6));
        assert!(matches!(
            strict.iterate(&a, &[1.0, 1.0], 2, 1),
            Err(SolveError::SingularPivot { row: 0, .. })
        ));
        let loose = JacobiSolver::<f64>::default();
        assert!(loose.iterate(&a, &[1.0, 1.0], 2, 1).is_ok());
    }

    #[test]
    fn negative_tolerance_still_catches_zero_pivot() {
        let a = mat(&[&[0.0]]);
        let mut opts = SolveOptions::new();
        opts.pivot_tol = -1.0;
        let err = JacobiSolver::new(opts).iterate(&a, &[1.0], 1, 1).unwrap_err();
        assert!(matches!(err, SolveError::SingularPivot { row: 0, iteration: 1, .. }));
    }

    #[test]
    fn zero_cap_reports_the_request() {
        let a = mat(&[&[2.0]]);
        let s = JacobiSolver::new(SolveOptions::new().with_max_iter(0));
        let err = s.iterate(&a, &[1.0], 1, 5).unwrap_err();
        assert_eq!(err, SolveError::InvalidIterationCount(5));
    }

    #[test]
    fn zero_iterations_rejected_before_work() {
        let a = mat(&[&[0.0]]);
        let err = JacobiSolver::default().iterate(&a, &[1.0], 1, 0).unwrap_err();
        assert_eq!(err, SolveError::InvalidIterationCount(0));
    }

    #[test]
    fn shape_checked_against_declared_size() {
        let a = mat(&[&[1.0, 0.0], &[0.0, 1.0]]);
        let err = JacobiSolver::default().iterate(&a, &[1.0, 1.0], 3, 1).unwrap_err();
        assert_eq!(err, SolveError::ShapeMismatch { what: Shape::MatrixRows, expected: 3, found: 2 });
    }

    #[test]
    fn cap_limits_trace_length() {
        let a = mat(&[&[2.0]]);
        let s = JacobiSolver::new(SolveOptions::new().with_max_iter(3));
        assert_eq!(s.iterate(&a, &[2.0], 1, 1000).unwrap().len(), 3);
    }

    #[test]
    fn observer_sees_every_pass_in_order() {
        let a = mat(&[&[4.0, 1.0], &[1.0, 4.0]]);
        let mut seen = Vec::new();
        let trace = JacobiSolver::default()
            .iterate_observed(&a, &[1.0, 1.0], 2, 4, |t, x| seen.push((t, x.to_vec())))
            .unwrap();
        assert_eq!(seen.len(), 4);
        for (t, x) in &seen {
            assert_eq!(trace.iterate(*t).unwrap(), x.as_slice());
        }
    }

    #[test]
    fn linear_solver_writes_last_iterate() {
        let a = mat(&[&[4.0, -1.0, 0.0], &[-1.0, 4.0, -1.0], &[0.0, -1.0, 4.0]]);
        let b = vec![3.0, 2.0, 3.0];
        let mut x = vec![9.0; 3];
        let mut solver = JacobiSolver::default();
        let stats = solver.solve(&a, &b, &mut x).unwrap();
        assert_eq!(stats.iterations, 50);
        assert!(stats.final_residual < 1e-12);
        for xi in &x {
            assert_abs_diff_eq!(*xi, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn linear_solver_rejects_wrong_x_length() {
        let a = mat(&[&[1.0]]);
        let mut x = vec![0.0; 2];
        let err = JacobiSolver::default().solve(&a, &vec![1.0], &mut x).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    }
}
