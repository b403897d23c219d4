//! Solve pipeline: validation, dominance check, one reordering attempt, Jacobi sweep.
//!
//! `SolveContext` holds the options and runs the whole pipeline for one system:
//!
//! 1. Validate shapes and the requested iteration count.
//! 2. Check diagonal dominance. If it holds, go straight to the sweep.
//! 3. Otherwise reorder rows once (partial pivoting by default) and check again. If the
//!    reordered matrix is still not dominant the solve fails with `NonDiagonalizable`.
//! 4. Run the Jacobi sweep for `min(requested, max_iter)` passes.
//!
//! Every step is recorded as a [`SolveEvent`] so a front end can narrate the solve without the
//! core producing any text.

use crate::config::{ReorderKind, SolveFlags, SolveOptions};
use crate::error::SolveError;
use crate::reorder::{PartialPivot, PermutationSearch, Reordered, RowReorder};
use crate::solver::jacobi::{JacobiSolver, validate_shape};
use crate::utils::convergence::{SolveStats, Trace};
use crate::utils::dominance::first_violation;
use crate::utils::events::SolveEvent;
use faer::Mat;
use num_traits::Float;

/// Everything one pipeline run produced.
#[derive(Debug, Clone)]
pub struct SolveOutcome<T> {
    /// Full trace on success, or the failure that stopped the pipeline.
    pub result: Result<Trace<T>, SolveError<T>>,
    /// Ordered progress events; the last one is always `Failed` or `Finished`.
    pub events: Vec<SolveEvent<T>>,
    /// The reordered system, when a reordering was applied.
    pub reordered: Option<Reordered<T>>,
    /// Residual and step summary for a successful sweep.
    pub stats: Option<SolveStats<T>>,
}

impl<T> SolveOutcome<T> {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    fn failed(mut events: Vec<SolveEvent<T>>, reordered: Option<Reordered<T>>, err: SolveError<T>) -> Self {
        events.push(SolveEvent::Failed { kind: err.kind() });
        Self { result: Err(err), events, reordered, stats: None }
    }
}

#[derive(Debug, Clone)]
pub struct SolveContext<T> {
    pub opts: SolveOptions<T>,
}

impl<T: Float> Default for SolveContext<T> {
    fn default() -> Self {
        Self::new(SolveOptions::default())
    }
}

impl<T: Float> SolveContext<T> {
    pub fn new(opts: SolveOptions<T>) -> Self {
        Self { opts }
    }

    fn reorderer(&self) -> &dyn RowReorder<T> {
        match self.opts.reorder {
            ReorderKind::Pivot => &PartialPivot,
            ReorderKind::Permutation => &PermutationSearch,
        }
    }

    /// Run the pipeline on `a·x = b` with declared size `n`.
    ///
    /// Neither `a` nor `b` is modified; a reordering works on copies returned in the outcome.
    pub fn run(&self, a: &Mat<T>, b: &[T], n: usize, iterations: usize) -> SolveOutcome<T> {
        let solver = JacobiSolver::new(self.opts.clone());
        let mut events = Vec::new();

        if let Err(e) = validate_shape(a, b, n) {
            return SolveOutcome::failed(events, None, e);
        }
        if let Err(e) = solver.effective_iterations(iterations) {
            return SolveOutcome::failed(events, None, e);
        }

        let violation = first_violation(a);
        events.push(SolveEvent::DominanceChecked { dominant: violation.is_none(), violation });

        let mut reordered = None;
        if let Some(row) = violation {
            let flags = self.opts.flags;
            let mut still_violating = Some(row);
            if flags.contains(SolveFlags::REARRANGE) {
                log::debug!("row {} not diagonally dominant, reordering ({:?})", row, self.opts.reorder);
                match self.reorderer().reorder(a, b) {
                    Some(r) => {
                        events.push(SolveEvent::Rearranged { permutation: r.permutation.clone() });
                        still_violating = first_violation(&r.a);
                        events.push(SolveEvent::DominanceChecked {
                            dominant: still_violating.is_none(),
                            violation: still_violating,
                        });
                        reordered = Some(r);
                    }
                    None => log::debug!("reordering found no candidate ordering"),
                }
            }
            if let Some(row) = still_violating {
                if flags.contains(SolveFlags::REQUIRE_DOMINANCE) {
                    return SolveOutcome::failed(events, reordered, SolveError::NonDiagonalizable { row });
                }
                log::warn!("iterating on a matrix that is not diagonally dominant (row {})", row);
            }
        }

        let (sys_a, sys_b) = match &reordered {
            Some(r) => (&r.a, r.b.as_slice()),
            None => (a, b),
        };
        let record = self.opts.flags.contains(SolveFlags::RECORD_ITERATES);
        let swept = solver.iterate_observed(sys_a, sys_b, n, iterations, |index, x| {
            events.push(SolveEvent::IterationCompleted {
                index,
                vector: record.then(|| x.to_vec()),
            });
        });
        match swept {
            Ok(trace) => {
                let stats = SolveStats::from_trace(sys_a, sys_b, &trace, iterations);
                events.push(SolveEvent::Finished { iterations: trace.len() });
                SolveOutcome { result: Ok(trace), events, reordered, stats: Some(stats) }
            }
            Err(e) => SolveOutcome::failed(events, reordered, e),
        }
    }
}

/// Solve `a·x = b` with default options, returning the iterate trace.
pub fn solve<T: Float>(
    a: &Mat<T>,
    b: &[T],
    n: usize,
    iterations: usize,
) -> Result<Trace<T>, SolveError<T>> {
    SolveContext::new(SolveOptions::default()).run(a, b, n, iterations).result
}
