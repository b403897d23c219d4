//! Solver options.
//!
//! `SolveOptions` carries everything the pipeline used to read from globals: the iteration
//! cap, the pivot tolerance below which a diagonal entry counts as singular, which reordering
//! strategy to try when the matrix is not diagonally dominant, and behaviour flags.

use bitflags::bitflags;
use num_traits::Float;

/// Iteration cap applied when none is configured.
pub const DEFAULT_MAX_ITER: usize = 50;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct SolveFlags: u32 {
        /// Try one reordering pass when the matrix is not dominant.
        const REARRANGE          = 0b0000_0001;
        /// Abort with `NonDiagonalizable` if still not dominant after reordering.
        const REQUIRE_DOMINANCE  = 0b0000_0010;
        /// Attach the iterate to every `IterationCompleted` event.
        const RECORD_ITERATES    = 0b0000_0100;
    }
}

impl Default for SolveFlags {
    fn default() -> Self {
        SolveFlags::REARRANGE | SolveFlags::REQUIRE_DOMINANCE | SolveFlags::RECORD_ITERATES
    }
}

/// Row reordering strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReorderKind {
    /// Single forward pass of partial pivoting on |A[k, i]|.
    #[default]
    Pivot,
    /// Search for a dominant row permutation by bipartite matching.
    Permutation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolveOptions<T> {
    /// Upper bound on iterations; requests above it are clamped.
    pub max_iter: usize,
    /// Diagonal entries with |A[i,i]| ≤ pivot_tol are treated as singular.
    pub pivot_tol: T,
    pub reorder: ReorderKind,
    pub flags: SolveFlags,
}

impl<T: Float> Default for SolveOptions<T> {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_MAX_ITER,
            pivot_tol: T::epsilon(),
            reorder: ReorderKind::default(),
            flags: SolveFlags::default(),
        }
    }
}

impl<T: Float> SolveOptions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn with_pivot_tol(mut self, pivot_tol: T) -> Self {
        self.pivot_tol = pivot_tol.abs();
        self
    }

    pub fn with_reorder(mut self, reorder: ReorderKind) -> Self {
        self.reorder = reorder;
        self
    }

    pub fn with_flags(mut self, flags: SolveFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Effective iteration count: `min(requested, max_iter)`.
    pub fn clamp_iterations(&self, requested: usize) -> usize {
        requested.min(self.max_iter)
    }
}
