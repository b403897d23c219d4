//! Iterate traces & solve statistics for the Jacobi sweep.
//!
//! The sweep never stops early, so nothing here decides convergence. `Trace` is the ordered
//! sequence of iterates x₁..x_k; `SolveStats` summarises how far the last iterate is from
//! satisfying the system and how much the last pass moved it.

use crate::core::traits::{InnerProduct, MatVec};
use num_traits::Float;

/// Ordered iterates x₁..x_k produced by one solve. The zero seed x₀ is not stored.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Trace<T> {
    iterates: Vec<Vec<T>>,
}

impl<T> Trace<T> {
    pub fn new() -> Self {
        Self { iterates: Vec::new() }
    }

    pub fn with_capacity(k: usize) -> Self {
        Self { iterates: Vec::with_capacity(k) }
    }

    pub(crate) fn push(&mut self, x: Vec<T>) {
        self.iterates.push(x);
    }

    /// Number of iterates recorded.
    pub fn len(&self) -> usize {
        self.iterates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iterates.is_empty()
    }

    /// The `t`-th iterate, 1-based to match iteration numbering.
    pub fn iterate(&self, t: usize) -> Option<&[T]> {
        t.checked_sub(1)
            .and_then(|i| self.iterates.get(i))
            .map(Vec::as_slice)
    }

    /// The last iterate, x_k.
    pub fn last(&self) -> Option<&[T]> {
        self.iterates.last().map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[T]> {
        self.iterates.iter().map(Vec::as_slice)
    }

    pub fn into_inner(self) -> Vec<Vec<T>> {
        self.iterates
    }
}

impl<T: Float> Trace<T> {
    /// ‖x_t − x_{t−1}‖∞ for t = 1..k, with x₀ = 0.
    pub fn steps(&self) -> Vec<T> {
        let ip = ();
        let mut prev: Option<&Vec<T>> = None;
        self.iterates
            .iter()
            .map(|x| {
                let diff: Vec<T> = match prev {
                    Some(p) => x.iter().zip(p).map(|(&xi, &pi)| xi - pi).collect(),
                    None => x.clone(),
                };
                prev = Some(x);
                ip.norm_inf(&diff)
            })
            .collect()
    }
}

impl<T> IntoIterator for Trace<T> {
    type Item = Vec<T>;
    type IntoIter = std::vec::IntoIter<Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iterates.into_iter()
    }
}

impl<T> From<Vec<Vec<T>>> for Trace<T> {
    fn from(iterates: Vec<Vec<T>>) -> Self {
        Self { iterates }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SolveStats<T> {
    /// Iterations actually run (after clamping).
    pub iterations: usize,
    /// Iterations the caller asked for.
    pub requested: usize,
    /// ‖b − A·x_k‖₂.
    pub final_residual: T,
    /// ‖x_k − x_{k−1}‖∞.
    pub final_step: T,
}

impl<T: Float> SolveStats<T> {
    /// Summarise `trace` against the system it was computed for.
    pub fn from_trace<M>(a: &M, b: &[T], trace: &Trace<T>, requested: usize) -> Self
    where
        M: MatVec<Vec<T>>,
    {
        let n = b.len();
        let x = trace.last().map(<[T]>::to_vec).unwrap_or_else(|| vec![T::zero(); n]);
        let mut ax = vec![T::zero(); n];
        a.matvec(&x, &mut ax);
        let r: Vec<T> = b.iter().zip(&ax).map(|(&bi, &axi)| bi - axi).collect();
        let ip = ();
        Self {
            iterations: trace.len(),
            requested,
            final_residual: ip.norm(&r),
            final_step: trace.steps().last().copied().unwrap_or_else(T::zero),
        }
    }
}
