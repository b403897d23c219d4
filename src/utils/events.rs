//! Structured progress events emitted by the solve pipeline.
//!
//! Events are recorded in order and handed back to the caller; rendering them as text is left to
//! the presentation layer.

use crate::error::ErrorKind;

#[derive(Clone, Debug, PartialEq)]
pub enum SolveEvent<T> {
    /// Dominance check ran; `violation` is the first non-dominant row, if any.
    DominanceChecked {
        dominant: bool,
        violation: Option<usize>,
    },
    /// Rows were reordered: row `i` of the new system is row `permutation[i]` of the old one.
    Rearranged { permutation: Vec<usize> },
    /// Iteration `index` (1-based) finished. `vector` is `None` when iterate recording is off.
    IterationCompleted { index: usize, vector: Option<Vec<T>> },
    Failed { kind: ErrorKind },
    Finished { iterations: usize },
}

impl<T> SolveEvent<T> {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SolveEvent::Failed { .. } | SolveEvent::Finished { .. })
    }
}
