//! Configuration module for jacobi-dd.

pub mod options;
pub use options::{DEFAULT_MAX_ITER, ReorderKind, SolveFlags, SolveOptions};
