//! jacobi-dd: Jacobi iteration for dense linear systems over Faer
//!
//! This crate checks a square system for row diagonal dominance, tries to reach dominance by
//! reordering rows (partial pivoting, or an optional permutation search), and runs a fixed number
//! of Jacobi passes, returning every iterate along with a structured event log.

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod matrix;
pub mod reorder;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use context::*;
pub use crate::core::traits::{InnerProduct, MatShape, MatVec, MatrixGet};
pub use error::*;
pub use matrix::*;
pub use reorder::*;
pub use solver::*;
pub use utils::*;
