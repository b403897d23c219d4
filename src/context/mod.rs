//! Context module for jacobi-dd.
//!
//! This module provides the context type that runs the full solve pipeline: shape validation,
//! the diagonal-dominance check, one reordering attempt, and the Jacobi sweep.
//!
//! Modules:
//! - [`solve_context`]: Contains the `SolveContext` struct and the `solve` convenience function.
//!
//! # Example
//! ```rust
//! use faer::Mat;
//! use jacobi_dd::{DenseMatrix, SolveContext, SolveOptions};
//!
//! let a: Mat<f64> = DenseMatrix::from_rows(2, &[[10.0, -1.0], [-1.0, 10.0]]).unwrap();
//! let out = SolveContext::new(SolveOptions::default()).run(&a, &[6.0, 4.0], 2, 2);
//! let trace = out.result.unwrap();
//! assert_eq!(trace.len(), 2);
//! ```

pub mod solve_context;
pub use solve_context::{SolveContext, SolveOutcome, solve};
