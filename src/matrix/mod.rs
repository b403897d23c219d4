//! Matrix module: dense matrix construction and row operations.

pub mod dense;
pub use dense::{DenseMatrix, permute_vec};
